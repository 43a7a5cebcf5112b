//! App identity: workload names and selector labels

use std::collections::BTreeMap;

/// Label naming the project an app belongs to
pub const LABEL_PART_OF: &str = "app.kubernetes.io/part-of";

/// Label naming the app
pub const LABEL_NAME: &str = "app.kubernetes.io/name";

/// Unique workload name: `<project>-<stack>-<app>`
pub fn unique_app_name(project_name: &str, stack_name: &str, app_name: &str) -> String {
    format!("{}-{}-{}", project_name, stack_name, app_name)
}

/// Labels identifying an app within its project
pub fn unique_app_labels(project_name: &str, app_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (LABEL_PART_OF.to_string(), project_name.to_string()),
        (LABEL_NAME.to_string(), app_name.to_string()),
    ])
}
