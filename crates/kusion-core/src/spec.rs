//! Spec: the full set of resources handed to the engine

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, Result};
use crate::resource::Resource;

/// An ordered collection of resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spec {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Spec {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Parse a spec from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a spec from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the spec to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Look up a resource by id
    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Check that every resource has a non-empty id and that ids are unique
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.resources.len());
        for res in &self.resources {
            if res.id.is_empty() {
                return Err(CoreError::MissingField {
                    field: "id".to_string(),
                });
            }
            if !seen.insert(res.id.as_str()) {
                return Err(CoreError::DuplicateResourceId { id: res.id.clone() });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{GenericConfig, ResourceType};

    const SPEC_YAML: &str = r#"
resources:
  - id: v1:Namespace:nginx
    type: Kubernetes
    attributes:
      apiVersion: v1
      kind: Namespace
      metadata:
        name: nginx
    extensions:
      GVK: /v1, Kind=Namespace
  - id: hashicorp:aws:aws_s3_bucket:b
    type: Terraform
    attributes:
      bucket: my-bucket
    dependsOn:
      - v1:Namespace:nginx
    extensions:
      provider: registry.terraform.io/hashicorp/aws/5.0.0
      providerMeta:
        region: us-east-1
      resourceType: aws_s3_bucket
"#;

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_string(),
            resource_type: ResourceType::Kubernetes,
            attributes: GenericConfig::new(),
            depends_on: vec![],
            extensions: GenericConfig::new(),
        }
    }

    #[test]
    fn test_from_yaml() {
        let spec = Spec::from_yaml(SPEC_YAML).unwrap();
        assert_eq!(spec.resources.len(), 2);

        let bucket = spec.resource("hashicorp:aws:aws_s3_bucket:b").unwrap();
        assert_eq!(bucket.resource_type, ResourceType::Terraform);
        assert_eq!(bucket.depends_on, vec!["v1:Namespace:nginx".to_string()]);
        assert_eq!(bucket.provider(), Some("registry.terraform.io/hashicorp/aws/5.0.0"));

        assert!(spec.resource("missing").is_none());
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let spec = Spec::from_yaml(SPEC_YAML).unwrap();
        let yaml = spec.to_yaml().unwrap();
        let parsed = Spec::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_from_json() {
        let spec = Spec::from_json(
            r#"{"resources":[{"id":"a","type":"Terraform","attributes":{},"extensions":{}}]}"#,
        )
        .unwrap();
        assert_eq!(spec.resources[0].resource_type, ResourceType::Terraform);
    }

    #[test]
    fn test_invalid_type_rejected() {
        let result = Spec::from_yaml("resources:\n  - id: a\n    type: Helm\n");
        assert!(matches!(result, Err(CoreError::YamlParse(_))));
    }

    #[test]
    fn test_validate_duplicate_id() {
        let spec = Spec::new(vec![resource("a"), resource("b"), resource("a")]);
        match spec.validate() {
            Err(CoreError::DuplicateResourceId { id }) => assert_eq!(id, "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_id() {
        let spec = Spec::new(vec![resource("")]);
        assert!(matches!(
            spec.validate(),
            Err(CoreError::MissingField { field }) if field == "id"
        ));
    }
}
