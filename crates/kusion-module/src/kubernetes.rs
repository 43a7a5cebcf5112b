//! Kubernetes resource ids and wrapping
//!
//! Kubernetes objects become Kusion resources by serializing them into an
//! unstructured mapping and recording their Group/Version/Kind as the only
//! extension.
//!
//! Integers in the mapping are held by `serde_json::Number`, which stores them
//! as 64-bit values regardless of the field's declared width.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::Resource as KubeResource;
use kube::core::{DynamicObject, GroupVersionKind, TypeMeta};
use kusion_core::{GenericConfig, RESOURCE_EXTENSION_GVK, Resource, ResourceType};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{ModuleError, Result};

/// Id of a Kubernetes resource, unique within one spec
///
/// Format: `<apiVersion>:<kind>:[<namespace>:]<name>`, the namespace segment
/// is left out for cluster-scoped objects.
///
/// ```
/// use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
/// use kube::core::TypeMeta;
/// use kusion_module::kubernetes_resource_id;
///
/// let type_meta = TypeMeta {
///     api_version: "apps/v1".to_string(),
///     kind: "Deployment".to_string(),
/// };
/// let object_meta = ObjectMeta {
///     namespace: Some("nginx".to_string()),
///     name: Some("nginx-deployment".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(
///     kubernetes_resource_id(&type_meta, &object_meta),
///     "apps/v1:Deployment:nginx:nginx-deployment"
/// );
/// ```
pub fn kubernetes_resource_id(type_meta: &TypeMeta, object_meta: &ObjectMeta) -> String {
    let mut id = format!("{}:{}:", type_meta.api_version, type_meta.kind);
    if let Some(ns) = object_meta.namespace.as_deref().filter(|ns| !ns.is_empty()) {
        id.push_str(ns);
        id.push(':');
    }
    id.push_str(object_meta.name.as_deref().unwrap_or(""));
    id
}

/// Id of a typed Kubernetes object
pub fn kubernetes_resource_id_of<K>(resource: &K) -> String
where
    K: KubeResource<DynamicType = ()>,
{
    let type_meta = TypeMeta {
        api_version: K::api_version(&()).into_owned(),
        kind: K::kind(&()).into_owned(),
    };
    kubernetes_resource_id(&type_meta, resource.meta())
}

/// Wrap a typed Kubernetes object into a Kusion resource
pub fn wrap_k8s_resource<K>(id: &str, resource: &K) -> Result<Resource>
where
    K: KubeResource<DynamicType = ()> + Serialize,
{
    let gvk = GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()));
    wrap_unstructured(id, &gvk, to_unstructured(resource)?)
}

/// Wrap an untyped Kubernetes object into a Kusion resource
///
/// The object must carry its apiVersion and kind.
pub fn wrap_dynamic_object(id: &str, resource: &DynamicObject) -> Result<Resource> {
    let type_meta = resource.types.as_ref().ok_or_else(|| {
        ModuleError::Conversion("object is missing apiVersion and kind".to_string())
    })?;
    let gvk = gvk_from_type_meta(type_meta);
    wrap_unstructured(id, &gvk, to_unstructured(resource)?)
}

/// Convert an object to an unstructured mapping
pub fn to_unstructured<T: Serialize + ?Sized>(object: &T) -> Result<GenericConfig> {
    match serde_json::to_value(object)? {
        JsonValue::Object(map) => Ok(map),
        other => Err(ModuleError::Conversion(format!(
            "expected an object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// GVK in its canonical string form, e.g. `apps/v1, Kind=Deployment`
pub fn gvk_string(gvk: &GroupVersionKind) -> String {
    format!("{}/{}, Kind={}", gvk.group, gvk.version, gvk.kind)
}

fn wrap_unstructured(
    id: &str,
    gvk: &GroupVersionKind,
    attributes: GenericConfig,
) -> Result<Resource> {
    let mut extensions = GenericConfig::new();
    extensions.insert(
        RESOURCE_EXTENSION_GVK.to_string(),
        JsonValue::String(gvk_string(gvk)),
    );

    tracing::trace!(id, kind = %gvk.kind, "wrapped kubernetes resource");

    Ok(Resource {
        id: id.to_string(),
        resource_type: ResourceType::Kubernetes,
        attributes,
        depends_on: Vec::new(),
        extensions,
    })
}

/// Convert TypeMeta to GroupVersionKind
///
/// - "apps/v1" -> group="apps", version="v1"
/// - "v1" -> group="", version="v1" (core API)
fn gvk_from_type_meta(tm: &TypeMeta) -> GroupVersionKind {
    let (group, version) = match tm.api_version.rsplit_once('/') {
        Some((g, v)) => (g, v),
        None => ("", tm.api_version.as_str()),
    };
    GroupVersionKind::gvk(group, version, &tm.kind)
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
