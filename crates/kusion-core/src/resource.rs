//! The unified resource record
//!
//! Every resource the engine manages, whatever its origin, is carried as a
//! [`Resource`]: an id, a type tag, an attribute payload, dependencies and
//! type-specific extensions.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Free-form mapping used for attributes, extensions and provider metadata
pub type GenericConfig = serde_json::Map<String, JsonValue>;

/// Extension key holding the Group/Version/Kind of a Kubernetes resource
pub const RESOURCE_EXTENSION_GVK: &str = "GVK";

/// Extension key holding the Terraform provider URL
pub const RESOURCE_EXTENSION_PROVIDER: &str = "provider";

/// Extension key holding the Terraform provider block configuration
pub const RESOURCE_EXTENSION_PROVIDER_META: &str = "providerMeta";

/// Extension key holding the Terraform resource type
pub const RESOURCE_EXTENSION_RESOURCE_TYPE: &str = "resourceType";

/// Runtime that owns a resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Kubernetes,
    Terraform,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Kubernetes => "Kubernetes",
            Self::Terraform => "Terraform",
        };
        write!(f, "{}", s)
    }
}

/// A resource in a spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique within the enclosing spec
    pub id: String,

    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// Resource payload
    #[serde(default)]
    pub attributes: GenericConfig,

    /// Ids of the resources this one depends on
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    /// Type-specific metadata
    #[serde(default)]
    pub extensions: GenericConfig,
}

impl Resource {
    /// Group/Version/Kind string of a Kubernetes resource
    pub fn gvk(&self) -> Option<&str> {
        self.extension_str(RESOURCE_EXTENSION_GVK)
    }

    /// Provider URL of a Terraform resource
    pub fn provider(&self) -> Option<&str> {
        self.extension_str(RESOURCE_EXTENSION_PROVIDER)
    }

    /// Provider block configuration of a Terraform resource
    pub fn provider_meta(&self) -> Option<&GenericConfig> {
        self.extensions
            .get(RESOURCE_EXTENSION_PROVIDER_META)
            .and_then(|v| v.as_object())
    }

    /// Terraform resource type, e.g. `aws_s3_bucket`
    pub fn resource_type_extension(&self) -> Option<&str> {
        self.extension_str(RESOURCE_EXTENSION_RESOURCE_TYPE)
    }

    fn extension_str(&self, key: &str) -> Option<&str> {
        self.extensions.get(key).and_then(|v| v.as_str())
    }
}
