//! Error types for kusion-module

use thiserror::Error;

/// Result type for kusion-module operations
pub type Result<T> = std::result::Result<T, ModuleError>;

/// Errors that can occur while deriving ids or wrapping resources
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModuleError {
    /// Provider config carries no version
    #[error("empty terraform provider version")]
    EmptyProviderVersion,

    /// Provider config carries no source
    #[error("empty terraform provider source")]
    EmptySource,

    /// Resource type argument is empty
    #[error("empty resource type")]
    EmptyResourceType,

    /// Source is neither `<namespace>/<name>` nor `<host>/<namespace>/<name>`
    #[error("invalid terraform provider source: {provider_source}")]
    InvalidProviderSource { provider_source: String },

    /// Kubernetes object could not be reduced to an attribute mapping
    #[error("failed to convert kubernetes object to unstructured: {0}")]
    Conversion(String),

    /// Provider meta holds a region that is not a string
    #[error("terraform provider region must be a string, found {found}")]
    NonStringRegion { found: String },

    /// Provider config could not be parsed
    #[error("invalid provider config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ModuleError {
    fn from(e: serde_json::Error) -> Self {
        ModuleError::Conversion(e.to_string())
    }
}

impl From<serde_yaml::Error> for ModuleError {
    fn from(e: serde_yaml::Error) -> Self {
        ModuleError::Config(e.to_string())
    }
}
