//! Terraform resource ids, extensions and wrapping

use kusion_core::{
    GenericConfig, RESOURCE_EXTENSION_PROVIDER, RESOURCE_EXTENSION_PROVIDER_META,
    RESOURCE_EXTENSION_RESOURCE_TYPE, Resource, ResourceType,
};
use serde_json::Value as JsonValue;

use crate::error::{ModuleError, Result};
use crate::provider::{DEFAULT_TF_HOST, ProviderConfig, ProviderSource};

/// Key of the region setting in provider meta
const REGION_KEY: &str = "region";

/// Id of a Terraform resource, unique within one spec
///
/// Format: `<providerNamespace>:<providerName>:<resType>:<resName>`. The
/// registry host and the version are not part of the id.
pub fn terraform_resource_id(
    provider_cfg: &ProviderConfig,
    res_type: &str,
    res_name: &str,
) -> Result<String> {
    if provider_cfg.version.is_empty() {
        return Err(ModuleError::EmptyProviderVersion);
    }

    let src = provider_cfg.parsed_source()?;

    Ok([src.namespace, src.name, res_type, res_name].join(":"))
}

/// Extensions of a Terraform resource
///
/// The provider URL uses the default registry host for `<namespace>/<name>`
/// sources, e.g. `hashicorp/aws` at `5.0.0` becomes
/// `registry.terraform.io/hashicorp/aws/5.0.0`, while a source naming its own
/// host such as `registry.customized.io/hashicorp/aws` keeps it.
pub fn terraform_provider_extensions(
    provider_cfg: &ProviderConfig,
    res_type: &str,
) -> Result<GenericConfig> {
    if provider_cfg.version.is_empty() {
        return Err(ModuleError::EmptyProviderVersion);
    }
    if provider_cfg.source.is_empty() {
        return Err(ModuleError::EmptySource);
    }
    if res_type.is_empty() {
        return Err(ModuleError::EmptyResourceType);
    }

    let provider_url = match provider_cfg.parsed_source()? {
        ProviderSource { host: Some(_), .. } => {
            [provider_cfg.source.as_str(), provider_cfg.version.as_str()].join("/")
        }
        ProviderSource { host: None, .. } => [
            DEFAULT_TF_HOST,
            provider_cfg.source.as_str(),
            provider_cfg.version.as_str(),
        ]
        .join("/"),
    };

    let mut extensions = GenericConfig::new();
    extensions.insert(
        RESOURCE_EXTENSION_PROVIDER.to_string(),
        JsonValue::String(provider_url),
    );
    extensions.insert(
        RESOURCE_EXTENSION_PROVIDER_META.to_string(),
        JsonValue::Object(provider_cfg.provider_meta.clone()),
    );
    extensions.insert(
        RESOURCE_EXTENSION_RESOURCE_TYPE.to_string(),
        JsonValue::String(res_type.to_string()),
    );
    Ok(extensions)
}

/// Region configured in the provider block, or `""` when unset
///
/// A region that is present but not a string is an error.
pub fn terraform_provider_region(provider_cfg: &ProviderConfig) -> Result<&str> {
    match provider_cfg.provider_meta.get(REGION_KEY) {
        None => Ok(""),
        Some(JsonValue::String(region)) => Ok(region.as_str()),
        Some(other) => Err(ModuleError::NonStringRegion {
            found: other.to_string(),
        }),
    }
}

/// Wrap a Terraform resource into a Kusion resource
pub fn wrap_tf_resource(
    provider_cfg: &ProviderConfig,
    res_type: &str,
    resource_id: &str,
    attributes: GenericConfig,
    depends_on: Vec<String>,
) -> Result<Resource> {
    let extensions = terraform_provider_extensions(provider_cfg, res_type)?;

    tracing::trace!(id = resource_id, res_type, "wrapped terraform resource");

    Ok(Resource {
        id: resource_id.to_string(),
        resource_type: ResourceType::Terraform,
        attributes,
        depends_on,
        extensions,
    })
}
