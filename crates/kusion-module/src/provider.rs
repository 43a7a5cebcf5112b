//! Terraform provider configuration and source parsing
//!
//! A provider source names where a provider is published. Two shapes are
//! accepted:
//!
//! - `hashicorp/aws`: namespace and name on the default registry
//! - `registry.customized.io/hashicorp/aws`: an explicit registry host
//!
//! # Example
//!
//! ```yaml
//! source: hashicorp/aws
//! version: 5.0.0
//! providerMeta:
//!   region: us-east-1
//! ```

use kusion_core::GenericConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{ModuleError, Result};

/// Registry host used when a source does not name one
pub const DEFAULT_TF_HOST: &str = "registry.terraform.io";

/// Full configuration of a Terraform provider
///
/// Combines the provider entry of `terraform.required_providers` (source and
/// version) with the `provider` block (provider meta).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Source of the provider
    pub source: String,

    /// Version of the provider
    pub version: String,

    /// Configs of the `provider` block
    #[serde(default)]
    pub provider_meta: GenericConfig,
}

impl ProviderConfig {
    pub fn new(source: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            version: version.into(),
            provider_meta: GenericConfig::new(),
        }
    }

    /// Add a provider block setting
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.provider_meta.insert(key.into(), value.into());
        self
    }

    /// Parse a provider config from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a provider config from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ModuleError::Config(e.to_string()))
    }

    /// Parse the source of this config
    pub fn parsed_source(&self) -> Result<ProviderSource<'_>> {
        ProviderSource::parse(&self.source)
    }
}

/// A provider source split into its segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderSource<'a> {
    /// Explicit registry host, if the source names one
    pub host: Option<&'a str>,
    pub namespace: &'a str,
    pub name: &'a str,
}

impl<'a> ProviderSource<'a> {
    /// Split a source on `/`; exactly two or three segments are accepted
    pub fn parse(source: &'a str) -> Result<Self> {
        let parts: Vec<&str> = source.split('/').collect();
        match parts[..] {
            [namespace, name] => Ok(Self {
                host: None,
                namespace,
                name,
            }),
            [host, namespace, name] => Ok(Self {
                host: Some(host),
                namespace,
                name,
            }),
            _ => Err(ModuleError::InvalidProviderSource {
                provider_source: source.to_string(),
            }),
        }
    }

    /// Registry host, falling back to the default registry
    pub fn host(&self) -> &'a str {
        self.host.unwrap_or(DEFAULT_TF_HOST)
    }

    /// Whether the source relies on the default registry
    pub fn is_default_host(&self) -> bool {
        self.host.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_two_segments() {
        let src = ProviderSource::parse("hashicorp/aws").unwrap();
        assert_eq!(src.namespace, "hashicorp");
        assert_eq!(src.name, "aws");
        assert_eq!(src.host, None);
        assert_eq!(src.host(), DEFAULT_TF_HOST);
        assert!(src.is_default_host());
    }

    #[test]
    fn test_parse_three_segments() {
        let src = ProviderSource::parse("registry.customized.io/hashicorp/aws").unwrap();
        assert_eq!(src.host, Some("registry.customized.io"));
        assert_eq!(src.host(), "registry.customized.io");
        assert_eq!(src.namespace, "hashicorp");
        assert_eq!(src.name, "aws");
        assert!(!src.is_default_host());
    }

    #[test]
    fn test_parse_invalid_segment_counts() {
        for source in ["", "aws", "a/b/c/d", "registry.io/a/b/c"] {
            match ProviderSource::parse(source) {
                Err(ModuleError::InvalidProviderSource { provider_source }) => {
                    assert_eq!(provider_source, source)
                }
                other => panic!("expected invalid source for {:?}, got {:?}", source, other),
            }
        }
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        // Only the segment count is checked
        let src = ProviderSource::parse("a//b").unwrap();
        assert_eq!(src.host, Some("a"));
        assert_eq!(src.namespace, "");
        assert_eq!(src.name, "b");
    }

    #[test]
    fn test_provider_config_from_yaml() {
        let cfg = ProviderConfig::from_yaml(
            r#"
source: hashicorp/aws
version: 5.0.0
providerMeta:
  region: us-east-1
  skip_credentials_validation: true
"#,
        )
        .unwrap();

        assert_eq!(cfg.source, "hashicorp/aws");
        assert_eq!(cfg.version, "5.0.0");
        assert_eq!(cfg.provider_meta["region"], "us-east-1");
        assert_eq!(cfg.provider_meta["skip_credentials_validation"], true);
    }

    #[test]
    fn test_provider_config_without_meta() {
        let cfg = ProviderConfig::from_json(r#"{"source":"hashicorp/random","version":"3.5.1"}"#)
            .unwrap();
        assert_eq!(cfg, ProviderConfig::new("hashicorp/random", "3.5.1"));
    }

    #[test]
    fn test_provider_config_invalid() {
        assert!(matches!(
            ProviderConfig::from_yaml("source: [unterminated"),
            Err(ModuleError::Config(_))
        ));
        assert!(matches!(
            ProviderConfig::from_json("{\"version\": \"1\"}"),
            Err(ModuleError::Config(_))
        ));
    }

    #[test]
    fn test_with_meta() {
        let cfg = ProviderConfig::new("hashicorp/aws", "5.0.0")
            .with_meta("region", "us-east-1")
            .with_meta("max_retries", 3);

        assert_eq!(cfg.provider_meta.get("region"), Some(&json!("us-east-1")));
        assert_eq!(cfg.provider_meta.get("max_retries"), Some(&json!(3)));
    }
}
