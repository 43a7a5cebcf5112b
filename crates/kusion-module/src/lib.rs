//! Kusion Module - Helpers for building Kusion resources
//!
//! This crate provides:
//! - **Kubernetes**: Resource ids and wrapping of typed or dynamic objects
//! - **Terraform**: Provider source parsing, resource ids, provider extensions and wrapping
//! - **App identity**: Unique workload names and selector labels

pub mod app;
pub mod error;
pub mod kubernetes;
pub mod provider;
pub mod terraform;

pub use app::{LABEL_NAME, LABEL_PART_OF, unique_app_labels, unique_app_name};
pub use error::{ModuleError, Result};
pub use kubernetes::{
    gvk_string, kubernetes_resource_id, kubernetes_resource_id_of, to_unstructured,
    wrap_dynamic_object, wrap_k8s_resource,
};
pub use provider::{DEFAULT_TF_HOST, ProviderConfig, ProviderSource};
pub use terraform::{
    terraform_provider_extensions, terraform_provider_region, terraform_resource_id,
    wrap_tf_resource,
};
