//! Kusion Core - Resource types shared by the Kusion engine
//!
//! This crate provides the foundational types used throughout Kusion:
//! - `Resource`: The unified record for Kubernetes and Terraform resources
//! - `ResourceType`: Which runtime owns a resource
//! - `Spec`: The ordered set of resources handed to the engine

pub mod error;
pub mod resource;
pub mod spec;

pub use error::{CoreError, Result};
pub use resource::{
    GenericConfig, RESOURCE_EXTENSION_GVK, RESOURCE_EXTENSION_PROVIDER,
    RESOURCE_EXTENSION_PROVIDER_META, RESOURCE_EXTENSION_RESOURCE_TYPE, Resource, ResourceType,
};
pub use spec::Spec;
