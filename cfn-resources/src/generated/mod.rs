//! Auto-generated CloudFormation resource definitions
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::catalog::{Catalog, ResourceTypeEntry};

#[rustfmt::skip]
pub mod kms_alias;
#[rustfmt::skip]
pub mod kms_key;
#[rustfmt::skip]
pub mod sagemaker_app;
#[rustfmt::skip]
pub mod sagemaker_domain;
#[rustfmt::skip]
pub mod sagemaker_pipeline;
#[rustfmt::skip]
pub mod sagemaker_user_profile;

pub use kms_alias::KmsAlias;
pub use kms_key::KmsKey;
pub use sagemaker_app::SageMakerApp;
pub use sagemaker_domain::SageMakerDomain;
pub use sagemaker_pipeline::SageMakerPipeline;
pub use sagemaker_user_profile::SageMakerUserProfile;

/// Returns a catalog of every generated resource type
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        ResourceTypeEntry::of::<kms_alias::AliasProperties>(),
        ResourceTypeEntry::of::<kms_key::KeyProperties>(),
        ResourceTypeEntry::of::<sagemaker_app::AppProperties>(),
        ResourceTypeEntry::of::<sagemaker_domain::DomainProperties>(),
        ResourceTypeEntry::of::<sagemaker_pipeline::PipelineProperties>(),
        ResourceTypeEntry::of::<sagemaker_user_profile::UserProfileProperties>(),
    ])
}
