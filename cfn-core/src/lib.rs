//! CFN Core
//!
//! Shared primitives for typed CloudFormation resource declarations:
//! intrinsic functions, literal-or-intrinsic values, common resource
//! attributes, schema metadata and templates.

pub mod attributes;
pub mod catalog;
pub mod intrinsic;
pub mod resource;
pub mod schema;
pub mod template;
pub mod value;

#[doc(hidden)]
pub use serde;

pub use attributes::{DeletionPolicy, DependsOn, ResourceAttributes};
pub use catalog::{Catalog, Diagnostic, ResourceTypeEntry, Severity};
pub use intrinsic::{Expr, Intrinsic, IntrinsicError, References};
pub use resource::{CfnResource, Resource};
pub use schema::{AttributeSchema, AttributeType, ResourceSchema, TypeError};
pub use template::{Template, TemplateError, TemplateResource};
pub use value::Value;
