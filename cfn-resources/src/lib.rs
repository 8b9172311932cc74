//! CFN Resources
//!
//! Typed declarations of CloudFormation resource types.
//!
//! ## Module Structure
//!
//! - `generated` - One module per resource type, generated by `cfn-codegen`
//!   from the registry schemas under `schemas/`
//!
//! Each module exposes a `XxxProperties` struct implementing
//! [`CfnResource`](cfn_core::resource::CfnResource) and a type alias for the
//! full resource declaration:
//!
//! ```
//! use cfn_core::value::Value;
//! use cfn_resources::KmsAlias;
//! use cfn_resources::generated::kms_alias::AliasProperties;
//!
//! let alias = KmsAlias::new(AliasProperties {
//!     alias_name: Value::literal("alias/app"),
//!     target_key_id: Value::Intrinsic(cfn_core::Intrinsic::reference("AppKey")),
//! });
//! let json = serde_json::to_value(&alias).unwrap();
//! assert_eq!(json["Type"], "AWS::KMS::Alias");
//! assert_eq!(json["Properties"]["TargetKeyId"]["Ref"], "AppKey");
//! ```

pub mod generated;

pub use generated::*;
