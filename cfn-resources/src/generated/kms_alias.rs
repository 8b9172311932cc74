//! kms_alias resource definition
//!
//! Auto-generated from CloudFormation schema: AWS::KMS::Alias
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::resource::{CfnResource, Resource};
use cfn_core::schema::{AttributeSchema, AttributeType, Constraints, ResourceSchema, UpdateBehavior};
use cfn_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::KMS::Alias` resource declaration.
pub type KmsAlias = Resource<AliasProperties>;

/// Properties of the `AWS::KMS::Alias` resource.
///
/// The ``AWS::KMS::Alias`` resource specifies a display name for a KMS key. You can use an alias to identify a KMS key in the KMS console, in the DescribeKey operation, and in cryptographic operations, such as Decrypt and GenerateDataKey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasProperties {
    /// Specifies the alias name. This value must begin with ``alias/`` followed by a name, such as ``alias/ExampleAlias``. If you change the value of the ``AliasName`` property, the existing alias is deleted and a new alias is created for the specified KMS key. This change can disrupt applications that use the alias. The alias must be string of 1-256 characters. It can contain only alphanumeric characters, forward slashes (/), underscores (_), and dashes (-). The alias name cannot begin with ``alias/aws/``. The ``alias/aws/`` prefix is reserved for AWS managed keys.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Pattern_: `^(alias/)[a-zA-Z0-9:/_-]+$`
    /// - _Update requires_: Replacement
    #[serde(rename = "AliasName")]
    pub alias_name: Value<String>,

    /// Associates the alias with the specified customer managed key. The KMS key must be in the same AWS-account and Region. A valid key ID is required. If you supply a null or empty string value, this operation returns an error. Specify the key ID or the key ARN of the KMS key.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Update requires_: No interruption
    #[serde(rename = "TargetKeyId")]
    pub target_key_id: Value<String>,
}

impl CfnResource for AliasProperties {
    const TYPE_NAME: &'static str = "AWS::KMS::Alias";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(Self::TYPE_NAME)
            .with_description("The ``AWS::KMS::Alias`` resource specifies a display name for a KMS key. You can use an alias to identify a KMS key in the KMS console, in the DescribeKey operation, and in cryptographic operations, such as Decrypt and GenerateDataKey.")
            .with_primary_identifier(&["AliasName"])
            .attribute(
                AttributeSchema::new("AliasName", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(256).pattern("^(alias/)[a-zA-Z0-9:/_-]+$")),
            )
            .attribute(
                AttributeSchema::new("TargetKeyId", AttributeType::String)
                    .required()
                    .with_constraints(Constraints::new().min_length(1).max_length(256)),
            )
    }
}
