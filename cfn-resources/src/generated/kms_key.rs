//! kms_key resource definition
//!
//! Auto-generated from CloudFormation schema: AWS::KMS::Key
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::cfn_enum;
use cfn_core::resource::{CfnResource, Resource};
use cfn_core::schema::{
    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,
};
use cfn_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::KMS::Key` resource declaration.
pub type KmsKey = Resource<KeyProperties>;

/// Properties of the `AWS::KMS::Key` resource.
///
/// The ``AWS::KMS::Key`` resource specifies a symmetric or asymmetric KMS key in KMS. You can use symmetric KMS keys to encrypt and decrypt small amounts of data, but they are more commonly used to generate data keys. You can use asymmetric KMS keys to encrypt and decrypt data or sign and verify messages. You can also create HMAC KMS keys to generate and verify HMAC tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyProperties {
    /// Skips ("bypasses") the key policy lockout safety check. The default value is false. Setting this value to true increases the risk that the KMS key becomes unmanageable. Do not set this value to true indiscriminately.
    ///
    /// - _Required_: No
    /// - _Type_: Boolean
    /// - _Update requires_: No interruption
    #[serde(rename = "BypassPolicyLockoutSafetyCheck", skip_serializing_if = "Option::is_none")]
    pub bypass_policy_lockout_safety_check: Option<Value<bool>>,

    /// A description of the KMS key. Use a description that helps you to distinguish this KMS key from others in the account, such as its intended use.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 0
    /// - _Maximum length_: 8192
    /// - _Update requires_: No interruption
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// Enables automatic rotation of the key material for the specified KMS key. By default, automatic key rotation is not enabled. KMS supports automatic rotation only for symmetric encryption KMS keys (``KeySpec`` = ``SYMMETRIC_DEFAULT``). For asymmetric KMS keys, HMAC KMS keys, and KMS keys with Origin ``EXTERNAL``, omit the ``EnableKeyRotation`` property or set it to ``false``.
    ///
    /// - _Required_: No
    /// - _Type_: Boolean
    /// - _Update requires_: No interruption
    #[serde(rename = "EnableKeyRotation", skip_serializing_if = "Option::is_none")]
    pub enable_key_rotation: Option<Value<bool>>,

    /// Specifies whether the KMS key is enabled. Disabled KMS keys cannot be used in cryptographic operations. When ``Enabled`` is ``true``, the *key state* of the KMS key is ``Enabled``. When ``Enabled`` is ``false``, the key state of the KMS key is ``Disabled``. The default value is ``true``.
    ///
    /// - _Required_: No
    /// - _Type_: Boolean
    /// - _Update requires_: No interruption
    #[serde(rename = "Enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    /// The key policy to attach to the KMS key. If you provide a key policy, it must meet the following criteria: the key policy must allow the caller to make a subsequent PutKeyPolicy request on the KMS key, and each statement in the key policy must contain one or more principals. If you do not provide a key policy, KMS attaches a default key policy to the KMS key. The key policy size quota is 32 kilobytes (32768 bytes).
    ///
    /// - _Required_: No
    /// - _Type_: Json
    /// - _Update requires_: No interruption
    #[serde(rename = "KeyPolicy", skip_serializing_if = "Option::is_none")]
    pub key_policy: Option<serde_json::Value>,

    /// Specifies the type of KMS key to create. The default value, ``SYMMETRIC_DEFAULT``, creates a KMS key with a 256-bit symmetric key for encryption and decryption. You can't change the ``KeySpec`` value after the KMS key is created. The ``KeySpec`` property determines whether the KMS key contains a symmetric key or an asymmetric key pair. It also determines the algorithms that the KMS key supports.
    ///
    /// - _Required_: No
    /// - _Type_: [`KeySpec`]
    /// - _Allowed values_: `SYMMETRIC_DEFAULT` | `RSA_2048` | `RSA_3072` | `RSA_4096` | `ECC_NIST_P256` | `ECC_NIST_P384` | `ECC_NIST_P521` | `ECC_SECG_P256K1` | `HMAC_224` | `HMAC_256` | `HMAC_384` | `HMAC_512` | `SM2`
    /// - _Update requires_: Replacement
    #[serde(rename = "KeySpec", skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<Value<KeySpec>>,

    /// Determines the cryptographic operations for which you can use the KMS key. The default value is ``ENCRYPT_DECRYPT``. This property is required for asymmetric KMS keys and HMAC KMS keys. You can't change the ``KeyUsage`` value after the KMS key is created. If you change the value of the ``KeyUsage`` property on an existing KMS key, the update request fails, regardless of the value of the ``UpdateReplacePolicy`` attribute.
    ///
    /// - _Required_: No
    /// - _Type_: [`KeyUsage`]
    /// - _Allowed values_: `ENCRYPT_DECRYPT` | `SIGN_VERIFY` | `GENERATE_VERIFY_MAC` | `KEY_AGREEMENT`
    /// - _Update requires_: Replacement
    #[serde(rename = "KeyUsage", skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<Value<KeyUsage>>,

    /// Creates a multi-Region primary key that you can replicate in other AWS-Regions. You can't change the ``MultiRegion`` value after the KMS key is created. For a list of AWS-Regions in which multi-Region keys are supported, see Multi-Region keys in the Developer Guide.
    ///
    /// - _Required_: No
    /// - _Type_: Boolean
    /// - _Update requires_: Replacement
    #[serde(rename = "MultiRegion", skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<Value<bool>>,

    /// The source of the key material for the KMS key. You cannot change the origin after you create the KMS key. The default is ``AWS_KMS``, which means that KMS creates the key material. To create a KMS key with no key material (for imported key material), set this value to ``EXTERNAL``.
    ///
    /// - _Required_: No
    /// - _Type_: [`Origin`]
    /// - _Allowed values_: `AWS_KMS` | `EXTERNAL`
    /// - _Update requires_: Replacement
    #[serde(rename = "Origin", skip_serializing_if = "Option::is_none")]
    pub origin: Option<Value<Origin>>,

    /// Specifies the number of days in the waiting period before KMS deletes a KMS key that has been removed from a CloudFormation stack. Enter a value between 7 and 30 days. The default value is 30 days. When you remove a KMS key from a CloudFormation stack, KMS schedules the KMS key for deletion and starts the mandatory waiting period.
    ///
    /// - _Required_: No
    /// - _Type_: Integer
    /// - _Minimum_: 7
    /// - _Maximum_: 30
    /// - _Update requires_: No interruption
    #[serde(rename = "PendingWindowInDays", skip_serializing_if = "Option::is_none")]
    pub pending_window_in_days: Option<Value<i64>>,

    /// Specifies a custom period of time between each rotation date. If no value is specified, the default value is 365 days. The rotation period defines the number of days after you enable automatic key rotation that KMS will rotate your key material, and the number of days between each automatic rotation thereafter.
    ///
    /// - _Required_: No
    /// - _Type_: Integer
    /// - _Minimum_: 90
    /// - _Maximum_: 2560
    /// - _Update requires_: No interruption
    #[serde(rename = "RotationPeriodInDays", skip_serializing_if = "Option::is_none")]
    pub rotation_period_in_days: Option<Value<i64>>,

    /// Assigns one or more tags to the replica key. Tagging or untagging a KMS key can allow or deny permission to the KMS key. For information about tags in KMS, see Tagging keys in the Developer Guide.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`Tag`]
    /// - _Update requires_: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CfnResource for KeyProperties {
    const TYPE_NAME: &'static str = "AWS::KMS::Key";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(Self::TYPE_NAME)
            .with_description("The ``AWS::KMS::Key`` resource specifies a symmetric or asymmetric KMS key in KMS. You can use symmetric KMS keys to encrypt and decrypt small amounts of data, but they are more commonly used to generate data keys. You can use asymmetric KMS keys to encrypt and decrypt data or sign and verify messages. You can also create HMAC KMS keys to generate and verify HMAC tags.")
            .with_primary_identifier(&["KeyId"])
            .taggable()
            .read_only("Arn")
            .read_only("KeyId")
            .attribute(AttributeSchema::new("BypassPolicyLockoutSafetyCheck", AttributeType::Boolean))
            .attribute(
                AttributeSchema::new("Description", AttributeType::String)
                    .with_constraints(Constraints::new().min_length(0).max_length(8192)),
            )
            .attribute(AttributeSchema::new("EnableKeyRotation", AttributeType::Boolean))
            .attribute(AttributeSchema::new("Enabled", AttributeType::Boolean))
            .attribute(AttributeSchema::new("KeyPolicy", AttributeType::Json))
            .attribute(
                AttributeSchema::new("KeySpec", AttributeType::enumeration("KeySpec", KeySpec::VALUES))
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("KeyUsage", AttributeType::enumeration("KeyUsage", KeyUsage::VALUES))
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("MultiRegion", AttributeType::Boolean)
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("Origin", AttributeType::enumeration("Origin", Origin::VALUES))
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("PendingWindowInDays", AttributeType::Integer)
                    .with_constraints(Constraints::new().minimum(7.0).maximum(30.0)),
            )
            .attribute(
                AttributeSchema::new("RotationPeriodInDays", AttributeType::Integer)
                    .with_constraints(Constraints::new().minimum(90.0).maximum(2560.0)),
            )
            .attribute(AttributeSchema::new("Tags", AttributeType::list(AttributeType::structure("Tag"))))
            .definition(
                PropertyTypeSchema::new("Tag")
                    .attribute(
                        AttributeSchema::new("Key", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(1).max_length(128)),
                    )
                    .attribute(
                        AttributeSchema::new("Value", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(0).max_length(256)),
                    ),
            )
    }
}

/// A key-value pair to associate with a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// The key name of the tag. You can specify a value that is 1 to 128 Unicode characters in length and cannot be prefixed with aws:. You can use any of the following characters: the set of Unicode letters, digits, whitespace, _, ., /, =, +, and -.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 128
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// The value for the tag. You can specify a value that is 0 to 256 Unicode characters in length and cannot be prefixed with aws:. You can use any of the following characters: the set of Unicode letters, digits, whitespace, _, ., /, =, +, and -.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 0
    /// - _Maximum length_: 256
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

cfn_enum! {
    /// Allowed values for `KeySpec`.
    KeySpec {
        SymmetricDefault => "SYMMETRIC_DEFAULT",
        Rsa2048 => "RSA_2048",
        Rsa3072 => "RSA_3072",
        Rsa4096 => "RSA_4096",
        EccNistP256 => "ECC_NIST_P256",
        EccNistP384 => "ECC_NIST_P384",
        EccNistP521 => "ECC_NIST_P521",
        EccSecgP256k1 => "ECC_SECG_P256K1",
        Hmac224 => "HMAC_224",
        Hmac256 => "HMAC_256",
        Hmac384 => "HMAC_384",
        Hmac512 => "HMAC_512",
        Sm2 => "SM2",
    }
}

cfn_enum! {
    /// Allowed values for `KeyUsage`.
    KeyUsage {
        EncryptDecrypt => "ENCRYPT_DECRYPT",
        SignVerify => "SIGN_VERIFY",
        GenerateVerifyMac => "GENERATE_VERIFY_MAC",
        KeyAgreement => "KEY_AGREEMENT",
    }
}

cfn_enum! {
    /// Allowed values for `Origin`.
    Origin {
        AwsKms => "AWS_KMS",
        External => "EXTERNAL",
    }
}
