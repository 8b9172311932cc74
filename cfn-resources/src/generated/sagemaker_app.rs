//! sagemaker_app resource definition
//!
//! Auto-generated from CloudFormation schema: AWS::SageMaker::App
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::cfn_enum;
use cfn_core::resource::{CfnResource, Resource};
use cfn_core::schema::{
    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,
};
use cfn_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::SageMaker::App` resource declaration.
pub type SageMakerApp = Resource<AppProperties>;

/// Properties of the `AWS::SageMaker::App` resource.
///
/// Resource Type definition for AWS::SageMaker::App
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppProperties {
    /// The name of the app.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 63
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}`
    /// - _Update requires_: Replacement
    #[serde(rename = "AppName")]
    pub app_name: Value<String>,

    /// The type of app.
    ///
    /// - _Required_: Yes
    /// - _Type_: [`AppType`]
    /// - _Allowed values_: `JupyterServer` | `KernelGateway` | `RStudioServerPro` | `RSessionGateway` | `Canvas`
    /// - _Update requires_: Replacement
    #[serde(rename = "AppType")]
    pub app_type: Value<AppType>,

    /// The domain ID.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 63
    /// - _Update requires_: Replacement
    #[serde(rename = "DomainId")]
    pub domain_id: Value<String>,

    /// Indicates whether the application is launched in recovery mode.
    ///
    /// - _Required_: No
    /// - _Type_: Boolean
    /// - _Update requires_: Replacement
    #[serde(rename = "RecoveryMode", skip_serializing_if = "Option::is_none")]
    pub recovery_mode: Option<Value<bool>>,

    /// The instance type and the Amazon Resource Name (ARN) of the SageMaker image created on the instance.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpec`]
    /// - _Update requires_: Replacement
    #[serde(rename = "ResourceSpec", skip_serializing_if = "Option::is_none")]
    pub resource_spec: Option<ResourceSpec>,

    /// A list of tags to apply to the app.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`Tag`]
    /// - _Update requires_: Replacement
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The user profile name.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 63
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}`
    /// - _Update requires_: Replacement
    #[serde(rename = "UserProfileName")]
    pub user_profile_name: Value<String>,
}

impl CfnResource for AppProperties {
    const TYPE_NAME: &'static str = "AWS::SageMaker::App";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(Self::TYPE_NAME)
            .with_description("Resource Type definition for AWS::SageMaker::App")
            .with_primary_identifier(&["AppName", "AppType", "DomainId", "UserProfileName"])
            .taggable()
            .read_only("AppArn")
            .read_only("BuiltInLifecycleConfigArn")
            .attribute(
                AttributeSchema::new("AppName", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(63).pattern("^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}")),
            )
            .attribute(
                AttributeSchema::new("AppType", AttributeType::enumeration("AppType", AppType::VALUES))
                    .required()
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("DomainId", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(63)),
            )
            .attribute(
                AttributeSchema::new("RecoveryMode", AttributeType::Boolean)
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("ResourceSpec", AttributeType::structure("ResourceSpec"))
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("Tags", AttributeType::list(AttributeType::structure("Tag")))
                    .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("UserProfileName", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(63).pattern("^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}")),
            )
            .definition(
                PropertyTypeSchema::new("ResourceSpec")
                    .attribute(AttributeSchema::new("InstanceType", AttributeType::enumeration("ResourceSpecInstanceType", ResourceSpecInstanceType::VALUES)))
                    .attribute(
                        AttributeSchema::new("LifecycleConfigArn", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(256).pattern("arn:aws[a-z\\-]*:sagemaker:[a-z0-9\\-]*:[0-9]{12}:studio-lifecycle-config/.*")),
                    )
                    .attribute(
                        AttributeSchema::new("SageMakerImageArn", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(256).pattern("^arn:aws(-[\\w]+)*:sagemaker:.+:[0-9]{12}:image/[a-z0-9]([-.]?[a-z0-9])*$")),
                    )
                    .attribute(
                        AttributeSchema::new("SageMakerImageVersionArn", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(256).pattern("^arn:aws(-[\\w]+)*:sagemaker:.+:[0-9]{12}:image-version/[a-z0-9]([-.]?[a-z0-9])*/[0-9]+$")),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("Tag")
                    .attribute(
                        AttributeSchema::new("Key", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(1).max_length(128).pattern("^([\\p{L}\\p{Z}\\p{N}_.:/=+\\-@]*)$")),
                    )
                    .attribute(
                        AttributeSchema::new("Value", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(1).max_length(128).pattern("^([\\p{L}\\p{Z}\\p{N}_.:/=+\\-@]*)$")),
                    ),
            )
    }
}

/// `ResourceSpec` property type of `AWS::SageMaker::App`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSpec {
    /// The instance type that the image version runs on.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpecInstanceType`]
    /// - _Allowed values_: `system` | `ml.t3.micro` | `ml.t3.small` | `ml.t3.medium` | `ml.t3.large` | `ml.t3.xlarge` | `ml.t3.2xlarge` | `ml.m5.large` | `ml.m5.xlarge` | `ml.m5.2xlarge` | `ml.m5.4xlarge` | `ml.m5.12xlarge` | `ml.m5.24xlarge` | `ml.c5.large` | `ml.c5.xlarge` | `ml.c5.2xlarge` | `ml.c5.4xlarge` | `ml.c5.9xlarge` | `ml.c5.18xlarge` | `ml.p3.2xlarge` | `ml.p3.8xlarge` | `ml.p3.16xlarge` | `ml.g4dn.xlarge` | `ml.g4dn.2xlarge` | `ml.g4dn.4xlarge` | `ml.g4dn.8xlarge` | `ml.g4dn.12xlarge` | `ml.g4dn.16xlarge` | `ml.r5.large` | `ml.r5.xlarge` | `ml.r5.2xlarge` | `ml.r5.4xlarge` | `ml.r5.8xlarge` | `ml.r5.12xlarge` | `ml.r5.16xlarge` | `ml.r5.24xlarge` | `ml.geospatial.interactive`
    #[serde(rename = "InstanceType", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<Value<ResourceSpecInstanceType>>,

    /// The Amazon Resource Name (ARN) of the Lifecycle Configuration to attach to the Resource.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:studio-lifecycle-config/.*`
    #[serde(rename = "LifecycleConfigArn", skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_arn: Option<Value<String>>,

    /// The Amazon Resource Name (ARN) of the SageMaker image that the image version belongs to.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `^arn:aws(-[\w]+)*:sagemaker:.+:[0-9]{12}:image/[a-z0-9]([-.]?[a-z0-9])*$`
    #[serde(rename = "SageMakerImageArn", skip_serializing_if = "Option::is_none")]
    pub sage_maker_image_arn: Option<Value<String>>,

    /// The Amazon Resource Name (ARN) of the image version created on the instance.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `^arn:aws(-[\w]+)*:sagemaker:.+:[0-9]{12}:image-version/[a-z0-9]([-.]?[a-z0-9])*/[0-9]+$`
    #[serde(rename = "SageMakerImageVersionArn", skip_serializing_if = "Option::is_none")]
    pub sage_maker_image_version_arn: Option<Value<String>>,
}

/// `Tag` property type of `AWS::SageMaker::App`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 128
    /// - _Pattern_: `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$`
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 128
    /// - _Pattern_: `^([\p{L}\p{Z}\p{N}_.:/=+\-@]*)$`
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

cfn_enum! {
    /// Allowed values for `AppType`.
    AppType {
        JupyterServer => "JupyterServer",
        KernelGateway => "KernelGateway",
        RStudioServerPro => "RStudioServerPro",
        RSessionGateway => "RSessionGateway",
        Canvas => "Canvas",
    }
}

cfn_enum! {
    /// Allowed values for `ResourceSpec.InstanceType`.
    ResourceSpecInstanceType {
        System => "system",
        MlT3Micro => "ml.t3.micro",
        MlT3Small => "ml.t3.small",
        MlT3Medium => "ml.t3.medium",
        MlT3Large => "ml.t3.large",
        MlT3Xlarge => "ml.t3.xlarge",
        MlT32xlarge => "ml.t3.2xlarge",
        MlM5Large => "ml.m5.large",
        MlM5Xlarge => "ml.m5.xlarge",
        MlM52xlarge => "ml.m5.2xlarge",
        MlM54xlarge => "ml.m5.4xlarge",
        MlM512xlarge => "ml.m5.12xlarge",
        MlM524xlarge => "ml.m5.24xlarge",
        MlC5Large => "ml.c5.large",
        MlC5Xlarge => "ml.c5.xlarge",
        MlC52xlarge => "ml.c5.2xlarge",
        MlC54xlarge => "ml.c5.4xlarge",
        MlC59xlarge => "ml.c5.9xlarge",
        MlC518xlarge => "ml.c5.18xlarge",
        MlP32xlarge => "ml.p3.2xlarge",
        MlP38xlarge => "ml.p3.8xlarge",
        MlP316xlarge => "ml.p3.16xlarge",
        MlG4dnXlarge => "ml.g4dn.xlarge",
        MlG4dn2xlarge => "ml.g4dn.2xlarge",
        MlG4dn4xlarge => "ml.g4dn.4xlarge",
        MlG4dn8xlarge => "ml.g4dn.8xlarge",
        MlG4dn12xlarge => "ml.g4dn.12xlarge",
        MlG4dn16xlarge => "ml.g4dn.16xlarge",
        MlR5Large => "ml.r5.large",
        MlR5Xlarge => "ml.r5.xlarge",
        MlR52xlarge => "ml.r5.2xlarge",
        MlR54xlarge => "ml.r5.4xlarge",
        MlR58xlarge => "ml.r5.8xlarge",
        MlR512xlarge => "ml.r5.12xlarge",
        MlR516xlarge => "ml.r5.16xlarge",
        MlR524xlarge => "ml.r5.24xlarge",
        MlGeospatialInteractive => "ml.geospatial.interactive",
    }
}
