//! sagemaker_user_profile resource definition
//!
//! Auto-generated from CloudFormation schema: AWS::SageMaker::UserProfile
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::cfn_enum;
use cfn_core::resource::{CfnResource, Resource};
use cfn_core::schema::{
    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,
};
use cfn_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::SageMaker::UserProfile` resource declaration.
pub type SageMakerUserProfile = Resource<UserProfileProperties>;

/// Properties of the `AWS::SageMaker::UserProfile` resource.
///
/// Resource Type definition for AWS::SageMaker::UserProfile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserProfileProperties {
    /// The ID of the associated Domain.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 63
    /// - _Update requires_: Replacement
    #[serde(rename = "DomainId")]
    pub domain_id: Value<String>,

    /// A specifier for the type of value specified in SingleSignOnUserValue. Currently, the only supported value is "UserName". If the Domain's AuthMode is SSO, this field is required. If the Domain's AuthMode is not SSO, this field cannot be specified.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Pattern_: `UserName`
    /// - _Update requires_: Replacement
    #[serde(rename = "SingleSignOnUserIdentifier", skip_serializing_if = "Option::is_none")]
    pub single_sign_on_user_identifier: Option<Value<String>>,

    /// The username of the associated AWS Single Sign-On User for this UserProfile. If the Domain's AuthMode is SSO, this field is required, and must match a valid username of a user in your directory. If the Domain's AuthMode is not SSO, this field cannot be specified.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Update requires_: Replacement
    #[serde(rename = "SingleSignOnUserValue", skip_serializing_if = "Option::is_none")]
    pub single_sign_on_user_value: Option<Value<String>>,

    /// A list of tags to apply to the user profile.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`Tag`]
    /// - _Update requires_: Replacement
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// A name for the UserProfile.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 63
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}`
    /// - _Update requires_: Replacement
    #[serde(rename = "UserProfileName")]
    pub user_profile_name: Value<String>,

    /// A collection of settings.
    ///
    /// - _Required_: No
    /// - _Type_: [`UserSettings`]
    /// - _Update requires_: No interruption
    #[serde(rename = "UserSettings", skip_serializing_if = "Option::is_none")]
    pub user_settings: Option<UserSettings>,
}

impl CfnResource for UserProfileProperties {
    const TYPE_NAME: &'static str = "AWS::SageMaker::UserProfile";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(Self::TYPE_NAME)
            .with_description("Resource Type definition for AWS::SageMaker::UserProfile")
            .with_primary_identifier(&["UserProfileName", "DomainId"])
            .taggable()
            .read_only("UserProfileArn")
            .attribute(
                AttributeSchema::new("DomainId", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(63)),
            )
            .attribute(
                AttributeSchema::new("SingleSignOnUserIdentifier", AttributeType::String)
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().pattern("UserName")),
            )
            .attribute(
                AttributeSchema::new("SingleSignOnUserValue", AttributeType::String)
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(256)),
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
            .attribute(AttributeSchema::new("UserSettings", AttributeType::structure("UserSettings")))
            .definition(
                PropertyTypeSchema::new("CodeEditorAppSettings")
                    .attribute(AttributeSchema::new("CustomImages", AttributeType::list(AttributeType::structure("CustomImage"))))
                    .attribute(AttributeSchema::new("DefaultResourceSpec", AttributeType::structure("ResourceSpec")))
                    .attribute(
                        AttributeSchema::new("LifecycleConfigArns", AttributeType::list(AttributeType::String))
                            .with_constraints(Constraints::new().max_length(256).pattern("arn:aws[a-z\\-]*:sagemaker:[a-z0-9\\-]*:[0-9]{12}:studio-lifecycle-config/.*")),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("CodeRepository")
                    .attribute(
                        AttributeSchema::new("RepositoryUrl", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().max_length(256).pattern("^https://([.\\-_a-zA-Z0-9]+)/?(.*)$")),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("CustomFileSystemConfig")
                    .attribute(AttributeSchema::new("EFSFileSystemConfig", AttributeType::structure("EFSFileSystemConfig"))),
            )
            .definition(
                PropertyTypeSchema::new("CustomImage")
                    .attribute(
                        AttributeSchema::new("AppImageConfigName", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().max_length(63).pattern("^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}")),
                    )
                    .attribute(
                        AttributeSchema::new("ImageName", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().max_length(63).pattern("^[a-zA-Z0-9]([-.]?[a-zA-Z0-9]){0,62}$")),
                    )
                    .attribute(
                        AttributeSchema::new("ImageVersionNumber", AttributeType::Integer)
                            .with_constraints(Constraints::new().minimum(0.0)),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("CustomPosixUserConfig")
                    .attribute(
                        AttributeSchema::new("Gid", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(1001.0).maximum(4000000.0)),
                    )
                    .attribute(
                        AttributeSchema::new("Uid", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(10000.0).maximum(4000000.0)),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("DefaultEbsStorageSettings")
                    .attribute(
                        AttributeSchema::new("DefaultEbsVolumeSizeInGb", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(5.0).maximum(16384.0)),
                    )
                    .attribute(
                        AttributeSchema::new("MaximumEbsVolumeSizeInGb", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(5.0).maximum(16384.0)),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("DefaultSpaceStorageSettings")
                    .attribute(AttributeSchema::new("DefaultEbsStorageSettings", AttributeType::structure("DefaultEbsStorageSettings"))),
            )
            .definition(
                PropertyTypeSchema::new("EFSFileSystemConfig")
                    .attribute(
                        AttributeSchema::new("FileSystemId", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(11).max_length(21).pattern("^(fs-[0-9a-f]{8,})$")),
                    )
                    .attribute(
                        AttributeSchema::new("FileSystemPath", AttributeType::String)
                            .with_constraints(Constraints::new().min_length(1).max_length(256).pattern("^\\/\\S*$")),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("JupyterLabAppSettings")
                    .attribute(AttributeSchema::new("CodeRepositories", AttributeType::list(AttributeType::structure("CodeRepository"))))
                    .attribute(AttributeSchema::new("CustomImages", AttributeType::list(AttributeType::structure("CustomImage"))))
                    .attribute(AttributeSchema::new("DefaultResourceSpec", AttributeType::structure("ResourceSpec")))
                    .attribute(
                        AttributeSchema::new("LifecycleConfigArns", AttributeType::list(AttributeType::String))
                            .with_constraints(Constraints::new().max_length(256).pattern("arn:aws[a-z\\-]*:sagemaker:[a-z0-9\\-]*:[0-9]{12}:studio-lifecycle-config/.*")),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("JupyterServerAppSettings")
                    .attribute(AttributeSchema::new("DefaultResourceSpec", AttributeType::structure("ResourceSpec"))),
            )
            .definition(
                PropertyTypeSchema::new("KernelGatewayAppSettings")
                    .attribute(AttributeSchema::new("CustomImages", AttributeType::list(AttributeType::structure("CustomImage"))))
                    .attribute(AttributeSchema::new("DefaultResourceSpec", AttributeType::structure("ResourceSpec"))),
            )
            .definition(
                PropertyTypeSchema::new("RStudioServerProAppSettings")
                    .attribute(
                        AttributeSchema::new("AccessStatus", AttributeType::enumeration("RStudioServerProAppSettingsAccessStatus", RStudioServerProAppSettingsAccessStatus::VALUES))
                            .with_update(UpdateBehavior::Replacement),
                    )
                    .attribute(
                        AttributeSchema::new("UserGroup", AttributeType::enumeration("RStudioServerProAppSettingsUserGroup", RStudioServerProAppSettingsUserGroup::VALUES))
                            .with_update(UpdateBehavior::Replacement),
                    ),
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
                PropertyTypeSchema::new("SharingSettings")
                    .attribute(AttributeSchema::new("NotebookOutputOption", AttributeType::enumeration("SharingSettingsNotebookOutputOption", SharingSettingsNotebookOutputOption::VALUES)))
                    .attribute(
                        AttributeSchema::new("S3KmsKeyId", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(2048).pattern(".*")),
                    )
                    .attribute(
                        AttributeSchema::new("S3OutputPath", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(1024).pattern("^(https|s3)://([^/]+)/?(.*)$")),
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
            .definition(
                PropertyTypeSchema::new("UserSettings")
                    .attribute(AttributeSchema::new("AutoMountHomeEFS", AttributeType::enumeration("UserSettingsAutoMountHomeEfs", UserSettingsAutoMountHomeEfs::VALUES)))
                    .attribute(AttributeSchema::new("CodeEditorAppSettings", AttributeType::structure("CodeEditorAppSettings")))
                    .attribute(AttributeSchema::new("CustomFileSystemConfigs", AttributeType::list(AttributeType::structure("CustomFileSystemConfig"))))
                    .attribute(AttributeSchema::new("CustomPosixUserConfig", AttributeType::structure("CustomPosixUserConfig")))
                    .attribute(
                        AttributeSchema::new("DefaultLandingUri", AttributeType::String)
                            .with_constraints(Constraints::new().max_length(1023)),
                    )
                    .attribute(
                        AttributeSchema::new("ExecutionRole", AttributeType::String)
                            .required()
                            .with_constraints(Constraints::new().min_length(20).max_length(2048).pattern("^arn:aws[a-z\\-]*:iam::\\d{12}:role/?[a-zA-Z_0-9+=,.@\\-_/]+$")),
                    )
                    .attribute(AttributeSchema::new("JupyterLabAppSettings", AttributeType::structure("JupyterLabAppSettings")))
                    .attribute(AttributeSchema::new("JupyterServerAppSettings", AttributeType::structure("JupyterServerAppSettings")))
                    .attribute(AttributeSchema::new("KernelGatewayAppSettings", AttributeType::structure("KernelGatewayAppSettings")))
                    .attribute(AttributeSchema::new("RStudioServerProAppSettings", AttributeType::structure("RStudioServerProAppSettings")))
                    .attribute(
                        AttributeSchema::new("SecurityGroups", AttributeType::list(AttributeType::String))
                            .with_constraints(Constraints::new().max_length(32).pattern("[-0-9a-zA-Z]+")),
                    )
                    .attribute(AttributeSchema::new("SharingSettings", AttributeType::structure("SharingSettings")))
                    .attribute(AttributeSchema::new("SpaceStorageSettings", AttributeType::structure("DefaultSpaceStorageSettings")))
                    .attribute(AttributeSchema::new("StudioWebPortal", AttributeType::enumeration("UserSettingsStudioWebPortal", UserSettingsStudioWebPortal::VALUES))),
            )
    }
}

/// The CodeEditor app settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeEditorAppSettings {
    /// A list of custom images for use for CodeEditor apps.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`CustomImage`]
    #[serde(rename = "CustomImages", skip_serializing_if = "Option::is_none")]
    pub custom_images: Option<Vec<CustomImage>>,

    /// The default instance type and the Amazon Resource Name (ARN) of the default SageMaker image used by the CodeEditor app.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpec`]
    #[serde(rename = "DefaultResourceSpec", skip_serializing_if = "Option::is_none")]
    pub default_resource_spec: Option<ResourceSpec>,

    /// A list of LifecycleConfigArns available for use with CodeEditor open by this user.
    ///
    /// - _Required_: No
    /// - _Type_: List of String
    /// - _Maximum length_: 256
    /// - _Pattern_: `arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:studio-lifecycle-config/.*`
    #[serde(rename = "LifecycleConfigArns", skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_arns: Option<Vec<Value<String>>>,
}

/// `CodeRepository` property type of `AWS::SageMaker::UserProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeRepository {
    /// A CodeRepository (valid URL) to be used within Jupyter's Git extension.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `^https://([.\-_a-zA-Z0-9]+)/?(.*)$`
    #[serde(rename = "RepositoryUrl")]
    pub repository_url: Value<String>,
}

/// `CustomFileSystemConfig` property type of `AWS::SageMaker::UserProfile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomFileSystemConfig {
    /// - _Required_: No
    /// - _Type_: [`EfsFileSystemConfig`]
    #[serde(rename = "EFSFileSystemConfig", skip_serializing_if = "Option::is_none")]
    pub efs_file_system_config: Option<EfsFileSystemConfig>,
}

/// A custom SageMaker image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomImage {
    /// The Name of the AppImageConfig.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Maximum length_: 63
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}`
    #[serde(rename = "AppImageConfigName")]
    pub app_image_config_name: Value<String>,

    /// The name of the CustomImage. Must be unique to your account.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Maximum length_: 63
    /// - _Pattern_: `^[a-zA-Z0-9]([-.]?[a-zA-Z0-9]){0,62}$`
    #[serde(rename = "ImageName")]
    pub image_name: Value<String>,

    /// The version number of the CustomImage.
    ///
    /// - _Required_: No
    /// - _Type_: Integer
    /// - _Minimum_: 0
    #[serde(rename = "ImageVersionNumber", skip_serializing_if = "Option::is_none")]
    pub image_version_number: Option<Value<i64>>,
}

/// `CustomPosixUserConfig` property type of `AWS::SageMaker::UserProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomPosixUserConfig {
    /// - _Required_: Yes
    /// - _Type_: Integer
    /// - _Minimum_: 1001
    /// - _Maximum_: 4000000
    #[serde(rename = "Gid")]
    pub gid: Value<i64>,

    /// - _Required_: Yes
    /// - _Type_: Integer
    /// - _Minimum_: 10000
    /// - _Maximum_: 4000000
    #[serde(rename = "Uid")]
    pub uid: Value<i64>,
}

/// Properties related to the Amazon Elastic Block Store volume. Must be provided if storage type is Amazon EBS and must not be provided if storage type is not Amazon EBS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultEbsStorageSettings {
    /// Default size of the Amazon EBS volume in Gb
    ///
    /// - _Required_: Yes
    /// - _Type_: Integer
    /// - _Minimum_: 5
    /// - _Maximum_: 16384
    #[serde(rename = "DefaultEbsVolumeSizeInGb")]
    pub default_ebs_volume_size_in_gb: Value<i64>,

    /// Maximum size of the Amazon EBS volume in Gb. Must be greater than or equal to the DefaultEbsVolumeSizeInGb.
    ///
    /// - _Required_: Yes
    /// - _Type_: Integer
    /// - _Minimum_: 5
    /// - _Maximum_: 16384
    #[serde(rename = "MaximumEbsVolumeSizeInGb")]
    pub maximum_ebs_volume_size_in_gb: Value<i64>,
}

/// Default storage settings for a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultSpaceStorageSettings {
    /// - _Required_: No
    /// - _Type_: [`DefaultEbsStorageSettings`]
    #[serde(rename = "DefaultEbsStorageSettings", skip_serializing_if = "Option::is_none")]
    pub default_ebs_storage_settings: Option<DefaultEbsStorageSettings>,
}

/// `EFSFileSystemConfig` property type of `AWS::SageMaker::UserProfile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EfsFileSystemConfig {
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 11
    /// - _Maximum length_: 21
    /// - _Pattern_: `^(fs-[0-9a-f]{8,})$`
    #[serde(rename = "FileSystemId")]
    pub file_system_id: Value<String>,

    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Pattern_: `^\/\S*$`
    #[serde(rename = "FileSystemPath", skip_serializing_if = "Option::is_none")]
    pub file_system_path: Option<Value<String>>,
}

/// The JupyterLab app settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JupyterLabAppSettings {
    /// A list of CodeRepositories available for use with JupyterLab apps.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`CodeRepository`]
    #[serde(rename = "CodeRepositories", skip_serializing_if = "Option::is_none")]
    pub code_repositories: Option<Vec<CodeRepository>>,

    /// A list of custom images for use for JupyterLab apps.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`CustomImage`]
    #[serde(rename = "CustomImages", skip_serializing_if = "Option::is_none")]
    pub custom_images: Option<Vec<CustomImage>>,

    /// The default instance type and the Amazon Resource Name (ARN) of the default SageMaker image used by the JupyterLab app.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpec`]
    #[serde(rename = "DefaultResourceSpec", skip_serializing_if = "Option::is_none")]
    pub default_resource_spec: Option<ResourceSpec>,

    /// A list of LifecycleConfigArns available for use with JupyterLab open by this user.
    ///
    /// - _Required_: No
    /// - _Type_: List of String
    /// - _Maximum length_: 256
    /// - _Pattern_: `arn:aws[a-z\-]*:sagemaker:[a-z0-9\-]*:[0-9]{12}:studio-lifecycle-config/.*`
    #[serde(rename = "LifecycleConfigArns", skip_serializing_if = "Option::is_none")]
    pub lifecycle_config_arns: Option<Vec<Value<String>>>,
}

/// The JupyterServer app settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JupyterServerAppSettings {
    /// - _Required_: No
    /// - _Type_: [`ResourceSpec`]
    #[serde(rename = "DefaultResourceSpec", skip_serializing_if = "Option::is_none")]
    pub default_resource_spec: Option<ResourceSpec>,
}

/// The kernel gateway app settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KernelGatewayAppSettings {
    /// A list of custom SageMaker images that are configured to run as a KernelGateway app.
    ///
    /// - _Required_: No
    /// - _Type_: List of [`CustomImage`]
    #[serde(rename = "CustomImages", skip_serializing_if = "Option::is_none")]
    pub custom_images: Option<Vec<CustomImage>>,

    /// The default instance type and the Amazon Resource Name (ARN) of the default SageMaker image used by the KernelGateway app.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpec`]
    #[serde(rename = "DefaultResourceSpec", skip_serializing_if = "Option::is_none")]
    pub default_resource_spec: Option<ResourceSpec>,
}

/// A collection of settings that configure user interaction with the RStudioServerPro app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RStudioServerProAppSettings {
    /// Indicates whether the current user has access to the RStudioServerPro app.
    ///
    /// - _Required_: No
    /// - _Type_: [`RStudioServerProAppSettingsAccessStatus`]
    /// - _Allowed values_: `ENABLED` | `DISABLED`
    /// - _Update requires_: Replacement
    #[serde(rename = "AccessStatus", skip_serializing_if = "Option::is_none")]
    pub access_status: Option<Value<RStudioServerProAppSettingsAccessStatus>>,

    /// The level of permissions that the user has within the RStudioServerPro app. This value defaults to User. The Admin value allows the user access to the RStudio Administrative Dashboard.
    ///
    /// - _Required_: No
    /// - _Type_: [`RStudioServerProAppSettingsUserGroup`]
    /// - _Allowed values_: `R_STUDIO_ADMIN` | `R_STUDIO_USER`
    /// - _Update requires_: Replacement
    #[serde(rename = "UserGroup", skip_serializing_if = "Option::is_none")]
    pub user_group: Option<Value<RStudioServerProAppSettingsUserGroup>>,
}

/// `ResourceSpec` property type of `AWS::SageMaker::UserProfile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSpec {
    /// The instance type that the image version runs on.
    ///
    /// - _Required_: No
    /// - _Type_: [`ResourceSpecInstanceType`]
    /// - _Allowed values_: `system` | `ml.t3.micro` | `ml.t3.small` | `ml.t3.medium` | `ml.t3.large` | `ml.t3.xlarge` | `ml.t3.2xlarge` | `ml.m5.large` | `ml.m5.xlarge` | `ml.m5.2xlarge` | `ml.m5.4xlarge` | `ml.m5.12xlarge` | `ml.m5.24xlarge` | `ml.c5.large` | `ml.c5.xlarge` | `ml.c5.2xlarge` | `ml.c5.4xlarge` | `ml.c5.9xlarge` | `ml.c5.18xlarge` | `ml.p3.2xlarge` | `ml.p3.8xlarge` | `ml.p3.16xlarge` | `ml.p3dn.24xlarge` | `ml.g4dn.xlarge` | `ml.g4dn.2xlarge` | `ml.g4dn.4xlarge` | `ml.g4dn.8xlarge` | `ml.g4dn.12xlarge` | `ml.g4dn.16xlarge` | `ml.g5.xlarge` | `ml.g5.2xlarge` | `ml.g5.4xlarge` | `ml.g5.8xlarge` | `ml.g5.12xlarge` | `ml.g5.16xlarge` | `ml.g5.24xlarge` | `ml.g5.48xlarge` | `ml.r5.large` | `ml.r5.xlarge` | `ml.r5.2xlarge` | `ml.r5.4xlarge` | `ml.r5.8xlarge` | `ml.r5.12xlarge` | `ml.r5.16xlarge` | `ml.r5.24xlarge` | `ml.geospatial.interactive` | `ml.trn1.2xlarge` | `ml.trn1.32xlarge` | `ml.trn1n.32xlarge`
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

    /// The ARN of the SageMaker image that the image version belongs to.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `^arn:aws(-[\w]+)*:sagemaker:.+:[0-9]{12}:image/[a-z0-9]([-.]?[a-z0-9])*$`
    #[serde(rename = "SageMakerImageArn", skip_serializing_if = "Option::is_none")]
    pub sage_maker_image_arn: Option<Value<String>>,

    /// The ARN of the image version created on the instance.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 256
    /// - _Pattern_: `^arn:aws(-[\w]+)*:sagemaker:.+:[0-9]{12}:image-version/[a-z0-9]([-.]?[a-z0-9])*/[0-9]+$`
    #[serde(rename = "SageMakerImageVersionArn", skip_serializing_if = "Option::is_none")]
    pub sage_maker_image_version_arn: Option<Value<String>>,
}

/// Specifies options when sharing an Amazon SageMaker Studio notebook. These settings are specified as part of DefaultUserSettings when the CreateDomain API is called, and as part of UserSettings when the CreateUserProfile API is called.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharingSettings {
    /// Whether to include the notebook cell output when sharing the notebook. The default is Disabled.
    ///
    /// - _Required_: No
    /// - _Type_: [`SharingSettingsNotebookOutputOption`]
    /// - _Allowed values_: `Allowed` | `Disabled`
    #[serde(rename = "NotebookOutputOption", skip_serializing_if = "Option::is_none")]
    pub notebook_output_option: Option<Value<SharingSettingsNotebookOutputOption>>,

    /// When NotebookOutputOption is Allowed, the AWS Key Management Service (KMS) encryption key ID used to encrypt the notebook cell output in the Amazon S3 bucket.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 2048
    /// - _Pattern_: `.*`
    #[serde(rename = "S3KmsKeyId", skip_serializing_if = "Option::is_none")]
    pub s3_kms_key_id: Option<Value<String>>,

    /// When NotebookOutputOption is Allowed, the Amazon S3 bucket used to store the shared notebook snapshots.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 1024
    /// - _Pattern_: `^(https|s3)://([^/]+)/?(.*)$`
    #[serde(rename = "S3OutputPath", skip_serializing_if = "Option::is_none")]
    pub s3_output_path: Option<Value<String>>,
}

/// `Tag` property type of `AWS::SageMaker::UserProfile`.
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

/// A collection of settings that apply to users of Amazon SageMaker Studio. These settings are specified when the CreateUserProfile API is called, and as DefaultUserSettings when the CreateDomain API is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSettings {
    /// Indicates whether auto-mounting of an EFS volume is supported for the user profile. The DefaultAsDomain value is only supported for user profiles. Do not use the DefaultAsDomain value when setting this parameter for a domain.
    ///
    /// - _Required_: No
    /// - _Type_: [`UserSettingsAutoMountHomeEfs`]
    /// - _Allowed values_: `Enabled` | `Disabled` | `DefaultAsDomain`
    #[serde(rename = "AutoMountHomeEFS", skip_serializing_if = "Option::is_none")]
    pub auto_mount_home_efs: Option<Value<UserSettingsAutoMountHomeEfs>>,

    /// - _Required_: No
    /// - _Type_: [`CodeEditorAppSettings`]
    #[serde(rename = "CodeEditorAppSettings", skip_serializing_if = "Option::is_none")]
    pub code_editor_app_settings: Option<CodeEditorAppSettings>,

    /// - _Required_: No
    /// - _Type_: List of [`CustomFileSystemConfig`]
    #[serde(rename = "CustomFileSystemConfigs", skip_serializing_if = "Option::is_none")]
    pub custom_file_system_configs: Option<Vec<CustomFileSystemConfig>>,

    /// - _Required_: No
    /// - _Type_: [`CustomPosixUserConfig`]
    #[serde(rename = "CustomPosixUserConfig", skip_serializing_if = "Option::is_none")]
    pub custom_posix_user_config: Option<CustomPosixUserConfig>,

    /// Defines which Amazon SageMaker application users are directed to by default.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Maximum length_: 1023
    #[serde(rename = "DefaultLandingUri", skip_serializing_if = "Option::is_none")]
    pub default_landing_uri: Option<Value<String>>,

    /// The user profile Amazon Resource Name (ARN).
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 20
    /// - _Maximum length_: 2048
    /// - _Pattern_: `^arn:aws[a-z\-]*:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$`
    #[serde(rename = "ExecutionRole")]
    pub execution_role: Value<String>,

    /// - _Required_: No
    /// - _Type_: [`JupyterLabAppSettings`]
    #[serde(rename = "JupyterLabAppSettings", skip_serializing_if = "Option::is_none")]
    pub jupyter_lab_app_settings: Option<JupyterLabAppSettings>,

    /// The Jupyter server's app settings.
    ///
    /// - _Required_: No
    /// - _Type_: [`JupyterServerAppSettings`]
    #[serde(rename = "JupyterServerAppSettings", skip_serializing_if = "Option::is_none")]
    pub jupyter_server_app_settings: Option<JupyterServerAppSettings>,

    /// The kernel gateway app settings.
    ///
    /// - _Required_: No
    /// - _Type_: [`KernelGatewayAppSettings`]
    #[serde(rename = "KernelGatewayAppSettings", skip_serializing_if = "Option::is_none")]
    pub kernel_gateway_app_settings: Option<KernelGatewayAppSettings>,

    /// - _Required_: No
    /// - _Type_: [`RStudioServerProAppSettings`]
    #[serde(rename = "RStudioServerProAppSettings", skip_serializing_if = "Option::is_none")]
    pub r_studio_server_pro_app_settings: Option<RStudioServerProAppSettings>,

    /// The security groups for the Amazon Virtual Private Cloud (VPC) that Studio uses for communication.
    ///
    /// - _Required_: No
    /// - _Type_: List of String
    /// - _Maximum length_: 32
    /// - _Pattern_: `[-0-9a-zA-Z]+`
    #[serde(rename = "SecurityGroups", skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<Value<String>>>,

    /// The sharing settings.
    ///
    /// - _Required_: No
    /// - _Type_: [`SharingSettings`]
    #[serde(rename = "SharingSettings", skip_serializing_if = "Option::is_none")]
    pub sharing_settings: Option<SharingSettings>,

    /// - _Required_: No
    /// - _Type_: [`DefaultSpaceStorageSettings`]
    #[serde(rename = "SpaceStorageSettings", skip_serializing_if = "Option::is_none")]
    pub space_storage_settings: Option<DefaultSpaceStorageSettings>,

    /// Indicates whether the Studio experience is available to users. If not, users cannot access Studio.
    ///
    /// - _Required_: No
    /// - _Type_: [`UserSettingsStudioWebPortal`]
    /// - _Allowed values_: `ENABLED` | `DISABLED`
    #[serde(rename = "StudioWebPortal", skip_serializing_if = "Option::is_none")]
    pub studio_web_portal: Option<Value<UserSettingsStudioWebPortal>>,
}

cfn_enum! {
    /// Allowed values for `RStudioServerProAppSettings.AccessStatus`.
    RStudioServerProAppSettingsAccessStatus {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}

cfn_enum! {
    /// Allowed values for `RStudioServerProAppSettings.UserGroup`.
    RStudioServerProAppSettingsUserGroup {
        RStudioAdmin => "R_STUDIO_ADMIN",
        RStudioUser => "R_STUDIO_USER",
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
        MlP3dn24xlarge => "ml.p3dn.24xlarge",
        MlG4dnXlarge => "ml.g4dn.xlarge",
        MlG4dn2xlarge => "ml.g4dn.2xlarge",
        MlG4dn4xlarge => "ml.g4dn.4xlarge",
        MlG4dn8xlarge => "ml.g4dn.8xlarge",
        MlG4dn12xlarge => "ml.g4dn.12xlarge",
        MlG4dn16xlarge => "ml.g4dn.16xlarge",
        MlG5Xlarge => "ml.g5.xlarge",
        MlG52xlarge => "ml.g5.2xlarge",
        MlG54xlarge => "ml.g5.4xlarge",
        MlG58xlarge => "ml.g5.8xlarge",
        MlG512xlarge => "ml.g5.12xlarge",
        MlG516xlarge => "ml.g5.16xlarge",
        MlG524xlarge => "ml.g5.24xlarge",
        MlG548xlarge => "ml.g5.48xlarge",
        MlR5Large => "ml.r5.large",
        MlR5Xlarge => "ml.r5.xlarge",
        MlR52xlarge => "ml.r5.2xlarge",
        MlR54xlarge => "ml.r5.4xlarge",
        MlR58xlarge => "ml.r5.8xlarge",
        MlR512xlarge => "ml.r5.12xlarge",
        MlR516xlarge => "ml.r5.16xlarge",
        MlR524xlarge => "ml.r5.24xlarge",
        MlGeospatialInteractive => "ml.geospatial.interactive",
        MlTrn12xlarge => "ml.trn1.2xlarge",
        MlTrn132xlarge => "ml.trn1.32xlarge",
        MlTrn1n32xlarge => "ml.trn1n.32xlarge",
    }
}

cfn_enum! {
    /// Allowed values for `SharingSettings.NotebookOutputOption`.
    SharingSettingsNotebookOutputOption {
        Allowed => "Allowed",
        Disabled => "Disabled",
    }
}

cfn_enum! {
    /// Allowed values for `UserSettings.AutoMountHomeEFS`.
    UserSettingsAutoMountHomeEfs {
        Enabled => "Enabled",
        Disabled => "Disabled",
        DefaultAsDomain => "DefaultAsDomain",
    }
}

cfn_enum! {
    /// Allowed values for `UserSettings.StudioWebPortal`.
    UserSettingsStudioWebPortal {
        Enabled => "ENABLED",
        Disabled => "DISABLED",
    }
}
