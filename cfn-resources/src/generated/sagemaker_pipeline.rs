//! sagemaker_pipeline resource definition
//!
//! Auto-generated from CloudFormation schema: AWS::SageMaker::Pipeline
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::resource::{CfnResource, Resource};
use cfn_core::schema::{
    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,
};
use cfn_core::value::Value;
use serde::{Deserialize, Serialize};

/// `AWS::SageMaker::Pipeline` resource declaration.
pub type SageMakerPipeline = Resource<PipelineProperties>;

/// Properties of the `AWS::SageMaker::Pipeline` resource.
///
/// Resource Type definition for AWS::SageMaker::Pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineProperties {
    /// - _Required_: No
    /// - _Type_: [`ParallelismConfiguration`]
    /// - _Update requires_: No interruption
    #[serde(rename = "ParallelismConfiguration", skip_serializing_if = "Option::is_none")]
    pub parallelism_configuration: Option<ParallelismConfiguration>,

    /// The definition of the pipeline, either inline as a JSON string (PipelineDefinitionBody) or as an Amazon S3 location (PipelineDefinitionS3Location).
    ///
    /// - _Required_: Yes
    /// - _Type_: [`PipelineDefinition`]
    /// - _Update requires_: No interruption
    #[serde(rename = "PipelineDefinition")]
    pub pipeline_definition: PipelineDefinition,

    /// The description of the Pipeline.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 0
    /// - _Maximum length_: 3072
    /// - _Update requires_: No interruption
    #[serde(rename = "PipelineDescription", skip_serializing_if = "Option::is_none")]
    pub pipeline_description: Option<Value<String>>,

    /// The display name of the Pipeline.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,255}`
    /// - _Update requires_: No interruption
    #[serde(rename = "PipelineDisplayName", skip_serializing_if = "Option::is_none")]
    pub pipeline_display_name: Option<Value<String>>,

    /// The name of the Pipeline.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Pattern_: `^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,255}`
    /// - _Update requires_: Replacement
    #[serde(rename = "PipelineName")]
    pub pipeline_name: Value<String>,

    /// Role Arn
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 20
    /// - _Maximum length_: 2048
    /// - _Pattern_: `^arn:aws[a-z\-]*:iam::\d{12}:role/?[a-zA-Z_0-9+=,.@\-_/]+$`
    /// - _Update requires_: No interruption
    #[serde(rename = "RoleArn")]
    pub role_arn: Value<String>,

    /// - _Required_: No
    /// - _Type_: List of [`Tag`]
    /// - _Update requires_: No interruption
    #[serde(rename = "Tags", skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CfnResource for PipelineProperties {
    const TYPE_NAME: &'static str = "AWS::SageMaker::Pipeline";

    fn schema() -> ResourceSchema {
        ResourceSchema::new(Self::TYPE_NAME)
            .with_description("Resource Type definition for AWS::SageMaker::Pipeline")
            .with_primary_identifier(&["PipelineName"])
            .taggable()
            .attribute(AttributeSchema::new("ParallelismConfiguration", AttributeType::structure("ParallelismConfiguration")))
            .attribute(
                AttributeSchema::new("PipelineDefinition", AttributeType::structure("PipelineDefinition"))
                    .required(),
            )
            .attribute(
                AttributeSchema::new("PipelineDescription", AttributeType::String)
                    .with_constraints(Constraints::new().min_length(0).max_length(3072)),
            )
            .attribute(
                AttributeSchema::new("PipelineDisplayName", AttributeType::String)
                    .with_constraints(Constraints::new().min_length(1).max_length(256).pattern("^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,255}")),
            )
            .attribute(
                AttributeSchema::new("PipelineName", AttributeType::String)
                    .required()
                    .with_update(UpdateBehavior::Replacement)
                    .with_constraints(Constraints::new().min_length(1).max_length(256).pattern("^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,255}")),
            )
            .attribute(
                AttributeSchema::new("RoleArn", AttributeType::String)
                    .required()
                    .with_constraints(Constraints::new().min_length(20).max_length(2048).pattern("^arn:aws[a-z\\-]*:iam::\\d{12}:role/?[a-zA-Z_0-9+=,.@\\-_/]+$")),
            )
            .attribute(AttributeSchema::new("Tags", AttributeType::list(AttributeType::structure("Tag"))))
            .definition(
                PropertyTypeSchema::new("ParallelismConfiguration")
                    .attribute(
                        AttributeSchema::new("MaxParallelExecutionSteps", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(1.0)),
                    ),
            )
            .definition(
                PropertyTypeSchema::new("PipelineDefinition")
                    .attribute(
                        AttributeSchema::new("PipelineDefinitionBody", AttributeType::String)
                            .with_constraints(Constraints::new().min_length(1).max_length(1048576)),
                    )
                    .attribute(AttributeSchema::new("PipelineDefinitionS3Location", AttributeType::structure("S3Location"))),
            )
            .definition(
                PropertyTypeSchema::new("S3Location")
                    .attribute(
                        AttributeSchema::new("Bucket", AttributeType::String)
                            .required(),
                    )
                    .attribute(AttributeSchema::new("ETag", AttributeType::String))
                    .attribute(
                        AttributeSchema::new("Key", AttributeType::String)
                            .required(),
                    )
                    .attribute(AttributeSchema::new("Version", AttributeType::String)),
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

/// Configuration that controls the degree of parallelism of the pipeline executions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParallelismConfiguration {
    /// Maximum parallel execution steps
    ///
    /// - _Required_: Yes
    /// - _Type_: Integer
    /// - _Minimum_: 1
    #[serde(rename = "MaxParallelExecutionSteps")]
    pub max_parallel_execution_steps: Value<i64>,
}

/// The definition of the pipeline, either inline as a JSON string (PipelineDefinitionBody) or as an Amazon S3 location (PipelineDefinitionS3Location).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineDefinition {
    /// A specification that defines the pipeline in JSON format.
    ///
    /// - _Required_: No
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 1048576
    #[serde(rename = "PipelineDefinitionBody", skip_serializing_if = "Option::is_none")]
    pub pipeline_definition_body: Option<Value<String>>,

    /// - _Required_: No
    /// - _Type_: [`S3Location`]
    #[serde(rename = "PipelineDefinitionS3Location", skip_serializing_if = "Option::is_none")]
    pub pipeline_definition_s3_location: Option<S3Location>,
}

/// The Amazon S3 location of the pipeline definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct S3Location {
    /// The name of the S3 bucket where the PipelineDefinition file is stored.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    #[serde(rename = "Bucket")]
    pub bucket: Value<String>,

    /// The Amazon S3 ETag (a file checksum) of the PipelineDefinition file. If you don't specify a value, SageMaker skips ETag validation of your PipelineDefinition file.
    ///
    /// - _Required_: No
    /// - _Type_: String
    #[serde(rename = "ETag", skip_serializing_if = "Option::is_none")]
    pub e_tag: Option<Value<String>>,

    /// The file name of the PipelineDefinition file (Amazon S3 object name).
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// For versioning-enabled buckets, a specific version of the PipelineDefinition file.
    ///
    /// - _Required_: No
    /// - _Type_: String
    #[serde(rename = "Version", skip_serializing_if = "Option::is_none")]
    pub version: Option<Value<String>>,
}

/// `Tag` property type of `AWS::SageMaker::Pipeline`.
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
