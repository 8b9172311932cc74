//! Resource - Typed resource declarations
//!
//! A declaration is the `Type` literal, the resource's `Properties` and the
//! attributes every resource shares. The `Type` literal is not stored: it
//! comes from the properties type through [`CfnResource::TYPE_NAME`].

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as Json;

use crate::attributes::{DeletionPolicy, DependsOn, ResourceAttributes};
use crate::schema::ResourceSchema;
use crate::template::TemplateResource;

/// Properties of a CloudFormation resource type
pub trait CfnResource: Serialize + DeserializeOwned {
    /// CloudFormation type name (e.g., "AWS::KMS::Key")
    const TYPE_NAME: &'static str;

    /// Schema metadata describing the properties
    fn schema() -> ResourceSchema;
}

/// A resource declaration: `Type`, `Properties` and common attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: CfnResource> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    /// Add a dependency on another logical ID
    pub fn with_depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let logical_id = logical_id.into();
        self.attributes.depends_on = Some(match self.attributes.depends_on.take() {
            None => DependsOn::One(logical_id),
            Some(DependsOn::One(existing)) => DependsOn::Many(vec![existing, logical_id]),
            Some(DependsOn::Many(mut names)) => {
                names.push(logical_id);
                DependsOn::Many(names)
            }
        });
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.update_replace_policy = Some(policy);
        self
    }

    pub fn with_metadata(mut self, metadata: Json) -> Self {
        self.attributes.metadata = Some(metadata);
        self
    }

    /// Convert into the untyped form stored in a template
    pub fn to_template_resource(&self) -> Result<TemplateResource, serde_json::Error> {
        Ok(TemplateResource {
            type_name: P::TYPE_NAME.to_string(),
            properties: Some(serde_json::to_value(&self.properties)?),
            attributes: self.attributes.clone(),
        })
    }
}

#[derive(Serialize)]
struct Repr<'a, P> {
    #[serde(rename = "Type")]
    type_name: &'static str,
    #[serde(rename = "Properties")]
    properties: &'a P,
    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

impl<P: CfnResource> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Repr {
            type_name: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: CfnResource> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        TemplateResource::deserialize(deserializer)?
            .into_typed()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AttributeSchema, AttributeType};
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct BucketProperties {
        #[serde(rename = "BucketName")]
        bucket_name: Value<String>,
    }

    impl CfnResource for BucketProperties {
        const TYPE_NAME: &'static str = "AWS::S3::Bucket";

        fn schema() -> ResourceSchema {
            ResourceSchema::new(Self::TYPE_NAME)
                .attribute(AttributeSchema::new("BucketName", AttributeType::String).required())
        }
    }

    fn bucket() -> Resource<BucketProperties> {
        Resource::new(BucketProperties {
            bucket_name: Value::from("logs"),
        })
    }

    #[test]
    fn serializes_type_literal_and_attributes() {
        let resource = bucket()
            .with_depends_on("Key")
            .with_deletion_policy(DeletionPolicy::Retain);
        assert_eq!(
            serde_json::to_value(&resource).unwrap(),
            json!({
                "Type": "AWS::S3::Bucket",
                "Properties": {"BucketName": "logs"},
                "DependsOn": "Key",
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn depends_on_accumulates() {
        let resource = bucket().with_depends_on("A").with_depends_on("B").with_depends_on("C");
        assert_eq!(resource.attributes.dependencies(), &["A", "B", "C"].map(String::from));
    }

    #[test]
    fn deserializes_matching_type() {
        let resource: Resource<BucketProperties> = serde_json::from_value(json!({
            "Type": "AWS::S3::Bucket",
            "Condition": "IsProd",
            "Properties": {"BucketName": {"Ref": "Name"}}
        }))
        .unwrap();
        assert_eq!(resource.type_name(), "AWS::S3::Bucket");
        assert_eq!(resource.attributes.condition.as_deref(), Some("IsProd"));
        assert!(resource.properties.bucket_name.is_intrinsic());
    }

    #[test]
    fn rejects_other_type() {
        let err = serde_json::from_value::<Resource<BucketProperties>>(json!({
            "Type": "AWS::S3::BucketPolicy",
            "Properties": {"BucketName": "logs"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("AWS::S3::BucketPolicy"), "{}", err);
    }

    #[test]
    fn missing_properties_fails_with_required_fields() {
        let result = serde_json::from_value::<Resource<BucketProperties>>(json!({
            "Type": "AWS::S3::Bucket"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn to_template_resource_keeps_attributes() {
        let resource = bucket().with_condition("IsProd");
        let untyped = resource.to_template_resource().unwrap();
        assert_eq!(untyped.type_name, "AWS::S3::Bucket");
        assert_eq!(untyped.properties, Some(json!({"BucketName": "logs"})));
        assert_eq!(untyped.attributes.condition.as_deref(), Some("IsProd"));
    }
}
