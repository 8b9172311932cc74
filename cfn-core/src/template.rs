//! Template - CloudFormation template documents
//!
//! Resources are stored untyped so a template can hold any resource type,
//! catalogued or not. Typed access goes through [`Template::resource`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};
use thiserror::Error;

use crate::attributes::ResourceAttributes;
use crate::resource::{CfnResource, Resource};

pub const FORMAT_VERSION: &str = "2010-09-09";

/// Error working with a template
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid logical ID '{0}': must be 1-255 alphanumeric characters")]
    InvalidLogicalId(String),

    #[error("Duplicate logical ID '{0}'")]
    DuplicateLogicalId(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Logical IDs are alphanumeric and at most 255 characters
pub fn is_valid_logical_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 255 && id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// A resource entry as written in a template
///
/// Keys other than `Type`, `Properties` and the resource attributes are
/// rejected, so a misspelled `Properties` block is never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTemplateResource")]
pub struct TemplateResource {
    #[serde(rename = "Type")]
    pub type_name: String,
    #[serde(rename = "Properties", skip_serializing_if = "Option::is_none")]
    pub properties: Option<Json>,
    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

#[derive(Deserialize)]
struct RawTemplateResource {
    #[serde(rename = "Type")]
    type_name: String,
    #[serde(rename = "Properties")]
    properties: Option<Json>,
    #[serde(flatten)]
    attributes: ResourceAttributes,
    // Whatever the attributes did not take
    #[serde(flatten)]
    unknown: BTreeMap<String, Json>,
}

impl TryFrom<RawTemplateResource> for TemplateResource {
    type Error = String;

    fn try_from(raw: RawTemplateResource) -> Result<Self, Self::Error> {
        if let Some(key) = raw.unknown.keys().next() {
            return Err(format!(
                "unknown resource attribute '{}' in {} declaration",
                key, raw.type_name
            ));
        }
        Ok(Self {
            type_name: raw.type_name,
            properties: raw.properties,
            attributes: raw.attributes,
        })
    }
}

impl TemplateResource {
    /// `Properties`, or an empty object when the block is omitted
    pub fn properties_json(&self) -> Json {
        self.properties
            .clone()
            .unwrap_or_else(|| Json::Object(Map::new()))
    }

    pub fn into_typed<P: CfnResource>(self) -> Result<Resource<P>, TemplateError> {
        if self.type_name != P::TYPE_NAME {
            return Err(TemplateError::TypeMismatch {
                expected: P::TYPE_NAME.to_string(),
                actual: self.type_name,
            });
        }
        let properties = serde_json::from_value(
            self.properties
                .unwrap_or_else(|| Json::Object(Map::new())),
        )?;
        Ok(Resource {
            properties,
            attributes: self.attributes,
        })
    }
}

/// A CloudFormation template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Metadata", skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "Parameters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Json>,
    #[serde(rename = "Mappings", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Json>,
    #[serde(rename = "Conditions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, Json>,
    #[serde(rename = "Rules", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, Json>,
    #[serde(rename = "Transform", skip_serializing_if = "Option::is_none")]
    pub transform: Option<Json>,
    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, TemplateResource>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Json>,
    /// Sections this type does not model (e.g. a transform's `Globals`), kept verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Json>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: Some(FORMAT_VERSION.to_string()),
            description: None,
            metadata: None,
            parameters: BTreeMap::new(),
            mappings: BTreeMap::new(),
            conditions: BTreeMap::new(),
            rules: BTreeMap::new(),
            transform: None,
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn from_json(s: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a typed resource under a new logical ID
    pub fn add_resource<P: CfnResource>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &Resource<P>,
    ) -> Result<(), TemplateError> {
        let entry = resource.to_template_resource()?;
        self.insert_resource(logical_id, entry)
    }

    /// Add an untyped resource under a new logical ID
    pub fn insert_resource(
        &mut self,
        logical_id: impl Into<String>,
        resource: TemplateResource,
    ) -> Result<(), TemplateError> {
        let logical_id = logical_id.into();
        if !is_valid_logical_id(&logical_id) {
            return Err(TemplateError::InvalidLogicalId(logical_id));
        }
        if self.resources.contains_key(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId(logical_id));
        }
        self.resources.insert(logical_id, resource);
        Ok(())
    }

    /// Typed view of a resource
    pub fn resource<P: CfnResource>(&self, logical_id: &str) -> Result<Resource<P>, TemplateError> {
        self.resources
            .get(logical_id)
            .cloned()
            .ok_or_else(|| TemplateError::ResourceNotFound(logical_id.to_string()))?
            .into_typed()
    }

    /// Logical IDs of every resource of the given type, sorted
    pub fn resources_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.resources
            .iter()
            .filter(move |(_, r)| r.type_name == type_name)
            .map(|(id, _)| id.as_str())
    }

    /// Whether `name` can be the target of a `Ref`: a resource or a parameter.
    /// `Fn::GetAtt` targets must be resources; see [`Template::is_resource`].
    pub fn is_declared(&self, name: &str) -> bool {
        self.is_resource(name) || self.parameters.contains_key(name)
    }

    pub fn is_resource(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ResourceSchema;
    use crate::value::Value;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct TopicProperties {
        #[serde(rename = "TopicName", skip_serializing_if = "Option::is_none")]
        topic_name: Option<Value<String>>,
    }

    impl CfnResource for TopicProperties {
        const TYPE_NAME: &'static str = "AWS::SNS::Topic";

        fn schema() -> ResourceSchema {
            ResourceSchema::new(Self::TYPE_NAME)
        }
    }

    fn topic(name: &str) -> Resource<TopicProperties> {
        Resource::new(TopicProperties {
            topic_name: Some(Value::from(name)),
        })
    }

    #[test]
    fn add_and_read_back_typed_resource() {
        let mut template = Template::new();
        template.add_resource("Alerts", &topic("alerts")).unwrap();

        let resource: Resource<TopicProperties> = template.resource("Alerts").unwrap();
        assert_eq!(resource, topic("alerts"));
        assert_eq!(template.resources_of_type("AWS::SNS::Topic").collect::<Vec<_>>(), vec!["Alerts"]);
    }

    #[test]
    fn rejects_duplicate_and_invalid_logical_ids() {
        let mut template = Template::new();
        template.add_resource("Alerts", &topic("a")).unwrap();
        assert!(matches!(
            template.add_resource("Alerts", &topic("b")),
            Err(TemplateError::DuplicateLogicalId(_))
        ));
        assert!(matches!(
            template.add_resource("my-topic", &topic("c")),
            Err(TemplateError::InvalidLogicalId(_))
        ));
        assert!(!is_valid_logical_id(""));
        assert!(!is_valid_logical_id(&"A".repeat(256)));
    }

    #[test]
    fn typed_access_errors() {
        let template = Template::from_json(
            r#"{"Resources": {"Queue": {"Type": "AWS::SQS::Queue"}}}"#,
        )
        .unwrap();
        assert!(matches!(
            template.resource::<TopicProperties>("Missing"),
            Err(TemplateError::ResourceNotFound(_))
        ));
        assert!(matches!(
            template.resource::<TopicProperties>("Queue"),
            Err(TemplateError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn missing_properties_is_empty_object() {
        let template = Template::from_json(
            r#"{"Resources": {"Alerts": {"Type": "AWS::SNS::Topic"}}}"#,
        )
        .unwrap();
        let resource: Resource<TopicProperties> = template.resource("Alerts").unwrap();
        assert_eq!(resource.properties.topic_name, None);
        assert_eq!(template.resources["Alerts"].properties_json(), json!({}));
    }

    #[test]
    fn json_round_trip() {
        let mut template = Template::new().with_description("alerts");
        template.parameters.insert("Env".to_string(), json!({"Type": "String"}));
        template
            .add_resource("Alerts", &topic("alerts").with_condition("IsProd"))
            .unwrap();

        let text = template.to_json_pretty().unwrap();
        let parsed = Template::from_json(&text).unwrap();
        assert_eq!(parsed, template);

        let value: Json = serde_json::from_str(&text).unwrap();
        assert_eq!(value["AWSTemplateFormatVersion"], json!("2010-09-09"));
        assert_eq!(value["Resources"]["Alerts"]["Condition"], json!("IsProd"));
        assert!(value.get("Outputs").is_none());
        assert!(parsed.is_declared("Env"));
        assert!(parsed.is_declared("Alerts"));
        assert!(!parsed.is_declared("Other"));
        assert!(parsed.is_resource("Alerts"));
        assert!(!parsed.is_resource("Env"));
    }

    #[test]
    fn rules_and_unmodelled_sections_survive_a_round_trip() {
        let document = json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Transform": "AWS::Serverless-2016-10-31",
            "Parameters": {"Env": {"Type": "String"}},
            "Rules": {
                "ProdOnly": {
                    "RuleCondition": {"Fn::Equals": [{"Ref": "Env"}, "prod"]},
                    "Assertions": [{"Assert": {"Fn::Equals": [{"Ref": "AWS::Region"}, "us-east-1"]}}]
                }
            },
            "Globals": {"Function": {"Timeout": 30}},
            "Resources": {"Alerts": {"Type": "AWS::SNS::Topic"}}
        });

        let template: Template = serde_json::from_value(document.clone()).unwrap();
        assert!(template.rules.contains_key("ProdOnly"));
        assert_eq!(template.extra["Globals"], json!({"Function": {"Timeout": 30}}));
        assert!(!template.extra.contains_key("Rules"));

        let text = template.to_json_pretty().unwrap();
        assert_eq!(serde_json::from_str::<Json>(&text).unwrap(), document);
        assert_eq!(Template::from_json(&text).unwrap(), template);
    }

    #[test]
    fn misspelled_resource_keys_are_rejected() {
        let err = Template::from_json(
            r#"{"Resources": {"Alerts": {"Type": "AWS::SNS::Topic", "Propertes": {"TopicName": "a"}}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown resource attribute 'Propertes'"), "{}", err);

        let err = serde_json::from_value::<Resource<TopicProperties>>(json!({
            "Type": "AWS::SNS::Topic",
            "DeletionPolicy": "Retain",
            "Propertes": {"TopicName": "a"}
        }))
        .unwrap_err();
        assert!(err.to_string().contains("'Propertes'"), "{}", err);

        let resource: TemplateResource = serde_json::from_value(json!({
            "Type": "AWS::SNS::Topic",
            "DependsOn": ["Key"],
            "UpdatePolicy": {"AutoScalingReplacingUpdate": {"WillReplace": true}}
        }))
        .unwrap();
        assert_eq!(resource.attributes.dependencies(), &["Key".to_string()]);
    }
}
