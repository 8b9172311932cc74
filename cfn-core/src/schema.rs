//! Schema - Property schemas for resource types
//!
//! Every generated resource type carries a `ResourceSchema` mirroring its
//! Rust declaration. It is used for structural validation of untyped
//! `Properties` blocks, for documentation and for placeholder generation.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::intrinsic::{Intrinsic, IntrinsicError};

/// Maximum nesting followed when building placeholders
const SKELETON_MAX_DEPTH: usize = 8;

/// Attribute type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AttributeType {
    String,
    Integer,
    /// Floating point number
    Number,
    Boolean,
    /// Free-form JSON (policy documents, multi-typed properties)
    Json,
    /// String restricted to a list of allowed values
    Enum { name: String, values: Vec<String> },
    List(Box<AttributeType>),
    /// Nested property type, by definition name
    Struct(String),
}

impl AttributeType {
    pub fn enumeration(name: impl Into<String>, values: &[&str]) -> Self {
        AttributeType::Enum {
            name: name.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn list(inner: AttributeType) -> Self {
        AttributeType::List(Box::new(inner))
    }

    pub fn structure(definition: impl Into<String>) -> Self {
        AttributeType::Struct(definition.into())
    }

    /// Whether an intrinsic function may stand in for the whole value.
    /// Lists and nested property types are plain containers; their
    /// elements and fields accept intrinsics individually.
    pub fn accepts_intrinsic(&self) -> bool {
        !matches!(self, AttributeType::List(_) | AttributeType::Struct(_))
    }

    pub fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Integer => "Integer".to_string(),
            AttributeType::Number => "Number".to_string(),
            AttributeType::Boolean => "Boolean".to_string(),
            AttributeType::Json => "Json".to_string(),
            AttributeType::Enum { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Struct(name) => name.clone(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Type error, located by a path such as `Properties.UserSettings.SecurityGroups[1]`
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("{path}: type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        path: String,
        expected: String,
        got: String,
    },

    #[error("{path}: invalid value '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        path: String,
        value: String,
        expected: Vec<String>,
    },

    #[error("{path}: required attribute is missing")]
    MissingRequired { path: String },

    #[error("{path}: unknown attribute")]
    UnknownAttribute { path: String },

    #[error("{path}: {source}")]
    InvalidIntrinsic {
        path: String,
        source: IntrinsicError,
    },

    #[error("{path}: unknown property type '{name}'")]
    UnknownDefinition { path: String, name: String },
}

impl TypeError {
    pub fn path(&self) -> &str {
        match self {
            TypeError::TypeMismatch { path, .. }
            | TypeError::InvalidEnumVariant { path, .. }
            | TypeError::MissingRequired { path }
            | TypeError::UnknownAttribute { path }
            | TypeError::InvalidIntrinsic { path, .. }
            | TypeError::UnknownDefinition { path, .. } => path,
        }
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "Null",
        Json::Bool(_) => "Boolean",
        Json::Number(n) if n.is_f64() => "Number",
        Json::Number(_) => "Integer",
        Json::String(_) => "String",
        Json::Array(_) => "List",
        Json::Object(_) => "Object",
    }
}

/// Documented value constraints. They describe the AWS API and are never
/// checked by `validate`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, n: u64) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: u64) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn minimum(mut self, n: f64) -> Self {
        self.minimum = Some(n);
        self
    }

    pub fn maximum(mut self, n: f64) -> Self {
        self.maximum = Some(n);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Human readable summary, one entry per constraint
    pub fn describe(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(n) = self.min_length {
            lines.push(format!("min length {}", n));
        }
        if let Some(n) = self.max_length {
            lines.push(format!("max length {}", n));
        }
        if let Some(p) = &self.pattern {
            lines.push(format!("pattern {}", p));
        }
        if let Some(n) = self.minimum {
            lines.push(format!("minimum {}", n));
        }
        if let Some(n) = self.maximum {
            lines.push(format!("maximum {}", n));
        }
        lines
    }
}

/// What a stack update does when the attribute changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum UpdateBehavior {
    #[default]
    NoInterruption,
    Replacement,
}

impl fmt::Display for UpdateBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateBehavior::NoInterruption => write!(f, "No interruption"),
            UpdateBehavior::Replacement => write!(f, "Replacement"),
        }
    }
}

/// Attribute schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub update: UpdateBehavior,
    #[serde(skip_serializing_if = "Constraints::is_empty")]
    pub constraints: Constraints,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            update: UpdateBehavior::default(),
            constraints: Constraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_update(mut self, update: UpdateBehavior) -> Self {
        self.update = update;
        self
    }

    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Nested property type (e.g., `Tag`, `UserSettings`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyTypeSchema {
    pub name: String,
    pub attributes: BTreeMap<String, AttributeSchema>,
}

impl PropertyTypeSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }
}

/// Resource schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSchema {
    pub type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub definitions: BTreeMap<String, PropertyTypeSchema>,
    /// Return values, readable through `Fn::GetAtt`
    pub read_only: Vec<String>,
    pub primary_identifier: Vec<String>,
    pub taggable: bool,
}

impl ResourceSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
            attributes: BTreeMap::new(),
            definitions: BTreeMap::new(),
            read_only: Vec::new(),
            primary_identifier: Vec::new(),
            taggable: false,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_primary_identifier(mut self, names: &[&str]) -> Self {
        self.primary_identifier = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn taggable(mut self) -> Self {
        self.taggable = true;
        self
    }

    pub fn read_only(mut self, name: impl Into<String>) -> Self {
        self.read_only.push(name.into());
        self
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn definition(mut self, definition: PropertyTypeSchema) -> Self {
        self.definitions.insert(definition.name.clone(), definition);
        self
    }

    pub fn required_attributes(&self) -> impl Iterator<Item = &AttributeSchema> {
        self.attributes.values().filter(|a| a.required)
    }

    /// Validate an untyped `Properties` object, collecting every error
    pub fn validate(&self, properties: &Json) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();
        match properties.as_object() {
            Some(map) => self.validate_object(&self.attributes, map, "Properties", &mut errors),
            None => errors.push(TypeError::TypeMismatch {
                path: "Properties".to_string(),
                expected: "Object".to_string(),
                got: json_kind(properties).to_string(),
            }),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_object(
        &self,
        attributes: &BTreeMap<String, AttributeSchema>,
        map: &Map<String, Json>,
        path: &str,
        errors: &mut Vec<TypeError>,
    ) {
        for (name, schema) in attributes {
            if schema.required && !map.contains_key(name) {
                errors.push(TypeError::MissingRequired {
                    path: format!("{}.{}", path, name),
                });
            }
        }

        for (name, value) in map {
            let child = format!("{}.{}", path, name);
            match attributes.get(name) {
                None => errors.push(TypeError::UnknownAttribute { path: child }),
                // An explicit null is the same as leaving the attribute out
                Some(schema) if value.is_null() && !schema.required => {}
                Some(schema) => self.validate_value(&schema.attr_type, value, &child, errors),
            }
        }
    }

    fn validate_value(
        &self,
        attr_type: &AttributeType,
        value: &Json,
        path: &str,
        errors: &mut Vec<TypeError>,
    ) {
        if attr_type.accepts_intrinsic() && Intrinsic::is_intrinsic(value) {
            if let Err(source) = Intrinsic::from_json(value.clone()) {
                errors.push(TypeError::InvalidIntrinsic {
                    path: path.to_string(),
                    source,
                });
            }
            return;
        }

        let matches = match (attr_type, value) {
            (AttributeType::String, Json::String(_)) => true,
            (AttributeType::Integer, v) => v.as_i64().is_some(),
            (AttributeType::Number, v) => v.is_number(),
            (AttributeType::Boolean, v) => v.is_boolean(),
            (AttributeType::Json, _) => true,
            (AttributeType::Enum { values, .. }, Json::String(s)) => {
                if !values.iter().any(|v| v == s) {
                    errors.push(TypeError::InvalidEnumVariant {
                        path: path.to_string(),
                        value: s.clone(),
                        expected: values.clone(),
                    });
                }
                true
            }
            (AttributeType::List(inner), Json::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    self.validate_value(inner, item, &format!("{}[{}]", path, i), errors);
                }
                true
            }
            (AttributeType::Struct(name), Json::Object(map)) => {
                match self.definitions.get(name) {
                    Some(definition) => {
                        self.validate_object(&definition.attributes, map, path, errors)
                    }
                    None => errors.push(TypeError::UnknownDefinition {
                        path: path.to_string(),
                        name: name.clone(),
                    }),
                }
                true
            }
            _ => false,
        };

        if !matches {
            errors.push(TypeError::TypeMismatch {
                path: path.to_string(),
                expected: attr_type.type_name(),
                got: json_kind(value).to_string(),
            });
        }
    }

    /// Minimal `Properties` object: every required attribute with a placeholder
    pub fn skeleton(&self) -> Json {
        self.skeleton_object(&self.attributes, 0)
    }

    fn skeleton_object(&self, attributes: &BTreeMap<String, AttributeSchema>, depth: usize) -> Json {
        let map: Map<String, Json> = attributes
            .values()
            .filter(|a| a.required)
            .map(|a| (a.name.clone(), self.placeholder(a, depth)))
            .collect();
        Json::Object(map)
    }

    fn placeholder(&self, attribute: &AttributeSchema, depth: usize) -> Json {
        match &attribute.attr_type {
            AttributeType::String => Json::String(String::new()),
            AttributeType::Integer => {
                Json::from(attribute.constraints.minimum.map_or(0, |n| n.ceil() as i64))
            }
            AttributeType::Number => Json::from(attribute.constraints.minimum.unwrap_or(0.0)),
            AttributeType::Boolean => Json::Bool(false),
            AttributeType::Json => Json::Object(Map::new()),
            AttributeType::Enum { values, .. } => values
                .first()
                .map(|v| Json::String(v.clone()))
                .unwrap_or_default(),
            AttributeType::List(_) => Json::Array(Vec::new()),
            AttributeType::Struct(name) => match self.definitions.get(name) {
                Some(definition) if depth < SKELETON_MAX_DEPTH => {
                    self.skeleton_object(&definition.attributes, depth + 1)
                }
                _ => Json::Object(Map::new()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key_schema() -> ResourceSchema {
        ResourceSchema::new("AWS::Test::Key")
            .with_primary_identifier(&["KeyId"])
            .read_only("Arn")
            .taggable()
            .attribute(AttributeSchema::new("Description", AttributeType::String))
            .attribute(
                AttributeSchema::new(
                    "KeyUsage",
                    AttributeType::enumeration("KeyUsage", &["ENCRYPT_DECRYPT", "SIGN_VERIFY"]),
                )
                .required()
                .with_update(UpdateBehavior::Replacement),
            )
            .attribute(
                AttributeSchema::new("PendingWindowInDays", AttributeType::Integer)
                    .with_constraints(Constraints::new().minimum(7.0).maximum(30.0)),
            )
            .attribute(AttributeSchema::new("KeyPolicy", AttributeType::Json))
            .attribute(AttributeSchema::new(
                "Tags",
                AttributeType::list(AttributeType::structure("Tag")),
            ))
            .definition(
                PropertyTypeSchema::new("Tag")
                    .attribute(AttributeSchema::new("Key", AttributeType::String).required())
                    .attribute(AttributeSchema::new("Value", AttributeType::String).required()),
            )
    }

    #[test]
    fn validate_accepts_well_formed_properties() {
        let props = json!({
            "KeyUsage": "SIGN_VERIFY",
            "Description": {"Fn::Sub": "${AWS::StackName} key"},
            "PendingWindowInDays": 7,
            "KeyPolicy": {"Version": "2012-10-17"},
            "Tags": [{"Key": "team", "Value": {"Ref": "Team"}}]
        });
        assert_eq!(key_schema().validate(&props), Ok(()));
    }

    #[test]
    fn validate_reports_every_error_with_path() {
        let props = json!({
            "KeyUsage": "DECRYPT",
            "PendingWindowInDays": "seven",
            "Tags": [{"Key": "team"}, {"Key": "env", "Value": "prod", "Extra": 1}],
            "Bogus": true
        });
        let errors = key_schema().validate(&props).unwrap_err();
        let paths: Vec<&str> = errors.iter().map(TypeError::path).collect();
        assert_eq!(
            paths,
            vec![
                "Properties.Bogus",
                "Properties.KeyUsage",
                "Properties.PendingWindowInDays",
                "Properties.Tags[0].Value",
                "Properties.Tags[1].Extra",
            ]
        );
        assert!(matches!(errors[1], TypeError::InvalidEnumVariant { .. }));
        assert!(matches!(errors[3], TypeError::MissingRequired { .. }));
    }

    #[test]
    fn validate_rejects_intrinsic_for_list() {
        let props = json!({"KeyUsage": "SIGN_VERIFY", "Tags": {"Ref": "Tags"}});
        let errors = key_schema().validate(&props).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::TypeMismatch {
                path: "Properties.Tags".to_string(),
                expected: "List<Tag>".to_string(),
                got: "Object".to_string(),
            }]
        );
    }

    #[test]
    fn validate_reports_malformed_intrinsic() {
        let props = json!({"KeyUsage": {"Fn::Select": [0]}});
        let errors = key_schema().validate(&props).unwrap_err();
        assert!(matches!(errors[0], TypeError::InvalidIntrinsic { .. }));
    }

    #[test]
    fn constraints_are_not_enforced() {
        let props = json!({"KeyUsage": "SIGN_VERIFY", "PendingWindowInDays": 1000});
        assert_eq!(key_schema().validate(&props), Ok(()));
    }

    #[test]
    fn null_optional_is_ignored() {
        let props = json!({"KeyUsage": "SIGN_VERIFY", "Description": null});
        assert_eq!(key_schema().validate(&props), Ok(()));
    }

    #[test]
    fn validate_rejects_non_object() {
        let errors = key_schema().validate(&json!([])).unwrap_err();
        assert_eq!(errors[0].path(), "Properties");
    }

    #[test]
    fn skeleton_fills_required_attributes() {
        assert_eq!(key_schema().skeleton(), json!({"KeyUsage": "ENCRYPT_DECRYPT"}));
    }

    #[test]
    fn skeleton_recurses_into_required_structs() {
        let schema = ResourceSchema::new("AWS::Test::Thing")
            .attribute(AttributeSchema::new("Config", AttributeType::structure("Config")).required())
            .definition(
                PropertyTypeSchema::new("Config")
                    .attribute(
                        AttributeSchema::new("Size", AttributeType::Integer)
                            .required()
                            .with_constraints(Constraints::new().minimum(5.0)),
                    )
                    .attribute(AttributeSchema::new("Enabled", AttributeType::Boolean).required())
                    .attribute(AttributeSchema::new("Name", AttributeType::String)),
            );
        assert_eq!(schema.skeleton(), json!({"Config": {"Size": 5, "Enabled": false}}));
        assert_eq!(schema.validate(&schema.skeleton()), Ok(()));
    }

    #[test]
    fn constraints_describe() {
        let constraints = Constraints::new().min_length(1).max_length(256).pattern("^alias/");
        assert_eq!(
            constraints.describe(),
            vec!["min length 1", "max length 256", "pattern ^alias/"]
        );
        assert!(Constraints::new().is_empty());
        assert_eq!(
            Constraints::new().minimum(0.5).maximum(30.0).describe(),
            vec!["minimum 0.5", "maximum 30"]
        );
    }

    #[test]
    fn fractional_minimum_placeholders() {
        let schema = ResourceSchema::new("AWS::Test::Thing")
            .attribute(
                AttributeSchema::new("Count", AttributeType::Integer)
                    .required()
                    .with_constraints(Constraints::new().minimum(1.5)),
            )
            .attribute(
                AttributeSchema::new("Ratio", AttributeType::Number)
                    .required()
                    .with_constraints(Constraints::new().minimum(0.25)),
            );
        assert_eq!(schema.skeleton(), json!({"Count": 2, "Ratio": 0.25}));
        assert_eq!(schema.validate(&schema.skeleton()), Ok(()));
    }

    #[test]
    fn type_names() {
        assert_eq!(
            AttributeType::list(AttributeType::structure("Tag")).to_string(),
            "List<Tag>"
        );
        assert_eq!(AttributeType::enumeration("KeySpec", &["A"]).to_string(), "KeySpec");
        assert!(!AttributeType::list(AttributeType::String).accepts_intrinsic());
        assert!(AttributeType::Json.accepts_intrinsic());
    }
}
