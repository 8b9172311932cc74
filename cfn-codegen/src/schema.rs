//! CloudFormation registry schema
//!
//! The subset of the resource provider schema format the generator reads.
//! Definitions share the property shape: an object definition is a property
//! with `properties`, an enum definition a property with `enum`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// CloudFormation resource provider schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub create_only_properties: Vec<String>,
    #[serde(default)]
    pub primary_identifier: Vec<String>,
    pub tagging: Option<CfnTagging>,
}

/// CloudFormation tagging metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnTagging {
    #[serde(default)]
    pub taggable: bool,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    /// The type, when exactly one is allowed
    pub fn single(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            TypeValue::Multiple(v) if v.len() == 1 => v.first().map(String::as_str),
            TypeValue::Multiple(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    pub required: Vec<String>,
    /// Alternative shapes; only object branches are modelled
    pub one_of: Option<Vec<CfnProperty>>,
}

impl CfnSchema {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Key of the object definition a property refers to, looking through arrays
    pub fn object_definition(&self, property: &CfnProperty) -> Option<&str> {
        if let Some(items) = &property.items {
            return self.object_definition(items);
        }
        let key = property.ref_path.as_deref()?.strip_prefix("#/definitions/")?;
        let (key, definition) = self.definitions.get_key_value(key)?;
        definition.properties.as_ref().map(|_| key.as_str())
    }

    /// Resolve a nested `/properties/A/B/C` pointer to the definition field it
    /// names, as `(definition key, property)`. `*` segments step into arrays.
    pub fn nested_field(&self, pointer: &str) -> Option<(&str, &str)> {
        let mut segments = pointer.strip_prefix("/properties/")?.split('/');
        let mut property = self.properties.get(segments.next()?)?;
        let mut target = None;
        for segment in segments {
            if segment == "*" {
                property = property.items.as_deref()?;
                continue;
            }
            let key = self.object_definition(property)?;
            let (name, next) = self
                .definitions
                .get(key)?
                .properties
                .as_ref()?
                .get_key_value(segment)?;
            target = Some((key, name.as_str()));
            property = next;
        }
        target
    }
}

/// Strip a `/properties/` pointer down to a top-level property name.
/// Nested pointers (`/properties/A/B`) yield `None`.
pub fn top_level_property(pointer: &str) -> Option<&str> {
    pointer
        .strip_prefix("/properties/")
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_schema() {
        let schema = CfnSchema::from_json(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {
                    "Name": {"type": "string", "minLength": 1, "maxLength": 64},
                    "Size": {"type": ["integer", "string"], "minimum": 1},
                    "Config": {"$ref": "#/definitions/Config"}
                },
                "definitions": {
                    "Config": {
                        "type": "object",
                        "additionalProperties": false,
                        "properties": {"Mode": {"type": "string", "enum": ["A", "B"]}},
                        "required": ["Mode"]
                    }
                },
                "readOnlyProperties": ["/properties/Arn"],
                "primaryIdentifier": ["/properties/Name"],
                "tagging": {"taggable": false}
            }"##,
        )
        .unwrap();

        assert_eq!(schema.type_name, "AWS::Test::Thing");
        assert_eq!(schema.properties["Name"].max_length, Some(64));
        assert_eq!(schema.properties["Size"].prop_type.as_ref().and_then(TypeValue::single), None);
        assert_eq!(schema.definitions["Config"].required, vec!["Mode"]);
        assert!(!schema.tagging.unwrap().taggable);
    }

    #[test]
    fn nested_pointers_resolve_to_definition_fields() {
        let schema = CfnSchema::from_json(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {
                    "Settings": {"$ref": "#/definitions/Settings"},
                    "Rules": {"type": "array", "items": {"$ref": "#/definitions/Rule"}}
                },
                "definitions": {
                    "Settings": {
                        "type": "object",
                        "properties": {"Spec": {"$ref": "#/definitions/Spec"}}
                    },
                    "Spec": {"type": "object", "properties": {"Size": {"type": "integer"}}},
                    "Rule": {"type": "object", "properties": {"Name": {"type": "string"}}}
                }
            }"##,
        )
        .unwrap();

        assert_eq!(schema.nested_field("/properties/Settings/Spec"), Some(("Settings", "Spec")));
        assert_eq!(schema.nested_field("/properties/Settings/Spec/Size"), Some(("Spec", "Size")));
        assert_eq!(schema.nested_field("/properties/Rules/*/Name"), Some(("Rule", "Name")));
        assert_eq!(schema.nested_field("/properties/Settings/Missing"), None);
        assert_eq!(schema.nested_field("/properties/Settings"), None);
        assert_eq!(schema.object_definition(&schema.properties["Rules"]), Some("Rule"));
    }

    #[test]
    fn fractional_bounds_and_one_of_are_read() {
        let schema = CfnSchema::from_json(
            r#"{
                "typeName": "AWS::Test::Thing",
                "properties": {
                    "Ratio": {"type": "number", "minimum": 0.5, "maximum": 1},
                    "Source": {
                        "type": "object",
                        "oneOf": [
                            {"type": "object", "properties": {"Body": {"type": "string"}}, "required": ["Body"]},
                            {"type": "object", "properties": {"Uri": {"type": "string"}}, "required": ["Uri"]}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(schema.properties["Ratio"].minimum, Some(0.5));
        assert_eq!(schema.properties["Ratio"].maximum, Some(1.0));
        let branches = schema.properties["Source"].one_of.as_ref().unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[1].required, vec!["Uri"]);
    }

    #[test]
    fn top_level_pointers() {
        assert_eq!(top_level_property("/properties/Arn"), Some("Arn"));
        assert_eq!(top_level_property("/properties/Settings/Arn"), None);
        assert_eq!(top_level_property("Arn"), None);
    }
}
