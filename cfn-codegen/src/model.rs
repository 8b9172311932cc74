//! Resource model
//!
//! Intermediate form between a registry schema and emitted Rust: every
//! name is resolved, every `$ref` classified and every enum collected,
//! so emission is a straight walk over sorted data.

use std::collections::{BTreeMap, BTreeSet};

use cfn_core::schema::{
    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema,
    UpdateBehavior,
};
use heck::{ToPascalCase, ToSnakeCase};
use regex::Regex;

use crate::error::CodegenError;
use crate::schema::{CfnProperty, CfnSchema, TypeValue, top_level_property};

/// Names the generated module imports or declares itself
const RESERVED_TYPE_NAMES: &[&str] = &[
    "AttributeSchema",
    "AttributeType",
    "CfnResource",
    "Constraints",
    "Deserialize",
    "PropertyTypeSchema",
    "Resource",
    "ResourceSchema",
    "Serialize",
    "UpdateBehavior",
    "Value",
];

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Rust field identifier for a property name (e.g., "KmsKeyId" -> "kms_key_id")
pub fn field_ident(name: &str) -> String {
    let snake = name.to_snake_case();
    match snake.as_str() {
        // Cannot be raw identifiers
        "self" | "super" | "crate" => format!("{}_", snake),
        s if KEYWORDS.contains(&s) => format!("r#{}", snake),
        _ => snake,
    }
}

/// Enum variant for an allowed value (e.g., "ml.t3.medium" -> "MlT3Medium")
pub fn variant_ident(value: &str) -> String {
    let pascal = value.to_pascal_case();
    if pascal == "Self" {
        return "SelfValue".to_string();
    }
    match pascal.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => pascal,
        _ => format!("V{}", pascal),
    }
}

/// Field type, resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Json,
    /// Generated enum, by Rust name
    Enum(String),
    /// Nested property type, by definition key
    Struct(String),
    List(Box<FieldType>),
}

impl FieldType {
    /// The enum a value of this type is restricted to, looking through lists
    pub fn enum_name(&self) -> Option<&str> {
        match self {
            FieldType::Enum(name) => Some(name),
            FieldType::List(inner) => inner.enum_name(),
            _ => None,
        }
    }

    /// Whether the Rust type wraps a `Value<T>`
    pub fn uses_value(&self) -> bool {
        match self {
            FieldType::Json | FieldType::Struct(_) => false,
            FieldType::List(inner) => inner.uses_value(),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldModel {
    /// CloudFormation property name
    pub name: String,
    pub ident: String,
    pub description: Option<String>,
    pub field_type: FieldType,
    pub required: bool,
    /// Always set on resource-level properties; on nested ones only when a
    /// create-only pointer names them
    pub update: Option<UpdateBehavior>,
    pub constraints: Constraints,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructModel {
    /// Definition key in the registry schema (e.g., "EFSFileSystemConfig")
    pub key: String,
    /// Rust name (e.g., "EfsFileSystemConfig")
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldModel>,
}

impl StructModel {
    pub fn has_required(&self) -> bool {
        self.fields.iter().any(|f| f.required)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    pub ident: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumModel {
    pub name: String,
    /// Where the allowed values are declared (e.g., "UserSettings.StudioWebPortal")
    pub location: String,
    pub variants: Vec<EnumVariant>,
}

impl EnumModel {
    pub fn values(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.value.clone()).collect()
    }
}

/// Everything needed to emit one resource module
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceModel {
    pub type_name: String,
    /// e.g., "sagemaker_user_profile"
    pub module_name: String,
    /// e.g., "SageMakerUserProfile"
    pub alias_name: String,
    /// e.g., "UserProfileProperties"
    pub struct_name: String,
    pub description: Option<String>,
    pub fields: Vec<FieldModel>,
    /// Sorted by definition key
    pub structs: Vec<StructModel>,
    /// Sorted by name
    pub enums: Vec<EnumModel>,
    pub read_only: Vec<String>,
    pub primary_identifier: Vec<String>,
    pub taggable: bool,
}

impl ResourceModel {
    pub fn from_schema(schema: &CfnSchema) -> Result<Self, CodegenError> {
        let parts: Vec<&str> = schema.type_name.split("::").collect();
        let [_, service, resource] = parts.as_slice() else {
            return Err(CodegenError::InvalidTypeName(schema.type_name.clone()));
        };
        if service.is_empty() || resource.is_empty() {
            return Err(CodegenError::InvalidTypeName(schema.type_name.clone()));
        }

        let mut builder = ModelBuilder {
            schema,
            whitespace: Regex::new(r"\s+")?,
            enums: BTreeMap::new(),
            one_of: BTreeMap::new(),
        };

        let read_only: Vec<String> = schema
            .read_only_properties
            .iter()
            .filter_map(|p| top_level_property(p))
            .map(str::to_string)
            .collect();
        let create_only: BTreeSet<&str> = schema
            .create_only_properties
            .iter()
            .filter_map(|p| top_level_property(p))
            .collect();
        let mut nested_create_only = BTreeSet::new();
        for pointer in &schema.create_only_properties {
            if top_level_property(pointer).is_some() {
                continue;
            }
            match schema.nested_field(pointer) {
                Some(field) => {
                    nested_create_only.insert(field);
                }
                None => log::warn!(
                    "{}: create-only pointer {} does not name a property",
                    schema.type_name,
                    pointer
                ),
            }
        }

        let struct_name = format!("{}Properties", resource.to_pascal_case());

        let mut fields = Vec::new();
        for (name, prop) in &schema.properties {
            if read_only.contains(name) {
                continue;
            }
            let update = if create_only.contains(name.as_str()) {
                UpdateBehavior::Replacement
            } else {
                UpdateBehavior::NoInterruption
            };
            let required = schema.required.contains(name);
            let mut field = builder.field(prop, None, name, name.clone(), required)?;
            field.update = Some(update);
            fields.push(field);
        }
        check_field_idents(&schema.type_name, &struct_name, &fields)?;

        let mut structs = Vec::new();
        for (key, definition) in &schema.definitions {
            let Some(properties) = &definition.properties else {
                continue;
            };
            let mut struct_fields = Vec::new();
            for (name, prop) in properties {
                let required = definition.required.contains(name);
                let location = format!("{}.{}", key, name);
                let mut field = builder.field(prop, Some(key.as_str()), name, location, required)?;
                if nested_create_only.contains(&(key.as_str(), name.as_str())) {
                    field.update = Some(UpdateBehavior::Replacement);
                }
                struct_fields.push(field);
            }
            let name = key.to_pascal_case();
            check_field_idents(&schema.type_name, &name, &struct_fields)?;
            structs.push(StructModel {
                key: key.clone(),
                name,
                description: definition
                    .description
                    .as_deref()
                    .and_then(|d| builder.clean(d)),
                fields: struct_fields,
            });
        }
        structs.extend(std::mem::take(&mut builder.one_of).into_values());
        structs.sort_by(|a, b| a.key.cmp(&b.key));

        let description = schema.description.as_deref().and_then(|d| builder.clean(d));
        let model = ResourceModel {
            type_name: schema.type_name.clone(),
            module_name: format!("{}_{}", service.to_lowercase(), resource.to_snake_case()),
            alias_name: format!("{}{}", service.to_pascal_case(), resource.to_pascal_case()),
            struct_name,
            description,
            fields,
            structs,
            enums: builder.enums.into_values().collect(),
            read_only,
            primary_identifier: schema
                .primary_identifier
                .iter()
                .filter_map(|p| top_level_property(p))
                .map(str::to_string)
                .collect(),
            taggable: schema.tagging.as_ref().is_some_and(|t| t.taggable),
        };
        model.check_type_names()?;

        log::debug!(
            "{}: {} fields, {} structs, {} enums",
            model.type_name,
            model.fields.len(),
            model.structs.len(),
            model.enums.len()
        );
        Ok(model)
    }

    fn check_type_names(&self) -> Result<(), CodegenError> {
        let mut seen: BTreeSet<&str> = RESERVED_TYPE_NAMES.iter().copied().collect();
        let names = [self.alias_name.as_str(), self.struct_name.as_str()]
            .into_iter()
            .chain(self.structs.iter().map(|s| s.name.as_str()))
            .chain(self.enums.iter().map(|e| e.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(CodegenError::NameCollision {
                    type_name: self.type_name.clone(),
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumModel> {
        self.enums.iter().find(|e| e.name == name)
    }

    pub fn find_struct(&self, key: &str) -> Option<&StructModel> {
        self.structs.iter().find(|s| s.key == key)
    }

    fn all_fields(&self) -> impl Iterator<Item = &FieldModel> {
        self.fields
            .iter()
            .chain(self.structs.iter().flat_map(|s| s.fields.iter()))
    }

    pub fn uses_value(&self) -> bool {
        self.all_fields().any(|f| f.field_type.uses_value())
    }

    pub fn uses_constraints(&self) -> bool {
        self.all_fields().any(|f| !f.constraints.is_empty())
    }

    pub fn uses_replacement(&self) -> bool {
        self.all_fields()
            .any(|f| f.update == Some(UpdateBehavior::Replacement))
    }

    pub fn attribute_type(&self, field_type: &FieldType) -> AttributeType {
        match field_type {
            FieldType::String => AttributeType::String,
            FieldType::Integer => AttributeType::Integer,
            FieldType::Number => AttributeType::Number,
            FieldType::Boolean => AttributeType::Boolean,
            FieldType::Json => AttributeType::Json,
            FieldType::Enum(name) => AttributeType::Enum {
                name: name.clone(),
                values: self.find_enum(name).map(EnumModel::values).unwrap_or_default(),
            },
            FieldType::Struct(key) => AttributeType::structure(key.clone()),
            FieldType::List(inner) => AttributeType::list(self.attribute_type(inner)),
        }
    }

    fn attribute_schema(&self, field: &FieldModel) -> AttributeSchema {
        let mut attribute = AttributeSchema::new(&field.name, self.attribute_type(&field.field_type));
        if field.required {
            attribute = attribute.required();
        }
        if let Some(update) = field.update {
            attribute = attribute.with_update(update);
        }
        if !field.constraints.is_empty() {
            attribute = attribute.with_constraints(field.constraints.clone());
        }
        attribute
    }

    /// The schema the emitted `schema()` function builds
    pub fn to_resource_schema(&self) -> ResourceSchema {
        let mut schema = ResourceSchema::new(&self.type_name);
        if let Some(description) = &self.description {
            schema = schema.with_description(description);
        }
        if !self.primary_identifier.is_empty() {
            let ids: Vec<&str> = self.primary_identifier.iter().map(String::as_str).collect();
            schema = schema.with_primary_identifier(&ids);
        }
        if self.taggable {
            schema = schema.taggable();
        }
        for name in &self.read_only {
            schema = schema.read_only(name);
        }
        for field in &self.fields {
            schema = schema.attribute(self.attribute_schema(field));
        }
        for model in &self.structs {
            let definition = model
                .fields
                .iter()
                .fold(PropertyTypeSchema::new(&model.key), |d, f| {
                    d.attribute(self.attribute_schema(f))
                });
            schema = schema.definition(definition);
        }
        schema
    }
}

fn check_field_idents(
    type_name: &str,
    owner: &str,
    fields: &[FieldModel],
) -> Result<(), CodegenError> {
    let mut seen = BTreeSet::new();
    for field in fields {
        if !seen.insert(field.ident.as_str()) {
            return Err(CodegenError::NameCollision {
                type_name: type_name.to_string(),
                name: format!("{}.{}", owner, field.ident),
            });
        }
    }
    Ok(())
}

fn constraints_of(prop: &CfnProperty) -> Constraints {
    Constraints {
        min_length: prop.min_length,
        max_length: prop.max_length,
        pattern: prop.pattern.clone(),
        minimum: prop.minimum,
        maximum: prop.maximum,
    }
}

struct ModelBuilder<'a> {
    schema: &'a CfnSchema,
    whitespace: Regex,
    enums: BTreeMap<String, EnumModel>,
    /// Structs built from `oneOf` object branches, by key
    one_of: BTreeMap<String, StructModel>,
}

impl ModelBuilder<'_> {
    fn clean(&self, text: &str) -> Option<String> {
        let cleaned = self.whitespace.replace_all(text, " ");
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_string())
    }

    fn field(
        &mut self,
        prop: &CfnProperty,
        owner: Option<&str>,
        name: &str,
        location: String,
        required: bool,
    ) -> Result<FieldModel, CodegenError> {
        let (field_type, constraints) = self.resolve(prop, owner, name, &location)?;
        Ok(FieldModel {
            name: name.to_string(),
            ident: field_ident(name),
            description: prop.description.as_deref().and_then(|d| self.clean(d)),
            field_type,
            required,
            update: None,
            constraints,
        })
    }

    fn resolve(
        &mut self,
        prop: &CfnProperty,
        owner: Option<&str>,
        name: &str,
        location: &str,
    ) -> Result<(FieldType, Constraints), CodegenError> {
        let schema = self.schema;

        if let Some(reference) = &prop.ref_path {
            let definition = reference
                .strip_prefix("#/definitions/")
                .filter(|key| !key.contains('/'))
                .and_then(|key| schema.definitions.get_key_value(key));
            let Some((key, definition)) = definition else {
                return Err(CodegenError::UnsupportedRef {
                    reference: reference.clone(),
                    location: location.to_string(),
                });
            };

            if let Some(values) = &definition.enum_values {
                let field_type = self.register_enum(key.to_pascal_case(), key, values)?;
                return Ok((field_type, constraints_of(definition)));
            }
            if definition.properties.is_some() {
                return Ok((FieldType::Struct(key.clone()), Constraints::default()));
            }
            // Primitive and array definitions are inlined
            return self.resolve(definition, owner, name, location);
        }

        if let Some(values) = &prop.enum_values {
            let enum_name = match owner {
                Some(owner) => format!("{}{}", owner.to_pascal_case(), name.to_pascal_case()),
                None => name.to_pascal_case(),
            };
            let field_type = self.register_enum(enum_name, location, values)?;
            return Ok((field_type, constraints_of(prop)));
        }

        if let Some(branches) = &prop.one_of
            && !branches.is_empty()
            && branches.iter().all(|b| b.properties.is_some())
        {
            let key = match owner {
                Some(owner) => format!("{}{}", owner.to_pascal_case(), name.to_pascal_case()),
                None => name.to_pascal_case(),
            };
            self.register_one_of(&key, prop, branches)?;
            return Ok((FieldType::Struct(key), Constraints::default()));
        }

        let resolved = match prop.prop_type.as_ref().and_then(TypeValue::single) {
            Some("string") => (FieldType::String, constraints_of(prop)),
            Some("integer") => (FieldType::Integer, constraints_of(prop)),
            Some("number") => (FieldType::Number, constraints_of(prop)),
            Some("boolean") => (FieldType::Boolean, constraints_of(prop)),
            Some("array") => match &prop.items {
                Some(items) => {
                    let (inner, constraints) = self.resolve(items, owner, name, location)?;
                    (FieldType::List(Box::new(inner)), constraints)
                }
                None => (FieldType::List(Box::new(FieldType::Json)), Constraints::default()),
            },
            // Free-form objects and multi-typed properties
            _ => (FieldType::Json, Constraints::default()),
        };
        Ok(resolved)
    }

    /// A struct holding the union of the branch properties, all optional
    fn register_one_of(
        &mut self,
        key: &str,
        prop: &CfnProperty,
        branches: &[CfnProperty],
    ) -> Result<(), CodegenError> {
        if self.schema.definitions.contains_key(key) || self.one_of.contains_key(key) {
            return Err(CodegenError::NameCollision {
                type_name: self.schema.type_name.clone(),
                name: key.to_string(),
            });
        }

        let mut properties: BTreeMap<&str, &CfnProperty> = BTreeMap::new();
        for (name, branch_prop) in branches.iter().filter_map(|b| b.properties.as_ref()).flatten() {
            properties.entry(name.as_str()).or_insert(branch_prop);
        }
        let mut fields = Vec::with_capacity(properties.len());
        for (name, branch_prop) in properties {
            let location = format!("{}.{}", key, name);
            fields.push(self.field(branch_prop, Some(key), name, location, false)?);
        }
        check_field_idents(&self.schema.type_name, key, &fields)?;

        let model = StructModel {
            key: key.to_string(),
            name: key.to_pascal_case(),
            description: prop.description.as_deref().and_then(|d| self.clean(d)),
            fields,
        };
        self.one_of.insert(key.to_string(), model);
        Ok(())
    }

    fn register_enum(
        &mut self,
        name: String,
        location: &str,
        values: &[String],
    ) -> Result<FieldType, CodegenError> {
        if let Some(existing) = self.enums.get(&name) {
            if existing.location == location {
                return Ok(FieldType::Enum(name));
            }
            return Err(CodegenError::NameCollision {
                type_name: self.schema.type_name.clone(),
                name,
            });
        }

        let mut idents = BTreeSet::new();
        let mut variants = Vec::with_capacity(values.len());
        for value in values {
            let ident = variant_ident(value);
            if !idents.insert(ident.clone()) {
                return Err(CodegenError::NameCollision {
                    type_name: self.schema.type_name.clone(),
                    name: format!("{}::{}", name, ident),
                });
            }
            variants.push(EnumVariant {
                ident,
                value: value.clone(),
            });
        }

        self.enums.insert(
            name.clone(),
            EnumModel {
                name: name.clone(),
                location: location.to_string(),
                variants,
            },
        );
        Ok(FieldType::Enum(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(json: &str) -> Result<ResourceModel, CodegenError> {
        ResourceModel::from_schema(&CfnSchema::from_json(json).unwrap())
    }

    const DOMAIN_LIKE: &str = r##"{
        "typeName": "AWS::SageMaker::Domain",
        "description": "Resource Type definition for\n   AWS::SageMaker::Domain",
        "properties": {
            "DomainArn": {"type": "string"},
            "DomainName": {"type": "string", "maxLength": 63, "pattern": "^[a-zA-Z0-9](-*[a-zA-Z0-9]){0,62}"},
            "AuthMode": {"type": "string", "enum": ["SSO", "IAM"]},
            "DefaultUserSettings": {"$ref": "#/definitions/UserSettings"},
            "SubnetIds": {"type": "array", "items": {"type": "string", "maxLength": 32}},
            "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
        },
        "definitions": {
            "UserSettings": {
                "type": "object",
                "properties": {
                    "ExecutionRole": {"type": "string", "minLength": 20},
                    "StudioWebPortal": {"type": "string", "enum": ["ENABLED", "DISABLED"]},
                    "InstanceType": {"$ref": "#/definitions/InstanceType"},
                    "EFSFileSystemConfig": {"$ref": "#/definitions/EFSFileSystemConfig"}
                },
                "required": ["ExecutionRole"]
            },
            "EFSFileSystemConfig": {
                "type": "object",
                "properties": {"FileSystemId": {"type": "string"}},
                "required": ["FileSystemId"]
            },
            "InstanceType": {"type": "string", "enum": ["system", "ml.t3.2xlarge"]},
            "Tag": {
                "type": "object",
                "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}},
                "required": ["Key", "Value"]
            }
        },
        "required": ["AuthMode", "DomainName"],
        "readOnlyProperties": ["/properties/DomainArn"],
        "createOnlyProperties": ["/properties/AuthMode", "/properties/DomainName"],
        "primaryIdentifier": ["/properties/DomainId"],
        "tagging": {"taggable": true}
    }"##;

    #[test]
    fn names_follow_type_name() {
        let model = model(DOMAIN_LIKE).unwrap();
        assert_eq!(model.module_name, "sagemaker_domain");
        assert_eq!(model.alias_name, "SageMakerDomain");
        assert_eq!(model.struct_name, "DomainProperties");
        assert_eq!(
            model.description.as_deref(),
            Some("Resource Type definition for AWS::SageMaker::Domain")
        );
    }

    #[test]
    fn read_only_properties_are_not_fields() {
        let model = model(DOMAIN_LIKE).unwrap();
        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["AuthMode", "DefaultUserSettings", "DomainName", "SubnetIds", "Tags"]
        );
        assert_eq!(model.read_only, vec!["DomainArn"]);
        assert_eq!(model.primary_identifier, vec!["DomainId"]);
    }

    #[test]
    fn field_types_and_update_behavior() {
        let model = model(DOMAIN_LIKE).unwrap();
        let auth = &model.fields[0];
        assert_eq!(auth.field_type, FieldType::Enum("AuthMode".to_string()));
        assert!(auth.required);
        assert_eq!(auth.update, Some(UpdateBehavior::Replacement));

        let subnets = &model.fields[3];
        assert_eq!(subnets.field_type, FieldType::List(Box::new(FieldType::String)));
        assert_eq!(subnets.constraints.max_length, Some(32));
        assert_eq!(subnets.update, Some(UpdateBehavior::NoInterruption));

        let tags = &model.fields[4];
        assert_eq!(
            tags.field_type,
            FieldType::List(Box::new(FieldType::Struct("Tag".to_string())))
        );
    }

    #[test]
    fn enums_are_named_by_owner() {
        let model = model(DOMAIN_LIKE).unwrap();
        let names: Vec<&str> = model.enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["AuthMode", "InstanceType", "UserSettingsStudioWebPortal"]);

        let instance_type = model.find_enum("InstanceType").unwrap();
        assert_eq!(instance_type.location, "InstanceType");
        assert_eq!(instance_type.variants[0].ident, "System");
        assert_eq!(instance_type.variants[1].ident, "MlT32xlarge");
    }

    #[test]
    fn structs_use_pascal_names() {
        let model = model(DOMAIN_LIKE).unwrap();
        let efs = model.find_struct("EFSFileSystemConfig").unwrap();
        assert_eq!(efs.name, "EfsFileSystemConfig");
        assert!(efs.has_required());
        let settings = model.find_struct("UserSettings").unwrap();
        assert_eq!(settings.fields[0].ident, "efs_file_system_config");
        assert_eq!(settings.fields[0].update, None);
    }

    #[test]
    fn resource_schema_mirrors_model() {
        let schema = model(DOMAIN_LIKE).unwrap().to_resource_schema();
        assert!(schema.taggable);
        assert_eq!(
            schema.attributes["AuthMode"].attr_type,
            AttributeType::enumeration("AuthMode", &["SSO", "IAM"])
        );
        assert_eq!(schema.attributes["AuthMode"].update, UpdateBehavior::Replacement);
        assert!(schema.definitions["Tag"].attributes["Key"].required);
        assert_eq!(
            schema.definitions["UserSettings"].attributes["ExecutionRole"].constraints,
            Constraints::new().min_length(20)
        );
    }

    #[test]
    fn idents() {
        assert_eq!(field_ident("S3OutputPath"), "s3_output_path");
        assert_eq!(field_ident("RStudioServerProAppSettings"), "r_studio_server_pro_app_settings");
        assert_eq!(field_ident("Type"), "r#type");
        assert_eq!(field_ident("Self"), "self_");
        assert_eq!(variant_ident("ECC_SECG_P256K1"), "EccSecgP256k1");
        assert_eq!(variant_ident("2048"), "V2048");
        assert_eq!(variant_ident("self"), "SelfValue");
    }

    #[test]
    fn duplicate_variants_are_rejected() {
        let err = model(
            r#"{
                "typeName": "AWS::Test::Thing",
                "properties": {"Mode": {"type": "string", "enum": ["on-off", "ON_OFF"]}}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { ref name, .. } if name == "Mode::OnOff"));
    }

    #[test]
    fn colliding_type_names_are_rejected() {
        let err = model(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {
                    "Config": {"$ref": "#/definitions/Config"},
                    "ConfigMode": {"type": "string", "enum": ["A"]}
                },
                "definitions": {
                    "Config": {"type": "object", "properties": {"Mode": {"type": "string", "enum": ["B"]}}}
                }
            }"##,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { ref name, .. } if name == "ConfigMode"));
    }

    #[test]
    fn reserved_names_are_rejected() {
        let err = model(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {"V": {"$ref": "#/definitions/Value"}},
                "definitions": {"Value": {"type": "object", "properties": {}}}
            }"##,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { .. }));
    }

    #[test]
    fn unsupported_refs_are_rejected() {
        let err = model(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {"Other": {"$ref": "aws.json#/definitions/Other"}}
            }"##,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedRef { .. }));
    }

    #[test]
    fn invalid_type_name() {
        let err = model(r#"{"typeName": "AWS::Thing", "properties": {}}"#).unwrap_err();
        assert!(matches!(err, CodegenError::InvalidTypeName(_)));
    }

    #[test]
    fn multi_typed_properties_are_json() {
        let model = model(
            r#"{
                "typeName": "AWS::KMS::Key",
                "properties": {
                    "KeyPolicy": {"type": ["object", "string"]},
                    "Window": {"oneOf": [{"type": "string"}, {"type": "integer"}]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(model.fields[0].field_type, FieldType::Json);
        assert_eq!(model.fields[1].field_type, FieldType::Json);
        assert!(!model.uses_value());
    }

    #[test]
    fn fractional_bounds_are_kept() {
        let model = model(
            r#"{
                "typeName": "AWS::Test::Thing",
                "properties": {"Ratio": {"type": "number", "minimum": 0.5, "maximum": 2}}
            }"#,
        )
        .unwrap();
        assert_eq!(model.fields[0].constraints, Constraints::new().minimum(0.5).maximum(2.0));
    }

    const PIPELINE_LIKE: &str = r##"{
        "typeName": "AWS::SageMaker::Pipeline",
        "properties": {
            "PipelineDefinition": {
                "type": "object",
                "description": "Inline or in S3.",
                "oneOf": [
                    {
                        "type": "object",
                        "properties": {"PipelineDefinitionBody": {"type": "string"}},
                        "required": ["PipelineDefinitionBody"]
                    },
                    {
                        "type": "object",
                        "properties": {"PipelineDefinitionS3Location": {"$ref": "#/definitions/S3Location"}},
                        "required": ["PipelineDefinitionS3Location"]
                    }
                ]
            }
        },
        "definitions": {
            "S3Location": {
                "type": "object",
                "properties": {"Bucket": {"type": "string"}},
                "required": ["Bucket"]
            }
        },
        "required": ["PipelineDefinition"]
    }"##;

    #[test]
    fn one_of_object_branches_become_a_struct() {
        let model = model(PIPELINE_LIKE).unwrap();
        assert_eq!(
            model.fields[0].field_type,
            FieldType::Struct("PipelineDefinition".to_string())
        );
        let keys: Vec<&str> = model.structs.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["PipelineDefinition", "S3Location"]);

        let definition = model.find_struct("PipelineDefinition").unwrap();
        assert!(!definition.has_required());
        assert_eq!(definition.description.as_deref(), Some("Inline or in S3."));
        assert_eq!(definition.fields[0].field_type, FieldType::String);
        assert_eq!(
            definition.fields[1].field_type,
            FieldType::Struct("S3Location".to_string())
        );

        let schema = model.to_resource_schema();
        assert_eq!(
            schema.attributes["PipelineDefinition"].attr_type,
            AttributeType::structure("PipelineDefinition")
        );
        assert_eq!(schema.definitions["PipelineDefinition"].attributes.len(), 2);
    }

    #[test]
    fn one_of_colliding_with_a_definition_is_rejected() {
        let err = model(
            r##"{
                "typeName": "AWS::Test::Thing",
                "properties": {"Source": {"oneOf": [{"properties": {"Body": {"type": "string"}}}]}},
                "definitions": {"Source": {"type": "object", "properties": {}}}
            }"##,
        )
        .unwrap_err();
        assert!(matches!(err, CodegenError::NameCollision { ref name, .. } if name == "Source"));
    }

    #[test]
    fn nested_create_only_pointers_mark_definition_fields() {
        let model = model(
            r##"{
                "typeName": "AWS::SageMaker::Domain",
                "properties": {
                    "DomainName": {"type": "string"},
                    "DomainSettings": {"$ref": "#/definitions/DomainSettings"}
                },
                "definitions": {
                    "DomainSettings": {
                        "type": "object",
                        "properties": {
                            "RStudioServerProDomainSettings": {"$ref": "#/definitions/RStudioServerProDomainSettings"}
                        }
                    },
                    "RStudioServerProDomainSettings": {
                        "type": "object",
                        "properties": {
                            "DefaultResourceSpec": {"$ref": "#/definitions/ResourceSpec"},
                            "DomainExecutionRoleArn": {"type": "string"}
                        }
                    },
                    "ResourceSpec": {"type": "object", "properties": {"InstanceType": {"type": "string"}}}
                },
                "createOnlyProperties": [
                    "/properties/DomainSettings/RStudioServerProDomainSettings/DefaultResourceSpec",
                    "/properties/DomainSettings/Missing"
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(model.fields[0].update, Some(UpdateBehavior::NoInterruption));
        let settings = model.find_struct("RStudioServerProDomainSettings").unwrap();
        assert_eq!(settings.fields[0].name, "DefaultResourceSpec");
        assert_eq!(settings.fields[0].update, Some(UpdateBehavior::Replacement));
        assert_eq!(settings.fields[1].update, None);
        assert!(model.uses_replacement());

        let schema = model.to_resource_schema();
        assert_eq!(
            schema.definitions["RStudioServerProDomainSettings"].attributes["DefaultResourceSpec"].update,
            UpdateBehavior::Replacement
        );
        assert_eq!(
            schema.definitions["ResourceSpec"].attributes["InstanceType"].update,
            UpdateBehavior::NoInterruption
        );
    }
}
