//! Rust source emission
//!
//! Turns a `ResourceModel` into the text of a generated module. The output
//! only depends on the model, so regenerating from the same registry
//! schemas is byte-identical.

use cfn_core::schema::{Constraints, UpdateBehavior};

use crate::config::CodegenConfig;
use crate::model::{EnumModel, FieldModel, FieldType, ResourceModel, StructModel};

/// Maximum width before an import list is wrapped
const MAX_WIDTH: usize = 100;

/// Render the module for one resource type
pub fn emit_resource(model: &ResourceModel, config: &CodegenConfig) -> String {
    let emitter = Emitter { model, config };
    let mut items = vec![
        emitter.header(),
        emitter.imports(),
        emitter.alias(),
        emitter.properties_struct(),
        emitter.schema_impl(),
    ];
    items.extend(model.structs.iter().map(|s| emitter.property_type_struct(s)));
    items.extend(model.enums.iter().map(|e| emitter.enum_item(e)));

    let mut code = items.join("\n\n");
    code.push('\n');
    code
}

/// Render `mod.rs` declaring every module and the catalog
pub fn emit_mod(models: &[ResourceModel], config: &CodegenConfig) -> String {
    let mut models: Vec<&ResourceModel> = models.iter().collect();
    models.sort_by(|a, b| a.module_name.cmp(&b.module_name));

    let indent = config.indent(1);
    let header = [
        "//! Auto-generated CloudFormation resource definitions",
        "//!",
        "//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen",
    ]
    .join("\n");
    let imports = format!(
        "use {}::catalog::{{Catalog, ResourceTypeEntry}};",
        config.core_crate
    );
    // Schema builder chains are not wrapped to rustfmt's width
    let modules = models
        .iter()
        .map(|m| format!("#[rustfmt::skip]\npub mod {};", m.module_name))
        .collect::<Vec<_>>()
        .join("\n");
    let aliases = models
        .iter()
        .map(|m| format!("pub use {}::{};", m.module_name, m.alias_name))
        .collect::<Vec<_>>()
        .join("\n");

    let catalog_body = if models.is_empty() {
        format!("{}Catalog::new(vec![])", indent)
    } else {
        let entries = models
            .iter()
            .map(|m| {
                format!(
                    "{}ResourceTypeEntry::of::<{}::{}>(),",
                    config.indent(2),
                    m.module_name,
                    m.struct_name
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!("{indent}Catalog::new(vec![\n{entries}\n{indent}])")
    };
    let catalog = format!(
        "/// Returns a catalog of every generated resource type\npub fn catalog() -> Catalog {{\n{}\n}}",
        catalog_body
    );

    let mut code = [header, imports, modules, aliases, catalog].join("\n\n");
    code.push('\n');
    code
}

/// `use path::{A, B};`, wrapped the way rustfmt wraps long import lists
fn use_list(path: &str, names: &[&str], config: &CodegenConfig) -> String {
    let single = format!("use {}::{{{}}};", path, names.join(", "));
    if single.len() <= MAX_WIDTH {
        return single;
    }

    let indent = config.indent(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for name in names {
        let candidate = if current.is_empty() {
            format!("{}{},", indent, name)
        } else {
            format!("{} {},", current, name)
        };
        if candidate.len() > MAX_WIDTH && !current.is_empty() {
            lines.push(current);
            current = format!("{}{},", indent, name);
        } else {
            current = candidate;
        }
    }
    lines.push(current);
    format!("use {}::{{\n{}\n}};", path, lines.join("\n"))
}

fn update_text(update: UpdateBehavior) -> &'static str {
    match update {
        UpdateBehavior::Replacement => "Replacement",
        UpdateBehavior::NoInterruption => "No interruption",
    }
}

struct Emitter<'a> {
    model: &'a ResourceModel,
    config: &'a CodegenConfig,
}

impl Emitter<'_> {
    fn header(&self) -> String {
        format!(
            "//! {} resource definition\n//!\n//! Auto-generated from CloudFormation schema: {}\n//!\n//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen",
            self.model.module_name, self.model.type_name
        )
    }

    fn imports(&self) -> String {
        let core = &self.config.core_crate;
        let mut lines = Vec::new();
        if !self.model.enums.is_empty() {
            lines.push(format!("use {}::cfn_enum;", core));
        }
        lines.push(format!("use {}::resource::{{CfnResource, Resource}};", core));

        let mut schema_names = vec!["AttributeSchema", "AttributeType"];
        if self.model.uses_constraints() {
            schema_names.push("Constraints");
        }
        if !self.model.structs.is_empty() {
            schema_names.push("PropertyTypeSchema");
        }
        schema_names.push("ResourceSchema");
        if self.model.uses_replacement() {
            schema_names.push("UpdateBehavior");
        }
        lines.push(use_list(&format!("{}::schema", core), &schema_names, self.config));

        if self.model.uses_value() {
            lines.push(format!("use {}::value::Value;", core));
        }
        lines.push("use serde::{Deserialize, Serialize};".to_string());
        lines.join("\n")
    }

    fn alias(&self) -> String {
        format!(
            "/// `{}` resource declaration.\npub type {} = Resource<{}>;",
            self.model.type_name, self.model.alias_name, self.model.struct_name
        )
    }

    fn rust_type(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::String => "Value<String>".to_string(),
            FieldType::Integer => "Value<i64>".to_string(),
            FieldType::Number => "Value<f64>".to_string(),
            FieldType::Boolean => "Value<bool>".to_string(),
            FieldType::Json => "serde_json::Value".to_string(),
            FieldType::Enum(name) => format!("Value<{}>", name),
            FieldType::Struct(key) => self.struct_name(key),
            FieldType::List(inner) => format!("Vec<{}>", self.rust_type(inner)),
        }
    }

    fn doc_type(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::String => "String".to_string(),
            FieldType::Integer => "Integer".to_string(),
            FieldType::Number => "Number".to_string(),
            FieldType::Boolean => "Boolean".to_string(),
            FieldType::Json => "Json".to_string(),
            FieldType::Enum(name) => format!("[`{}`]", name),
            FieldType::Struct(key) => format!("[`{}`]", self.struct_name(key)),
            FieldType::List(inner) => format!("List of {}", self.doc_type(inner)),
        }
    }

    fn struct_name(&self, key: &str) -> String {
        self.model
            .find_struct(key)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| key.to_string())
    }

    fn field(&self, field: &FieldModel) -> String {
        let indent = self.config.indent(1);
        let mut docs = Vec::new();
        if let Some(description) = &field.description {
            docs.push(description.clone());
            docs.push(String::new());
        }
        docs.push(format!(
            "- _Required_: {}",
            if field.required { "Yes" } else { "No" }
        ));
        docs.push(format!("- _Type_: {}", self.doc_type(&field.field_type)));
        if let Some(allowed) = field
            .field_type
            .enum_name()
            .and_then(|name| self.model.find_enum(name))
        {
            let values = allowed
                .variants
                .iter()
                .map(|v| format!("`{}`", v.value))
                .collect::<Vec<_>>()
                .join(" | ");
            docs.push(format!("- _Allowed values_: {}", values));
        }
        docs.extend(constraint_docs(&field.constraints));
        if let Some(update) = field.update {
            docs.push(format!("- _Update requires_: {}", update_text(update)));
        }

        let mut lines: Vec<String> = docs
            .into_iter()
            .map(|d| {
                if d.is_empty() {
                    format!("{}///", indent)
                } else {
                    format!("{}/// {}", indent, d)
                }
            })
            .collect();

        let rust_type = self.rust_type(&field.field_type);
        if field.required {
            lines.push(format!("{}#[serde(rename = {:?})]", indent, field.name));
            lines.push(format!("{}pub {}: {},", indent, field.ident, rust_type));
        } else {
            lines.push(format!(
                "{}#[serde(rename = {:?}, skip_serializing_if = \"Option::is_none\")]",
                indent, field.name
            ));
            lines.push(format!("{}pub {}: Option<{}>,", indent, field.ident, rust_type));
        }
        lines.join("\n")
    }

    fn struct_item(&self, docs: &[String], name: &str, fields: &[FieldModel]) -> String {
        let mut lines: Vec<String> = docs
            .iter()
            .map(|d| {
                if d.is_empty() {
                    "///".to_string()
                } else {
                    format!("/// {}", d)
                }
            })
            .collect();

        let has_required = fields.iter().any(|f| f.required);
        lines.push(format!(
            "#[derive(Debug, Clone, {}PartialEq, Serialize, Deserialize)]",
            if has_required { "" } else { "Default, " }
        ));
        lines.push("#[serde(deny_unknown_fields)]".to_string());

        if fields.is_empty() {
            lines.push(format!("pub struct {} {{}}", name));
        } else {
            let body = fields
                .iter()
                .map(|f| self.field(f))
                .collect::<Vec<_>>()
                .join("\n\n");
            lines.push(format!("pub struct {} {{\n{}\n}}", name, body));
        }
        lines.join("\n")
    }

    fn properties_struct(&self) -> String {
        let mut docs = vec![format!("Properties of the `{}` resource.", self.model.type_name)];
        if let Some(description) = &self.model.description {
            docs.push(String::new());
            docs.push(description.clone());
        }
        self.struct_item(&docs, &self.model.struct_name, &self.model.fields)
    }

    fn property_type_struct(&self, model: &StructModel) -> String {
        let doc = match &model.description {
            Some(description) => description.clone(),
            None => format!(
                "`{}` property type of `{}`.",
                model.key, self.model.type_name
            ),
        };
        self.struct_item(&[doc], &model.name, &model.fields)
    }

    fn type_expr(&self, field_type: &FieldType) -> String {
        match field_type {
            FieldType::String => "AttributeType::String".to_string(),
            FieldType::Integer => "AttributeType::Integer".to_string(),
            FieldType::Number => "AttributeType::Number".to_string(),
            FieldType::Boolean => "AttributeType::Boolean".to_string(),
            FieldType::Json => "AttributeType::Json".to_string(),
            FieldType::Enum(name) => {
                format!("AttributeType::enumeration({:?}, {}::VALUES)", name, name)
            }
            FieldType::Struct(key) => format!("AttributeType::structure({:?})", key),
            FieldType::List(inner) => format!("AttributeType::list({})", self.type_expr(inner)),
        }
    }

    /// `.attribute(...)` call at the given indentation level
    fn attribute(&self, field: &FieldModel, level: usize) -> String {
        let expr = format!(
            "AttributeSchema::new({:?}, {})",
            field.name,
            self.type_expr(&field.field_type)
        );

        let mut modifiers = Vec::new();
        if field.required {
            modifiers.push(".required()".to_string());
        }
        if field.update == Some(UpdateBehavior::Replacement) {
            modifiers.push(".with_update(UpdateBehavior::Replacement)".to_string());
        }
        if !field.constraints.is_empty() {
            modifiers.push(format!(
                ".with_constraints({})",
                constraints_expr(&field.constraints)
            ));
        }

        let outer = self.config.indent(level);
        if modifiers.is_empty() {
            return format!("{}.attribute({})", outer, expr);
        }
        let modifier_indent = self.config.indent(level + 2);
        let modifiers = modifiers
            .iter()
            .map(|m| format!("{}{}", modifier_indent, m))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{outer}.attribute(\n{}{expr}\n{modifiers},\n{outer})",
            self.config.indent(level + 1)
        )
    }

    fn schema_impl(&self) -> String {
        let model = self.model;
        let config = self.config;
        let chain = config.indent(3);

        let mut lines = vec![format!(
            "{}ResourceSchema::new(Self::TYPE_NAME)",
            config.indent(2)
        )];
        if let Some(description) = &model.description {
            lines.push(format!("{}.with_description({:?})", chain, description));
        }
        if !model.primary_identifier.is_empty() {
            let ids = model
                .primary_identifier
                .iter()
                .map(|id| format!("{:?}", id))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("{}.with_primary_identifier(&[{}])", chain, ids));
        }
        if model.taggable {
            lines.push(format!("{}.taggable()", chain));
        }
        for name in &model.read_only {
            lines.push(format!("{}.read_only({:?})", chain, name));
        }
        for field in &model.fields {
            lines.push(self.attribute(field, 3));
        }
        for definition in &model.structs {
            let new = format!("PropertyTypeSchema::new({:?})", definition.key);
            if definition.fields.is_empty() {
                lines.push(format!("{}.definition({})", chain, new));
                continue;
            }
            let attributes = definition
                .fields
                .iter()
                .map(|f| self.attribute(f, 5))
                .collect::<Vec<_>>()
                .join("\n");
            lines.push(format!(
                "{chain}.definition(\n{}{new}\n{attributes},\n{chain})",
                config.indent(4)
            ));
        }

        format!(
            "impl CfnResource for {name} {{\n{i1}const TYPE_NAME: &'static str = {type_name:?};\n\n{i1}fn schema() -> ResourceSchema {{\n{body}\n{i1}}}\n}}",
            name = model.struct_name,
            i1 = config.indent(1),
            type_name = model.type_name,
            body = lines.join("\n"),
        )
    }

    fn enum_item(&self, model: &EnumModel) -> String {
        let i1 = self.config.indent(1);
        let i2 = self.config.indent(2);
        let variants = model
            .variants
            .iter()
            .map(|v| format!("{}{} => {:?},", i2, v.ident, v.value))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "cfn_enum! {{\n{i1}/// Allowed values for `{}`.\n{i1}{} {{\n{variants}\n{i1}}}\n}}",
            model.location, model.name
        )
    }
}

fn constraint_docs(constraints: &Constraints) -> Vec<String> {
    let mut docs = Vec::new();
    if let Some(n) = constraints.min_length {
        docs.push(format!("- _Minimum length_: {}", n));
    }
    if let Some(n) = constraints.max_length {
        docs.push(format!("- _Maximum length_: {}", n));
    }
    if let Some(pattern) = &constraints.pattern {
        docs.push(format!("- _Pattern_: `{}`", pattern));
    }
    if let Some(n) = constraints.minimum {
        docs.push(format!("- _Minimum_: {}", n));
    }
    if let Some(n) = constraints.maximum {
        docs.push(format!("- _Maximum_: {}", n));
    }
    docs
}

fn constraints_expr(constraints: &Constraints) -> String {
    let mut expr = "Constraints::new()".to_string();
    if let Some(n) = constraints.min_length {
        expr.push_str(&format!(".min_length({})", n));
    }
    if let Some(n) = constraints.max_length {
        expr.push_str(&format!(".max_length({})", n));
    }
    if let Some(pattern) = &constraints.pattern {
        expr.push_str(&format!(".pattern({:?})", pattern));
    }
    if let Some(n) = constraints.minimum {
        expr.push_str(&format!(".minimum({:?})", n));
    }
    if let Some(n) = constraints.maximum {
        expr.push_str(&format!(".maximum({:?})", n));
    }
    expr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CfnSchema;

    const ALIAS_SCHEMA: &str = r##"{
        "typeName": "AWS::KMS::Alias",
        "description": "The AWS::KMS::Alias resource specifies a display name for a KMS key.",
        "properties": {
            "AliasName": {
                "description": "Specifies the alias name.",
                "type": "string",
                "minLength": 1,
                "maxLength": 256,
                "pattern": "^(alias/)[a-zA-Z0-9:/_-]+$"
            },
            "TargetKeyId": {
                "description": "Associates the alias with the specified KMS key.",
                "type": "string",
                "minLength": 1,
                "maxLength": 256
            }
        },
        "required": ["AliasName", "TargetKeyId"],
        "createOnlyProperties": ["/properties/AliasName"],
        "primaryIdentifier": ["/properties/AliasName"],
        "tagging": {"taggable": false}
    }"##;

    const ALIAS_MODULE: &str = r#"//! kms_alias resource definition
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
/// The AWS::KMS::Alias resource specifies a display name for a KMS key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasProperties {
    /// Specifies the alias name.
    ///
    /// - _Required_: Yes
    /// - _Type_: String
    /// - _Minimum length_: 1
    /// - _Maximum length_: 256
    /// - _Pattern_: `^(alias/)[a-zA-Z0-9:/_-]+$`
    /// - _Update requires_: Replacement
    #[serde(rename = "AliasName")]
    pub alias_name: Value<String>,

    /// Associates the alias with the specified KMS key.
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
            .with_description("The AWS::KMS::Alias resource specifies a display name for a KMS key.")
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
"#;

    fn model(json: &str) -> ResourceModel {
        ResourceModel::from_schema(&CfnSchema::from_json(json).unwrap()).unwrap()
    }

    #[test]
    fn golden_alias_module() {
        let code = emit_resource(&model(ALIAS_SCHEMA), &CodegenConfig::default());
        assert_eq!(code, ALIAS_MODULE);
    }

    #[test]
    fn emits_structs_enums_and_definitions() {
        let code = emit_resource(
            &model(
                r##"{
                    "typeName": "AWS::Test::Widget",
                    "properties": {
                        "Mode": {"type": "string", "enum": ["ml.t3.medium", "system"]},
                        "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
                    },
                    "definitions": {
                        "Tag": {
                            "type": "object",
                            "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}},
                            "required": ["Key", "Value"]
                        }
                    }
                }"##,
            ),
            &CodegenConfig::default(),
        );

        assert!(code.contains("use cfn_core::cfn_enum;\n"));
        assert!(code.contains("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n#[serde(deny_unknown_fields)]\npub struct WidgetProperties {"));
        assert!(code.contains("    /// - _Type_: List of [`Tag`]\n"));
        assert!(code.contains("    /// - _Allowed values_: `ml.t3.medium` | `system`\n"));
        assert!(code.contains("    pub tags: Option<Vec<Tag>>,\n"));
        assert!(code.contains(
            "            .attribute(AttributeSchema::new(\"Mode\", AttributeType::enumeration(\"Mode\", Mode::VALUES)))\n"
        ));
        assert!(code.contains(
            "            .definition(\n                PropertyTypeSchema::new(\"Tag\")\n                    .attribute(\n                        AttributeSchema::new(\"Key\", AttributeType::String)\n                            .required(),\n                    )\n"
        ));
        assert!(code.contains("/// `Tag` property type of `AWS::Test::Widget`.\n#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]"));
        assert!(code.ends_with(
            "cfn_enum! {\n    /// Allowed values for `Mode`.\n    Mode {\n        MlT3Medium => \"ml.t3.medium\",\n        System => \"system\",\n    }\n}\n"
        ));
    }

    #[test]
    fn nested_replacement_and_fractional_bounds() {
        let code = emit_resource(
            &model(
                r##"{
                    "typeName": "AWS::Test::Gadget",
                    "properties": {"Settings": {"$ref": "#/definitions/Settings"}},
                    "definitions": {
                        "Settings": {
                            "type": "object",
                            "properties": {"Size": {"type": "integer", "minimum": 1, "maximum": 2.5}}
                        }
                    },
                    "createOnlyProperties": ["/properties/Settings/Size"]
                }"##,
            ),
            &CodegenConfig::default(),
        );

        assert!(code.contains("UpdateBehavior,\n};\n"));
        assert!(code.contains(
            "    /// - _Minimum_: 1\n    /// - _Maximum_: 2.5\n    /// - _Update requires_: Replacement\n    #[serde(rename = \"Size\""
        ));
        let pad = " ".repeat(28);
        assert!(code.contains(&format!(
            "{pad}.with_update(UpdateBehavior::Replacement)\n{pad}.with_constraints(Constraints::new().minimum(1.0).maximum(2.5)),\n"
        )));
    }

    #[test]
    fn emit_is_deterministic() {
        let config = CodegenConfig::default();
        let first = emit_resource(&model(ALIAS_SCHEMA), &config);
        let second = emit_resource(&model(ALIAS_SCHEMA), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn mod_lists_modules_and_catalog() {
        let code = emit_mod(&[model(ALIAS_SCHEMA)], &CodegenConfig::default());
        assert_eq!(
            code,
            "//! Auto-generated CloudFormation resource definitions
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-codegen

use cfn_core::catalog::{Catalog, ResourceTypeEntry};

#[rustfmt::skip]
pub mod kms_alias;

pub use kms_alias::KmsAlias;

/// Returns a catalog of every generated resource type
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        ResourceTypeEntry::of::<kms_alias::AliasProperties>(),
    ])
}
"
        );
    }

    #[test]
    fn long_import_lists_wrap() {
        let config = CodegenConfig::default();
        let names = [
            "AttributeSchema",
            "AttributeType",
            "Constraints",
            "PropertyTypeSchema",
            "ResourceSchema",
            "UpdateBehavior",
        ];
        assert_eq!(
            use_list("cfn_core::schema", &names, &config),
            "use cfn_core::schema::{\n    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,\n};"
        );
        let more = [&names[..], &["Value", "CfnResource"]].concat();
        assert_eq!(
            use_list("cfn_core::schema", &more, &config),
            "use cfn_core::schema::{\n    AttributeSchema, AttributeType, Constraints, PropertyTypeSchema, ResourceSchema, UpdateBehavior,\n    Value, CfnResource,\n};"
        );
        assert_eq!(
            use_list("cfn_core::schema", &names[..2], &config),
            "use cfn_core::schema::{AttributeSchema, AttributeType};"
        );
    }
}
