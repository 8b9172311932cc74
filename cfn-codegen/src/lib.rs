//! CFN Codegen
//!
//! Generates typed resource declarations from CloudFormation registry
//! schemas. A schema is parsed into a [`ResourceModel`], which is then
//! emitted as a Rust module; [`render`] produces a whole module directory.

pub mod config;
pub mod emit;
pub mod error;
pub mod model;
pub mod schema;

use std::collections::BTreeMap;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use model::ResourceModel;
pub use schema::CfnSchema;

/// Parse a registry schema and build its model
pub fn load_model(schema_json: &str) -> Result<ResourceModel, CodegenError> {
    let schema = CfnSchema::from_json(schema_json)?;
    ResourceModel::from_schema(&schema)
}

/// Render every module plus `mod.rs`, keyed by file name
pub fn render(
    models: &[ResourceModel],
    config: &CodegenConfig,
) -> Result<BTreeMap<String, String>, CodegenError> {
    let mut files = BTreeMap::new();
    for model in models {
        let file_name = format!("{}.rs", model.module_name);
        if files.contains_key(&file_name) || model.module_name == "mod" {
            return Err(CodegenError::NameCollision {
                type_name: model.type_name.clone(),
                name: file_name,
            });
        }
        files.insert(file_name, emit::emit_resource(model, config));
    }
    files.insert("mod.rs".to_string(), emit::emit_mod(models, config));
    Ok(files)
}
