//! Code generation errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Invalid type name format: {0}")]
    InvalidTypeName(String),

    #[error("Unsupported $ref '{reference}' in {location}")]
    UnsupportedRef { reference: String, location: String },

    #[error("Name collision in {type_name}: '{name}' is generated twice")]
    NameCollision { type_name: String, name: String },

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Failed to parse CloudFormation schema: {0}")]
    Json(#[from] serde_json::Error),
}
