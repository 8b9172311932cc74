//! Generator configuration

/// Code generation options
#[derive(Debug, Clone)]
pub struct CodegenConfig {
    /// Path of the crate providing the shared primitives (default: "cfn_core")
    pub core_crate: String,

    /// Number of spaces for indentation (default: 4)
    pub indent_size: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            core_crate: "cfn_core".to_string(),
            indent_size: 4,
        }
    }
}

impl CodegenConfig {
    /// Indentation for the given nesting level
    pub fn indent(&self, level: usize) -> String {
        " ".repeat(self.indent_size * level)
    }
}
