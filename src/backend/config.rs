//! Code generation options

/// Default name of the emitted function.
pub const DEFAULT_FUNCTION_NAME: &str = "main";

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Number of spaces instructions are indented by inside a function body
    pub indent_width: usize,
    /// Symbol name for the top-level function (`@<name>`)
    pub function_name: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

impl CodegenConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instruction indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the emitted function name
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }
}
