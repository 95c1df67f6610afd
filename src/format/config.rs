//! Rendering configuration for pvc source and token dumps

/// Formatting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Put every block statement on its own line instead of `{a; b}`
    pub multiline_blocks: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            multiline_blocks: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable one-statement-per-line blocks
    pub fn with_multiline_blocks(mut self, multiline: bool) -> Self {
        self.multiline_blocks = multiline;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.multiline_blocks);
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new().with_indent_width(4).with_multiline_blocks(true);
        assert_eq!(config.indent_width, 4);
        assert!(config.multiline_blocks);
    }
}
