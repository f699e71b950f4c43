//! Presentation-level configuration
//!
//! Resolved output settings: the config file's choices with command-line
//! overrides applied.

use crate::cli::commands::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Combine config-file settings with an optional `--output` flag
    pub fn resolve(
        file_format: Option<qna_domain::OutputFormat>,
        color: bool,
        cli_format: Option<OutputFormat>,
    ) -> Self {
        let format = cli_format
            .or(file_format.map(OutputFormat::from))
            .unwrap_or(OutputFormat::Text);
        Self {
            format,
            // Escape codes would corrupt JSON
            color: color && format == OutputFormat::Text,
        }
    }
}
