//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod audit;
mod logging;
mod storage;

pub use audit::FileAuditConfig;
pub use logging::{FileLoggingConfig, LOG_LEVELS};
pub use storage::FileStorageConfig;

use qna_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
use serde::{Deserialize, Serialize};

/// `[output]`: how command results are printed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; `--output` overrides it
    pub format: Option<OutputFormat>,
    /// Color console output. Ignored for JSON.
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where board data is kept
    pub storage: FileStorageConfig,
    /// Audit trail settings
    pub audit: FileAuditConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Diagnostic logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(path) = self.storage.snapshot_path()
            && path.as_os_str().is_empty()
        {
            issues.push(empty_path("storage.path"));
        }

        if self.audit.enabled && self.audit.path.as_os_str().is_empty() {
            issues.push(empty_path("audit.path"));
        }

        if let Some(dir) = &self.logging.dir
            && dir.as_os_str().is_empty()
        {
            issues.push(empty_path("logging.dir"));
        }

        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.to_lowercase().as_str())
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    valid_values: LOG_LEVELS.iter().map(|l| l.to_string()).collect(),
                },
                message: format!(
                    "logging.level: unknown value '{}', falling back to 'warn'",
                    level
                ),
            });
        }

        issues
    }
}

fn empty_path(field: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::EmptyPath {
            field: field.to_string(),
        },
        message: format!("{} is set to an empty path", field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[storage]
path = "data/board.json"

[audit]
enabled = true
path = "logs/audit.jsonl"

[output]
format = "text"
color = false

[logging]
dir = "logs"
level = "debug"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.path, PathBuf::from("data/board.json"));
        assert!(config.audit.enabled);
        assert_eq!(config.audit.path, PathBuf::from("logs/audit.jsonl"));
        assert_eq!(config.output.format, Some(OutputFormat::Text));
        assert!(!config.output.color);
        assert_eq!(config.logging.dir, Some(PathBuf::from("logs")));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(!config.audit.enabled);
    }

    #[test]
    fn test_output_section_alone_keeps_color_default() {
        let config: FileConfig = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
        assert_eq!(config.storage, FileStorageConfig::default());
    }

    #[test]
    fn test_unknown_output_format_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[output]\nformat = \"yaml\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_empty_storage_path() {
        let toml_str = r#"
[storage]
path = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyPath {
                field: "storage.path".to_string()
            }
        );
    }

    #[test]
    fn test_validate_unknown_log_level_is_warning() {
        let toml_str = r#"
[logging]
level = "chatty"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
