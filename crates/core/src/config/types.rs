use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    /// Root of the documentation tree to validate.
    pub docs_root: String,
    /// Folders to skip (relative to docs_root, or absolute).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

/// Report format for validation output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
    Table,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Table => "table",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            _ => Err(format!("unknown report format: {} (expected text, json, csv or table)", s)),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ValidationConfig {
    /// Treat warnings as failures.
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub output: ReportFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    /// Config file the values came from, if any.
    pub source: Option<PathBuf>,
    pub docs_root: PathBuf,
    pub excluded_folders: Vec<PathBuf>,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Built-in defaults for a documentation root, used when no config file exists.
    pub fn defaults(docs_root: PathBuf) -> Self {
        Self {
            active_profile: "default".to_string(),
            source: None,
            docs_root,
            excluded_folders: Vec::new(),
            validation: ValidationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
