use component_compiler::logging::LogLevel;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings read from a `compc.json` file. Command line flags take precedence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerConfig {
    pub log_level: Option<LogLevel>,
    /// Print each lowered document tree after the pipeline ran.
    pub emit_tree: Option<bool>,
    pub warnings_as_errors: Option<bool>,
}

impl CompilerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: CompilerConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or(LogLevel::Warn)
    }

    pub fn emit_tree(&self) -> bool {
        self.emit_tree.unwrap_or(false)
    }

    pub fn warnings_as_errors(&self) -> bool {
        self.warnings_as_errors.unwrap_or(false)
    }
}
