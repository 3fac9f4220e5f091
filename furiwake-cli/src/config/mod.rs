//! Configuration module

use crate::error::CliError;
use crate::input::InputFormat;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use furiwake_core::cache::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Default input format
    pub default_format: InputFormat,

    /// Lines starting with this prefix are skipped (empty disables)
    pub comment_prefix: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_format: InputFormat::Auto,
            comment_prefix: "#".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Annotate entries on a worker pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Number of memoized results (0 disables the cache)
    pub cache_capacity: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            worker_threads: 0,
            cache_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Commented template with every default spelled out
    pub fn template() -> String {
        let defaults = CliConfig::default();
        format!(
            r#"# furiwake configuration

[input]
# Input format: "auto" (by extension), "tsv" or "jsonl"
default_format = "{input_format}"
# Lines starting with this prefix are skipped; "" disables comments
comment_prefix = "{comment_prefix}"

[output]
# Output format: "text", "json" or "markdown"
default_format = "{output_format}"
# Indent JSON output
pretty_json = {pretty_json}

[performance]
# Annotate entries on a worker pool
parallel = {parallel}
# Number of worker threads (0 = one per CPU)
worker_threads = {worker_threads}
# Number of memoized results (0 disables the cache)
cache_capacity = {cache_capacity}
"#,
            input_format = defaults.input.default_format.as_str(),
            comment_prefix = defaults.input.comment_prefix,
            output_format = defaults.output.default_format.as_str(),
            pretty_json = defaults.output.pretty_json,
            parallel = defaults.performance.parallel,
            worker_threads = defaults.performance.worker_threads,
            cache_capacity = defaults.performance.cache_capacity,
        )
    }
}
