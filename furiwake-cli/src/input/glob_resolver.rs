//! Input source resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Pattern that stands for standard input
pub const STDIN_PATTERN: &str = "-";

/// Where a batch of entries is read from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Name used in diagnostics
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    /// File path, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            InputSource::Stdin => None,
            InputSource::File(path) => Some(path),
        }
    }

    /// Read the whole source as UTF-8 text
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read standard input")?;
                Ok(buffer)
            }
            InputSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve file patterns (and `-` for stdin) to input sources
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_PATTERN {
            sources.push(InputSource::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;
        let mut matched = false;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched = true;
                sources.push(InputSource::File(path));
            }
        }

        if !matched {
            if !is_glob(pattern) {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            log::warn!("Pattern matched no files: {pattern}");
        }
    }

    if sources.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort, keeping stdin first
    sources.sort();
    sources.dedup();

    Ok(sources)
}
