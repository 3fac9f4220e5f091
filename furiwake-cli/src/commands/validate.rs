//! Validate command implementation

use crate::config::CliConfig;
use crate::input::{resolve_inputs, Entry, EntryLine, EntryReader, InputFormat};
use anyhow::Result;
use clap::Args;
use furiwake_core::{anchor, classifier, run};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input files or patterns to check (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Input format (default from config, else auto)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The entry or furigana data cannot be used as written
    Error,
    /// Accepted, but part of the data has no effect
    Warning,
}

/// A problem found in one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number
    pub line: usize,
    /// Error or warning
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, false);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let input_format = self.input_format.unwrap_or(config.input.default_format);

        let mut errors = 0;
        let mut warnings = 0;
        let mut checked = 0;

        for source in resolve_inputs(&self.input)? {
            let name = source.display_name();
            let format = input_format.resolve(source.path());
            let reader = EntryReader::new(format, config.input.comment_prefix.as_str());
            let content = source.read_text()?;

            println!("Validating {} ({})", name, format.as_str());
            let lines = reader.parse(&content);
            checked += lines.len();

            for finding in validate_lines(lines) {
                let label = match finding.severity {
                    Severity::Error => {
                        errors += 1;
                        "error"
                    }
                    Severity::Warning => {
                        warnings += 1;
                        "warning"
                    }
                };
                println!("  {}:{}: {}: {}", name, finding.line, label, finding.message);
            }
        }

        if errors == 0 {
            println!("✓ {checked} entries checked, {warnings} warnings");
            Ok(())
        } else {
            println!("✗ {checked} entries checked, {errors} errors, {warnings} warnings");
            Err(anyhow::anyhow!("Validation failed: {} errors", errors))
        }
    }
}

/// Check every parsed line of a source
pub fn validate_lines(lines: Vec<EntryLine>) -> Vec<Finding> {
    lines
        .into_iter()
        .flat_map(|line| match line.entry {
            Ok(entry) => validate_entry(&entry)
                .into_iter()
                .map(|(severity, message)| Finding {
                    line: line.line,
                    severity,
                    message,
                })
                .collect(),
            Err(e) => vec![Finding {
                line: line.line,
                severity: Severity::Error,
                message: e.to_string(),
            }],
        })
        .collect()
}

/// Check the furigana data of one entry
pub fn validate_entry(entry: &Entry) -> Vec<(Severity, String)> {
    let mut findings = Vec::new();
    let word_len = entry.word.chars().count();

    let mut anchors = Vec::new();
    for parsed in anchor::parse_entries(entry.furi.as_ref(), word_len) {
        match parsed {
            Ok(anchor) => anchors.push(anchor),
            Err(e) => findings.push((Severity::Error, format!("{}: {}", entry.word, e))),
        }
    }

    if !classifier::contains_kanji(&entry.word) {
        if !anchors.is_empty() {
            findings.push((
                Severity::Warning,
                format!("{}: furigana data on a word without kanji is ignored", entry.word),
            ));
        }
        return findings;
    }

    let runs = run::segment(&entry.word);
    for anchor in &anchors {
        let on_kanji = runs
            .iter()
            .any(|r| r.is_kanji() && r.contains(anchor.position));
        if !on_kanji {
            findings.push((
                Severity::Warning,
                format!(
                    "{}: index {} does not point at a kanji and is ignored",
                    entry.word, anchor.position
                ),
            ));
        }
    }

    findings
}
