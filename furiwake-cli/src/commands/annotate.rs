//! Annotate command implementation

use crate::config::CliConfig;
use crate::input::{resolve_inputs, Entry, EntryReader, InputFormat, InputSource};
use crate::output::{
    AnnotatedEntry, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use furiwake_core::FuriganaCache;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input format (default from config, else auto)
    #[arg(long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Annotate entries on a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel annotation
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateSettings {
    /// Output format
    pub format: OutputFormat,
    /// Input format, possibly `Auto`
    pub input_format: InputFormat,
    /// Comment prefix for input lines
    pub comment_prefix: String,
    /// Indent JSON output
    pub pretty_json: bool,
    /// Use the worker pool
    pub parallel: bool,
    /// Worker threads, 0 = auto
    pub threads: usize,
    /// Memo capacity
    pub cache_capacity: usize,
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting furigana annotation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config);
        log::debug!("Settings: {:?}", settings);

        let sources = resolve_inputs(&self.input)?;
        let entries = load_entries(&sources, &settings, self.quiet)?;
        log::info!("Loaded {} entries from {} sources", entries.len(), sources.len());

        let cache = FuriganaCache::with_capacity(settings.cache_capacity);
        let annotated = annotate_entries(&entries, &cache, settings.parallel, settings.threads)?;
        log::info!(
            "Annotated {} entries (cache: {} hits, {} misses)",
            annotated.len(),
            cache.hits(),
            cache.misses()
        );

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        let mut formatter = create_formatter(settings.format, settings.pretty_json, writer);

        for entry in &annotated {
            formatter.format_entry(entry)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Merge the config file with command-line flags; flags win
    pub fn settings(&self, config: &CliConfig) -> AnnotateSettings {
        AnnotateSettings {
            format: self.format.unwrap_or(config.output.default_format),
            input_format: self.input_format.unwrap_or(config.input.default_format),
            comment_prefix: config.input.comment_prefix.clone(),
            pretty_json: config.output.pretty_json,
            parallel: self.parallel || self.threads.is_some() || config.performance.parallel,
            threads: self.threads.unwrap_or(config.performance.worker_threads),
            cache_capacity: config.performance.cache_capacity,
        }
    }
}

/// Read and parse every source, skipping malformed lines
pub fn load_entries(
    sources: &[InputSource],
    settings: &AnnotateSettings,
    quiet: bool,
) -> Result<Vec<Entry>> {
    let mut progress = ProgressReporter::new(quiet);
    progress.init_sources(sources.len() as u64);

    let mut entries = Vec::new();
    for source in sources {
        let name = source.display_name();
        let format = settings.input_format.resolve(source.path());
        let reader = EntryReader::new(format, settings.comment_prefix.as_str());
        let content = source.read_text()?;

        let before = entries.len();
        for line in reader.parse(&content) {
            match line.entry {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("{}:{}: skipping line: {}", name, line.line, e),
            }
        }

        log::debug!("{}: {} entries ({})", name, entries.len() - before, format.as_str());
        progress.source_completed(&name, entries.len() - before);
    }
    progress.finish();

    Ok(entries)
}

/// Annotate entries in input order, optionally on a rayon pool
pub fn annotate_entries(
    entries: &[Entry],
    cache: &FuriganaCache,
    parallel: bool,
    threads: usize,
) -> Result<Vec<AnnotatedEntry>> {
    let annotate = |entry: &Entry| AnnotatedEntry {
        word: entry.word.clone(),
        reading: entry.reading.clone(),
        segments: cache
            .get_or_compute(&entry.word, &entry.reading, entry.furi.as_ref())
            .to_vec(),
    };

    if !parallel {
        return Ok(entries.iter().map(annotate).collect());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build worker pool")?;
    log::debug!("Annotating on {} worker threads", pool.current_num_threads());

    Ok(pool.install(|| entries.par_iter().map(annotate).collect()))
}

/// Create the formatter for an output format
pub fn create_formatter<'a, W: Write + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furiwake_core::Segment;

    fn args() -> AnnotateArgs {
        AnnotateArgs {
            input: vec!["words.tsv".to_string()],
            output: None,
            format: None,
            input_format: None,
            parallel: false,
            threads: None,
            config: None,
            quiet: true,
            verbose: 0,
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("お世辞", "おせじ", Some("1:せ;2:じ".into())),
            Entry::new("大人しい", "おとなしい", None),
            Entry::new("お世辞", "おせじ", Some("1:せ;2:じ".into())),
            Entry::new("test", "test", None),
        ]
    }

    #[test]
    fn test_settings_defaults() {
        let settings = args().settings(&CliConfig::default());
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.input_format, InputFormat::Auto);
        assert_eq!(settings.comment_prefix, "#");
        assert!(!settings.parallel);
        assert_eq!(settings.threads, 0);
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.output.default_format = OutputFormat::Markdown;
        config.performance.worker_threads = 8;

        let mut args = args();
        args.format = Some(OutputFormat::Json);
        args.threads = Some(2);

        let settings = args.settings(&config);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.threads, 2);
        assert!(settings.parallel);
    }

    #[test]
    fn test_annotate_sequential_uses_cache() {
        let cache = FuriganaCache::new();
        let annotated = annotate_entries(&entries(), &cache, false, 0).unwrap();

        assert_eq!(annotated.len(), 4);
        assert_eq!(
            annotated[0].segments,
            vec![Segment::plain("お"), Segment::new("せ", "世"), Segment::new("じ", "辞")]
        );
        assert_eq!(annotated[3].segments, vec![Segment::plain("test")]);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = annotate_entries(&entries(), &FuriganaCache::new(), false, 0).unwrap();
        let parallel = annotate_entries(&entries(), &FuriganaCache::new(), true, 2).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_create_formatter_writes() {
        let mut buffer = Vec::new();
        {
            let mut formatter = create_formatter(OutputFormat::Text, false, &mut buffer);
            let annotated =
                annotate_entries(&entries()[1..2], &FuriganaCache::new(), false, 0).unwrap();
            formatter.format_entry(&annotated[0]).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "｜大人《おとな》しい\n");
    }
}
