//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for input sources
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for source processing
    ///
    /// Single-source runs finish too quickly to be worth a bar.
    pub fn init_sources(&mut self, total_sources: u64) {
        if self.quiet || total_sources < 2 {
            return;
        }

        let pb = ProgressBar::new(total_sources);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} sources {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a completed source
    pub fn source_completed(&self, name: &str, entries: usize) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{name}: {entries} entries"));
            pb.inc(1);
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_sources(10);
        assert!(!reporter.is_active());
        reporter.source_completed("words.tsv", 3);
        reporter.finish();
    }

    #[test]
    fn test_single_source_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_sources(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_multiple_sources() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_sources(2);
        assert!(reporter.is_active());
        reporter.source_completed("a.tsv", 1);
        reporter.source_completed("b.tsv", 2);
        reporter.finish();
    }
}
