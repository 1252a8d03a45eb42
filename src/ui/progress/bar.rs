// Thu Jan 15 2026 - Alex

use crate::engine::{CancellationToken, ScanControl, ScanOutcome};
use crate::memory::{Address, MemoryRange};
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

const SCAN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

fn scan_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(SCAN_TEMPLATE)
        .map(|style| style.progress_chars("█▓▒░ "))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
}

/// Drives a progress bar from scan progress reports and answers cancellation
/// polls from a shared token.
pub struct ScanProgress {
    bar: IndicatifBar,
    token: CancellationToken,
}

impl ScanProgress {
    /// One bar position per visited address of `range`.
    pub fn new(range: MemoryRange, token: CancellationToken) -> Self {
        let bar = IndicatifBar::new(range.size());
        bar.set_style(scan_style());
        bar.set_message(format!("scanning {}..{}", range.start(), range.end()));
        Self { bar, token }
    }

    pub fn hidden(token: CancellationToken) -> Self {
        Self {
            bar: IndicatifBar::hidden(),
            token,
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn finish(&self, outcome: &ScanOutcome) {
        if outcome.is_completed() {
            self.bar.finish_with_message(format!("{} matches", outcome.matches));
        } else {
            self.bar
                .abandon_with_message(format!("cancelled at {} ({} matches)", outcome.cursor, outcome.matches));
        }
    }
}

impl ScanControl for ScanProgress {
    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    fn report_progress(&self, _cursor: Address, advanced: u64) {
        self.bar.inc(advanced);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_accumulates() {
        let progress = ScanProgress::hidden(CancellationToken::new());
        progress.report_progress(Address::new(0x1000), 0x1000);
        progress.report_progress(Address::new(0x1800), 0x800);
        assert_eq!(progress.position(), 0x1800);
    }

    #[test]
    fn test_cancellation_follows_token() {
        let token = CancellationToken::new();
        let progress = ScanProgress::hidden(token.clone());
        assert!(!progress.is_cancelled());
        token.cancel();
        assert!(progress.is_cancelled());
    }

    #[test]
    fn test_style_template_parses() {
        assert!(ProgressStyle::default_bar().template(SCAN_TEMPLATE).is_ok());
    }
}
