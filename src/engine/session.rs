// Wed Jan 14 2026 - Alex

use crate::pattern::SearchScratch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Scanning,
    Completed,
    Cancelled,
}

/// Per-scan mutable state. One session drives one scan at a time; parallel scans
/// give every worker its own session so the search scratch is never shared.
pub struct ScanSession {
    state: ScanState,
    scratch: SearchScratch,
}

impl ScanSession {
    pub fn new(max_backtrack_entries: usize) -> Self {
        Self {
            state: ScanState::Idle,
            scratch: SearchScratch::with_limit(max_backtrack_entries),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub(crate) fn begin(&mut self) {
        self.state = ScanState::Scanning;
    }

    pub(crate) fn finish(&mut self, cancelled: bool) {
        if self.state == ScanState::Scanning {
            self.state = if cancelled {
                ScanState::Cancelled
            } else {
                ScanState::Completed
            };
        }
    }

    pub fn scratch_mut(&mut self) -> &mut SearchScratch {
        &mut self.scratch
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(crate::pattern::exact::DEFAULT_BACKTRACK_LIMIT)
    }
}
