// Wed Jan 14 2026 - Alex

use crate::memory::Address;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Polled by the scan loop every `cancel_check_interval` visited addresses.
pub trait ScanControl: Sync {
    fn is_cancelled(&self) -> bool;

    /// `advanced` is the number of addresses visited since the previous report
    /// from the same scan.
    fn report_progress(&self, _cursor: Address, _advanced: u64) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopControl;

impl ScanControl for NoopControl {
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Shared cancellation flag with an optional deadline. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.flag.load(Ordering::Relaxed) {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.flag.store(true, Ordering::SeqCst);
                true
            }
            _ => false,
        }
    }
}

impl ScanControl for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}
