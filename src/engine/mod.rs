// Tue Jan 13 2026 - Alex

pub mod control;
pub mod core;
pub mod result;
pub mod session;
pub mod sink;

pub use self::core::{ScanEngine, SweepHit, SweepReport};
pub use control::{CancellationToken, NoopControl, ScanControl};
pub use result::{MatchEvent, ScanOutcome, ScanStats, ScanStatus};
pub use session::{ScanSession, ScanState};
pub use sink::{FnSink, MatchSink};
