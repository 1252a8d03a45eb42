// Thu Jan 15 2026 - Alex

pub mod config;
pub mod engine;
pub mod memory;
pub mod output;
pub mod pattern;
pub mod signature;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use engine::{MatchEvent, MatchSink, ScanControl, ScanEngine, ScanOutcome, ScanSession};
pub use memory::{Address, BinaryMemory, BufferMemory, ByteOrder, MemoryRange, MemoryReader};
pub use output::AnnotationLog;
pub use signature::{Signature, SignatureDatabase, SignatureKind};
