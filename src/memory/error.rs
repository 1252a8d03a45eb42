// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Address 0x{0:x} is not mapped")]
    Unreadable(u64),
    #[error("Short read at 0x{address:x}: requested {requested} bytes, {available} available")]
    ShortRead {
        address: u64,
        requested: usize,
        available: usize,
    },
    #[error("Binary parse error: {0}")]
    BinaryParseError(String),
    #[error("Invalid memory range 0x{start:x}..0x{end:x}")]
    InvalidRange { start: u64, end: u64 },
}

impl MemoryError {
    pub fn is_short_read(&self) -> bool {
        matches!(self, MemoryError::ShortRead { .. })
    }
}
