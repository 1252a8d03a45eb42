// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryRange};
use std::fmt;

/// A mapped piece of the image: the virtual range and where its bytes live in the file.
#[derive(Debug, Clone)]
pub struct MemoryRegion {
    range: MemoryRange,
    name: String,
    file_offset: u64,
}

impl MemoryRegion {
    pub fn new(range: MemoryRange, name: String) -> Self {
        Self {
            range,
            name,
            file_offset: 0,
        }
    }

    pub fn with_file_offset(mut self, offset: u64) -> Self {
        self.file_offset = offset;
        self
    }

    pub fn range(&self) -> &MemoryRange {
        &self.range
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_offset(&self) -> u64 {
        self.file_offset
    }

    pub fn start(&self) -> Address {
        self.range.start()
    }

    pub fn end(&self) -> Address {
        self.range.end()
    }

    pub fn size(&self) -> u64 {
        self.range.size()
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.range.contains(addr)
    }

    /// File offset backing `addr`, if the region maps it.
    pub fn translate(&self, addr: Address) -> Option<u64> {
        if self.contains(addr) {
            Some(self.file_offset + addr.distance_from(self.start()))
        } else {
            None
        }
    }
}

impl fmt::Display for MemoryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @0x{:x}", self.range, self.name, self.file_offset)
    }
}
