// Wed Jan 14 2026 - Alex

use crate::memory::{Address, ByteOrder, MemoryError, MemoryRange, MemoryReader, MemoryRegion};

/// An image held entirely in memory, starting at `base`.
///
/// Used for raw dumps and as the host stand-in in tests. Ranges registered with
/// [`BufferMemory::with_hole`] behave as unmapped.
#[derive(Debug, Clone)]
pub struct BufferMemory {
    data: Vec<u8>,
    base: Address,
    order: ByteOrder,
    holes: Vec<MemoryRange>,
}

impl BufferMemory {
    pub fn new(data: Vec<u8>, base: Address) -> Self {
        Self {
            data,
            base,
            order: ByteOrder::Little,
            holes: Vec::new(),
        }
    }

    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_hole(mut self, hole: MemoryRange) -> Self {
        self.holes.push(hole);
        self
    }

    fn end(&self) -> Address {
        self.base.saturating_add(self.data.len() as u64)
    }

    fn in_hole(&self, addr: Address) -> bool {
        self.holes.iter().any(|h| h.contains(addr))
    }

    /// Number of readable bytes from `addr` until the end of the buffer or the next hole.
    fn readable_from(&self, addr: Address) -> usize {
        let limit = self
            .holes
            .iter()
            .filter(|h| h.start() > addr)
            .map(|h| h.start())
            .fold(self.end(), Address::min);
        limit.distance_from(addr) as usize
    }
}

impl MemoryReader for BufferMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        if !addr.is_within_range(self.base, self.end()) || self.in_hole(addr) {
            return Err(MemoryError::Unreadable(addr.as_u64()));
        }
        let available = self.readable_from(addr);
        if available < len {
            return Err(MemoryError::ShortRead {
                address: addr.as_u64(),
                requested: len,
                available,
            });
        }
        let offset = addr.distance_from(self.base) as usize;
        Ok(self.data[offset..offset + len].to_vec())
    }

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        if !addr.is_within_range(self.base, self.end()) || self.in_hole(addr) {
            return Err(MemoryError::Unreadable(addr.as_u64()));
        }
        Ok(self.data[addr.distance_from(self.base) as usize])
    }

    fn byte_order(&self) -> ByteOrder {
        self.order
    }

    fn bounds(&self) -> MemoryRange {
        MemoryRange::from_start_size(self.base, self.data.len() as u64)
    }

    /// The buffer split around its holes.
    fn regions(&self) -> Vec<MemoryRegion> {
        let bounds = self.bounds();
        let mut holes: Vec<MemoryRange> = self.holes.iter().filter_map(|h| h.intersect(&bounds)).collect();
        holes.sort_by_key(|h| h.start());

        let mut regions = Vec::new();
        let mut start = self.base;
        for hole in holes {
            if hole.start() > start {
                let size = hole.start().distance_from(start);
                regions.push(MemoryRegion::new(MemoryRange::from_start_size(start, size), "buffer".to_string()));
            }
            start = start.max(hole.end());
        }
        if self.end() > start {
            let size = self.end().distance_from(start);
            regions.push(MemoryRegion::new(MemoryRange::from_start_size(start, size), "buffer".to_string()));
        }
        regions
    }
}
