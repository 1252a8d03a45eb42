// Tue Jan 13 2026 - Alex

use crate::memory::{Address, MemoryError};
use serde::Serialize;
use std::fmt;

/// Half-open address interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MemoryRange {
    start: Address,
    end: Address,
}

impl MemoryRange {
    pub fn new(start: Address, end: Address) -> Result<Self, MemoryError> {
        if end < start {
            return Err(MemoryError::InvalidRange {
                start: start.as_u64(),
                end: end.as_u64(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn from_start_size(start: Address, size: u64) -> Self {
        Self {
            start,
            end: start.saturating_add(size),
        }
    }

    pub fn empty_at(start: Address) -> Self {
        Self { start, end: start }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn size(&self) -> u64 {
        self.end.as_u64() - self.start.as_u64()
    }

    pub fn contains(&self, addr: Address) -> bool {
        addr.is_within_range(self.start, self.end)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Splits the range into at most `parts` contiguous, non-empty, ordered pieces.
    pub fn split(&self, parts: usize) -> Vec<Self> {
        let size = self.size();
        if size == 0 || parts <= 1 {
            return vec![*self];
        }
        let parts = (parts as u64).min(size);
        let step = size.div_ceil(parts);
        let mut pieces = Vec::with_capacity(parts as usize);
        let mut cursor = self.start;
        while cursor < self.end {
            let next = cursor.saturating_add(step).min(self.end);
            pieces.push(Self { start: cursor, end: next });
            cursor = next;
        }
        pieces
    }
}

impl fmt::Display for MemoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(MemoryRange::new(Address::new(0x20), Address::new(0x10)).is_err());
        assert!(MemoryRange::new(Address::new(0x10), Address::new(0x10)).unwrap().is_empty());
    }

    #[test]
    fn test_split_covers_range() {
        let range = MemoryRange::new(Address::new(0x1000), Address::new(0x1065)).unwrap();
        let pieces = range.split(4);
        assert_eq!(pieces.len(), 4);
        assert_eq!(pieces[0].start(), range.start());
        assert_eq!(pieces.last().unwrap().end(), range.end());
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        assert_eq!(pieces.iter().map(|p| p.size()).sum::<u64>(), range.size());
    }

    #[test]
    fn test_split_more_parts_than_bytes() {
        let range = MemoryRange::from_start_size(Address::new(0), 3);
        assert_eq!(range.split(16).len(), 3);
    }

    #[test]
    fn test_intersect() {
        let a = MemoryRange::from_start_size(Address::new(0x100), 0x100);
        let b = MemoryRange::from_start_size(Address::new(0x180), 0x100);
        let i = a.intersect(&b).unwrap();
        assert_eq!(i.start(), Address::new(0x180));
        assert_eq!(i.end(), Address::new(0x200));
        assert!(a.intersect(&MemoryRange::from_start_size(Address::new(0x200), 1)).is_none());
    }
}
