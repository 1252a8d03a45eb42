// Wed Jan 14 2026 - Alex

use crate::memory::{Address, ByteOrder, MemoryError, MemoryReader};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of one signature element. Owns every width-dependent conversion so the
/// dense and sparse paths never switch on a raw size themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum ElementWidth {
    W1,
    W2,
    W4,
    W8,
}

impl ElementWidth {
    pub fn from_bytes(size: usize) -> Option<Self> {
        match size {
            1 => Some(ElementWidth::W1),
            2 => Some(ElementWidth::W2),
            4 => Some(ElementWidth::W4),
            8 => Some(ElementWidth::W8),
            _ => None,
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            ElementWidth::W1 => 1,
            ElementWidth::W2 => 2,
            ElementWidth::W4 => 4,
            ElementWidth::W8 => 8,
        }
    }

    pub fn max_value(&self) -> u64 {
        match self {
            ElementWidth::W1 => u8::MAX as u64,
            ElementWidth::W2 => u16::MAX as u64,
            ElementWidth::W4 => u32::MAX as u64,
            ElementWidth::W8 => u64::MAX,
        }
    }

    pub fn fits(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Name of the data item an annotation sink types a region of this width as.
    pub fn item_name(&self) -> &'static str {
        match self {
            ElementWidth::W1 => "byte",
            ElementWidth::W2 => "word",
            ElementWidth::W4 => "dword",
            ElementWidth::W8 => "qword",
        }
    }

    pub fn encode(&self, value: u64, order: ByteOrder, out: &mut Vec<u8>) {
        match (self, order) {
            (ElementWidth::W1, _) => out.push(value as u8),
            (ElementWidth::W2, ByteOrder::Little) => out.extend_from_slice(&(value as u16).to_le_bytes()),
            (ElementWidth::W2, ByteOrder::Big) => out.extend_from_slice(&(value as u16).to_be_bytes()),
            (ElementWidth::W4, ByteOrder::Little) => out.extend_from_slice(&(value as u32).to_le_bytes()),
            (ElementWidth::W4, ByteOrder::Big) => out.extend_from_slice(&(value as u32).to_be_bytes()),
            (ElementWidth::W8, ByteOrder::Little) => out.extend_from_slice(&value.to_le_bytes()),
            (ElementWidth::W8, ByteOrder::Big) => out.extend_from_slice(&value.to_be_bytes()),
        }
    }

    /// Reads one element at `addr` through the host's sized reads and returns it as
    /// if it had been stored in `order`.
    pub fn read(
        &self,
        reader: &dyn MemoryReader,
        addr: Address,
        order: ByteOrder,
    ) -> Result<u64, MemoryError> {
        let swap = order != reader.byte_order();
        let value = match self {
            ElementWidth::W1 => reader.read_u8(addr)? as u64,
            ElementWidth::W2 => {
                let v = reader.read_u16(addr)?;
                (if swap { v.swap_bytes() } else { v }) as u64
            }
            ElementWidth::W4 => {
                let v = reader.read_u32(addr)?;
                (if swap { v.swap_bytes() } else { v }) as u64
            }
            ElementWidth::W8 => {
                let v = reader.read_u64(addr)?;
                if swap { v.swap_bytes() } else { v }
            }
        };
        Ok(value)
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = String;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::from_bytes(size).ok_or_else(|| format!("unsupported element width {}", size))
    }
}

impl From<ElementWidth> for usize {
    fn from(width: ElementWidth) -> Self {
        width.bytes()
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::BufferMemory;

    #[test]
    fn test_encode_respects_order() {
        let mut le = Vec::new();
        ElementWidth::W4.encode(0x9E3779B9, ByteOrder::Little, &mut le);
        assert_eq!(le, [0xB9, 0x79, 0x37, 0x9E]);
        let mut be = Vec::new();
        ElementWidth::W4.encode(0x9E3779B9, ByteOrder::Big, &mut be);
        assert_eq!(be, [0x9E, 0x37, 0x79, 0xB9]);
    }

    #[test]
    fn test_read_swaps_to_requested_order() {
        let mem = BufferMemory::new(vec![0x01, 0x02, 0x03, 0x04, 0, 0, 0, 0], Address::new(0));
        let w = ElementWidth::W4;
        assert_eq!(w.read(&mem, Address::new(0), ByteOrder::Little).unwrap(), 0x04030201);
        assert_eq!(w.read(&mem, Address::new(0), ByteOrder::Big).unwrap(), 0x01020304);
        assert_eq!(ElementWidth::W8.read(&mem, Address::new(0), ByteOrder::Little).unwrap(), 0x04030201);
    }

    #[test]
    fn test_widths() {
        assert_eq!(ElementWidth::from_bytes(3), None);
        assert!(ElementWidth::W2.fits(0xFFFF));
        assert!(!ElementWidth::W2.fits(0x1_0000));
        assert_eq!(usize::from(ElementWidth::W8), 8);
    }
}
