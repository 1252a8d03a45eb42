// Thu Jan 15 2026 - Alex

use crate::memory::{Address, ByteOrder, MemoryError, MemoryRange, MemoryRegion};

/// Read-only view of a loaded image.
///
/// `read_bytes` either returns exactly `len` bytes or fails: a read that starts on
/// mapped memory but runs out before `len` bytes is a [`MemoryError::ShortRead`],
/// a read that starts on unmapped memory is [`MemoryError::Unreadable`].
/// Multi-byte reads decode in the image's own byte order.
pub trait MemoryReader: Send + Sync {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError>;
    fn byte_order(&self) -> ByteOrder;
    fn bounds(&self) -> MemoryRange;

    fn regions(&self) -> Vec<MemoryRegion> {
        vec![MemoryRegion::new(self.bounds(), "image".to_string())]
    }

    fn is_big_endian(&self) -> bool {
        self.byte_order().is_big()
    }

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        let [b] = read_array::<_, 1>(self, addr)?;
        Ok(b)
    }

    fn read_u16(&self, addr: Address) -> Result<u16, MemoryError> {
        Ok(self.byte_order().u16_from(read_array(self, addr)?))
    }

    fn read_u32(&self, addr: Address) -> Result<u32, MemoryError> {
        Ok(self.byte_order().u32_from(read_array(self, addr)?))
    }

    fn read_u64(&self, addr: Address) -> Result<u64, MemoryError> {
        Ok(self.byte_order().u64_from(read_array(self, addr)?))
    }
}

fn read_array<R: MemoryReader + ?Sized, const N: usize>(
    reader: &R,
    addr: Address,
) -> Result<[u8; N], MemoryError> {
    let bytes = reader.read_bytes(addr, N)?;
    if bytes.len() < N {
        return Err(MemoryError::ShortRead {
            address: addr.as_u64(),
            requested: N,
            available: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(&bytes[..N]);
    Ok(out)
}
