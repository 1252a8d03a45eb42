// Tue Jan 13 2026 - Alex

pub mod address;
pub mod binary;
pub mod buffer;
pub mod endian;
pub mod error;
pub mod range;
pub mod region;
pub mod traits;

pub use address::{parse_address, Address};
pub use binary::{BinaryFormat, BinaryMemory};
pub use buffer::BufferMemory;
pub use endian::ByteOrder;
pub use error::MemoryError;
pub use range::MemoryRange;
pub use region::MemoryRegion;
pub use traits::MemoryReader;
