// Tue Jan 13 2026 - Alex

use crate::memory::{Address, ByteOrder, MemoryError, MemoryRange, MemoryReader, MemoryRegion};
use goblin::elf::program_header::PT_LOAD;
use goblin::mach::Mach;
use goblin::Object;
use memmap2::Mmap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryFormat {
    Elf,
    Pe,
    MachO,
    Raw,
}

/// A file on disk presented at its load addresses.
///
/// Only file-backed bytes are mapped: zero-fill tails (`.bss`, uninitialised
/// section padding) are unreadable.
pub struct BinaryMemory {
    data: Arc<Mmap>,
    path: PathBuf,
    format: BinaryFormat,
    order: ByteOrder,
    regions: Vec<MemoryRegion>,
}

impl BinaryMemory {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(path.as_ref())?;
        let mmap = unsafe { Mmap::map(&file) }?;

        let (format, order, mut regions) = Self::parse_layout(&mmap)?;
        regions.retain(|r| r.size() > 0);
        regions.sort_by_key(|r| r.start());

        log::debug!(
            "Loaded {} as {:?} ({}), {} mapped regions",
            path_buf.display(),
            format,
            order,
            regions.len()
        );

        Ok(Self {
            data: Arc::new(mmap),
            path: path_buf,
            format,
            order,
            regions,
        })
    }

    fn parse_layout(data: &[u8]) -> Result<(BinaryFormat, ByteOrder, Vec<MemoryRegion>), MemoryError> {
        let object = match Object::parse(data) {
            Ok(object) => object,
            Err(e) => {
                log::debug!("Not a recognised object file ({}), mapping raw", e);
                return Ok((BinaryFormat::Raw, ByteOrder::Little, Self::raw_regions(data)));
            }
        };

        match object {
            Object::Elf(elf) => {
                let order = if elf.little_endian { ByteOrder::Little } else { ByteOrder::Big };
                let regions = elf
                    .program_headers
                    .iter()
                    .filter(|ph| ph.p_type == PT_LOAD)
                    .enumerate()
                    .map(|(i, ph)| {
                        let size = ph.p_filesz.min(data.len() as u64 - ph.p_offset.min(data.len() as u64));
                        MemoryRegion::new(
                            MemoryRange::from_start_size(Address::new(ph.p_vaddr), size),
                            format!("LOAD{}", i),
                        )
                        .with_file_offset(ph.p_offset)
                    })
                    .collect();
                Ok((BinaryFormat::Elf, order, regions))
            }
            Object::PE(pe) => {
                let image_base = pe.image_base as u64;
                let regions = pe
                    .sections
                    .iter()
                    .map(|section| {
                        let name = section.name().unwrap_or("").to_string();
                        let offset = section.pointer_to_raw_data as u64;
                        let size = (section.size_of_raw_data as u64)
                            .min(data.len() as u64 - offset.min(data.len() as u64));
                        MemoryRegion::new(
                            MemoryRange::from_start_size(
                                Address::new(image_base + section.virtual_address as u64),
                                size,
                            ),
                            name,
                        )
                        .with_file_offset(offset)
                    })
                    .collect();
                Ok((BinaryFormat::Pe, ByteOrder::Little, regions))
            }
            Object::Mach(Mach::Binary(macho)) => {
                let order = if macho.little_endian { ByteOrder::Little } else { ByteOrder::Big };
                let regions = macho
                    .segments
                    .iter()
                    .map(|segment| {
                        let segname = std::str::from_utf8(&segment.segname)
                            .unwrap_or("")
                            .trim_end_matches('\0')
                            .to_string();
                        let size = segment
                            .filesize
                            .min(data.len() as u64 - segment.fileoff.min(data.len() as u64));
                        MemoryRegion::new(
                            MemoryRange::from_start_size(Address::new(segment.vmaddr), size),
                            segname,
                        )
                        .with_file_offset(segment.fileoff)
                    })
                    .collect();
                Ok((BinaryFormat::MachO, order, regions))
            }
            _ => Ok((BinaryFormat::Raw, ByteOrder::Little, Self::raw_regions(data))),
        }
    }

    fn raw_regions(data: &[u8]) -> Vec<MemoryRegion> {
        vec![MemoryRegion::new(
            MemoryRange::from_start_size(Address::zero(), data.len() as u64),
            "raw".to_string(),
        )]
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> BinaryFormat {
        self.format
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    fn region_for(&self, addr: Address) -> Option<&MemoryRegion> {
        let idx = self.regions.partition_point(|r| r.start() <= addr);
        // Regions can overlap in malformed files; prefer the closest start below `addr`.
        self.regions[..idx].iter().rev().find(|r| r.contains(addr))
    }
}

impl MemoryReader for BinaryMemory {
    fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
        let region = self
            .region_for(addr)
            .ok_or(MemoryError::Unreadable(addr.as_u64()))?;
        let offset = region
            .translate(addr)
            .ok_or(MemoryError::Unreadable(addr.as_u64()))? as usize;
        let available = region.end().distance_from(addr) as usize;
        if available < len {
            return Err(MemoryError::ShortRead {
                address: addr.as_u64(),
                requested: len,
                available,
            });
        }
        self.data
            .get(offset..offset + len)
            .map(|bytes| bytes.to_vec())
            .ok_or(MemoryError::Unreadable(addr.as_u64()))
    }

    fn read_u8(&self, addr: Address) -> Result<u8, MemoryError> {
        let offset = self
            .region_for(addr)
            .and_then(|r| r.translate(addr))
            .ok_or(MemoryError::Unreadable(addr.as_u64()))?;
        self.data
            .get(offset as usize)
            .copied()
            .ok_or(MemoryError::Unreadable(addr.as_u64()))
    }

    fn byte_order(&self) -> ByteOrder {
        self.order
    }

    fn bounds(&self) -> MemoryRange {
        match (self.regions.first(), self.regions.iter().map(|r| r.end()).max()) {
            (Some(first), Some(end)) => MemoryRange::new(first.start(), end)
                .unwrap_or_else(|_| MemoryRange::empty_at(first.start())),
            _ => MemoryRange::empty_at(Address::zero()),
        }
    }

    fn regions(&self) -> Vec<MemoryRegion> {
        self.regions.clone()
    }
}
