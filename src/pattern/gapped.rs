// Wed Jan 14 2026 - Alex

use crate::memory::{Address, MemoryError, MemoryReader};
use crate::pattern::exact::search_naive;
use crate::signature::{ElementWidth, Signature};

pub const DEFAULT_WINDOW_MULTIPLIER: usize = 64;

/// Matches sparse signatures: the first element exactly at an anchor address, the
/// rest in order somewhere inside one bounded window that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GappedMatcher {
    window_multiplier: usize,
}

impl GappedMatcher {
    pub fn new(window_multiplier: usize) -> Self {
        Self { window_multiplier }
    }

    pub fn window_multiplier(&self) -> usize {
        self.window_multiplier
    }

    /// Bytes read after the anchor element for a signature of `count` elements.
    pub fn window_size(&self, count: usize, width: ElementWidth) -> usize {
        self.window_multiplier.saturating_mul(count).saturating_add(width.bytes())
    }

    /// Locates every chunk in order, each one starting after the end of the previous
    /// match. Returns window-relative offsets, or `None` as soon as one is missing.
    pub fn find_in_window<'a, I>(window: &[u8], chunks: I) -> Option<Vec<usize>>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut offsets = Vec::new();
        let mut from = 0usize;
        for chunk in chunks {
            let rel = search_naive(window.get(from..)?, chunk)?;
            offsets.push(from + rel);
            from += rel + chunk.len();
        }
        Some(offsets)
    }

    /// Tries `signature` anchored at `anchor`. On success returns one address per
    /// element, the anchor first.
    ///
    /// An unreadable anchor is returned as an error so the caller can account for it.
    /// Running out of mapped bytes anywhere else is simply no match.
    pub fn search_gapped(
        &self,
        reader: &dyn MemoryReader,
        anchor: Address,
        signature: &Signature,
    ) -> Result<Option<Vec<Address>>, MemoryError> {
        let width = signature.width();
        let first = match width.read(reader, anchor, signature.byte_order()) {
            Ok(value) => value,
            Err(e) if e.is_short_read() => return Ok(None),
            Err(e) => return Err(e),
        };
        if first != signature.elements()[0] {
            return Ok(None);
        }
        if signature.len() == 1 {
            return Ok(Some(vec![anchor]));
        }

        let Some(window_start) = anchor.checked_add(width.bytes() as u64) else {
            return Ok(None);
        };
        let size = self.window_size(signature.len(), width);
        let window = match reader.read_bytes(window_start, size) {
            Ok(bytes) => bytes,
            Err(MemoryError::ShortRead { .. }) | Err(MemoryError::Unreadable(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let found = Self::find_in_window(&window, signature.chunks().skip(1));
        Ok(found.map(|offsets| {
            std::iter::once(anchor)
                .chain(offsets.into_iter().map(|ofs| window_start + ofs as u64))
                .collect()
        }))
    }
}

impl Default for GappedMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MULTIPLIER)
    }
}
