// Wed Jan 14 2026 - Alex

//! Exact byte-pattern search.
//!
//! Patterns of two bytes or more go through a hashed skip-loop: a table indexed by a
//! hash of the last two bytes of the current window says how far the window may move
//! without passing an occurrence. The bucket holding the pattern's own suffix hash is
//! set to a sentinel larger than any haystack offset, which is how the skip-loop
//! recognises a candidate alignment. Candidates are verified front to back; on a
//! mismatch the backtrack (failure) table picks the next alignment without re-reading
//! bytes already known to match.

use crate::pattern::SearchError;

pub const HASH_RANGE: usize = 512;
pub const SUFFIX_SIZE: usize = 2;
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1 << 24;

#[inline]
fn hash_at(data: &[u8], i: usize) -> usize {
    (data[i - 1] as usize + data[i] as usize) & (HASH_RANGE - 1)
}

/// Brute-force search, used for one-byte patterns and short fixed-width chunks.
pub fn search_naive(haystack: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > haystack.len() {
        return None;
    }
    haystack.windows(pattern.len()).position(|w| w == pattern)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceOptions {
    /// Length of each slice; 0 searches the pattern as a single slice.
    pub slice_len: usize,
    /// Bytes allowed after the first slice for all remaining slices.
    /// Defaults to sixteen times the pattern length.
    pub max_span: Option<usize>,
}

impl SliceOptions {
    pub fn new(slice_len: usize) -> Self {
        Self {
            slice_len,
            max_span: None,
        }
    }

    pub fn with_max_span(mut self, span: usize) -> Self {
        self.max_span = Some(span);
        self
    }
}

/// Scratch tables for [`SearchScratch::search`].
///
/// The backtrack table only ever grows; one scratch belongs to one scan session
/// and is reused for every search that session makes.
pub struct SearchScratch {
    backtrack: Vec<isize>,
    skip: Box<[isize; HASH_RANGE]>,
    limit: usize,
}

impl SearchScratch {
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_BACKTRACK_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            backtrack: Vec::new(),
            skip: Box::new([0; HASH_RANGE]),
            limit,
        }
    }

    pub fn capacity(&self) -> usize {
        self.backtrack.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn reserve(&mut self, needed: usize) -> Result<(), SearchError> {
        let exhausted = SearchError::ResourceExhausted {
            requested: needed,
            limit: self.limit,
        };
        if needed > self.limit {
            return Err(exhausted);
        }
        if needed > self.backtrack.len() {
            self.backtrack
                .try_reserve_exact(needed - self.backtrack.len())
                .map_err(|_| exhausted)?;
            self.backtrack.resize(needed, 0);
        }
        Ok(())
    }

    /// Offset of the first occurrence of `pattern` in `haystack`.
    ///
    /// `Ok(None)` covers the empty pattern and a pattern longer than the haystack.
    pub fn search(&mut self, haystack: &[u8], pattern: &[u8]) -> Result<Option<usize>, SearchError> {
        let n = haystack.len();
        let m = pattern.len();
        if m == 0 || m > n {
            return Ok(None);
        }
        if m < SUFFIX_SIZE {
            return Ok(search_naive(haystack, pattern));
        }

        self.reserve(m)?;
        let Self { backtrack, skip, .. } = self;
        let next = &mut backtrack[..m];
        compute_backtrack(pattern, next);

        skip.fill((m - SUFFIX_SIZE + 1) as isize);
        for j in (SUFFIX_SIZE - 1)..(m - 1) {
            skip[hash_at(pattern, j)] = (m - 1 - j) as isize;
        }
        let large = n as isize + 1;
        let suffix = hash_at(pattern, m - 1);
        let mismatch_shift = skip[suffix];
        skip[suffix] = large;

        Ok(hashed_scan(haystack, pattern, next, skip, mismatch_shift, large))
    }

    /// Finds `pattern` cut into consecutive slices that may be separated by gaps.
    ///
    /// The first slice found is the anchor; every later slice must follow the previous
    /// one, in order, inside `max_span` bytes after the anchor slice. When a later slice
    /// is missing the search restarts one byte past the anchor. Returns the anchor offset.
    pub fn search_sliced(
        &mut self,
        haystack: &[u8],
        pattern: &[u8],
        options: SliceOptions,
    ) -> Result<Option<usize>, SearchError> {
        let m = pattern.len();
        if m == 0 || m > haystack.len() {
            return Ok(None);
        }
        let slice = if options.slice_len == 0 { m } else { options.slice_len.min(m) };
        let max_span = options.max_span.unwrap_or(m * 16);

        let mut restart = 0usize;
        'anchor: loop {
            let anchor = match self.search(&haystack[restart..], &pattern[..slice])? {
                Some(rel) => restart + rel,
                None => return Ok(None),
            };
            let mut cursor = anchor + slice;
            let limit = cursor.saturating_add(max_span).min(haystack.len());
            let mut p = slice;
            while p < m {
                let len = slice.min(m - p);
                let window = &haystack[cursor.min(limit)..limit];
                match self.search(window, &pattern[p..p + len])? {
                    Some(ofs) => {
                        cursor += ofs + len;
                        p += len;
                    }
                    None => {
                        restart = anchor + 1;
                        continue 'anchor;
                    }
                }
            }
            return Ok(Some(anchor));
        }
    }
}

impl Default for SearchScratch {
    fn default() -> Self {
        Self::new()
    }
}

fn compute_backtrack(pattern: &[u8], next: &mut [isize]) {
    let m = pattern.len();
    let mut j = 0usize;
    let mut t: isize = -1;
    next[0] = -1;
    while j < m - 1 {
        while t >= 0 && pattern[j] != pattern[t as usize] {
            t = next[t as usize];
        }
        j += 1;
        t += 1;
        next[j] = if pattern[j] == pattern[t as usize] {
            next[t as usize]
        } else {
            t
        };
    }
}

fn hashed_scan(
    text: &[u8],
    pattern: &[u8],
    next: &[isize],
    skip: &[isize; HASH_RANGE],
    mismatch_shift: isize,
    large: isize,
) -> Option<usize> {
    let n = text.len() as isize;
    let m = pattern.len() as isize;
    // `k` counts back from the end of the haystack: position `n + k`.
    let at = |k: isize| text[(n + k) as usize];
    let adjustment = large + m - 1;

    let mut k = -n;
    loop {
        k += m - 1;
        if k >= 0 {
            return None;
        }

        loop {
            k += skip[hash_at(text, (n + k) as usize)];
            if k >= 0 {
                break;
            }
        }
        if k < m {
            // Ran off the end on ordinary skips, the sentinel was never hit.
            return None;
        }
        k -= adjustment;

        if at(k) != pattern[0] {
            k += mismatch_shift;
            continue;
        }

        let mut i: isize = 1;
        loop {
            k += 1;
            if at(k) != pattern[i as usize] {
                break;
            }
            i += 1;
            if i == m {
                return Some((n + k - m + 1) as usize);
            }
        }

        if mismatch_shift > i {
            k += mismatch_shift - i;
            continue;
        }

        loop {
            i = next[i as usize];
            if i <= 0 {
                if i < 0 {
                    k += 1;
                }
                break;
            }
            while at(k) == pattern[i as usize] {
                k += 1;
                i += 1;
                if i == m {
                    return Some((n + k - m) as usize);
                }
                if k == 0 {
                    return None;
                }
            }
        }
    }
}
