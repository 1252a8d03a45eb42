// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::engine::control::ScanControl;
use crate::engine::result::{MatchEvent, ScanOutcome, ScanStats, ScanStatus};
use crate::engine::session::ScanSession;
use crate::engine::sink::MatchSink;
use crate::memory::{Address, MemoryError, MemoryRange, MemoryReader};
use crate::pattern::{GappedMatcher, SearchError, SliceOptions};
use crate::signature::{Signature, SignatureDatabase, SignatureKind};
use rayon::prelude::*;
use std::sync::Arc;

/// Occurrences of one signature found by [`ScanEngine::sweep`].
#[derive(Debug, Clone)]
pub struct SweepHit {
    pub signature: Arc<Signature>,
    pub addresses: Vec<Address>,
}

#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    pub hits: Vec<SweepHit>,
    /// Signatures skipped because the search scratch could not grow for them.
    pub exhausted: Vec<Arc<Signature>>,
}

pub struct ScanEngine {
    database: Arc<SignatureDatabase>,
    config: Config,
    gapped: GappedMatcher,
}

impl ScanEngine {
    pub fn new(database: Arc<SignatureDatabase>, config: Config) -> Self {
        let gapped = GappedMatcher::new(config.window_multiplier);
        Self {
            database,
            config,
            gapped,
        }
    }

    pub fn database(&self) -> &Arc<SignatureDatabase> {
        &self.database
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> ScanSession {
        ScanSession::new(self.config.max_backtrack_entries)
    }

    /// Visits every address of `range` in increasing order and reports matches to
    /// `sink` as they are found.
    ///
    /// `control` is polled before the first address and then every
    /// `cancel_check_interval` addresses. A cancelled scan stops before the address
    /// at which cancellation was seen; that address is the outcome's cursor.
    pub fn scan(
        &self,
        session: &mut ScanSession,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        control: &dyn ScanControl,
        sink: &mut dyn MatchSink,
    ) -> ScanOutcome {
        session.begin();
        log::debug!("Scanning {} against {} signatures", range, self.database.len());

        let interval = self.config.cancel_check_interval.max(1);
        let mut stats = ScanStats::default();
        let mut matches = 0usize;
        let mut reported = 0u64;
        let mut addr = range.start();

        while addr < range.end() {
            if stats.addresses_visited % interval == 0 {
                control.report_progress(addr, stats.addresses_visited - reported);
                reported = stats.addresses_visited;
                if control.is_cancelled() {
                    log::info!("Scan cancelled at {} after {} matches", addr, matches);
                    session.finish(true);
                    return ScanOutcome {
                        status: ScanStatus::Cancelled,
                        matches,
                        cursor: addr,
                        stats,
                    };
                }
            }

            stats.addresses_visited += 1;
            for event in self.events_at(reader, addr, &mut stats) {
                matches += 1;
                sink.on_match(event);
            }
            addr = addr + 1;
        }

        control.report_progress(range.end(), stats.addresses_visited - reported);
        session.finish(false);
        log::debug!("Scan of {} completed with {} matches", range, matches);

        ScanOutcome {
            status: ScanStatus::Completed,
            matches,
            cursor: range.end(),
            stats,
        }
    }

    pub fn scan_collect(
        &self,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        control: &dyn ScanControl,
    ) -> (Vec<MatchEvent>, ScanOutcome) {
        let mut session = self.session();
        let mut events = Vec::new();
        let outcome = self.scan(&mut session, reader, range, control, &mut events);
        (events, outcome)
    }

    /// Splits `range` into contiguous partitions scanned by `workers` threads, each
    /// with its own session. Events come back in address order.
    ///
    /// If any partition was cancelled, the cursor is the lowest address at which a
    /// partition stopped and only events below it are kept, so the result is always
    /// the prefix a sequential scan would have produced up to that cursor.
    pub fn scan_parallel(
        &self,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        control: &dyn ScanControl,
        workers: usize,
    ) -> (Vec<MatchEvent>, ScanOutcome) {
        let workers = workers.max(1);
        let parts = range.split(workers);
        log::debug!("Scanning {} in {} partitions", range, parts.len());

        let run = || {
            parts
                .par_iter()
                .map(|part| self.scan_collect(reader, *part, control))
                .collect::<Vec<_>>()
        };
        let results = match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(run),
            Err(e) => {
                log::warn!("Failed to build a {}-thread pool, using the global pool: {}", workers, e);
                run()
            }
        };

        let mut events = Vec::new();
        let mut stats = ScanStats::default();
        let mut stopped_at: Option<Address> = None;
        for (part_events, outcome) in results {
            stats.merge(&outcome.stats);
            if !outcome.is_completed() {
                stopped_at = Some(stopped_at.map_or(outcome.cursor, |c| c.min(outcome.cursor)));
            }
            events.extend(part_events);
        }
        if let Some(cursor) = stopped_at {
            events.retain(|e| e.address < cursor);
        }

        let outcome = ScanOutcome {
            status: if stopped_at.is_some() {
                ScanStatus::Cancelled
            } else {
                ScanStatus::Completed
            },
            matches: events.len(),
            cursor: stopped_at.unwrap_or(range.end()),
            stats,
        };
        (events, outcome)
    }

    /// Every event the scan loop would report at `address`.
    pub fn match_at(&self, reader: &dyn MemoryReader, address: Address) -> Vec<MatchEvent> {
        let mut stats = ScanStats::default();
        self.events_at(reader, address, &mut stats)
    }

    fn events_at(&self, reader: &dyn MemoryReader, addr: Address, stats: &mut ScanStats) -> Vec<MatchEvent> {
        let byte = match reader.read_u8(addr) {
            Ok(b) => b,
            Err(e) => {
                stats.unreadable_addresses += 1;
                log::trace!("Skipping {}: {}", addr, e);
                return Vec::new();
            }
        };
        if !self.database.has_candidates(byte) {
            return Vec::new();
        }

        let all = self.config.collect_all_matches;
        let mut events = Vec::new();

        for sig in self.database.candidates_for(byte, SignatureKind::Dense) {
            stats.dense_attempts += 1;
            if dense_matches(reader, addr, sig) {
                log::debug!("{}: found const array {} ({})", addr, sig.name(), sig.algorithm());
                stats.dense_matches += 1;
                events.push(MatchEvent::dense(addr, Arc::clone(sig)));
                if !all {
                    break;
                }
            }
        }

        for sig in self.database.candidates_for(byte, SignatureKind::Sparse) {
            stats.sparse_attempts += 1;
            match self.gapped.search_gapped(reader, addr, sig) {
                Ok(Some(sub_addresses)) => {
                    log::debug!("{}: found sparse constants {} ({})", addr, sig.name(), sig.algorithm());
                    stats.sparse_matches += 1;
                    events.push(MatchEvent::sparse(addr, Arc::clone(sig), sub_addresses));
                    if !all {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => log::trace!("Sparse match {} at {} failed: {}", sig.name(), addr, e),
            }
        }

        events
    }

    /// Every start address in `range` of `signature`, searched signature-major over
    /// the readable regions in overlapping chunks. Dense occurrences must lie wholly
    /// inside `range`; sparse ones need their anchor element inside it.
    pub fn find_all(
        &self,
        session: &mut ScanSession,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        signature: &Signature,
    ) -> Result<Vec<Address>, SearchError> {
        let mut hits = Vec::new();
        match signature.kind() {
            SignatureKind::Dense => {
                let pattern = signature.bytes();
                self.for_each_chunk(reader, range, pattern.len() - 1, |base, data| {
                    let mut offset = 0;
                    while let Some(rel) = session.scratch_mut().search(&data[offset..], pattern)? {
                        hits.push(base + (offset + rel) as u64);
                        offset += rel + 1;
                    }
                    Ok(())
                })?;
            }
            SignatureKind::Sparse => {
                let first = signature.element_bytes(0);
                self.for_each_chunk(reader, range, first.len() - 1, |base, data| {
                    let mut offset = 0;
                    while let Some(rel) = session.scratch_mut().search(&data[offset..], first)? {
                        let anchor = base + (offset + rel) as u64;
                        match self.gapped.search_gapped(reader, anchor, signature) {
                            Ok(Some(_)) => hits.push(anchor),
                            Ok(None) => {}
                            Err(e) => log::trace!("Sparse match {} at {} failed: {}", signature.name(), anchor, e),
                        }
                        offset += rel + 1;
                    }
                    Ok(())
                })?;
            }
        }
        Ok(hits)
    }

    /// Anchors of `signature`'s bytes cut into slices that may be separated by gaps,
    /// for tables whose elements were stored padded or interleaved.
    pub fn find_sliced(
        &self,
        session: &mut ScanSession,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        signature: &Signature,
        options: SliceOptions,
    ) -> Result<Vec<Address>, SearchError> {
        let pattern = signature.bytes();
        let span = options.max_span.unwrap_or(pattern.len() * 16);
        let overlap = pattern.len().saturating_add(span);
        let mut hits = Vec::new();
        self.for_each_chunk(reader, range, overlap, |base, data| {
            let mut offset = 0;
            while offset < data.len() {
                match session.scratch_mut().search_sliced(&data[offset..], pattern, options)? {
                    Some(rel) => {
                        hits.push(base + (offset + rel) as u64);
                        offset += rel + 1;
                    }
                    None => break,
                }
            }
            Ok(())
        })?;
        hits.sort_unstable();
        hits.dedup();
        Ok(hits)
    }

    /// Runs [`find_all`](Self::find_all) for every signature. A signature whose search
    /// exhausts the scratch is logged and skipped; the sweep goes on.
    pub fn sweep(&self, session: &mut ScanSession, reader: &dyn MemoryReader, range: MemoryRange) -> SweepReport {
        let mut report = SweepReport::default();
        for sig in self.database.iter() {
            match self.find_all(session, reader, range, sig) {
                Ok(addresses) if addresses.is_empty() => {}
                Ok(addresses) => report.hits.push(SweepHit {
                    signature: Arc::clone(sig),
                    addresses,
                }),
                Err(e) => {
                    log::warn!("Skipping {}: {}", sig.name(), e);
                    report.exhausted.push(Arc::clone(sig));
                }
            }
        }
        report
    }

    fn for_each_chunk<F>(
        &self,
        reader: &dyn MemoryReader,
        range: MemoryRange,
        overlap: usize,
        mut visit: F,
    ) -> Result<(), SearchError>
    where
        F: FnMut(Address, &[u8]) -> Result<(), SearchError>,
    {
        let chunk = self.config.chunk_size.max(overlap.saturating_mul(2)).max(1);
        let spans = reader
            .regions()
            .iter()
            .filter_map(|region| region.range().intersect(&range))
            .filter(|span| !span.is_empty())
            .collect::<Vec<_>>();

        for span in spans {
            let mut pos = span.start();
            while pos < span.end() {
                let remaining = span.end().distance_from(pos);
                let len = remaining.min(chunk as u64) as usize;
                let data = match read_prefix(reader, pos, len) {
                    Some(data) => data,
                    None => {
                        log::trace!("Skipping unreadable byte at {}", pos);
                        pos = pos + 1;
                        continue;
                    }
                };
                visit(pos, &data)?;
                if data.len() as u64 >= remaining {
                    break;
                }
                if data.len() < len {
                    // The byte after a short read is unreadable, so nothing straddles it.
                    pos = pos + data.len() as u64;
                } else {
                    pos = pos + (len - overlap) as u64;
                }
            }
        }
        Ok(())
    }
}

/// Up to `len` bytes at `pos`: the full read, or the readable prefix when the read
/// runs into unmapped memory. `None` when `pos` itself is unreadable.
fn read_prefix(reader: &dyn MemoryReader, pos: Address, len: usize) -> Option<Vec<u8>> {
    match reader.read_bytes(pos, len) {
        Ok(data) => Some(data),
        Err(MemoryError::ShortRead { available, .. }) if available > 0 && available < len => {
            reader.read_bytes(pos, available).ok()
        }
        Err(_) => None,
    }
}

/// Element-by-element comparison at `addr`, each element read at the signature's
/// width and order.
fn dense_matches(reader: &dyn MemoryReader, addr: Address, signature: &Signature) -> bool {
    let width = signature.width();
    let step = width.bytes() as u64;
    signature.elements().iter().enumerate().all(|(i, &expected)| {
        addr.checked_add(i as u64 * step)
            .and_then(|at| width.read(reader, at, signature.byte_order()).ok())
            == Some(expected)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::control::{CancellationToken, NoopControl};
    use crate::engine::session::ScanState;
    use crate::engine::sink::FnSink;
    use crate::memory::{BufferMemory, ByteOrder};
    use crate::signature::ElementWidth;
    use std::sync::atomic::{AtomicU64, Ordering};

    const SHA1_LE: [u8; 20] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54, 0x32, 0x10, 0xF0,
        0xE1, 0xD2, 0xC3,
    ];

    fn builtin_engine(order: ByteOrder) -> ScanEngine {
        ScanEngine::new(SignatureDatabase::builtin(order), Config::default())
    }

    fn range(start: u64, end: u64) -> MemoryRange {
        MemoryRange::new(Address::new(start), Address::new(end)).unwrap()
    }

    fn dense_names(events: &[MatchEvent]) -> Vec<&str> {
        events.iter().filter(|e| e.is_dense()).map(|e| e.name()).collect()
    }

    #[derive(Default)]
    struct PollCounter {
        polls: AtomicU64,
    }

    impl ScanControl for PollCounter {
        fn is_cancelled(&self) -> bool {
            self.polls.fetch_add(1, Ordering::Relaxed);
            false
        }
    }

    /// Requests cancellation once progress reaches the given address.
    struct StopAt(Address, std::sync::atomic::AtomicBool);

    impl ScanControl for StopAt {
        fn is_cancelled(&self) -> bool {
            self.1.load(Ordering::SeqCst)
        }

        fn report_progress(&self, cursor: Address, _advanced: u64) {
            if cursor >= self.0 {
                self.1.store(true, Ordering::SeqCst);
            }
        }
    }

    #[test]
    fn test_sha1_bytes_01234567_match_on_little_endian_image() {
        let mut buf = vec![0u8; 0x200];
        buf[0..20].copy_from_slice(&SHA1_LE);
        let mem = BufferMemory::new(buf, Address::new(0x1000));
        let engine = builtin_engine(ByteOrder::Little);

        let (events, outcome) = engine.scan_collect(&mem, range(0x1000, 0x1200), &NoopControl);
        assert!(outcome.is_completed());
        let dense: Vec<_> = events.iter().filter(|e| e.is_dense()).collect();
        assert_eq!(dense.len(), 1);
        assert_eq!(dense[0].address, Address::new(0x1000));
        assert_eq!(dense[0].name(), "SHA1_H0");
    }

    #[test]
    fn test_sha1_bytes_67452301_match_on_big_endian_image() {
        let bytes = [
            0x67, 0x45, 0x23, 0x01, 0xEF, 0xCD, 0xAB, 0x89, 0x98, 0xBA, 0xDC, 0xFE, 0x10, 0x32, 0x54, 0x76, 0xC3,
            0xD2, 0xE1, 0xF0,
        ];
        let mem = BufferMemory::new(bytes.to_vec(), Address::new(0x1000)).with_byte_order(ByteOrder::Big);
        let engine = builtin_engine(ByteOrder::Big);

        let (events, _) = engine.scan_collect(&mem, range(0x1000, 0x1014), &NoopControl);
        assert_eq!(dense_names(&events), ["SHA1_H0"]);
        assert_eq!(events[0].address, Address::new(0x1000));
    }

    #[test]
    fn test_tea_delta_is_dense() {
        let mut buf = vec![0u8; 0x100];
        buf[0..4].copy_from_slice(&0x9E3779B9u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0x2000));
        let engine = builtin_engine(ByteOrder::Little);

        let events = engine.match_at(&mem, Address::new(0x2000));
        assert_eq!(events.len(), 1);
        assert!(events[0].is_dense());
        assert_eq!(events[0].name(), "TEA_DELTA");
        assert_eq!(events[0].algorithm(), "TEA");
    }

    #[test]
    fn test_empty_range_completes() {
        let mem = BufferMemory::new(vec![0u8; 16], Address::new(0));
        let engine = builtin_engine(ByteOrder::Little);
        let mut session = engine.session();
        let mut events = Vec::new();
        let outcome = engine.scan(&mut session, &mem, range(8, 8), &NoopControl, &mut events);
        assert_eq!(outcome.status, ScanStatus::Completed);
        assert_eq!(outcome.matches, 0);
        assert!(events.is_empty());
        assert_eq!(session.state(), ScanState::Completed);
    }

    fn sample_image() -> BufferMemory {
        let mut buf = vec![0u8; 0x6000];
        buf[0x10..0x24].copy_from_slice(&SHA1_LE);
        buf[0x1800..0x1804].copy_from_slice(&0x9E3779B9u32.to_le_bytes());
        buf[0x3400..0x3410].copy_from_slice(b"expand 32-byte k");
        buf[0x5000..0x5004].copy_from_slice(&0xEDB88320u32.to_le_bytes());
        BufferMemory::new(buf, Address::new(0x400000))
    }

    #[test]
    fn test_scan_is_idempotent() {
        let mem = sample_image();
        let engine = builtin_engine(ByteOrder::Little);
        let r = range(0x400000, 0x406000);
        let (first, a) = engine.scan_collect(&mem, r, &NoopControl);
        let (second, b) = engine.scan_collect(&mem, r, &NoopControl);
        assert_eq!(first, second);
        assert_eq!(a, b);
        assert_eq!(
            dense_names(&first),
            ["SHA1_H0", "TEA_DELTA", "SALSA20_SIGMA", "CRC32_Reversed"]
        );
        assert!(first.windows(2).all(|w| w[0].address <= w[1].address));
    }

    #[test]
    fn test_cancelled_scan_is_prefix() {
        let mem = sample_image();
        let engine = ScanEngine::new(
            SignatureDatabase::builtin(ByteOrder::Little),
            Config::default().with_cancel_check_interval(0x100),
        );
        let r = range(0x400000, 0x406000);
        let (full, _) = engine.scan_collect(&mem, r, &NoopControl);

        let stop = StopAt(Address::new(0x402000), Default::default());
        let (partial, outcome) = engine.scan_collect(&mem, r, &stop);
        assert_eq!(outcome.status, ScanStatus::Cancelled);
        assert_eq!(outcome.cursor, Address::new(0x402000));
        assert!(partial.len() < full.len());
        assert!(partial.iter().all(|e| full.contains(e)));
        assert!(partial.iter().all(|e| e.address < outcome.cursor));
        assert_eq!(dense_names(&partial), ["SHA1_H0", "TEA_DELTA"]);
    }

    #[test]
    fn test_cancel_before_start() {
        let mem = sample_image();
        let engine = builtin_engine(ByteOrder::Little);
        let token = CancellationToken::new();
        token.cancel();
        let (events, outcome) = engine.scan_collect(&mem, range(0x400000, 0x406000), &token);
        assert!(events.is_empty());
        assert_eq!(outcome.status, ScanStatus::Cancelled);
        assert_eq!(outcome.cursor, Address::new(0x400000));
        assert_eq!(outcome.stats.addresses_visited, 0);
    }

    #[test]
    fn test_polling_is_coarse() {
        let mem = BufferMemory::new(vec![0u8; 0x3000], Address::new(0));
        let engine = builtin_engine(ByteOrder::Little);
        let control = PollCounter::default();
        engine.scan_collect(&mem, range(0, 0x3000), &control);
        assert_eq!(control.polls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_unreadable_addresses_are_skipped() {
        let mut buf = vec![0u8; 0x100];
        buf[0x80..0x84].copy_from_slice(&0x9E3779B9u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0))
            .with_hole(MemoryRange::new(Address::new(0x10), Address::new(0x20)).unwrap());
        let engine = builtin_engine(ByteOrder::Little);
        let (events, outcome) = engine.scan_collect(&mem, range(0, 0x100), &NoopControl);
        assert!(outcome.is_completed());
        assert_eq!(outcome.stats.unreadable_addresses, 0x10);
        assert_eq!(dense_names(&events), ["TEA_DELTA"]);
    }

    #[test]
    fn test_range_past_image_counts_unreadable() {
        let mem = BufferMemory::new(vec![0u8; 0x10], Address::new(0));
        let engine = builtin_engine(ByteOrder::Little);
        let (_, outcome) = engine.scan_collect(&mem, range(0, 0x20), &NoopControl);
        assert_eq!(outcome.stats.unreadable_addresses, 0x10);
        assert_eq!(outcome.cursor, Address::new(0x20));
    }

    fn custom_engine(signatures: Vec<Signature>, config: Config) -> ScanEngine {
        ScanEngine::new(Arc::new(SignatureDatabase::new(signatures)), config)
    }

    fn dword(name: &str, kind: SignatureKind, values: &[u64]) -> Signature {
        Signature::new(name, "test", kind, ElementWidth::W4, ByteOrder::Little, values.to_vec()).unwrap()
    }

    #[test]
    fn test_first_match_wins_unless_collect_all() {
        let sigs = vec![
            dword("long", SignatureKind::Dense, &[0x11111111, 0x22222222]),
            dword("short", SignatureKind::Dense, &[0x11111111]),
        ];
        let mut buf = vec![0u8; 0x40];
        buf[0..4].copy_from_slice(&0x11111111u32.to_le_bytes());
        buf[4..8].copy_from_slice(&0x22222222u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0));

        let first = custom_engine(sigs.clone(), Config::default());
        assert_eq!(dense_names(&first.match_at(&mem, Address::new(0))), ["long"]);

        let all = custom_engine(sigs, Config::default().with_collect_all_matches(true));
        assert_eq!(dense_names(&all.match_at(&mem, Address::new(0))), ["long", "short"]);
    }

    #[test]
    fn test_dense_and_sparse_at_same_address() {
        let sigs = vec![
            dword("dense", SignatureKind::Dense, &[0xABCDEF01]),
            dword("sparse", SignatureKind::Sparse, &[0xABCDEF01, 0x55555555]),
        ];
        let mut buf = vec![0u8; 0x200];
        buf[0x10..0x14].copy_from_slice(&0xABCDEF01u32.to_le_bytes());
        buf[0x60..0x64].copy_from_slice(&0x55555555u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0));
        let engine = custom_engine(sigs, Config::default());

        let (events, outcome) = engine.scan_collect(&mem, range(0, 0x100), &NoopControl);
        assert_eq!(outcome.matches, 2);
        assert!(events[0].is_dense());
        assert_eq!(events[1].kind, SignatureKind::Sparse);
        assert_eq!(events[1].sub_addresses, vec![Address::new(0x10), Address::new(0x60)]);
        assert_eq!(outcome.stats.sparse_matches, 1);
    }

    #[test]
    fn test_big_endian_prefilter() {
        let sig = Signature::new("be", "test", SignatureKind::Dense, ElementWidth::W4, ByteOrder::Big, vec![0xDEADBEEF])
            .unwrap();
        assert_eq!(sig.first_byte(), 0xDE);
        let mut buf = vec![0u8; 0x20];
        buf[8..12].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        buf[16..20].copy_from_slice(&[0xEF, 0xBE, 0xAD, 0xDE]);
        let mem = BufferMemory::new(buf, Address::new(0));
        let engine = custom_engine(vec![sig], Config::default());
        let (events, _) = engine.scan_collect(&mem, range(0, 0x20), &NoopControl);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].address, Address::new(8));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mem = sample_image();
        let engine = builtin_engine(ByteOrder::Little);
        let r = range(0x400000, 0x406000);
        let (sequential, seq) = engine.scan_collect(&mem, r, &NoopControl);
        let (parallel, par) = engine.scan_parallel(&mem, r, &NoopControl, 4);
        assert_eq!(sequential, parallel);
        assert_eq!(par.status, ScanStatus::Completed);
        assert_eq!(par.cursor, seq.cursor);
        assert_eq!(par.stats.addresses_visited, seq.stats.addresses_visited);
    }

    #[test]
    fn test_parallel_cancelled_keeps_prefix() {
        let mem = sample_image();
        let engine = builtin_engine(ByteOrder::Little);
        let token = CancellationToken::new();
        token.cancel();
        let (events, outcome) = engine.scan_parallel(&mem, range(0x400000, 0x406000), &token, 3);
        assert_eq!(outcome.status, ScanStatus::Cancelled);
        assert_eq!(outcome.cursor, Address::new(0x400000));
        assert!(events.is_empty());
    }

    #[test]
    fn test_fn_sink_receives_events() {
        let mem = sample_image();
        let engine = builtin_engine(ByteOrder::Little);
        let mut names = Vec::new();
        let mut session = engine.session();
        let mut sink = FnSink(|e: MatchEvent| names.push(e.name().to_string()));
        let outcome = engine.scan(&mut session, &mem, range(0x400000, 0x401000), &NoopControl, &mut sink);
        // the initial state is both a dense table and a sparse set
        assert_eq!(outcome.matches, 2);
        assert_eq!(names, ["SHA1_H0", "SHA1_H0"]);
    }

    #[test]
    fn test_find_all_agrees_with_scan() {
        let mut buf = vec![0u8; 0x3000];
        for at in [0x10usize, 0xFFE, 0x1FFD, 0x2FF0] {
            buf[at..at + 4].copy_from_slice(&0x9E3779B9u32.to_le_bytes());
        }
        let mem = BufferMemory::new(buf, Address::new(0x8000));
        let engine = ScanEngine::new(
            SignatureDatabase::builtin(ByteOrder::Little),
            Config::default().with_chunk_size(0x1000),
        );
        let r = range(0x8000, 0xB000);
        let tea = engine.database().get("TEA_DELTA").unwrap().clone();

        let mut session = engine.session();
        let found = engine.find_all(&mut session, &mem, r, &tea).unwrap();
        let expected: Vec<_> = [0x8010u64, 0x8FFE, 0x9FFD, 0xAFF0].into_iter().map(Address::new).collect();
        assert_eq!(found, expected);

        let (events, _) = engine.scan_collect(&mem, r, &NoopControl);
        let scanned: Vec<_> = events.iter().filter(|e| e.name() == "TEA_DELTA").map(|e| e.address).collect();
        assert_eq!(scanned, expected);
    }

    #[test]
    fn test_find_all_sparse() {
        let sig = dword("sp", SignatureKind::Sparse, &[0x01020304, 0x0A0B0C0D]);
        let mut buf = vec![0u8; 0x400];
        buf[0x20..0x24].copy_from_slice(&0x01020304u32.to_le_bytes());
        buf[0x50..0x54].copy_from_slice(&0x0A0B0C0Du32.to_le_bytes());
        buf[0x300..0x304].copy_from_slice(&0x01020304u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0));
        let engine = custom_engine(vec![sig.clone()], Config::default());
        let mut session = engine.session();
        let found = engine.find_all(&mut session, &mem, range(0, 0x400), &sig).unwrap();
        assert_eq!(found, vec![Address::new(0x20)]);
    }

    #[test]
    fn test_find_sliced_tolerates_padding() {
        let sig = dword("pad", SignatureKind::Dense, &[0x11223344, 0x55667788]);
        let mut buf = vec![0u8; 0x200];
        buf[0x40..0x44].copy_from_slice(&0x11223344u32.to_le_bytes());
        buf[0x48..0x4C].copy_from_slice(&0x55667788u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0x1000));
        let engine = custom_engine(vec![sig.clone()], Config::default());
        let mut session = engine.session();
        let r = range(0x1000, 0x1200);

        assert!(engine.find_all(&mut session, &mem, r, &sig).unwrap().is_empty());
        let loose = engine
            .find_sliced(&mut session, &mem, r, &sig, SliceOptions::new(4).with_max_span(16))
            .unwrap();
        assert_eq!(loose, vec![Address::new(0x1040)]);
    }

    #[test]
    fn test_sweep_skips_exhausted_signatures() {
        let small = dword("small", SignatureKind::Dense, &[0x12345678]);
        let big = dword("big", SignatureKind::Dense, &[0x12345678, 0x9ABCDEF0, 0x0FEDCBA9]);
        let mut buf = vec![0u8; 0x100];
        buf[0x10..0x14].copy_from_slice(&0x12345678u32.to_le_bytes());
        let mem = BufferMemory::new(buf, Address::new(0));
        let engine = custom_engine(vec![big, small], Config::default().with_max_backtrack_entries(8));

        let mut session = engine.session();
        let report = engine.sweep(&mut session, &mem, range(0, 0x100));
        assert_eq!(report.exhausted.len(), 1);
        assert_eq!(report.exhausted[0].name(), "big");
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].signature.name(), "small");
        assert_eq!(report.hits[0].addresses, vec![Address::new(0x10)]);
    }

    /// Presents the whole buffer as one region so chunk reads run into its holes.
    struct Unsplit(BufferMemory);

    impl MemoryReader for Unsplit {
        fn read_bytes(&self, addr: Address, len: usize) -> Result<Vec<u8>, MemoryError> {
            self.0.read_bytes(addr, len)
        }

        fn byte_order(&self) -> ByteOrder {
            self.0.byte_order()
        }

        fn bounds(&self) -> MemoryRange {
            self.0.bounds()
        }
    }

    #[test]
    fn test_find_all_keeps_hits_beside_holes() {
        let mut buf = vec![0u8; 0x3000];
        for at in [0x10usize, 0x7FC, 0x810, 0x1400] {
            buf[at..at + 4].copy_from_slice(&0x9E3779B9u32.to_le_bytes());
        }
        let hole = MemoryRange::from_start_size(Address::new(0x800), 0x10);
        let mem = BufferMemory::new(buf, Address::new(0)).with_hole(hole);
        let engine = builtin_engine(ByteOrder::Little);
        let tea = engine.database().get("TEA_DELTA").unwrap().clone();
        let r = range(0, 0x3000);
        let expected: Vec<_> = [0x10u64, 0x7FC, 0x810, 0x1400].into_iter().map(Address::new).collect();

        let (events, _) = engine.scan_collect(&mem, r, &NoopControl);
        let scanned: Vec<_> = events.iter().filter(|e| e.name() == "TEA_DELTA").map(|e| e.address).collect();
        assert_eq!(scanned, expected);

        let mut session = engine.session();
        assert_eq!(engine.find_all(&mut session, &mem, r, &tea).unwrap(), expected);

        let unsplit = Unsplit(mem);
        assert_eq!(engine.find_all(&mut session, &unsplit, r, &tea).unwrap(), expected);
        let report = engine.sweep(&mut session, &unsplit, r);
        let hit = report.hits.iter().find(|h| h.signature.name() == "TEA_DELTA").unwrap();
        assert_eq!(hit.addresses, expected);
    }
}
