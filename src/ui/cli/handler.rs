// Thu Jan 15 2026 - Alex

use super::args::{Args, Command, DatabaseArgs, FindArgs, ScanArgs};
use crate::config::Config;
use crate::engine::{CancellationToken, MatchSink, ScanEngine, ScanOutcome};
use crate::memory::{Address, BinaryMemory, ByteOrder, MemoryRange, MemoryReader};
use crate::output::{AnnotationLog, JsonReport, ReportGenerator, TargetInfo};
use crate::pattern::SliceOptions;
use crate::signature::{Signature, SignatureDatabase, SignatureKind};
use crate::ui::progress::ScanProgress;
use crate::utils::LoggingUtils;
use anyhow::Context;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct CommandHandler {
    use_color: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        LoggingUtils::init_logger(LoggingUtils::resolve_level(&args.log_level, args.verbose, args.quiet));
        let handler = Self {
            use_color: !args.no_color,
        };
        if args.no_color {
            colored::control::set_override(false);
        }

        match args.command {
            Command::Scan(scan_args) => handler.handle_scan(scan_args),
            Command::Find(find_args) => handler.handle_find(find_args),
            Command::List(db_args) => handler.handle_list(db_args),
            Command::Verify(db_args) => handler.handle_verify(db_args),
        }
    }

    fn handle_scan(&self, args: ScanArgs) -> anyhow::Result<()> {
        args.validate().map_err(anyhow::Error::msg)?;

        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(threads) = args.threads {
            config = config.with_parallel(threads);
        }
        if args.all_matches {
            config = config.with_collect_all_matches(true);
        }
        if let Some(seconds) = args.timeout {
            config = config.with_timeout(seconds);
        }
        if let Some(path) = &args.signatures {
            config = config.with_signature_file(path.clone());
        }
        if let Some(path) = &args.json {
            config = config.with_output_file(path.clone());
        }
        config.validate().map_err(anyhow::Error::msg)?;

        let binary = load_binary(&args.binary)?;
        let database = load_database(config.signature_file.as_deref(), binary.byte_order())?;
        let range = scan_range(&binary, args.start, args.end)?;
        log::info!(
            "Scanning {} ({} signatures, {} byte order)",
            range,
            database.len(),
            binary.byte_order()
        );

        let mut token = CancellationToken::new();
        if let Some(seconds) = config.timeout_seconds {
            token = token.with_timeout(Duration::from_secs(seconds));
        }
        let progress = if args.no_progress || !config.enable_progress_bars {
            ScanProgress::hidden(token)
        } else {
            ScanProgress::new(range, token)
        };

        let started = Instant::now();
        let engine = ScanEngine::new(database, config.clone());
        let (events, outcome) = if config.parallel {
            engine.scan_parallel(&binary, range, &progress, config.max_threads)
        } else {
            engine.scan_collect(&binary, range, &progress)
        };
        progress.finish(&outcome);
        log::info!(
            "Scan finished in {:.2}s: {} matches, {} unreadable addresses",
            started.elapsed().as_secs_f64(),
            outcome.matches,
            outcome.stats.unreadable_addresses
        );

        let mut annotations = AnnotationLog::new();
        if args.annotations {
            for event in &events {
                annotations.on_match(event.clone());
            }
        }

        let target = args.binary.display().to_string();
        let generator = ReportGenerator::new().with_color(self.use_color);
        print!("{}", generator.scan_summary(&target, &outcome, &events));
        if args.annotations {
            println!();
            for bookmark in annotations.bookmarks() {
                println!("  {} {}", bookmark.address, bookmark.description);
            }
        }

        if let Some(path) = &config.output_file {
            let info = TargetInfo {
                name: target,
                format: format!("{:?}", binary.format()).to_lowercase(),
                byte_order: binary.byte_order(),
                bounds: binary.bounds(),
            };
            let mut report = JsonReport::new(info, range, &outcome, &events);
            if args.annotations {
                report = report.with_annotations(&annotations);
            }
            report
                .write_to_file(path, true)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} Results saved to: {}", "[+]".green(), path.display());
        }

        report_cancellation(&outcome);
        Ok(())
    }

    fn handle_find(&self, args: FindArgs) -> anyhow::Result<()> {
        args.validate().map_err(anyhow::Error::msg)?;

        let binary = load_binary(&args.binary)?;
        let database = load_database(args.signatures.as_deref(), binary.byte_order())?;
        let range = scan_range(&binary, args.start, args.end)?;
        let engine = ScanEngine::new(Arc::clone(&database), Config::default());
        let mut session = engine.session();

        let name = match &args.name {
            Some(name) => name,
            None => {
                let report = engine.sweep(&mut session, &binary, range);
                for hit in &report.hits {
                    println!("{} ({})", hit.signature.name().cyan(), hit.signature.algorithm());
                    for address in &hit.addresses {
                        println!("  {}", address);
                    }
                }
                for sig in &report.exhausted {
                    println!("{} {} skipped: search table limit reached", "[!]".yellow(), sig.name());
                }
                return Ok(());
            }
        };

        let signature = select_signature(&database, name, args.sparse)
            .with_context(|| format!("Unknown signature: {}", name))?;
        let hits = if args.loose {
            let mut options = SliceOptions::new(args.slice_len);
            if let Some(span) = args.max_span {
                options = options.with_max_span(span);
            }
            engine.find_sliced(&mut session, &binary, range, signature, options)?
        } else {
            engine.find_all(&mut session, &binary, range, signature)?
        };

        println!("{} ({}, {}): {} hits", signature.name().cyan(), signature.algorithm(), signature.kind(), hits.len());
        for address in hits {
            println!("  {}", address);
        }
        Ok(())
    }

    fn handle_list(&self, args: DatabaseArgs) -> anyhow::Result<()> {
        let database = load_database(args.signatures.as_deref(), byte_order_of(&args))?;
        print!("{}", ReportGenerator::new().with_color(self.use_color).signature_listing(&database));
        Ok(())
    }

    fn handle_verify(&self, args: DatabaseArgs) -> anyhow::Result<()> {
        let database = load_database(args.signatures.as_deref(), byte_order_of(&args))?;
        let duplicates = database.duplicates();
        print!("{}", ReportGenerator::new().with_color(self.use_color).duplicate_listing(duplicates));
        if !duplicates.is_empty() {
            anyhow::bail!("{} duplicate signatures", duplicates.len());
        }
        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn byte_order_of(args: &DatabaseArgs) -> ByteOrder {
    if args.big_endian {
        ByteOrder::Big
    } else {
        ByteOrder::Little
    }
}

fn load_binary(path: &Path) -> anyhow::Result<BinaryMemory> {
    let binary = BinaryMemory::load(path).with_context(|| format!("Failed to load binary {}", path.display()))?;
    log::info!(
        "Loaded {} as {:?} with {} regions",
        path.display(),
        binary.format(),
        binary.regions().len()
    );
    Ok(binary)
}

/// Built-in signatures for `order`, followed by those in `extra` when given.
pub fn load_database(extra: Option<&Path>, order: ByteOrder) -> anyhow::Result<Arc<SignatureDatabase>> {
    let builtin = SignatureDatabase::builtin(order);
    match extra {
        Some(path) => {
            let loaded = SignatureDatabase::load_json(path, order)
                .with_context(|| format!("Failed to load signatures from {}", path.display()))?;
            log::info!("Loaded {} signatures from {}", loaded.len(), path.display());
            Ok(Arc::new(builtin.merge(&loaded)))
        }
        None => Ok(builtin),
    }
}

/// A name can belong to a dense and a sparse signature; dense wins unless `sparse`.
/// Without `sparse`, a name only sparse signatures carry still resolves.
pub fn select_signature<'a>(database: &'a SignatureDatabase, name: &str, sparse: bool) -> Option<&'a Arc<Signature>> {
    if sparse {
        database.get_kind(name, SignatureKind::Sparse)
    } else {
        database.get_kind(name, SignatureKind::Dense).or_else(|| database.get(name))
    }
}

/// The image bounds narrowed by optional `--start` / `--end`.
pub fn scan_range(
    reader: &dyn MemoryReader,
    start: Option<Address>,
    end: Option<Address>,
) -> anyhow::Result<MemoryRange> {
    let bounds = reader.bounds();
    let range = MemoryRange::new(start.unwrap_or(bounds.start()), end.unwrap_or(bounds.end()))?;
    Ok(range)
}

fn report_cancellation(outcome: &ScanOutcome) {
    if !outcome.is_completed() {
        println!(
            "{} Scan stopped at {}; results cover addresses below it",
            "[!]".yellow(),
            outcome.cursor
        );
    }
}
