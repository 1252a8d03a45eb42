// Thu Jan 15 2026 - Alex

use crate::memory::{parse_address, Address};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "crypto-signature-scanner")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Finds cryptographic constants in executable images", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan every address of an image for known constants.
    Scan(ScanArgs),
    /// Find every occurrence of one signature, or of all of them.
    Find(FindArgs),
    /// Print the signature database grouped by algorithm.
    List(DatabaseArgs),
    /// Report signatures whose bytes duplicate another signature.
    Verify(DatabaseArgs),
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    pub binary: PathBuf,

    #[arg(long, value_parser = parse_address_arg)]
    pub start: Option<Address>,

    #[arg(long, value_parser = parse_address_arg)]
    pub end: Option<Address>,

    /// Extra signatures in JSON, merged after the built-in set.
    #[arg(short, long)]
    pub signatures: Option<PathBuf>,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Report every matching signature per address instead of the first one.
    #[arg(long)]
    pub all_matches: bool,

    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Include names, comments and bookmarks in the output.
    #[arg(long)]
    pub annotations: bool,

    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Parser, Debug)]
pub struct FindArgs {
    pub binary: PathBuf,

    /// Signature name; every signature when omitted.
    pub name: Option<String>,

    #[arg(long, value_parser = parse_address_arg)]
    pub start: Option<Address>,

    #[arg(long, value_parser = parse_address_arg)]
    pub end: Option<Address>,

    #[arg(short, long)]
    pub signatures: Option<PathBuf>,

    /// Use the sparse signature when a dense one shares the name.
    #[arg(long)]
    pub sparse: bool,

    /// Allow gaps between slices of the pattern.
    #[arg(long)]
    pub loose: bool,

    #[arg(long, default_value = "4")]
    pub slice_len: usize,

    #[arg(long)]
    pub max_span: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct DatabaseArgs {
    #[arg(short, long)]
    pub signatures: Option<PathBuf>,

    /// Serialize built-in constants big-endian.
    #[arg(long)]
    pub big_endian: bool,
}

fn parse_address_arg(text: &str) -> Result<Address, String> {
    parse_address(text).ok_or_else(|| format!("invalid address: {}", text))
}

impl ScanArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.binary.exists() {
            return Err(format!("Binary does not exist: {:?}", self.binary));
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end < start {
                return Err(format!("--end {} is below --start {}", end, start));
            }
        }
        if self.threads == Some(0) {
            return Err("Thread count must be at least 1".to_string());
        }
        Ok(())
    }
}

impl FindArgs {
    pub fn validate(&self) -> Result<(), String> {
        if !self.binary.exists() {
            return Err(format!("Binary does not exist: {:?}", self.binary));
        }
        if (self.loose || self.sparse) && self.name.is_none() {
            return Err("--loose and --sparse need a signature name".to_string());
        }
        if self.loose && self.sparse {
            return Err("--loose applies to dense signatures only".to_string());
        }
        Ok(())
    }
}
