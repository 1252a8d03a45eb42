// Tue Jan 13 2026 - Alex

use crate::pattern::exact::DEFAULT_BACKTRACK_LIMIT;
use crate::pattern::gapped::DEFAULT_WINDOW_MULTIPLIER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sparse window is `window_multiplier * element_count + element_width` bytes.
    pub window_multiplier: usize,
    /// Visited addresses between two cancellation / progress polls.
    pub cancel_check_interval: u64,
    /// Report every matching signature at an address instead of the first per kind.
    pub collect_all_matches: bool,
    pub parallel: bool,
    pub max_threads: usize,
    /// Bytes per read when searching one signature over a range.
    pub chunk_size: usize,
    pub max_backtrack_entries: usize,
    pub enable_progress_bars: bool,
    pub timeout_seconds: Option<u64>,
    pub signature_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_multiplier: DEFAULT_WINDOW_MULTIPLIER,
            cancel_check_interval: 0x1000,
            collect_all_matches: false,
            parallel: false,
            max_threads: num_cpus::get(),
            chunk_size: 0x10000,
            max_backtrack_entries: DEFAULT_BACKTRACK_LIMIT,
            enable_progress_bars: true,
            timeout_seconds: None,
            signature_file: None,
            output_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    pub fn with_window_multiplier(mut self, multiplier: usize) -> Self {
        self.window_multiplier = multiplier;
        self
    }

    pub fn with_cancel_check_interval(mut self, interval: u64) -> Self {
        self.cancel_check_interval = interval;
        self
    }

    pub fn with_collect_all_matches(mut self, all: bool) -> Self {
        self.collect_all_matches = all;
        self
    }

    pub fn with_parallel(mut self, threads: usize) -> Self {
        self.parallel = threads > 1;
        self.max_threads = threads.max(1);
        self
    }

    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    pub fn with_max_backtrack_entries(mut self, entries: usize) -> Self {
        self.max_backtrack_entries = entries;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn with_signature_file(mut self, path: PathBuf) -> Self {
        self.signature_file = Some(path);
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_multiplier == 0 {
            return Err("window_multiplier must be greater than 0".to_string());
        }
        if self.cancel_check_interval == 0 {
            return Err("cancel_check_interval must be greater than 0".to_string());
        }
        if self.max_threads == 0 {
            return Err("max_threads must be greater than 0".to_string());
        }
        if self.chunk_size < 0x100 {
            return Err("chunk_size must be at least 256 bytes".to_string());
        }
        if self.max_backtrack_entries == 0 {
            return Err("max_backtrack_entries must be greater than 0".to_string());
        }
        Ok(())
    }
}
