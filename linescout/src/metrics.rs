use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use crate::loader::SkipReason;

/// Tracks load outcomes across workers.
///
/// Counters are relaxed atomics behind shared handles, so clones observe
/// and update the same totals.
#[derive(Debug, Clone)]
pub struct LoadMetrics {
    // Successful loads
    loaded_files: Arc<AtomicU64>,
    loaded_bytes: Arc<AtomicU64>,
    indexed_lines: Arc<AtomicU64>,

    // Skips by reason
    open_failures: Arc<AtomicU64>,
    empty_files: Arc<AtomicU64>,
    short_reads: Arc<AtomicU64>,
    binary_files: Arc<AtomicU64>,
}

impl LoadMetrics {
    /// Creates a new LoadMetrics instance with all counters at zero.
    pub fn new() -> Self {
        Self {
            loaded_files: Arc::new(AtomicU64::new(0)),
            loaded_bytes: Arc::new(AtomicU64::new(0)),
            indexed_lines: Arc::new(AtomicU64::new(0)),
            open_failures: Arc::new(AtomicU64::new(0)),
            empty_files: Arc::new(AtomicU64::new(0)),
            short_reads: Arc::new(AtomicU64::new(0)),
            binary_files: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records one successfully loaded and indexed file.
    pub fn record_load(&self, bytes: u64, lines: u64) {
        self.loaded_files.fetch_add(1, Ordering::Relaxed);
        self.loaded_bytes.fetch_add(bytes, Ordering::Relaxed);
        self.indexed_lines.fetch_add(lines, Ordering::Relaxed);
    }

    /// Records one skipped file under its reason.
    pub fn record_skip(&self, reason: SkipReason) {
        let counter = match reason {
            SkipReason::OpenFailed => &self.open_failures,
            SkipReason::Empty => &self.empty_files,
            SkipReason::ShortRead => &self.short_reads,
            SkipReason::Binary => &self.binary_files,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets a point-in-time copy of all counters.
    pub fn get_stats(&self) -> LoadStats {
        LoadStats {
            loaded_files: self.loaded_files.load(Ordering::Relaxed),
            loaded_bytes: self.loaded_bytes.load(Ordering::Relaxed),
            indexed_lines: self.indexed_lines.load(Ordering::Relaxed),
            open_failures: self.open_failures.load(Ordering::Relaxed),
            empty_files: self.empty_files.load(Ordering::Relaxed),
            short_reads: self.short_reads.load(Ordering::Relaxed),
            binary_files: self.binary_files.load(Ordering::Relaxed),
        }
    }

    /// Logs current load statistics.
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Load stats:\n\
             Loaded: {} files, {} bytes, {} lines\n\
             Skipped: {} unreadable, {} empty, {} short reads, {} binary",
            stats.loaded_files,
            stats.loaded_bytes,
            stats.indexed_lines,
            stats.open_failures,
            stats.empty_files,
            stats.short_reads,
            stats.binary_files
        );
    }
}

impl Default for LoadMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time snapshot of load counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub loaded_files: u64,
    pub loaded_bytes: u64,
    pub indexed_lines: u64,
    pub open_failures: u64,
    pub empty_files: u64,
    pub short_reads: u64,
    pub binary_files: u64,
}

impl LoadStats {
    /// Total files that produced no content, across all reasons.
    pub fn skipped_files(&self) -> u64 {
        self.open_failures + self.empty_files + self.short_reads + self.binary_files
    }
}
