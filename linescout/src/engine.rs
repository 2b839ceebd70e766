use rayon::prelude::*;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::buffer::ScratchBuffer;
use crate::config::ScanConfig;
use crate::errors::{ScanError, ScanResult};
use crate::loader::{self, FileView};
use crate::metrics::{LoadMetrics, LoadStats};
use crate::walk;

// Files per work unit, balancing dispatch overhead against load skew.
const MIN_CHUNK_SIZE: usize = 16;
const MAX_CHUNK_SIZE: usize = 256;

/// Performs a concurrent scan of all files under the configured root.
///
/// Candidate paths are collected first, then loaded in parallel chunks.
/// Each worker owns one [`ScratchBuffer`] for its whole run, so buffer
/// growth amortizes across every file it loads. `sink` receives each valid
/// [`FileView`] on the worker that loaded it, while the view still borrows
/// that worker's buffer; views arrive in no particular order.
pub fn scan<F>(config: &ScanConfig, sink: F) -> ScanResult<LoadStats>
where
    F: Fn(&Path, &FileView) + Sync,
{
    let root = config.root_path.as_path();
    info!("Starting scan of {}", root.display());

    let metadata = fs::metadata(root).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScanError::root_not_found(root),
        _ => ScanError::IoError(e),
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::not_a_directory(root));
    }

    // Collect files to load
    let mut files: Vec<PathBuf> = Vec::new();
    walk::walk(root, |path| files.push(path));

    debug!("Found {} files to load", files.len());

    // Load files in parallel with adaptive chunk size
    let thread_count = config.thread_count.get();
    let chunk_size = (files.len() / thread_count).clamp(MIN_CHUNK_SIZE, MAX_CHUNK_SIZE);

    let metrics = LoadMetrics::new();

    files
        .par_chunks(chunk_size)
        .for_each_init(ScratchBuffer::new, |scratch, chunk| {
            for path in chunk {
                let view = loader::load(path, scratch);
                match view.skip_reason() {
                    None => {
                        metrics.record_load(view.size(), view.line_count() as u64);
                        sink(path, &view);
                    }
                    Some(reason) => {
                        debug!("Skipping {} ({:?})", path.display(), reason);
                        metrics.record_skip(reason);
                    }
                }
            }
        });

    // Log load statistics
    metrics.log_stats();

    let stats = metrics.get_stats();
    info!(
        "Scan complete. Loaded {} files, skipped {}",
        stats.loaded_files,
        stats.skipped_files()
    );

    Ok(stats)
}
