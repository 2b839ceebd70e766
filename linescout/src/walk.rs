use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Directory-entry names never reported or descended into. `.` and `..`
/// are already excluded by the platform APIs behind `fs::read_dir`.
pub const SKIP_NAMES: [&str; 1] = [".git"];

/// Walks the tree under `root`, invoking `on_file` with the full path of
/// every regular file.
///
/// Traversal is depth-first over an explicit stack, in the platform's
/// native entry order. Entries are dispatched on the kind the platform
/// reports, so symbolic links are neither followed nor reported. A
/// directory that cannot be listed is logged at debug level and its
/// subtree dropped; the walk itself never fails.
pub fn walk<F>(root: &Path, mut on_file: F)
where
    F: FnMut(PathBuf),
{
    let mut pending = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unlistable directory {}: {}", dir.display(), e);
                continue;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            if SKIP_NAMES.iter().any(|name| entry.file_name() == *name) {
                continue;
            }

            let kind = match entry.file_type() {
                Ok(kind) => kind,
                Err(_) => continue,
            };

            if kind.is_file() {
                on_file(entry.path());
            } else if kind.is_dir() {
                pending.push(entry.path());
            }
        }
    }
}
