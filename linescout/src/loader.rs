//! Single-file acquisition: open, size, read, classify, index.
//!
//! [`load`] is the one call the engine makes per candidate file. The shape
//! it has today came out of measuring alternatives against each other (see
//! `benches/load_strategies.rs`): a reused [`ScratchBuffer`] beats a fresh
//! allocation per file, plain `read` beats both buffered streams and memory
//! mapping at typical source-file sizes, and reading the sniff prefix
//! before the remainder means a large binary costs one small read instead
//! of a full one.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{trace, warn};

use crate::buffer::ScratchBuffer;
use crate::lines::{self, LineSpan};
use crate::sniff::{self, Classification, SNIFF_LEN};

/// Why a load produced no indexable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be opened or its size could not be determined.
    OpenFailed,
    /// The file is zero bytes long.
    Empty,
    /// Fewer bytes could be read than the reported size.
    ShortRead,
    /// The sniffed prefix classified as binary content.
    Binary,
}

/// The result of loading one file: its bytes plus the line spans into them.
///
/// A view borrows the worker's [`ScratchBuffer`], and the borrow ends when
/// the view is dropped. That is what lets the buffer be reused for the next
/// file; content needed past that point must be copied out.
#[derive(Debug)]
pub struct FileView<'a> {
    size: u64,
    data: &'a [u8],
    spans: Vec<LineSpan>,
    skipped: Option<SkipReason>,
}

impl<'a> FileView<'a> {
    pub(crate) fn skip(reason: SkipReason, size: u64) -> FileView<'static> {
        FileView {
            size,
            data: &[],
            spans: Vec::new(),
            skipped: Some(reason),
        }
    }

    /// Byte size reported by the filesystem at open time. A skipped view
    /// can carry a nonzero size alongside zero lines; check [`Self::is_valid`]
    /// rather than inferring success from either field.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The loaded bytes. Empty for skipped views.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Line spans in ascending, non-overlapping order.
    pub fn spans(&self) -> &[LineSpan] {
        &self.spans
    }

    pub fn line_count(&self) -> usize {
        self.spans.len()
    }

    /// Bytes of one line, without its `\n` delimiter.
    pub fn line(&self, index: usize) -> Option<&'a [u8]> {
        let data = self.data;
        self.spans.get(index).map(|span| span.slice(data))
    }

    /// Iterates over line bytes in file order.
    pub fn lines(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        let data = self.data;
        self.spans.iter().map(move |span| span.slice(data))
    }

    /// True when the file was read completely and classified as text.
    pub fn is_valid(&self) -> bool {
        self.skipped.is_none()
    }

    /// Why the view carries no content, if it does not.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        self.skipped
    }
}

/// Loads one file into the worker's scratch buffer and indexes its lines.
///
/// Every failure collapses into a skipped [`FileView`] rather than an
/// error, so the caller has a single "nothing to index" branch with the
/// reason attached for those that want it. Each step is a potential early
/// exit: open, size via fstat on the open descriptor, grow, read, classify,
/// index. Files larger than [`SNIFF_LEN`] are read in two steps so a binary
/// prefix skips the bulk of the content entirely.
pub fn load<'a>(path: &Path, scratch: &'a mut ScratchBuffer) -> FileView<'a> {
    trace!("Loading file: {}", path.display());

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return FileView::skip(SkipReason::OpenFailed, 0),
    };

    let size = match file.metadata() {
        Ok(metadata) => metadata.len(),
        Err(_) => return FileView::skip(SkipReason::OpenFailed, 0),
    };
    if size == 0 {
        return FileView::skip(SkipReason::Empty, 0);
    }
    let size = match usize::try_from(size) {
        Ok(size) => size,
        Err(_) => {
            warn!("File too large to address: {}", path.display());
            return FileView::skip(SkipReason::OpenFailed, 0);
        }
    };

    let buf = scratch.grow(size);

    if size > SNIFF_LEN {
        if file.read_exact(&mut buf[..SNIFF_LEN]).is_err() {
            return FileView::skip(SkipReason::ShortRead, size as u64);
        }
        if sniff::classify(&buf[..SNIFF_LEN]) == Classification::Binary {
            return FileView::skip(SkipReason::Binary, size as u64);
        }
        if file.read_exact(&mut buf[SNIFF_LEN..]).is_err() {
            return FileView::skip(SkipReason::ShortRead, size as u64);
        }
    } else {
        if file.read_exact(&mut buf[..]).is_err() {
            return FileView::skip(SkipReason::ShortRead, size as u64);
        }
        if sniff::classify(&buf[..]) == Classification::Binary {
            return FileView::skip(SkipReason::Binary, size as u64);
        }
    }

    let data: &'a [u8] = buf;
    let spans = lines::index(data);

    FileView {
        size: size as u64,
        data,
        spans,
        skipped: None,
    }
}
