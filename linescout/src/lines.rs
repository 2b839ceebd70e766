use memchr::memchr_iter;

// Initial span reservation per file; most source files stay under this.
const INITIAL_SPAN_CAPACITY: usize = 128;

/// A non-owning reference to one line's bytes within a loaded range.
///
/// Spans are produced in ascending offset order, non-overlapping, and never
/// include the `\n` delimiter. Splitting is byte-exact on `\n` alone: a
/// `\r` preceding the `\n` stays in the span, and callers wanting
/// normalized text strip it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Byte offset of the line start within the indexed range.
    pub offset: usize,
    /// Line length in bytes, excluding the delimiter.
    pub len: usize,
}

impl LineSpan {
    /// Resolves the span against the range it was indexed from.
    pub fn slice<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[self.offset..self.offset + self.len]
    }

    /// Offset one past the last byte of the line.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Splits `data` into line spans at each `\n`.
///
/// A missing final delimiter drops nothing: a trailing span covers any
/// remainder after the last `\n`. An empty range yields no spans. The scan
/// is memchr-driven and allocates nothing per line.
pub fn index(data: &[u8]) -> Vec<LineSpan> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut spans = Vec::with_capacity(INITIAL_SPAN_CAPACITY);
    let mut start = 0;

    for newline in memchr_iter(b'\n', data) {
        spans.push(LineSpan {
            offset: start,
            len: newline - start,
        });
        start = newline + 1;
    }

    if start != data.len() {
        spans.push(LineSpan {
            offset: start,
            len: data.len() - start,
        });
    }

    spans
}
