use tracing::debug;

/// A grow-only byte arena owned by one worker and reused across its
/// sequential file loads.
///
/// `grow` hands out storage without preserving previous contents: the buffer
/// is a write-before-read primitive, not persistent storage. Capacity never
/// shrinks, so after the first few large files a whole scan typically runs
/// without another allocation. The returned slice borrows the buffer
/// mutably, which keeps a [`FileView`](crate::loader::FileView) built on it
/// from outliving the storage it points into.
#[derive(Debug)]
pub struct ScratchBuffer {
    data: Vec<u8>,
}

impl ScratchBuffer {
    /// Creates an empty buffer. The first `grow` performs the first
    /// allocation.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Returns exactly `min_size` bytes of writable storage, reallocating
    /// only when the current capacity is insufficient.
    ///
    /// Growth discards old contents rather than copying them, and rounds
    /// the new capacity up to the next power of two so a run of
    /// slightly-larger files does not reallocate every time.
    pub fn grow(&mut self, min_size: usize) -> &mut [u8] {
        if self.data.len() < min_size {
            let capacity = min_size.checked_next_power_of_two().unwrap_or(min_size);
            debug!("Scratch buffer growing to {} bytes", capacity);
            self.data = vec![0; capacity];
        }
        &mut self.data[..min_size]
    }

    /// Current capacity in bytes. Monotonically non-decreasing over the
    /// buffer's lifetime.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }
}

impl Default for ScratchBuffer {
    fn default() -> Self {
        Self::new()
    }
}
