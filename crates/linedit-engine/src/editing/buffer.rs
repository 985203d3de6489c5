use std::ops::Range;

use crate::editing::replace::ReplaceError;

/// Bounded text buffer holding newline-delimited content
///
/// The buffer owns the full file content as bytes plus an explicit
/// `max_capacity`. The logical length may never exceed `max_capacity - 1`:
/// one byte stays reserved for the end-of-text sentinel of the original
/// fixed-buffer contract, so the capacity arithmetic matches a
/// `char[max_capacity]` backing store exactly.
///
/// Lines are addressed only by 0-based ordinal position. A buffer ending
/// in `\n` has an addressable empty final line; an empty buffer has zero
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    /// Buffer content up to the logical end (sentinel excluded)
    pub(crate) bytes: Vec<u8>,
    /// Total capacity including the reserved sentinel byte
    pub(crate) max_capacity: usize,
    /// Version counter incremented on each successful edit
    pub(crate) version: u64,
}

impl TextBuffer {
    /// Create a buffer from raw bytes, enforcing the capacity invariant
    pub fn from_bytes(bytes: &[u8], max_capacity: usize) -> Result<Self, ReplaceError> {
        if max_capacity == 0 || bytes.len() > max_capacity - 1 {
            return Err(ReplaceError::CapacityExceeded {
                len: bytes.len(),
                max_capacity,
            });
        }

        Ok(Self {
            bytes: bytes.to_vec(),
            max_capacity,
            version: 0,
        })
    }

    /// Get the buffer's content up to the logical end (exact round-trip)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Logical length in bytes, excluding the reserved sentinel
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Total capacity including the reserved sentinel byte
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Get the current version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of addressable lines
    ///
    /// An empty buffer has no lines; otherwise every `\n` starts a new
    /// line, so a trailing `\n` yields an empty final line.
    pub fn line_count(&self) -> usize {
        if self.bytes.is_empty() {
            return 0;
        }
        self.bytes.iter().filter(|&&b| b == b'\n').count() + 1
    }

    /// Locate the byte span of a line by 0-based ordinal
    ///
    /// Scans forward counting newline delimiters and never reads past the
    /// logical end. Returns `None` when the buffer ends before
    /// `line_index` lines have been found.
    pub fn line_span(&self, line_index: usize) -> Option<Range<usize>> {
        if self.bytes.is_empty() {
            return None;
        }

        let mut start = 0;
        for _ in 0..line_index {
            let newline = self.bytes[start..].iter().position(|&b| b == b'\n')?;
            start += newline + 1;
        }

        let end = self.bytes[start..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.bytes.len(), |newline| start + newline);

        Some(start..end)
    }

    /// Get a line's content by 0-based ordinal, without its delimiter
    pub fn line(&self, line_index: usize) -> Option<&[u8]> {
        self.line_span(line_index).map(|span| &self.bytes[span])
    }
}
