use thiserror::Error;

use crate::editing::{Patch, TextBuffer};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("line {line_index} not found: buffer has {line_count} line(s)")]
    LineNotFound {
        line_index: usize,
        line_count: usize,
    },
    #[error("existing content leaves no room within the {max_capacity} byte capacity")]
    InsufficientCapacity { max_capacity: usize },
    #[error("replacement text contains an embedded newline")]
    EmbeddedNewline,
    #[error("content of {len} bytes exceeds buffer capacity of {max_capacity}")]
    CapacityExceeded { len: usize, max_capacity: usize },
}

impl TextBuffer {
    /// Replace the content of one line in place
    ///
    /// The target line keeps its delimiters; only its content changes, and
    /// the rest of the buffer shifts by the length difference. When the
    /// result would not fit within `max_capacity` (one byte of which stays
    /// reserved for the end-of-text sentinel), the replacement is
    /// truncated to fit and the dropped byte count is reported via
    /// [`Patch::dropped`].
    ///
    /// One trailing `\n` on the replacement is stripped, as produced by
    /// line-oriented input. An interior `\n` is rejected.
    ///
    /// On any error the buffer is left bit-for-bit unmodified.
    pub fn replace_line(
        &mut self,
        line_index: usize,
        replacement: &[u8],
    ) -> Result<Patch, ReplaceError> {
        let replacement = match replacement {
            [rest @ .., b'\n'] => rest,
            other => other,
        };
        if replacement.contains(&b'\n') {
            return Err(ReplaceError::EmbeddedNewline);
        }

        let span = self
            .line_span(line_index)
            .ok_or_else(|| ReplaceError::LineNotFound {
                line_index,
                line_count: self.line_count(),
            })?;

        let old_len = self.bytes.len();
        let head_len = span.start;
        let tail_len = old_len - span.end;

        // Room left for the line itself once head, tail and the reserved
        // sentinel byte are accounted for.
        let room = self
            .max_capacity
            .checked_sub(head_len + tail_len + 1)
            .ok_or(ReplaceError::InsufficientCapacity {
                max_capacity: self.max_capacity,
            })?;

        let n = replacement.len().min(room);
        let dropped = replacement.len() - n;
        let new_len = old_len - span.len() + n;
        let new_tail_start = span.start + n;

        // Overlap-safe tail shift, correct for both growth and shrink.
        if n > span.len() {
            self.bytes.resize(new_len, 0);
            self.bytes.copy_within(span.end..old_len, new_tail_start);
        } else if n < span.len() {
            self.bytes.copy_within(span.end..old_len, new_tail_start);
            self.bytes.truncate(new_len);
        }
        self.bytes[span.start..new_tail_start].copy_from_slice(&replacement[..n]);

        self.version += 1;

        Ok(Patch {
            changed: span.start..new_tail_start,
            dropped,
            version: self.version,
        })
    }
}
