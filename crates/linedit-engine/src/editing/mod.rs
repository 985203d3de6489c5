/*!
 * # Editing Core Module
 *
 * The entire file lives in a single bounded [`TextBuffer`]: an owned byte
 * buffer with an explicit capacity limit, replacing the fixed stack array
 * of the original C utility with bounds-checked slice operations.
 *
 * Key principles:
 *
 * ### 1. Single Source of Truth: the byte buffer
 * - Lines are never materialised as separate values; a **line** is just a
 *   byte span between `\n` delimiters (or the buffer boundaries),
 *   addressed by 0-based ordinal.
 * - Saving writes the buffer bytes verbatim, so content round-trips
 *   exactly except for the one replaced line.
 *
 * ### 2. Bounded capacity with an explicit reserve
 * - The logical length never exceeds `max_capacity - 1`; one byte stays
 *   reserved for the end-of-text sentinel of the original fixed-buffer
 *   contract, keeping the capacity arithmetic identical.
 *
 * ### 3. All-or-nothing edits
 * - [`TextBuffer::replace_line`] either succeeds (possibly truncating the
 *   replacement to fit, reported via [`Patch::dropped`]) or leaves the
 *   buffer bit-for-bit unmodified.
 *
 * ## Module Structure
 *
 * - **`buffer`**: the `TextBuffer` type and line addressing
 * - **`replace`**: the in-place line replacement operation and its errors
 * - **`patch`**: edit result metadata (changed range, truncation, version)
 */

// Module exports
pub mod buffer;
pub mod patch;
pub mod replace;

// Public API re-exports
pub use buffer::TextBuffer;
pub use patch::Patch;
pub use replace::ReplaceError;
