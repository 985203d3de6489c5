/// Result of applying a line replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte range of the buffer now holding the replacement text
    pub changed: std::ops::Range<usize>,
    /// Replacement bytes dropped to fit the capacity (0 = not truncated)
    pub dropped: usize,
    /// Buffer version after the edit
    pub version: u64,
}

impl Patch {
    /// Whether the replacement was shortened to fit the buffer capacity
    pub fn truncated(&self) -> bool {
        self.dropped > 0
    }
}
