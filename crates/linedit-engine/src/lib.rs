pub mod editing;
pub mod io;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{buffer::*, patch::*, replace::*};
pub use io::*;
