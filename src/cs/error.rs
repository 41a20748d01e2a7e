//! Error types shared by the `cs` algorithms.

use thiserror::Error;

/// Errors raised while turning external input into codec input.
///
/// The codec operations themselves are total over bit slices; failures only
/// occur at the text boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A binary string contained something other than `'0'` or `'1'`.
    #[error("invalid binary digit {found:?} at index {index}")]
    InvalidBinary { index: usize, found: char },
}

/// Result type for `cs` operations
pub type Result<T> = std::result::Result<T, Error>;
