//! Error types for html-tailor.
//!
//! Malformed markup is never an error: repairing it is the engine's job, so
//! the error surface is limited to conditions orthogonal to well-formedness
//! (byte-stream decoding, input size limits) plus rejection of unrecognized
//! level symbols at API boundaries.

use thiserror::Error;

/// Result type alias for tailoring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for html-tailor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The input byte stream could not be decoded into text.
  #[error("Encoding error: {0}")]
  Encoding(#[from] EncodingError),

  /// A configured resource limit was exceeded.
  #[error("Resource error: {0}")]
  Resource(#[from] ResourceError),

  /// A tailoring level symbol was not recognized.
  #[error("Level error: {0}")]
  Level(#[from] LevelParseError),
}

/// Byte-stream decoding failures.
///
/// Reported by [`tailor_bytes`](crate::Tailor::tailor_bytes); distinct from
/// malformed markup, which is always repaired rather than reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
  /// The input is not valid UTF-8 and carries no BOM.
  #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
  InvalidUtf8 { valid_up_to: usize },

  /// The BOM-declared encoding could not decode the input.
  #[error("input declared {encoding} via BOM but could not be decoded as it")]
  Undecodable { encoding: &'static str },
}

/// Resource exhaustion guards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
  /// The input exceeds the engine's configured size limit.
  #[error("input of {len} bytes exceeds the configured limit of {limit} bytes")]
  InputTooLarge { len: usize, limit: usize },
}

/// Rejection of level symbols outside the closed four-value set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelParseError {
  #[error("unrecognized tailoring level {value:?} (expected NONE, SAFE, TEXT_WITH_BREAK_LINE or TEXT)")]
  Unrecognized { value: String },
}
