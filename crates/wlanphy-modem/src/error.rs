use thiserror::Error;

/// Errors surfaced by the modulation core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The configured payload scheme is not one of the supported names.
    #[error("unknown modulation scheme = {0}")]
    UnknownScheme(String),
    /// The bit source is too short to hold the SIGNAL field.
    #[error("input holds {len} bits, the SIGNAL field alone needs 48")]
    TruncatedHeader { len: usize },
    /// A textual bit string contained something other than '0' or '1'.
    #[error("invalid bit {ch:?} at byte {offset}")]
    InvalidBit { ch: char, offset: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
