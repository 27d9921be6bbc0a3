use thiserror::Error;

/// Errors surfaced by the signature and verification layer.
///
/// All failures flow back to the caller through this enum; invalid inputs
/// never panic. A verification function that returns an error has produced
/// no verdict.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BLSError {
    /// A byte blob has the wrong length or non-canonical internal structure.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// A decoded point fails the curve equation or the r-order subgroup check.
    #[error("point is not on the curve or not in the r-order subgroup")]
    NotOnCurve,

    /// Aggregate verification was called with zero public keys.
    #[error("empty public key set")]
    EmptyKeySet,

    /// Distinct-message aggregate verification with unequal input lengths.
    #[error("mismatched number of messages and public keys: {messages} != {keys}")]
    LengthMismatch { messages: usize, keys: usize },

    /// The underlying digest reported an error. Reserved; SHA-256 and
    /// Keccak-256 do not fail in practice.
    #[error("digest failure: {0}")]
    HashFailure(String),
}
