//! Errors reported by the derivation functions.
//!
//! Every error is an input error: the same input always fails the same
//! way, so callers should fix the input rather than retry.

/// Why a bytecode cannot be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BytecodeLengthError {
    /// Length in bytes is not a multiple of 32.
    #[error("bytecode length in bytes must be divisible by 32, got {len}")]
    NotWordAligned { len: usize },

    /// Word count does not fit in the 16-bit length field.
    #[error("bytecode is {words} words long, the maximum is 65535")]
    TooLong { words: usize },

    #[error("bytecode length in 32-byte words must be odd, got {words}")]
    EvenWordCount { words: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid address: expected 20 bytes, got {actual}")]
    InvalidAddressLength { actual: usize },

    #[error("Invalid 32-byte value: expected 32 bytes, got {actual}")]
    InvalidBytes32Length { actual: usize },

    #[error("Invalid bytecode: {0}")]
    InvalidBytecodeLength(#[from] BytecodeLengthError),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::InvalidHex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
