//! Versioned hashing of deployed bytecode.
//!
//! Bytecode is never padded here: input that does not already satisfy the
//! deployment format is rejected, exactly as the network's own deployer
//! rejects it.

use tracing::{debug, trace};

use crate::constants::MAX_BYTECODE_LEN_WORDS;
use crate::crypto::{decode_hex, sha256, BytecodeHash};
use crate::error::{BytecodeLengthError, Result};

/// Computes the versioned hash Era uses to reference `bytecode`.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBytecodeLength`] when the length is not a
/// whole number of 32-byte words, exceeds 65535 words, or is an even
/// number of words.
pub fn hash_bytecode(bytecode: &[u8]) -> Result<BytecodeHash> {
    let words = validate_bytecode_len(bytecode.len()).inspect_err(|err| {
        debug!(len = bytecode.len(), %err, "rejected bytecode");
    })?;

    let hash = BytecodeHash::from_digest(sha256(bytecode), words);
    trace!(words, %hash, "hashed bytecode");
    Ok(hash)
}

/// Decodes `0x`-prefixed (or bare) hex bytecode and hashes it.
pub fn hash_bytecode_hex(bytecode: &str) -> Result<BytecodeHash> {
    hash_bytecode(&decode_hex(bytecode)?)
}

/// Returns the word count of a bytecode of `len` bytes if it can be deployed.
pub fn validate_bytecode_len(len: usize) -> std::result::Result<u16, BytecodeLengthError> {
    if len % 32 != 0 {
        return Err(BytecodeLengthError::NotWordAligned { len });
    }

    let words = len / 32;
    if words > MAX_BYTECODE_LEN_WORDS {
        return Err(BytecodeLengthError::TooLong { words });
    }

    if words % 2 == 0 {
        return Err(BytecodeLengthError::EvenWordCount { words });
    }

    u16::try_from(words).map_err(|_| BytecodeLengthError::TooLong { words })
}
