//! Hash primitives and value types shared by the derivations.
//!
//! This module provides:
//! - Keccak-256 and SHA-256 over arbitrary bytes
//! - `0x`-tolerant hex decoding
//! - The `Address` and `BytecodeHash` value types

mod address;
mod hash;

pub use address::Address;
pub use hash::{BytecodeHash, BYTECODE_HASH_VERSION};

use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use crate::error::{Error, Result};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// Keccak-256 over the concatenation of `parts`, without allocating the preimage.
pub fn keccak256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}

/// SHA-256 of arbitrary bytes (output 32 bytes).
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// Decodes a hex string, with or without a `0x` prefix, in either case.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(stripped)?)
}

/// Decodes a hex string that must hold exactly 32 bytes (hashes, salts).
pub fn parse_bytes32(input: &str) -> Result<[u8; 32]> {
    let bytes = decode_hex(input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| Error::InvalidBytes32Length {
            actual: bytes.len(),
        })
}
