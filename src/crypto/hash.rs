//! Versioned bytecode hash.
//!
//! Layout (32 bytes):
//!   [0]     version (currently 1)
//!   [1]     reserved, always 0
//!   [2..4]  length of the bytecode in 32-byte words, big-endian u16
//!   [4..32] bytes 4..32 of the SHA-256 digest of the bytecode

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::parse_bytes32;

/// Version tag written into byte 0 of every bytecode hash.
pub const BYTECODE_HASH_VERSION: u8 = 1;

/// Content identifier of deployed bytecode.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BytecodeHash([u8; 32]);

impl BytecodeHash {
    /// Wraps 32 raw bytes. No check is made on the header bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Builds a hash from a SHA-256 digest and the bytecode's word count.
    pub(crate) fn from_digest(mut digest: [u8; 32], words: u16) -> Self {
        digest[0] = BYTECODE_HASH_VERSION;
        digest[1] = 0;
        digest[2..4].copy_from_slice(&words.to_be_bytes());
        Self(digest)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[inline]
    pub const fn version(&self) -> u8 {
        self.0[0]
    }

    /// Length of the hashed bytecode in 32-byte words.
    #[inline]
    pub const fn word_count(&self) -> u16 {
        u16::from_be_bytes([self.0[2], self.0[3]])
    }

    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for BytecodeHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_bytes32(s).map(Self)
    }
}

impl From<[u8; 32]> for BytecodeHash {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for BytecodeHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for BytecodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytecodeHash({})", self.to_hex_prefixed())
    }
}

impl fmt::Display for BytecodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}
