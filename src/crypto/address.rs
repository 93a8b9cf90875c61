//! Ethereum address representation and utilities.

use std::fmt;
use std::str::FromStr;

use primitive_types::U256;
use tiny_keccak::{Hasher, Keccak};

use crate::error::{Error, Result};

use super::decode_hex;

/// An Ethereum address (20 bytes).
///
/// Parsing accepts any hex case, so two textual forms that differ only in
/// case compare equal once parsed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address whose low 8 bytes are `value` in big-endian order.
    pub const fn from_low_u64_be(value: u64) -> Self {
        let low = value.to_be_bytes();
        let mut bytes = [0u8; 20];
        let mut i = 0;
        while i < 8 {
            bytes[12 + i] = low[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address left-padded with zeros to a 32-byte word.
    #[inline]
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Takes the low-order 20 bytes of a 32-byte digest.
    #[inline]
    pub fn from_word(word: &[u8; 32]) -> Self {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&word[12..]);
        Self(bytes)
    }

    /// Interprets the address as an unsigned 160-bit big-endian integer.
    pub(crate) fn to_u256(self) -> U256 {
        U256::from_big_endian(&self.0)
    }

    /// Keeps the low 160 bits of `value`.
    pub(crate) fn from_u256(value: U256) -> Self {
        let mut word = [0u8; 32];
        value.to_big_endian(&mut word);
        Self::from_word(&word)
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let mut hasher = Keccak::v256();
        hasher.update(hex_addr.as_bytes());
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = decode_hex(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; 20] = bytes
            .try_into()
            .map_err(|_| Error::InvalidAddressLength {
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_address() {
        // Test vector from EIP-55
        let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(addr.to_checksum(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn test_hex_output() {
        assert_eq!(Address::ZERO.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            Address::ZERO.to_hex_prefixed(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let lower: Address = "0x36615cf349d7f6344891b1e7ca7c72883f5dc049".parse().unwrap();
        let mixed: Address = "0x36615Cf349d7F6344891B1e7CA7C72883F5dc049".parse().unwrap();
        let bare: Address = "36615CF349D7F6344891B1E7CA7C72883F5DC049".parse().unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower, bare);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            "0x0100".parse::<Address>(),
            Err(Error::InvalidAddressLength { actual: 2 })
        );
        assert!(matches!(
            "0xnothex".parse::<Address>(),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_from_low_u64_be() {
        let addr = Address::from_low_u64_be(0x800a);
        assert_eq!(addr.to_hex(), "000000000000000000000000000000000000800a");
    }

    #[test]
    fn test_word_padding() {
        let addr = Address::from_bytes([0xff; 20]);
        let word = addr.to_word();
        assert_eq!(&word[..12], &[0u8; 12]);
        assert_eq!(Address::from_word(&word), addr);
    }

    #[test]
    fn test_u256_conversion_keeps_low_bits() {
        let addr = Address::from_bytes([0xee; 20]);
        assert_eq!(Address::from_u256(addr.to_u256()), addr);
        let wide = (U256::one() << 160) + U256::from(7u8);
        assert_eq!(Address::from_u256(wide), Address::from_low_u64_be(7));
    }
}
