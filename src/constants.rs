//! Protocol constants of ZKsync Era.
//!
//! These values are fixed by the live network. Changing any of them
//! produces addresses and hashes the network will not recognise.

use crate::crypto::Address;

/// `keccak256("zksyncCreate")`, prefix of the CREATE preimage.
pub const CREATE_PREFIX: [u8; 32] = [
    0x63, 0xba, 0xe3, 0xa9, 0x95, 0x1d, 0x38, 0xe8, 0xa3, 0xfb, 0xb7, 0xb7, 0x09, 0x09, 0xaf, 0xc1,
    0x20, 0x06, 0x10, 0xfc, 0x5b, 0xc5, 0x5a, 0xde, 0x24, 0x2f, 0x81, 0x59, 0x74, 0x67, 0x4f, 0x23,
];

/// `keccak256("zksyncCreate2")`, prefix of the CREATE2 preimage.
pub const CREATE2_PREFIX: [u8; 32] = [
    0x20, 0x20, 0xdb, 0xa9, 0x1b, 0x30, 0xcc, 0x00, 0x06, 0x18, 0x8a, 0xf7, 0x94, 0xc2, 0xfb, 0x30,
    0xdd, 0x85, 0x20, 0xdb, 0x7e, 0x2c, 0x08, 0x8b, 0x7f, 0xc7, 0xc1, 0x03, 0xc0, 0x0c, 0xa4, 0x94,
];

/// Offset added to an L1 contract address to obtain its L2 alias.
pub const L1_TO_L2_ALIAS_OFFSET: Address = Address::from_bytes([
    0x11, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x11, 0x11,
]);

/// Address used by bridges and SDKs to denote ETH.
pub const LEGACY_ETH_ADDRESS: Address = Address::ZERO;

// System contracts live in the reserved range below 0xffff.
pub const BOOTLOADER_FORMAL_ADDRESS: Address = Address::from_low_u64_be(0x8001);
pub const NONCE_HOLDER_ADDRESS: Address = Address::from_low_u64_be(0x8003);
pub const CONTRACT_DEPLOYER_ADDRESS: Address = Address::from_low_u64_be(0x8006);
pub const L1_MESSENGER_ADDRESS: Address = Address::from_low_u64_be(0x8008);
/// Base token (ETH on Era) system contract.
pub const L2_BASE_TOKEN_ADDRESS: Address = Address::from_low_u64_be(0x800a);

/// Largest bytecode, in 32-byte words, whose length fits the hash header.
pub const MAX_BYTECODE_LEN_WORDS: usize = u16::MAX as usize;
