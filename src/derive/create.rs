//! Contract address prediction.
//!
//! Era derives deployment addresses differently from Ethereum:
//!   CREATE  = keccak256(CREATE_PREFIX  || pad32(sender) || be32(nonce))[12..32]
//!   CREATE2 = keccak256(CREATE2_PREFIX || pad32(sender) || salt
//!                       || bytecodeHash || keccak256(constructorInput))[12..32]
//!
//! CREATE2 commits to the versioned bytecode hash rather than the init code,
//! since Era stores and references deployed code by that hash.

use primitive_types::U256;
use tracing::trace;

use crate::config::NetworkConfig;
use crate::crypto::{keccak256, keccak256_concat, Address, BytecodeHash};

/// Computes the address of a contract deployed by `sender` at `nonce`.
pub fn create_address(sender: &Address, nonce: impl Into<U256>) -> Address {
    NetworkConfig::ERA.create_address(sender, nonce)
}

/// Computes the CREATE2 address of a contract deployed by `sender`.
///
/// The result depends only on the arguments, never on the sender's nonce.
pub fn create2_address(
    sender: &Address,
    bytecode_hash: &BytecodeHash,
    salt: &[u8],
    constructor_input: &[u8],
) -> Address {
    NetworkConfig::ERA.create2_address(sender, bytecode_hash, salt, constructor_input)
}

pub(crate) fn derive_create(prefix: &[u8; 32], sender: &Address, nonce: U256) -> Address {
    let mut nonce_word = [0u8; 32];
    nonce.to_big_endian(&mut nonce_word);

    let hash = keccak256_concat(&[prefix.as_slice(), &sender.to_word(), &nonce_word]);
    let address = Address::from_word(&hash);
    trace!(%sender, %nonce, %address, "derived CREATE address");
    address
}

pub(crate) fn derive_create2(
    prefix: &[u8; 32],
    sender: &Address,
    bytecode_hash: &BytecodeHash,
    salt: &[u8],
    constructor_input: &[u8],
) -> Address {
    let input_hash = keccak256(constructor_input);

    let hash = keccak256_concat(&[
        prefix.as_slice(),
        &sender.to_word(),
        salt,
        bytecode_hash.as_bytes(),
        &input_hash,
    ]);
    let address = Address::from_word(&hash);
    trace!(
        %sender,
        %bytecode_hash,
        salt = %hex::encode(salt),
        %address,
        "derived CREATE2 address"
    );
    address
}
