//! L1 <-> L2 address aliasing.
//!
//! A message sent from an L1 contract arrives on L2 from
//! `l1 + L1_TO_L2_ALIAS_OFFSET (mod 2^160)`, so an L1 contract can never
//! impersonate an L2 account that happens to share its bit pattern.

use primitive_types::U256;
use tracing::trace;

use crate::config::NetworkConfig;
use crate::crypto::Address;

/// Maps an L1 contract address to the address its messages come from on L2.
pub fn apply_l1_to_l2_alias(l1_address: &Address) -> Address {
    NetworkConfig::ERA.apply_l1_to_l2_alias(l1_address)
}

/// Inverse of [`apply_l1_to_l2_alias`]. Wraps around 2^160 instead of underflowing.
pub fn undo_l1_to_l2_alias(l2_address: &Address) -> Address {
    NetworkConfig::ERA.undo_l1_to_l2_alias(l2_address)
}

fn address_space() -> U256 {
    U256::one() << 160
}

// Both operands are below 2^160, so neither sum can overflow 256 bits.
pub(crate) fn add_offset(address: &Address, offset: &Address) -> Address {
    let sum = address.to_u256() + offset.to_u256();
    let aliased = Address::from_u256(sum % address_space());
    trace!(l1 = %address, l2 = %aliased, "applied L1 to L2 alias");
    aliased
}

pub(crate) fn sub_offset(address: &Address, offset: &Address) -> Address {
    let complement = address_space() - offset.to_u256();
    let sum = address.to_u256() + complement;
    let original = Address::from_u256(sum % address_space());
    trace!(l2 = %address, l1 = %original, "undid L1 to L2 alias");
    original
}
