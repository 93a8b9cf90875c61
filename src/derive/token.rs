//! Recognition of the native gas token.

use crate::config::NetworkConfig;
use crate::crypto::Address;
use crate::error::Result;

/// Returns true if `address` denotes ETH: either the zero address used by
/// bridges or the L2 base token system contract.
pub fn is_eth(address: &Address) -> bool {
    NetworkConfig::ERA.is_eth(address)
}

/// Parses `address` in any hex case, then checks it with [`is_eth`].
pub fn is_eth_hex(address: &str) -> Result<bool> {
    Ok(is_eth(&address.parse()?))
}

/// Compares two textual addresses, ignoring hex case.
pub fn is_address_eq(a: &str, b: &str) -> Result<bool> {
    Ok(a.parse::<Address>()? == b.parse::<Address>()?)
}

pub(crate) fn is_reserved(address: &Address, reserved: &[Address]) -> bool {
    reserved.contains(address)
}
