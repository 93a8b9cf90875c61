//! Hashing of L2 -> L1 messages.
//!
//! A withdrawal is proven on L1 by the hash of the log the L1 messenger
//! emits for it:
//!   keccak256(shardId(1) || isService(1) || txNumberInBlock(2)
//!             || L1_MESSENGER(20) || pad32(sender)(32) || keccak256(message)(32))

use tracing::trace;

use crate::constants::L1_MESSENGER_ADDRESS;
use crate::crypto::{keccak256, keccak256_concat, Address};

const L2_SHARD_ID: u8 = 0;
const IS_SERVICE: u8 = 1;

/// Hashes a message sent from `sender` to L1 by the `tx_number_in_block`-th
/// transaction of its L2 block.
pub fn l2_to_l1_message_hash(
    sender: &Address,
    message: &[u8],
    tx_number_in_block: u16,
) -> [u8; 32] {
    let [tx_hi, tx_lo] = tx_number_in_block.to_be_bytes();
    let header = [L2_SHARD_ID, IS_SERVICE, tx_hi, tx_lo];

    let hash = keccak256_concat(&[
        header.as_slice(),
        L1_MESSENGER_ADDRESS.as_bytes(),
        &sender.to_word(),
        &keccak256(message),
    ]);
    trace!(%sender, tx_number_in_block, hash = %hex::encode(hash), "hashed L2 to L1 message");
    hash
}
