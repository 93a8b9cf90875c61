//! # zksync_derive
//!
//! Deterministic address and bytecode-hash derivations for ZKsync Era.
//!
//! ## Architecture
//!
//! - `crypto`: Hash primitives, `Address` and `BytecodeHash`
//! - `derive`: CREATE/CREATE2 prediction, L1 <-> L2 aliasing, bytecode
//!   hashing, ETH recognition, L2 -> L1 message hashing
//! - `config`: Network parameters
//! - `constants`: Protocol constants and system contract addresses
//!
//! Every function is pure: no I/O, no shared state, safe to call from any
//! thread.

pub mod config;
pub mod constants;
pub mod crypto;
pub mod derive;
pub mod error;

pub use config::{ConfigError, NetworkConfig};
pub use crypto::{Address, BytecodeHash};
pub use derive::{
    apply_l1_to_l2_alias, create2_address, create_address, hash_bytecode, hash_bytecode_hex,
    is_address_eq, is_eth, is_eth_hex, l2_to_l1_message_hash, undo_l1_to_l2_alias,
};
pub use error::{BytecodeLengthError, Error, Result};
pub use primitive_types::U256;
