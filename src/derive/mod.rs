//! Deterministic derivations over addresses and bytecode.
//!
//! Each function here uses the ZKsync Era parameters. To derive against
//! other parameters, call the same operation on a
//! [`NetworkConfig`](crate::config::NetworkConfig).

pub mod alias;
pub mod bytecode;
pub mod create;
pub mod message;
pub mod token;

pub use alias::{apply_l1_to_l2_alias, undo_l1_to_l2_alias};
pub use bytecode::{hash_bytecode, hash_bytecode_hex, validate_bytecode_len};
pub use create::{create2_address, create_address};
pub use message::l2_to_l1_message_hash;
pub use token::{is_address_eq, is_eth, is_eth_hex};
