//! Network parameters used by the derivations.
//!
//! `NetworkConfig::ERA` carries the live ZKsync Era values and is what the
//! free functions in [`crate::derive`] use. Tooling that targets a network
//! with different parameters builds its own `NetworkConfig` and calls the
//! methods on it instead.

use primitive_types::U256;

use crate::constants::{
    CREATE2_PREFIX, CREATE_PREFIX, L1_TO_L2_ALIAS_OFFSET, L2_BASE_TOKEN_ADDRESS,
    LEGACY_ETH_ADDRESS,
};
use crate::crypto::{Address, BytecodeHash};
use crate::derive::{alias, create, token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Domain prefix of the CREATE preimage.
    pub create_prefix: [u8; 32],
    /// Domain prefix of the CREATE2 preimage.
    pub create2_prefix: [u8; 32],
    /// Offset between an L1 address and its L2 alias.
    pub alias_offset: Address,
    /// First reserved native-token address.
    pub legacy_eth_address: Address,
    /// Second reserved native-token address (base token system contract).
    pub base_token_address: Address,
}

impl NetworkConfig {
    /// ZKsync Era mainnet/testnet parameters.
    pub const ERA: Self = Self {
        create_prefix: CREATE_PREFIX,
        create2_prefix: CREATE2_PREFIX,
        alias_offset: L1_TO_L2_ALIAS_OFFSET,
        legacy_eth_address: LEGACY_ETH_ADDRESS,
        base_token_address: L2_BASE_TOKEN_ADDRESS,
    };

    pub fn with_alias_offset(mut self, offset: Address) -> Self {
        self.alias_offset = offset;
        self
    }

    pub fn with_base_token_address(mut self, address: Address) -> Self {
        self.base_token_address = address;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alias_offset == Address::ZERO {
            return Err(ConfigError::ZeroAliasOffset);
        }

        if self.create_prefix == self.create2_prefix {
            return Err(ConfigError::SharedCreatePrefix);
        }

        Ok(())
    }

    /// Address of a contract deployed by `sender` with the given nonce.
    pub fn create_address(&self, sender: &Address, nonce: impl Into<U256>) -> Address {
        create::derive_create(&self.create_prefix, sender, nonce.into())
    }

    /// Address of a contract deployed by `sender` through CREATE2.
    ///
    /// `salt` is hashed verbatim; protocol deployments use 32 bytes.
    pub fn create2_address(
        &self,
        sender: &Address,
        bytecode_hash: &BytecodeHash,
        salt: &[u8],
        constructor_input: &[u8],
    ) -> Address {
        create::derive_create2(
            &self.create2_prefix,
            sender,
            bytecode_hash,
            salt,
            constructor_input,
        )
    }

    pub fn apply_l1_to_l2_alias(&self, l1_address: &Address) -> Address {
        alias::add_offset(l1_address, &self.alias_offset)
    }

    pub fn undo_l1_to_l2_alias(&self, l2_address: &Address) -> Address {
        alias::sub_offset(l2_address, &self.alias_offset)
    }

    pub fn is_eth(&self, address: &Address) -> bool {
        token::is_reserved(
            address,
            &[self.legacy_eth_address, self.base_token_address],
        )
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::ERA
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid network config: alias offset must be non-zero")]
    ZeroAliasOffset,

    #[error("Invalid network config: CREATE and CREATE2 must use distinct prefixes")]
    SharedCreatePrefix,
}
