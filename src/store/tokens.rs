//! Token metadata lookup - resolves decimals and ticker for a token address

use std::collections::HashMap;

use alloy_primitives::Address;
use tracing::warn;

use crate::config::TokenSpec;
use crate::domain::abi::TronAddress;
use crate::infrastructure::format::parse_address;

/// Outcome of a token lookup.
///
/// `found == false` is not an error; the renderer falls back to the
/// network's native ticker and default decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub decimals: u8,
    pub symbol: String,
    pub found: bool,
}

impl TokenMetadata {
    pub fn not_found() -> Self {
        Self {
            decimals: 0,
            symbol: String::new(),
            found: false,
        }
    }
}

/// Trait for token metadata sources
pub trait TokenLookup {
    /// Look up a token by contract address; the prefix byte is ignored
    fn lookup(&self, address: &TronAddress) -> TokenMetadata;
}

/// Lookup that never knows any token
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTokens;

impl TokenLookup for NoTokens {
    fn lookup(&self, _address: &TronAddress) -> TokenMetadata {
        TokenMetadata::not_found()
    }
}

/// Registry of known tokens indexed by raw 20-byte address
#[derive(Debug, Default, Clone)]
pub struct TokenRegistry {
    tokens: HashMap<Address, TokenMetadata>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from configured token entries, skipping unparsable addresses
    /// and entries without decimals.
    pub fn from_specs(specs: &[TokenSpec]) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            let Some(address) = parse_address(&spec.address) else {
                warn!(address = %spec.address, "ignoring token with invalid address");
                continue;
            };
            let Some(decimals) = spec.decimals else {
                warn!(address = %spec.address, "ignoring token without decimals");
                continue;
            };
            registry.insert(address, decimals, spec.display_symbol());
        }
        registry
    }

    /// Insert a token
    ///
    /// Note: First entry for a given address wins (no overwrite)
    pub fn insert(&mut self, address: TronAddress, decimals: u8, symbol: impl Into<String>) {
        self.tokens.entry(address.raw()).or_insert(TokenMetadata {
            decimals,
            symbol: symbol.into(),
            found: true,
        });
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl TokenLookup for TokenRegistry {
    fn lookup(&self, address: &TronAddress) -> TokenMetadata {
        self.tokens
            .get(&address.raw())
            .cloned()
            .unwrap_or_else(TokenMetadata::not_found)
    }
}
