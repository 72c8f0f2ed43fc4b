//! Per-network presentation table

use serde::Deserialize;

/// Address prefix, native ticker and fallback decimals for one chain target
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Network {
    pub name: String,
    /// Leading byte written in front of every 20-byte address before encoding
    pub address_prefix: u8,
    pub ticker: String,
    #[serde(default = "default_decimals")]
    pub default_decimals: u8,
}

fn default_decimals() -> u8 {
    18
}

impl Network {
    pub fn mainnet() -> Self {
        Self {
            name: "mainnet".to_string(),
            address_prefix: 0x41,
            ticker: "TRX".to_string(),
            default_decimals: default_decimals(),
        }
    }

    pub fn shasta() -> Self {
        Self {
            name: "shasta".to_string(),
            address_prefix: 0xa0,
            ticker: "TRX".to_string(),
            default_decimals: default_decimals(),
        }
    }

    /// Built-in networks, mainnet first
    pub fn builtin() -> Vec<Network> {
        vec![Self::mainnet(), Self::shasta()]
    }

    /// Find a network by name (case-insensitive), configured entries first
    pub fn find(name: &str, configured: &[Network]) -> Option<Network> {
        configured
            .iter()
            .cloned()
            .chain(Self::builtin())
            .find(|network| network.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::mainnet()
    }
}
