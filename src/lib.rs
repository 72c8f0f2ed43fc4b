//! Streaming decoder and screen renderer for Tron contract-call plugins
//!
//! Parameters arrive one 32-byte chunk at a time; the decoder never holds
//! the whole call data. Once the stream ends the renderer produces a fixed
//! number of (title, value) screens for the device.

pub mod config;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod plugin;
pub mod store;

pub use crate::core::{DisplayLimits, Network, PluginError, PluginResult};
pub use crate::domain::abi::{CallData, CallShape, FieldSlot, ParseContext, TronAddress};
pub use crate::domain::screen::DisplayPair;
pub use crate::plugin::{ContractId, Plugin, PLUGIN_NAME};
pub use crate::store::{NoTokens, TokenLookup, TokenMetadata, TokenRegistry};
