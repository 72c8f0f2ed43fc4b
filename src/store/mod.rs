//! Local stores backing external lookups

mod tokens;

pub use tokens::{NoTokens, TokenLookup, TokenMetadata, TokenRegistry};
