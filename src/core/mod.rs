pub mod error;
pub mod network;
pub mod result;

pub use error::PluginError;
pub use network::Network;
pub use result::{DisplayLimits, PluginResult};
