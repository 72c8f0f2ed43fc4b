//! Host-facing result codes

use super::PluginError;

/// Generic outcome the host understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginResult {
    Ok,
    Error,
}

impl<T> From<&Result<T, PluginError>> for PluginResult {
    fn from(result: &Result<T, PluginError>) -> Self {
        match result {
            Ok(_) => PluginResult::Ok,
            Err(_) => PluginResult::Error,
        }
    }
}

/// Character budgets of the presentation surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct DisplayLimits {
    #[serde(default = "default_title_max")]
    pub title_max: usize,
    #[serde(default = "default_value_max")]
    pub value_max: usize,
}

fn default_title_max() -> usize {
    32
}

fn default_value_max() -> usize {
    100
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            title_max: default_title_max(),
            value_max: default_value_max(),
        }
    }
}
