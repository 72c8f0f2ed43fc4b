use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::warn;

use crate::core::{DisplayLimits, Network};

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSpec {
    pub address: String,
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Name of the active network
    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub networks: Vec<Network>,

    #[serde(default)]
    pub tokens: Vec<TokenSpec>,

    #[serde(default)]
    pub display: DisplayLimits,
}

impl TokenSpec {
    pub fn display_symbol(&self) -> String {
        self.symbol
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| short_addr(&self.address))
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve the active network; `name` overrides the configured one.
    /// Unknown names fall back to mainnet.
    pub fn resolve_network(&self, name: Option<&str>) -> Network {
        let Some(name) = name.or(self.network.as_deref()) else {
            return Network::mainnet();
        };
        Network::find(name, &self.networks).unwrap_or_else(|| {
            warn!(network = name, "unknown network, using mainnet");
            Network::mainnet()
        })
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    Config::from_toml_str(&content).unwrap_or_else(|err| {
        warn!(path = %path.display(), %err, "ignoring unparsable config");
        Config::default()
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("TRON_PLUGIN_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("tron-plugin").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("tron-plugin").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "tron-plugin", "tron-plugin")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

fn short_addr(value: &str) -> String {
    let value = value.trim();
    if value.len() <= 10 {
        return value.to_string();
    }
    let start: String = value.chars().take(6).collect();
    let end: String = value
        .chars()
        .rev()
        .take(4)
        .collect::<String>()
        .chars()
        .rev()
        .collect();
    format!("{}..{}", start, end)
}
