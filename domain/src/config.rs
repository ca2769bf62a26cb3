use serde::{Deserialize, Serialize};

use crate::calculator::DEFAULT_HISTORY_LIMIT;

/// Client settings, usually embedded in the host page as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base_url: String,
    /// Country codes sent with every holiday lookup
    pub holiday_countries: Vec<String>,
    pub banner_timeout_ms: u32,
    pub history_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            holiday_countries: vec!["US".to_string(), "DE".to_string()],
            banner_timeout_ms: 3000,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse an optional embedded config, falling back to defaults when it
    /// is absent or malformed
    pub fn from_embedded(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!(target: "config", "Ignoring invalid client config: {}", e);
                Self::default()
            }),
        }
    }
}
