use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Persisted configuration document, one JSON file for the whole bot
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ConfigDocument {
    /// Guild ID -> per-server settings
    #[serde(default)]
    pub servers: HashMap<String, ServerEntry>,
    #[serde(default)]
    pub global_settings: GlobalSettings,
}

/// Per-guild settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ServerEntry {
    /// Channels where the info command is allowed
    #[serde(default)]
    pub info_channels: Vec<String>,
}

/// Bot-wide defaults; missing keys in an older file fall back to these
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct GlobalSettings {
    #[serde(default)]
    pub default_all_channels: bool,
    #[serde(default = "default_cooldown")]
    pub default_cooldown: u64,
    #[serde(default = "default_daily_limit")]
    pub default_daily_limit: u32,
}

fn default_cooldown() -> u64 {
    30
}

fn default_daily_limit() -> u32 {
    30
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            default_all_channels: false,
            default_cooldown: default_cooldown(),
            default_daily_limit: default_daily_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_global_keys_are_backfilled() {
        let raw = r#"{"servers": {}, "global_settings": {"default_all_channels": true}}"#;
        let doc: ConfigDocument = serde_json::from_str(raw).unwrap();
        assert!(doc.global_settings.default_all_channels);
        assert_eq!(doc.global_settings.default_cooldown, 30);
        assert_eq!(doc.global_settings.default_daily_limit, 30);
    }

    #[test]
    fn test_missing_sections_default() {
        let doc: ConfigDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.servers.is_empty());
        assert_eq!(doc.global_settings.default_cooldown, 30);
    }
}
