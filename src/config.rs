use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::constants::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_EXPLORER_HOST, DEFAULT_TARGET_FUNCTION, DEFAULT_TARGET_MODULE,
};

/// Optional user configuration, read once at startup from
/// `~/.loyalty-tui/config.json`. Every field has a working default so the
/// file is never required.
#[derive(Clone)]
pub struct AppConfig {
    pub rpc_url: Option<String>,
    pub target_package: Option<String>,
    pub target_module: String,
    pub target_function: String,
    pub explorer_host: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rpc_url: None,
            target_package: None,
            target_module: DEFAULT_TARGET_MODULE.to_string(),
            target_function: DEFAULT_TARGET_FUNCTION.to_string(),
            explorer_host: DEFAULT_EXPLORER_HOST.to_string(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the config file if present; unreadable or malformed files fall
    /// back to defaults since configuration is advisory.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return AppConfig::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => Self::from_json(&raw),
            Err(_) => AppConfig::default(),
        }
    }

    pub fn from_json(raw: &str) -> Self {
        let mut config = AppConfig::default();
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return config;
        };

        let string_field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        config.rpc_url = string_field("rpc_url");
        config.target_package = string_field("target_package");
        if let Some(module) = string_field("target_module") {
            config.target_module = module;
        }
        if let Some(function) = string_field("target_function") {
            config.target_function = function;
        }
        if let Some(explorer) = string_field("explorer_host") {
            config.explorer_host = explorer;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_canonical_contract() {
        let config = AppConfig::default();
        assert_eq!(config.target_module, "loyalty_card");
        assert_eq!(config.target_function, "mint_loyalty");
        assert!(config.target_package.is_none());
    }

    #[test]
    fn json_overrides_defaults() {
        let config = AppConfig::from_json(
            r#"{
                "rpc_url": "http://localhost:9000",
                "target_package": "0x1",
                "target_function": "mint"
            }"#,
        );
        assert_eq!(config.rpc_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.target_package.as_deref(), Some("0x1"));
        assert_eq!(config.target_module, "loyalty_card");
        assert_eq!(config.target_function, "mint");
    }

    #[test]
    fn malformed_json_falls_back_to_defaults() {
        let config = AppConfig::from_json("{not json");
        assert!(config.rpc_url.is_none());
        assert_eq!(config.explorer_host, DEFAULT_EXPLORER_HOST);
    }

    #[test]
    fn blank_fields_are_ignored() {
        let config = AppConfig::from_json(r#"{"target_module": "  "}"#);
        assert_eq!(config.target_module, "loyalty_card");
    }
}
