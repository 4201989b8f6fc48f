//! Client configuration
//!
//! Defaults are embedded as TOML. The API base URL can be overridden per
//! browser through `localStorage` (key [`API_BASE_STORAGE_KEY`]), since a
//! WASM bundle has no config file next to it.

use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub title: String,
    pub preview_chars: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080"

[ui]
title = "AI Legal Assistant"
preview_chars = 150

[log]
level = "debug"
"#;

pub const API_BASE_STORAGE_KEY: &str = "legal-chat-api-base";

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    /// Parse a TOML document into a config
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replace the API base URL, ignoring blank values and trailing slashes
    pub fn with_api_base(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        self
    }

    /// Log level for `console_log`; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        match self.log.level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // The embedded document is covered by `test_default_config_loads`.
        Config::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Config {
            api: ApiConfig {
                base_url: "http://localhost:8080".to_string(),
            },
            ui: UiConfig {
                title: "AI Legal Assistant".to_string(),
                preview_chars: contracts::domain::a001_legal_chat::PREVIEW_SNIPPET_CHARS,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        })
    }
}

/// Read the API base override from localStorage
fn load_api_base_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage` override for the API base URL
/// 2. Embedded default config
pub fn load_config() -> Config {
    Config::default().with_api_base(load_api_base_override())
}

/// Process-wide configuration, loaded on first use
pub fn config() -> &'static Config {
    CONFIG.get_or_init(load_config)
}
