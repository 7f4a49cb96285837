// Configuration structs

use std::time::Duration;

use serde::Deserialize;

use crate::meme::{TemplateCatalog, API_BASE};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub meme: MemeConfig,

    #[serde(default)]
    pub mcp: McpConfig,

    #[serde(default)]
    pub playground: PlaygroundConfig,
}

impl Config {
    /// Catalog client built from the meme section
    pub fn template_catalog(&self) -> TemplateCatalog {
        TemplateCatalog::with_options(
            self.meme.base_url.clone(),
            Duration::from_secs(self.meme.timeout_secs),
        )
    }
}

/// Meme catalog endpoint settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemeConfig {
    #[serde(default = "default_meme_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MemeConfig {
    fn default() -> Self {
        Self {
            base_url: default_meme_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// MCP registration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McpConfig {
    /// OAuth callback host handed to the agent when adding a server
    #[serde(default = "default_callback_host")]
    pub callback_host: String,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            callback_host: default_callback_host(),
        }
    }
}

/// Playground REPL settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Resolve confirmation gates without prompting
    #[serde(default)]
    pub auto_approve: bool,
}

fn default_meme_base_url() -> String {
    API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_callback_host() -> String {
    "http://localhost:5173".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.meme.base_url, "https://api.memegen.link");
        assert_eq!(config.meme.timeout_secs, 10);
        assert_eq!(config.mcp.callback_host, "http://localhost:5173");
        assert!(!config.playground.auto_approve);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [meme]
            base_url = "http://localhost:9999"
            "#,
        )
        .unwrap();

        assert_eq!(config.meme.base_url, "http://localhost:9999");
        assert_eq!(config.meme.timeout_secs, 10);
        assert_eq!(config.mcp.callback_host, "http://localhost:5173");
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [meme]
            base_urll = "typo"
            "#,
        );

        assert!(result.is_err());
    }
}
