// Configuration loader
// Loads settings from ~/.chaperone/config.toml with env overrides

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use super::settings::Config;

/// Load configuration from the chaperone config file, falling back to
/// defaults when the file is absent
pub fn load_config() -> Result<Config> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home.join(".chaperone/config.toml");

    let mut config = if config_path.exists() {
        load_config_from(&config_path)?
    } else {
        debug!(path = %config_path.display(), "No config file, using defaults");
        Config::default()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(base_url) = std::env::var("CHAPERONE_MEME_BASE_URL") {
        if !base_url.is_empty() {
            config.meme.base_url = base_url;
        }
    }
    if let Ok(callback_host) = std::env::var("CHAPERONE_CALLBACK_HOST") {
        if !callback_host.is_empty() {
            config.mcp.callback_host = callback_host;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"
            [meme]
            base_url = "http://localhost:9999"
            timeout_secs = 3

            [playground]
            auto_approve = true
            "#
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.meme.base_url, "http://localhost:9999");
        assert_eq!(config.meme.timeout_secs, 3);
        assert!(config.playground.auto_approve);
        // Untouched section keeps its default
        assert_eq!(config.mcp.callback_host, "http://localhost:5173");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "meme = \"not a table\"").unwrap();

        let result = load_config_from(&path);
        assert!(result.is_err());
    }
}
