use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_PALETTE_URL: &str = "https://www.csscolorsapi.com/api/colors";

/// Env var naming a JSON config file.
pub const CONFIG_ENV: &str = "BRIGHTEST_CONFIG";
/// Env var overriding the palette endpoint (wins over the file).
pub const PALETTE_URL_ENV: &str = "BRIGHTEST_PALETTE_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_palette_url")]
    pub palette_url: String,
}

fn default_palette_url() -> String {
    DEFAULT_PALETTE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette_url: default_palette_url(),
        }
    }
}

impl Config {
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize config to json")?;
        fs::write(path.as_ref(), json).context("write config json file")?;
        Ok(())
    }

    pub fn load_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path.as_ref()).context("read config json file")?;
        let config = serde_json::from_str::<Config>(&text).context("parse config json")?;
        Ok(config)
    }

    /// Defaults, then `BRIGHTEST_CONFIG` (if set), then `BRIGHTEST_PALETTE_URL` (if set).
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load_json_file(&path)
                .with_context(|| format!("load config from {}", Path::new(&path).display()))?,
            None => Self::default(),
        };

        if let Ok(url) = env::var(PALETTE_URL_ENV) {
            if !url.trim().is_empty() {
                config.palette_url = url;
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_css_colors_api() {
        assert_eq!(Config::default().palette_url, DEFAULT_PALETTE_URL);
    }

    #[test]
    fn json_file_round_trip() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("brightest.json");

        let config = Config {
            palette_url: "http://localhost:8080/colors".to_string(),
        };
        config.save_json_file(&path)?;

        assert_eq!(Config::load_json_file(&path)?, config);
        Ok(())
    }

    #[test]
    fn missing_url_falls_back_to_default() -> anyhow::Result<()> {
        let config = serde_json::from_str::<Config>("{}")?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn unreadable_file_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(Config::load_json_file(dir.path().join("missing.json")).is_err());

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "not json")?;
        assert!(Config::load_json_file(&bad).is_err());
        Ok(())
    }
}
