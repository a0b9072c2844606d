use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::locale;

/// Output format for the rendered interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RenderFormat::Text),
            "html" => Ok(RenderFormat::Html),
            "json" => Ok(RenderFormat::Json),
            other => Err(format!("unknown format '{other}' (expected text, html, or json)")),
        }
    }
}

/// Global configuration loaded from `~/.config/outlink/config.toml`.
///
/// The locale catalog itself is fixed at build time and is deliberately
/// not configurable; only the fallback choice and the default output
/// format live here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlinkConfig {
    /// Locale used when no request candidate matches the catalog.
    pub fallback_lang: String,
    /// Default render format for the `render` subcommand (None = text).
    #[serde(default)]
    pub format: Option<RenderFormat>,
}

impl Default for OutlinkConfig {
    fn default() -> Self {
        Self {
            fallback_lang: locale::DEFAULT_LANG.to_string(),
            format: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("outlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OutlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OutlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OutlinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = OutlinkConfig::default();
        assert_eq!(cfg.fallback_lang, "en");
        assert!(cfg.format.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = OutlinkConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: OutlinkConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.fallback_lang, cfg.fallback_lang);
        assert_eq!(parsed.format, cfg.format);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            fallback_lang = "zh"
            format = "html"
        "#;
        let cfg: OutlinkConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fallback_lang, "zh");
        assert_eq!(cfg.format, Some(RenderFormat::Html));
    }

    #[test]
    fn format_from_str() {
        assert_eq!("text".parse(), Ok(RenderFormat::Text));
        assert_eq!("json".parse(), Ok(RenderFormat::Json));
        assert!("yaml".parse::<RenderFormat>().is_err());
    }
}
