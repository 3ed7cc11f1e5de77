use caat_engine::{CodeSpanStyle, LinkStyle, RenderOptions, Theme};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "CAAT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub link_style: LinkStyle,
    pub code_span_style: CodeSpanStyle,
    pub tab_width: Option<usize>,
    pub theme: Theme,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// `$CAAT_CONFIG` when set, otherwise `~/.config/caat/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::resolve_config_path(std::env::var(CONFIG_ENV).ok())
    }

    fn resolve_config_path(custom: Option<String>) -> PathBuf {
        if let Some(custom) = custom.filter(|custom| !custom.is_empty()) {
            return Self::expand_path(Path::new(&custom)).unwrap_or_else(|| PathBuf::from(custom));
        }
        let config_dir = shellexpand::tilde("~/.config/caat");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            link_style: self.link_style,
            code_span_style: self.code_span_style,
            tab_width: self.tab_width.unwrap_or(defaults.tab_width),
            theme: self.theme.clone(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
