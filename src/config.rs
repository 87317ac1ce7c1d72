//! Configuration file loading

mod types;

use std::path::{Path, PathBuf};

pub use types::{
    Config, DEFAULT_LIMIT, DEFAULT_MESSAGE, DEFAULT_NO_MATCHES, DEFAULT_WARN, MatcherConfig,
    MatcherKind, PromptConfig,
};

use crate::error::AutopromptError;

/// `<config dir>/autoprompt/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("autoprompt").join("config.toml"))
}

/// Load configuration from `path`, or from the default location
///
/// An explicit path must exist. A missing default file yields the
/// built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, AutopromptError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<Config, AutopromptError> {
    toml::from_str(content).map_err(|e| AutopromptError::InvalidConfig(e.to_string()))
}
