use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::app;
use crate::core::document::DEFAULT_MAX_TAG_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Longest `key + value` metadata tag shown as a badge.
    pub max_tag_length: usize,
    /// Id of the local user, used for ownership checks when no user record is given.
    pub user_id: Option<String>,
    /// Override of the platform config directory.
    pub config_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_tag_length: DEFAULT_MAX_TAG_LENGTH,
            user_id: None,
            config_dir: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidNumber { name: String, value: String },
}

pub(crate) fn env_name(suffix: &str) -> String {
    format!("{}_{}", app::ENV_PREFIX, suffix)
}

/// Trimmed value of `DOCSNIP_<suffix>` with its full name. Empty values count as unset.
fn lookup_value<F>(lookup: &F, suffix: &str) -> Option<(String, String)>
where
    F: Fn(&str) -> Option<String>,
{
    let name = env_name(suffix);
    lookup(name.as_str())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(|v| (name, v))
}

fn config_dir_from<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_value(lookup, "CONFIG_DIR").map(|(_, v)| PathBuf::from(v))
}

/// `DOCSNIP_CONFIG_DIR` from the environment, read without loading the rest of the config.
pub(crate) fn config_dir_override() -> Option<PathBuf> {
    config_dir_from(&|name: &str| env::var(name).ok())
}

/// Build a config from a variable lookup. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |suffix: &str| lookup_value(&lookup, suffix);

    let max_tag_length = match get("MAX_TAG_LENGTH") {
        Some((name, value)) => match value.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(ConfigError::InvalidNumber { name, value }),
        },
        None => DEFAULT_MAX_TAG_LENGTH,
    };
    let user_id = get("USER_ID").map(|(_, v)| v);
    let config_dir = config_dir_from(&lookup);

    Ok(Config {
        max_tag_length,
        user_id,
        config_dir,
    })
}

/// Load configuration from the environment.
pub fn load() -> Result<Config, ConfigError> {
    from_lookup(|name| env::var(name).ok())
}
