use std::str::FromStr;

pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod server_config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Reads `name` through `lookup`, falling back to `default` when unset.
pub(crate) fn var_or(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: &str,
) -> String {
    lookup(name).unwrap_or_else(|| default.to_string())
}

/// Like [`var_or`], then parses the value.
pub(crate) fn parse_var_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

/// Process environment lookup.
pub(crate) fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
