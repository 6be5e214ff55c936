//! Environment lookup helpers and the startup configuration error shared by every config struct.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Startup configuration failure. Fatal: the process exits before the update loop starts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set. Please set it in the environment or your .env file.")]
    MissingVar(&'static str),

    #[error("{name} has an invalid value: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("{name} is set but not a valid URL: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Returns the first of `names` that is set to a non-blank value, with the name that matched.
pub fn first_env(names: &[&'static str]) -> Option<(&'static str, String)> {
    names.iter().find_map(|name| {
        env::var(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| (*name, v))
    })
}

/// Parses `name` as `T`; unset or blank yields `default`, unparsable yields [`ConfigError::InvalidValue`].
pub fn env_parse<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value: raw })
        }
        _ => Ok(default),
    }
}
