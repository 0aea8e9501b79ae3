//! Server configuration read from environment variables (and a `.env` file, if present).

use std::str::FromStr;

use thiserror::Error;

/// The `tracing` filter directive used when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub(crate) const DEFAULT_LOG_LEVEL: &str = "extension_backend=info";

/// Settings the server needs at startup.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Config {
    /// The socket address to listen on, e.g. `127.0.0.1:3000`.
    pub(crate) address: String,

    /// The `tracing` filter directive, used when `RUST_LOG` isn't set.
    pub(crate) log_level: String,

    /// How log events are formatted.
    pub(crate) log_format: LogFormat,
}

impl Config {
    /// Reads the configuration from the process environment, loading a `.env` file first if one
    /// exists.
    ///
    /// # Errors
    ///
    /// See [`Config::from_lookup`].
    pub(crate) fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    /// Reads the configuration using `lookup` to resolve each variable by name.
    ///
    /// # Errors
    ///
    /// Fails if `ADDRESS` is unset or `LOG_FORMAT` isn't a known format.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let address = lookup("ADDRESS").ok_or(Error::Missing("ADDRESS"))?;

        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned());

        let log_format = match lookup("LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            address,
            log_level,
            log_format,
        })
    }
}

/// The output format for log events.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub(crate) enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(str: &str) -> Result<Self, Self::Err> {
        match str.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidLogFormat(str.to_owned())),
        }
    }
}

/// An error reading the [`Config`].
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub(crate) enum Error {
    /// A required environment variable isn't set.
    #[error("environment variable `{0}` should be set")]
    Missing(&'static str),

    /// `LOG_FORMAT` isn't `text` or `json`.
    #[error("invalid `LOG_FORMAT` {0:?}, expected `text` or `json`")]
    InvalidLogFormat(String),
}
