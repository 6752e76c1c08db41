//! Server configuration, read from environment variables (or a `.env` file).

use std::{
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    str::FromStr,
    time::Duration,
};

use thiserror::Error;

/// The address to listen on when `ADDRESS` isn't set.
const DEFAULT_ADDRESS: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));

/// The database pool size when `DATABASE_MAX_CONNECTIONS` isn't set.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// The database pool's acquire timeout when `DATABASE_ACQUIRE_TIMEOUT_SECS` isn't set.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// The server's configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// The socket address the HTTP server listens on.
    pub address: SocketAddr,

    /// The PostgreSQL connection URL.
    pub database_url: String,

    /// The maximum number of connections held by the database pool.
    pub max_connections: u32,

    /// How long a request waits for a pooled database connection before failing.
    pub acquire_timeout: Duration,
}

/// An error loading the [`Config`].
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// A required environment variable wasn't set.
    #[error("environment variable `{0}` should be set")]
    Missing(&'static str),

    /// An environment variable was set to a value that couldn't be parsed.
    #[error("environment variable `{name}` has invalid value {value:?}")]
    Invalid {
        /// The name of the environment variable.
        name: &'static str,

        /// The value it was set to.
        value: String,
    },
}

impl Config {
    /// Loads the configuration from the process environment, including any `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any variable is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| dotenvy::var(name).ok())
    }

    /// Loads the configuration using `var` to look up each variable by name.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or any variable is invalid.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let address = parse_or(&var, "ADDRESS", DEFAULT_ADDRESS)?;
        let max_connections = parse_or(&var, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_or(&var, "DATABASE_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

        Ok(Self {
            address,
            database_url,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

/// Parses the variable `name` if it's set, or falls back to `default` otherwise.
fn parse_or<F, T>(var: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    let Some(value) = var(name) else {
        return Ok(default);
    };

    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    /// Loads a [`Config`] from only the specified variables.
    fn config_from(vars: &[(&'static str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();

        Config::from_vars(|name| vars.get(name).map(|value| (*value).to_owned()))
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/issues")])
            .expect("config should load");

        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.address.port(), 8000);
        assert_eq!(config.database_url, "postgres://localhost/issues");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn overrides_apply() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://db/issues"),
            ("ADDRESS", "127.0.0.1:3000"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DATABASE_ACQUIRE_TIMEOUT_SECS", "5"),
        ])
        .expect("config should load");

        assert_eq!(config.address.port(), 3000);
        assert_eq!(config.max_connections, 4);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn database_url_required() {
        assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn invalid_values_rejected() {
        let error = config_from(&[
            ("DATABASE_URL", "postgres://db/issues"),
            ("ADDRESS", "not an address"),
        ])
        .expect_err("address should be invalid");

        assert_eq!(
            error,
            ConfigError::Invalid {
                name: "ADDRESS",
                value: "not an address".into(),
            },
        );

        config_from(&[
            ("DATABASE_URL", "postgres://db/issues"),
            ("DATABASE_MAX_CONNECTIONS", "-1"),
        ])
        .expect_err("negative pool size should be invalid");
    }
}
