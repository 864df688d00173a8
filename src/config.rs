use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{config_error, Error};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_UBER_API_BASE: &str = "https://api.uber.com";
const DEFAULT_UBER_TIMEOUT_MS: u64 = 3000;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub uber: Option<UberConfig>,
}

#[derive(Clone)]
pub struct UberConfig {
    pub token: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for UberConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UberConfig")
            .field("token", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            uber: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let addr = var("RIDECOMPARE_ADDR")?
            .unwrap_or_else(|| DEFAULT_ADDR.into())
            .parse()
            .map_err(config_error)?;

        let token = match var("UBER_SERVER_TOKEN")? {
            Some(token) => Some(token),
            None => var("VITE_UBER_SERVER_TOKEN")?,
        };

        let uber = match token {
            Some(token) => {
                let api_base = var("UBER_API_BASE")?.unwrap_or_else(|| DEFAULT_UBER_API_BASE.into());
                let timeout_ms = match var("UBER_API_TIMEOUT_MS")? {
                    Some(value) => value.parse().map_err(config_error)?,
                    None => DEFAULT_UBER_TIMEOUT_MS,
                };

                Some(UberConfig {
                    token,
                    api_base,
                    timeout: Duration::from_millis(timeout_ms),
                })
            }
            None => None,
        };

        Ok(Self { addr, uber })
    }
}

/// Reads an environment variable, treating unset and blank alike.
fn var(name: &str) -> Result<Option<String>, Error> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().into())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

#[test]
fn config_from_env_test() {
    // Only this test touches these variables.
    env::set_var("RIDECOMPARE_ADDR", "0.0.0.0:8080");
    env::set_var("UBER_SERVER_TOKEN", "  ");
    env::set_var("VITE_UBER_SERVER_TOKEN", "secret");
    env::set_var("UBER_API_TIMEOUT_MS", "250");

    let config = Config::from_env().unwrap();
    assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());

    let uber = config.uber.clone().unwrap();
    assert_eq!(uber.token, "secret");
    assert_eq!(uber.api_base, DEFAULT_UBER_API_BASE);
    assert_eq!(uber.timeout, Duration::from_millis(250));
    assert!(!format!("{:?}", config).contains("secret"));

    env::set_var("UBER_API_TIMEOUT_MS", "soon");
    assert_eq!(Config::from_env().unwrap_err().code, 2);

    for name in [
        "RIDECOMPARE_ADDR",
        "UBER_SERVER_TOKEN",
        "VITE_UBER_SERVER_TOKEN",
        "UBER_API_TIMEOUT_MS",
    ] {
        env::remove_var(name);
    }

    let config = Config::from_env().unwrap();
    assert!(config.uber.is_none());
    assert_eq!(config.addr, Config::default().addr);
}
