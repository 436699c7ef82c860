// src/config.rs

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::errors::ConfigError;
use crate::filters::DEFAULT_PAGE_LIMIT;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SEED_EVENTS: usize = 137;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub default_page_limit: i64,
    pub seed_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            default_page_limit: DEFAULT_PAGE_LIMIT,
            seed_events: DEFAULT_SEED_EVENTS,
        }
    }
}

impl AppConfig {
    /// Wczytuje konfigurację ze zmiennych środowiskowych (po `dotenv()`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_or("APP_HOST", lookup("APP_HOST"), defaults.host)?;
        let port = parse_or("APP_PORT", lookup("APP_PORT"), defaults.port)?;
        let default_page_limit = parse_or(
            "DEFAULT_PAGE_LIMIT",
            lookup("DEFAULT_PAGE_LIMIT"),
            defaults.default_page_limit,
        )?;
        if default_page_limit <= 0 {
            return Err(ConfigError::NotPositive {
                name: "DEFAULT_PAGE_LIMIT",
            });
        }
        let seed_events = parse_or("SEED_EVENTS", lookup("SEED_EVENTS"), defaults.seed_events)?;

        Ok(Self {
            host,
            port,
            default_page_limit,
            seed_events,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::InvalidValue { name, value })
        }
    }
}
