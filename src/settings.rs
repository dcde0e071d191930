use anyhow::{bail, Context, Result};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://mymanga-acacademy-5607149ebe3d.herokuapp.com";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/tankodex.db";
/// `TANKODEX_DATABASE_URL` value selecting the non-durable library.
pub const MEMORY_DATABASE: &str = "memory";

/// Runtime settings, read from `TANKODEX_*` environment variables.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub database_url: String,
    pub items_per_page: u32,
    pub bind_addr: SocketAddr,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let items_per_page: u32 = parse_or(&lookup, "TANKODEX_ITEMS_PER_PAGE", 20)?;
        if items_per_page == 0 {
            bail!("TANKODEX_ITEMS_PER_PAGE must be at least 1");
        }

        Ok(Self {
            api_url: lookup("TANKODEX_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            database_url: lookup("TANKODEX_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            items_per_page,
            bind_addr: parse_or(&lookup, "TANKODEX_BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 7784)))?,
            cache_ttl: Duration::from_secs(parse_or(&lookup, "TANKODEX_CACHE_TTL_SECS", 60 * 60)?),
            request_timeout: Duration::from_secs(parse_or(&lookup, "TANKODEX_REQUEST_TIMEOUT_SECS", 60)?),
        })
    }

    pub fn uses_memory_database(&self) -> bool {
        self.database_url == MEMORY_DATABASE
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, value)),
        None => Ok(default),
    }
}
