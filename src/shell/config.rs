use anyhow::{anyhow, bail};
use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_TTL_SECS: &str = "3600";
const DEFAULT_KEY: &str = "high_score";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// How long an accepted high score lives before reading as `0` again.
    pub ttl: Duration,
    pub key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: 8080,
            ttl: Duration::from_secs(3600),
            key: DEFAULT_KEY.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let ttl_secs: u64 = try_load(&lookup, "HIGH_SCORE_TTL_SECS", DEFAULT_TTL_SECS)?;
        if ttl_secs == 0 {
            bail!("HIGH_SCORE_TTL_SECS must be greater than zero");
        }

        Ok(Self {
            host: try_load(&lookup, "HIGH_SCORE_HOST", DEFAULT_HOST)?,
            port: try_load(&lookup, "HIGH_SCORE_PORT", DEFAULT_PORT)?,
            ttl: Duration::from_secs(ttl_secs),
            key: try_load(&lookup, "HIGH_SCORE_KEY", DEFAULT_KEY)?,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<T>
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.parse()
        .map_err(|e| anyhow!("invalid {key} value {raw:?}: {e}"))
}
