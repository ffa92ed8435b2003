use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Duration;
use murmur_core::session::DEFAULT_SESSION_TTL_SECS;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub session_ttl: Duration,
}

impl Config {
    /// Read `MURMUR_*` variables, falling back to development defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("MURMUR_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port: u16 = std::env::var("MURMUR_PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .context("MURMUR_PORT must be a port number")?;
        let db_path: PathBuf = std::env::var("MURMUR_DB_PATH")
            .unwrap_or_else(|_| "murmur.db".into())
            .into();
        let ttl_secs: i64 = match std::env::var("MURMUR_SESSION_TTL_SECS") {
            Ok(v) => v
                .parse()
                .context("MURMUR_SESSION_TTL_SECS must be a number of seconds")?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };
        if ttl_secs <= 0 {
            anyhow::bail!("MURMUR_SESSION_TTL_SECS must be positive, got {}", ttl_secs);
        }

        Ok(Self {
            host,
            port,
            db_path,
            session_ttl: Duration::seconds(ttl_secs),
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}
