use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path of the single-file SQLite store. Created on first startup,
    /// never recreated once present.
    pub path: PathBuf,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let host = std::env::var("CARLOT_HOST")
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = match std::env::var("CARLOT_PORT") {
            Ok(raw) => raw.parse().with_context(|| {
                format!("CARLOT_PORT `{raw}` is not a valid port")
            })?,
            Err(_) => 3000,
        };
        let path = std::env::var("CARLOT_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/carlot.db"));

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig { path },
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .with_context(|| {
                format!(
                    "invalid bind address {}:{}",
                    self.server.host, self.server.port
                )
            })
    }
}
