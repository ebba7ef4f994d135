//! Server configuration from environment variables.

use std::path::PathBuf;

/// Name of the catalog file inside the decks directory.
pub const CATALOG_FILE: &str = "decks.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub decks_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the environment.
    ///
    /// - HOST: bind address (default `0.0.0.0`)
    /// - PORT: bind port (default `3000`)
    /// - DECKS_DIR: directory holding `decks.json` and the deck files (default `decks`)
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", port, e))?,
            Err(_) => 3000,
        };
        let decks_dir = std::env::var("DECKS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("decks"));

        Ok(Self {
            host,
            port,
            decks_dir,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.decks_dir.join(CATALOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lives_in_decks_dir() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            decks_dir: PathBuf::from("/srv/decks"),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.catalog_path(), PathBuf::from("/srv/decks/decks.json"));
    }
}
