//! Server configuration
//!
//! Defines the bind address, store connection settings and the public URL
//! that hypermedia links are built from.

use std::time::Duration;

/// Path under which the recipe collection is mounted
pub const RECIPE_COLLECTION_PATH: &str = "/api/recipe";

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to (e.g., "0.0.0.0:8080")
    pub bind_addr: String,

    /// PostgreSQL connection string; the in-memory store is used when unset
    pub database_url: Option<String>,

    /// Externally reachable base URL of this service (e.g., "https://larder.example.com")
    pub public_url: String,

    /// Maximum number of pooled database connections
    pub max_connections: u32,

    /// How long to wait for a pooled connection before failing the request
    pub acquire_timeout: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(bind_addr: String, public_url: String) -> Self {
        Self {
            bind_addr,
            database_url: None,
            public_url,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - LARDER_BIND_ADDR (optional, default: 0.0.0.0:8080)
    /// - DATABASE_URL (optional, in-memory store when unset)
    /// - LARDER_PUBLIC_URL (optional, default: http://localhost:8080)
    /// - DATABASE_MAX_CONNECTIONS (optional, default: 10)
    /// - DATABASE_ACQUIRE_TIMEOUT (optional, seconds, default: 5)
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("LARDER_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let public_url = std::env::var("LARDER_PUBLIC_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty());

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                anyhow::anyhow!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
            })?,
            Err(_) => 10,
        };

        let acquire_timeout = std::env::var("DATABASE_ACQUIRE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5));

        Ok(Self {
            bind_addr,
            database_url,
            public_url,
            max_connections,
            acquire_timeout,
        })
    }

    /// Absolute URI of the recipe collection, the base of every recipe link
    pub fn recipe_base_uri(&self) -> String {
        format!(
            "{}{}",
            self.public_url.trim_end_matches('/'),
            RECIPE_COLLECTION_PATH
        )
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.public_url.starts_with("http://") && !self.public_url.starts_with("https://") {
            anyhow::bail!("public_url must start with http:// or https://");
        }

        if self.max_connections == 0 {
            anyhow::bail!("max_connections must be greater than 0");
        }

        if self.acquire_timeout.is_zero() {
            anyhow::bail!("acquire_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(
            "0.0.0.0:8080".to_string(),
            "http://localhost:8080".to_string(),
        )
    }
}
