use serde::Deserialize;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_NAME: &str = "quizapp";
pub const DEFAULT_COLLECTION_NAME: &str = "questions";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// The root configuration structure for the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Connection string for the MongoDB deployment. Required.
    #[serde(default)]
    pub mongodb_uri: String,
    /// The logical database holding the question collection.
    pub database_name: String,
    /// The collection every question document is stored in.
    pub collection_name: String,
    /// The local address the HTTP server binds to.
    pub bind_address: String,
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Settings {
    /// Rejects settings the process cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mongodb_uri.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "You must set your 'MONGODB_URI' environment variable. See \
                 https://docs.mongodb.com/drivers/rust/current/"
                    .to_string(),
            ));
        }
        self.socket_addr()?;
        Ok(())
    }

    /// Parses `bind_address` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address.parse().map_err(|e| {
            ConfigError::ValidationError(format!(
                "invalid bind_address '{}': {}",
                self.bind_address, e
            ))
        })
    }
}
