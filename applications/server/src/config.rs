/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "roster.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    /// Shared secret expected verbatim in the `Authorization` header of
    /// mutating requests
    #[serde(default)]
    pub secret: String,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Sources, later ones winning:
    /// 1. `path`, or `roster.toml` in the working directory if it exists
    /// 2. `ROSTER_*` environment variables, with `__` between sections
    ///    (`ROSTER_AUTH__SECRET`, `ROSTER_SERVER__PORT`)
    ///
    /// A `.env` file is loaded into the environment first if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            tracing::debug!("Loaded environment from {}", env_file.display());
        }

        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.secret.is_empty() {
            return Err(ServerError::Config(
                "Auth secret is required (set ROSTER_AUTH__SECRET)".to_string(),
            ));
        }

        if self.storage.max_connections == 0 {
            return Err(ServerError::Config(
                "storage.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
        max_connections: default_max_connections(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/roster.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        secret: String::new(),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
        }
    }
}
