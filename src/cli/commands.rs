//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::logging::{init_tracing, parse_filter, DEFAULT_LOG_LEVEL};
use crate::store::SqliteProductStore;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file (default "db.sqlite")
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Listener settings
    #[serde(flatten)]
    pub server: HttpServerConfig,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.sqlite")
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: default_log_level(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(CliError::config_error("db_path must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        parse_filter(&self.log_level)?;

        Ok(())
    }
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    let (config_path, serve_after) = match command {
        Command::Init { config } => (config, false),
        Command::Serve { config } => (config, true),
    };

    let config = Config::resolve(config_path.as_deref())?;
    init_tracing(&config.log_level)?;

    if serve_after {
        serve(config)
    } else {
        init(&config)
    }
}

/// Create the database file with the product table
pub fn init(config: &Config) -> CliResult<()> {
    if config.db_path.exists() {
        return Err(CliError::already_initialized(
            &config.db_path.display().to_string(),
        ));
    }

    SqliteProductStore::open(&config.db_path)?;
    info!(event = "init", path = %config.db_path.display(), "database initialized");
    Ok(())
}

/// Open the database and serve until Ctrl-C
pub fn serve(config: Config) -> CliResult<()> {
    let store = SqliteProductStore::open(&config.db_path)?;
    let server = HttpServer::with_config(config.server, Arc::new(store));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
}
