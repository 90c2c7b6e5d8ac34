//! Configuration loading and server settings resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default listen port when nothing else is configured
pub const DEFAULT_PORT: u16 = 5001;

/// Default database filename, created in the working directory
pub const DEFAULT_DB_FILE: &str = "mealkeep.db";

/// Bind address. The service accepts connections from emulators and
/// devices on the local network, so it binds all interfaces.
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Optional TOML config file schema
///
/// All fields are optional; missing fields fall back to the next
/// resolution tier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub database_path: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse a TOML config file. A missing file is not an error; it yields
    /// an empty config so resolution falls through to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Resolved server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_path: PathBuf,
}

impl ServerConfig {
    /// Resolve settings following the priority order:
    /// 1. Environment variable (`PORT`, `MEALKEEP_DB`)
    /// 2. TOML config file (`MEALKEEP_CONFIG`, else ./mealkeep.toml)
    /// 3. Compiled default (port 5001, ./mealkeep.db)
    ///
    /// A malformed config file is an error; a missing one is not.
    pub fn resolve() -> Result<Self> {
        let config_path = std::env::var("MEALKEEP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("mealkeep.toml"));
        let file = TomlConfig::load(&config_path)?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", raw)))?,
            Err(_) => file.port.unwrap_or(DEFAULT_PORT),
        };

        let database_path = std::env::var("MEALKEEP_DB")
            .map(PathBuf::from)
            .ok()
            .or(file.database_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

        Ok(Self {
            port,
            database_path,
        })
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", BIND_ADDRESS, self.port)
    }
}
