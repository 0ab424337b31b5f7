use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{RecipeError, Result};

pub const DB_PATH_VAR: &str = "RECIPE_BOX_DB";
pub const ADDR_VAR: &str = "RECIPE_BOX_ADDR";
pub const PORT_VAR: &str = "PORT";
pub const ENV_VAR: &str = "RECIPE_BOX_ENV";

const DEFAULT_DB_PATH: &str = "data/recipes.db";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration for the recipe box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Location of the SQLite file; parent directories are created on open
    pub db_path: PathBuf,
    /// Address the HTTP server binds to
    pub addr: String,
    /// Set when running in production; maintenance commands refuse to clear
    pub production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            addr: DEFAULT_ADDR.to_string(),
            production: false,
        }
    }
}

impl Config {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(addr) = lookup(ADDR_VAR).filter(|a| !a.trim().is_empty()) {
            config.addr = addr;
        } else if let Some(port) = lookup(PORT_VAR).filter(|p| !p.trim().is_empty()) {
            config.addr = format!("0.0.0.0:{}", port.trim());
        }

        config.production = lookup(ENV_VAR)
            .map(|v| v.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        config
    }

    /// Parse the bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr
            .parse()
            .map_err(|_| RecipeError::Config(format!("invalid bind address '{}'", self.addr)))
    }
}
