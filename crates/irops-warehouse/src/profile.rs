//! Warehouse connection profiles.
//!
//! Provides loading of connection settings from ~/.config/irops/connections.toml
//! or environment variables.

use irops_core::{IropsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Profile selected when `IROPS_CONNECTION_NAME` is unset.
pub const DEFAULT_CONNECTION_NAME: &str = "uswest-demo";

/// Names the profile to load from the connections file.
pub const CONNECTION_NAME_VAR: &str = "IROPS_CONNECTION_NAME";

const ACCOUNT_VAR: &str = "IROPS_ACCOUNT";
const TOKEN_VAR: &str = "IROPS_TOKEN";
const DATABASE_VAR: &str = "IROPS_DATABASE";
const SCHEMA_VAR: &str = "IROPS_SCHEMA";
const WAREHOUSE_VAR: &str = "IROPS_WAREHOUSE";
const ROLE_VAR: &str = "IROPS_ROLE";

/// Connection settings for one warehouse account.
///
/// The file format is a TOML table of named profiles:
///
/// ```toml
/// [uswest-demo]
/// account = "phantomair-uswest"
/// token = "..."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    pub account: String,
    pub token: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_warehouse")]
    pub warehouse: String,
    #[serde(default)]
    pub role: Option<String>,
}

fn default_database() -> String {
    "PHANTOM_IROPS".to_string()
}

fn default_schema() -> String {
    "ANALYTICS".to_string()
}

fn default_warehouse() -> String {
    "PHANTOM_IROPS_WH".to_string()
}

impl ConnectionProfile {
    /// Resolves the profile to use for this process.
    ///
    /// Priority:
    /// 1. Environment variables (IROPS_ACCOUNT + IROPS_TOKEN, with optional
    ///    IROPS_DATABASE, IROPS_SCHEMA, IROPS_WAREHOUSE, IROPS_ROLE)
    /// 2. ~/.config/irops/connections.toml, profile named by
    ///    IROPS_CONNECTION_NAME (default `uswest-demo`)
    pub fn resolve() -> Result<Self> {
        if let Some(profile) = Self::from_env() {
            return Ok(profile);
        }

        let name =
            env::var(CONNECTION_NAME_VAR).unwrap_or_else(|_| DEFAULT_CONNECTION_NAME.to_string());
        Self::resolve_named(&name)
    }

    /// Loads a named profile from the default connections file.
    pub fn resolve_named(name: &str) -> Result<Self> {
        Self::from_file(&Self::default_path()?, name)
    }

    /// Loads a named profile from an explicit connections file (for testing).
    pub fn from_file(path: &Path, name: &str) -> Result<Self> {
        if !path.exists() {
            return Err(IropsError::config(format!(
                "connections file not found at {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let mut profiles: HashMap<String, ConnectionProfile> = toml::from_str(&content)?;

        profiles
            .remove(name)
            .ok_or_else(|| IropsError::not_found("connection profile", name))
    }

    /// Builds a profile purely from environment variables, if the required
    /// ones are set.
    fn from_env() -> Option<Self> {
        let account = env::var(ACCOUNT_VAR).ok()?;
        let token = env::var(TOKEN_VAR).ok()?;

        Some(Self {
            account,
            token,
            database: env::var(DATABASE_VAR).unwrap_or_else(|_| default_database()),
            schema: env::var(SCHEMA_VAR).unwrap_or_else(|_| default_schema()),
            warehouse: env::var(WAREHOUSE_VAR).unwrap_or_else(|_| default_warehouse()),
            role: env::var(ROLE_VAR).ok(),
        })
    }

    /// The account's HTTPS endpoint.
    pub fn base_url(&self) -> String {
        format!("https://{}.snowflakecomputing.com", self.account)
    }

    /// Returns the default path: ~/.config/irops/connections.toml
    fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IropsError::config("could not determine config directory"))?;
        Ok(config_dir.join("irops").join("connections.toml"))
    }
}
