//! Configuration for the data warehouse lifecycle
//!
//! A single TOML file describes the region, the cluster shape, the IAM roles
//! attached at creation, the setup scripts and the status projection.
//! Mapping sections keep the order they are written in.

use directories::ProjectDirs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::credential::CredentialStore;
use super::error::{ConfigError, Result};
use crate::cluster::ClusterSpec;
use crate::progress::{DEFAULT_POLL_INTERVAL, Poller};
use crate::scripts::{ConnectionParams, ScriptSet};
use crate::status::StatusProjection;

/// Config file looked up in the working directory before the platform path
pub const LOCAL_CONFIG_FILE: &str = "dwhctl.toml";

/// Environment overrides for secrets
pub const AWS_ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
pub const DB_PASSWORD_ENV: &str = "DWHCTL_DB_PASSWORD";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub cluster: ClusterSettings,
    /// Static AWS credentials; the default provider chain is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<AwsCredentials>,
    /// Role name -> ARN, attached at creation
    #[serde(default)]
    pub iam_roles: IndexMap<String, String>,
    /// Script name -> SQL file, run in this order
    #[serde(default)]
    pub sql: IndexMap<String, PathBuf>,
    /// Display label -> field path
    #[serde(default)]
    pub status: IndexMap<String, String>,
    #[serde(default)]
    pub wait: WaitSettings,
}

/// `[cluster]` section
#[derive(Serialize, Deserialize, Clone)]
pub struct ClusterSettings {
    pub region: String,
    pub cluster_identifier: String,
    #[serde(default = "default_cluster_type")]
    pub cluster_type: String,
    pub node_type: String,
    #[serde(default = "default_nodes")]
    pub nodes: u32,
    pub db: String,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    pub db_user: String,
    /// Supports `keyring:` references and the `DWHCTL_DB_PASSWORD` override
    pub db_password: String,
}

impl std::fmt::Debug for ClusterSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClusterSettings")
            .field("region", &self.region)
            .field("cluster_identifier", &self.cluster_identifier)
            .field("cluster_type", &self.cluster_type)
            .field("node_type", &self.node_type)
            .field("nodes", &self.nodes)
            .field("db", &self.db)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &"***")
            .finish()
    }
}

/// `[credentials]` section
#[derive(Serialize, Deserialize, Clone)]
pub struct AwsCredentials {
    pub aws_key: String,
    pub aws_secret: String,
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("aws_key", &self.aws_key)
            .field("aws_secret", &"***")
            .finish()
    }
}

/// `[wait]` section
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct WaitSettings {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            timeout_secs: None,
        }
    }
}

fn default_cluster_type() -> String {
    "single-node".to_string()
}

fn default_nodes() -> u32 {
    1
}

fn default_db_port() -> u16 {
    5439
}

fn default_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

impl Config {
    /// Pick the config file to load
    ///
    /// An explicit path wins. Otherwise `./dwhctl.toml` is used if it exists,
    /// falling back to the platform config directory.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }
        Self::config_path()
    }

    /// Platform config location
    ///
    /// On Linux: ~/.config/dwhctl/config.toml
    /// On macOS: ~/Library/Application Support/com.dwhctl.dwhctl/config.toml
    /// On Windows: %APPDATA%\dwhctl\dwhctl\config.toml
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("com", "dwhctl", "dwhctl").ok_or(ConfigError::ConfigDirError)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Load and validate configuration from the resolved location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit)?;
        Self::load_from_path(&path)
    }

    /// Load and validate configuration from a specific path
    pub fn load_from_path(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound {
                path: config_path.display().to_string(),
            });
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::LoadError {
            path: config_path.display().to_string(),
            source: e,
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration text, expanding `${VAR}` references first
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let expanded = Self::expand_env_vars(content);
        let config: Config = toml::from_str(&expanded)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the control plane would refuse anyway
    pub fn validate(&self) -> Result<()> {
        if self.cluster.cluster_identifier.trim().is_empty() {
            return Err(invalid("cluster.cluster_identifier", "must not be empty"));
        }
        if self.cluster.region.trim().is_empty() {
            return Err(invalid("cluster.region", "must not be empty"));
        }
        if self.cluster.nodes == 0 {
            return Err(invalid("cluster.nodes", "must be at least 1"));
        }
        if self.cluster.cluster_type.eq_ignore_ascii_case("multi-node") && self.cluster.nodes < 2 {
            return Err(invalid(
                "cluster.nodes",
                "multi-node clusters need at least 2 nodes",
            ));
        }
        if self.cluster.db_port == 0 {
            return Err(invalid("cluster.db_port", "must not be 0"));
        }
        Ok(())
    }

    pub fn cluster_identifier(&self) -> &str {
        &self.cluster.cluster_identifier
    }

    pub fn region(&self) -> &str {
        &self.cluster.region
    }

    /// Build the creation descriptor, resolving the admin password
    pub fn cluster_spec(&self) -> Result<ClusterSpec> {
        Ok(ClusterSpec {
            identifier: self.cluster.cluster_identifier.clone(),
            cluster_type: self.cluster.cluster_type.clone(),
            node_type: self.cluster.node_type.clone(),
            node_count: self.cluster.nodes,
            database: self.cluster.db.clone(),
            port: self.cluster.db_port,
            admin_username: self.cluster.db_user.clone(),
            admin_password: self.resolve_db_password()?,
            iam_roles: self.iam_roles.values().cloned().collect(),
        })
    }

    /// Database connection settings for setup scripts
    pub fn connection_params(&self) -> Result<ConnectionParams> {
        Ok(ConnectionParams {
            port: self.cluster.db_port,
            database: self.cluster.db.clone(),
            user: self.cluster.db_user.clone(),
            password: self.resolve_db_password()?,
        })
    }

    fn resolve_db_password(&self) -> Result<String> {
        CredentialStore::new()
            .get_credential(&self.cluster.db_password, Some(DB_PASSWORD_ENV))
            .map_err(|e| {
                ConfigError::CredentialError(format!("Failed to resolve db_password: {}", e))
            })
    }

    /// Resolved static AWS credentials, if configured
    pub fn resolve_aws_credentials(&self) -> Result<Option<(String, String)>> {
        let Some(creds) = &self.credentials else {
            return Ok(None);
        };
        let store = CredentialStore::new();

        let key = store
            .get_credential(&creds.aws_key, Some(AWS_ACCESS_KEY_ENV))
            .map_err(|e| {
                ConfigError::CredentialError(format!("Failed to resolve aws_key: {}", e))
            })?;
        let secret = store
            .get_credential(&creds.aws_secret, Some(AWS_SECRET_KEY_ENV))
            .map_err(|e| {
                ConfigError::CredentialError(format!("Failed to resolve aws_secret: {}", e))
            })?;

        Ok(Some((key, secret)))
    }

    pub fn scripts(&self) -> ScriptSet {
        ScriptSet::from(self.sql.clone())
    }

    pub fn status_projection(&self) -> StatusProjection {
        self.status.iter().collect()
    }

    /// Poller built from `[wait]`
    pub fn poller(&self) -> Poller {
        Poller::new(Duration::from_secs(self.wait.interval_secs))
            .with_timeout(self.wait.timeout_secs.map(Duration::from_secs))
    }

    /// Expand environment variables in configuration content
    ///
    /// Supports `${VAR}` and `${VAR:-default}`. Unset variables without a
    /// default are left as written.
    fn expand_env_vars(content: &str) -> String {
        shellexpand::env_with_context_no_errors(content, |var| std::env::var(var).ok()).to_string()
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        message: message.to_string(),
    }
}
