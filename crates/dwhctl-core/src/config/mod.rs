//! Configuration loading for dwhctl
//!
//! # Features
//!
//! - Ordered `[iam_roles]`, `[sql]` and `[status]` sections
//! - Secure credential storage using OS keyring (optional)
//! - Environment variable expansion in config files
//! - Platform-specific config file locations

#[allow(clippy::module_inception)]
pub mod config;
pub mod credential;
pub mod error;

pub use config::{AwsCredentials, ClusterSettings, Config, WaitSettings};
pub use credential::CredentialStore;
pub use error::{ConfigError, Result};
