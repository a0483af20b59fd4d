//! Unified error handling for dwhctl-core
//!
//! Control-plane, polling and script failures share one error type so the
//! CLI can map them to diagnostics in a single place.
//!
//! # Example
//!
//! ```rust
//! use dwhctl_core::CoreError;
//!
//! fn handle_error(err: CoreError) {
//!     if err.is_not_found() {
//!         println!("Cluster is gone");
//!     } else if err.is_timeout() {
//!         println!("Gave up waiting");
//!     }
//! }
//!
//! let err = CoreError::ClusterNotFound { identifier: "dwh".to_string() };
//! assert!(err.is_not_found());
//! ```

use std::time::Duration;
use thiserror::Error;

use crate::config::ConfigError;

/// Core error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// The control plane reported that the cluster does not exist
    #[error("Cluster '{identifier}' not found")]
    ClusterNotFound { identifier: String },

    /// Any other control-plane failure (transport, auth, validation)
    #[error("Control plane error during {operation}: {message}")]
    ControlPlane {
        operation: &'static str,
        message: String,
    },

    /// Waiting exceeded an explicitly configured timeout
    #[error("Timed out after {0:?} waiting for the cluster")]
    WaitTimeout(Duration),

    /// The cluster has no network endpoint assigned yet
    #[error("Cluster '{identifier}' has no endpoint address")]
    EndpointUnavailable { identifier: String },

    /// A setup script could not be read from disk
    #[error("Failed to read SQL script '{name}' from {path}: {source}")]
    ScriptRead {
        name: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Opening the database connection for a script failed
    #[error("Failed to connect to the database for script '{script}': {message}")]
    Connection { script: String, message: String },

    /// The database rejected a setup script
    #[error("SQL script '{script}' failed: {message}")]
    Sql { script: String, message: String },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Returns true if the control plane reported the cluster as missing
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::ClusterNotFound { .. })
    }

    /// Returns true if this is a configured wait timeout
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, CoreError::WaitTimeout(_))
    }

    /// Returns true if the failure came from running a setup script
    #[must_use]
    pub fn is_script_failure(&self) -> bool {
        matches!(
            self,
            CoreError::ScriptRead { .. } | CoreError::Connection { .. } | CoreError::Sql { .. }
        )
    }
}
