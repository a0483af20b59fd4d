//! Error types for dwhctl
//!
//! Every failure ends the process with a cargo-style diagnostic on stderr and
//! exit status 1.

use colored::Colorize;
use dwhctl_core::{ConfigError, CoreError};
use thiserror::Error;

/// Cargo-style diagnostic formatter for CLI errors.
///
/// Produces structured output like:
/// ```text
/// error: Cluster 'dwh' not found
///
///   tip: check cluster_identifier in the [cluster] section
/// ```
pub struct CliDiagnostic {
    message: String,
    tips: Vec<String>,
}

impl CliDiagnostic {
    /// Start a new error diagnostic with the given message.
    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            tips: Vec::new(),
        }
    }

    pub fn tip(mut self, description: &str) -> Self {
        self.tips.push(description.to_string());
        self
    }

    /// Print the diagnostic to stderr with colored formatting.
    pub fn print(&self) {
        eprint!("{}{}", "error".red().bold(), ": ".bold());
        eprintln!("{}", self.message);

        for description in &self.tips {
            eprintln!();
            eprint!("  {}{}", "tip".yellow().bold(), ": ".bold());
            eprintln!("{}", description);
        }
    }
}

/// Main error type for the dwhctl application
#[derive(Error, Debug)]
pub enum DwhCtlError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        missing_file: bool,
    },

    #[error("Cluster '{identifier}' not found")]
    ClusterNotFound { identifier: String },

    #[error("AWS error: {message}")]
    ControlPlane { message: String },

    #[error("Timeout: {message}")]
    Timeout { message: String },

    #[error("Setup script failed: {message}")]
    Script { message: String },

    #[error("Output formatting error: {message}")]
    OutputError { message: String },
}

/// Result type for dwhctl operations
pub type Result<T> = std::result::Result<T, DwhCtlError>;

impl DwhCtlError {
    /// Get helpful suggestions for resolving this error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            DwhCtlError::Configuration {
                missing_file: true, ..
            } => vec![
                "Create ./dwhctl.toml with [cluster], [iam_roles], [sql] and [status] sections"
                    .to_string(),
                "Point at another file: dwhctl --config-file <path> <command>".to_string(),
            ],
            DwhCtlError::Configuration { .. } => vec![
                "Check the config file syntax and required [cluster] keys".to_string(),
                "Environment references use ${VAR} or ${VAR:-default}".to_string(),
            ],
            DwhCtlError::ClusterNotFound { .. } => vec![
                "Check cluster_identifier in the [cluster] section".to_string(),
                "Verify the region is correct".to_string(),
            ],
            DwhCtlError::ControlPlane { message }
                if message.contains("credentials") || message.contains("Unauthorized") =>
            {
                vec![
                    "Set aws_key/aws_secret under [credentials], or AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY".to_string(),
                    "Without [credentials] the default AWS provider chain is used".to_string(),
                ]
            }
            DwhCtlError::ControlPlane { .. } => vec![
                "Re-run with -vv for request details".to_string(),
            ],
            DwhCtlError::Timeout { .. } => vec![
                "Raise the limit with --wait-timeout or [wait] timeout_secs".to_string(),
                "Check progress with: dwhctl status".to_string(),
            ],
            DwhCtlError::Script { .. } => vec![
                "Script paths in [sql] are relative to the working directory".to_string(),
                "Scripts after the failing one were not run".to_string(),
            ],
            DwhCtlError::OutputError { .. } => vec![],
        }
    }

    /// Print a cargo-style diagnostic to stderr using colored formatting.
    pub fn print_diagnostic(&self) {
        let mut diag = CliDiagnostic::error(&format!("{}", self));

        for suggestion in self.suggestions() {
            diag = diag.tip(&suggestion);
        }

        diag.print();
    }
}

impl From<ConfigError> for DwhCtlError {
    fn from(err: ConfigError) -> Self {
        DwhCtlError::Configuration {
            missing_file: matches!(err, ConfigError::NotFound { .. }),
            message: err.to_string(),
        }
    }
}

impl From<CoreError> for DwhCtlError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ClusterNotFound { identifier } => DwhCtlError::ClusterNotFound { identifier },
            CoreError::WaitTimeout(duration) => DwhCtlError::Timeout {
                message: format!(
                    "Cluster did not reach the expected state within {} seconds",
                    duration.as_secs()
                ),
            },
            CoreError::Config(config_err) => DwhCtlError::from(config_err),
            err @ CoreError::ControlPlane { .. } => DwhCtlError::ControlPlane {
                message: err.to_string(),
            },
            err @ (CoreError::EndpointUnavailable { .. }
            | CoreError::ScriptRead { .. }
            | CoreError::Connection { .. }
            | CoreError::Sql { .. }) => DwhCtlError::Script {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for DwhCtlError {
    fn from(err: serde_json::Error) -> Self {
        DwhCtlError::OutputError {
            message: format!("JSON error: {}", err),
        }
    }
}

impl From<serde_yaml::Error> for DwhCtlError {
    fn from(err: serde_yaml::Error) -> Self {
        DwhCtlError::OutputError {
            message: format!("YAML error: {}", err),
        }
    }
}
