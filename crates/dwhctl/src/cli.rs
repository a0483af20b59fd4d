//! CLI structure and command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Redshift data warehouse lifecycle CLI
#[derive(Parser, Debug)]
#[command(name = "dwhctl")]
#[command(
    version,
    about = "Provision, initialise, inspect and tear down a Redshift data warehouse"
)]
#[command(long_about = "
Provision, initialise, inspect and tear down a Redshift data warehouse

The cluster, its IAM roles, the SQL setup scripts and the status fields are
described in a TOML config file (./dwhctl.toml or the platform config dir).

EXAMPLES:
    # Create the cluster, wait for it and run the [sql] scripts in order
    dwhctl up

    # Show the fields listed under [status]
    dwhctl status

    # Same, as JSON
    dwhctl status -o json

    # Delete the cluster (no final snapshot) and wait until it is gone
    dwhctl down

    # Use another config file and poll every 5 seconds
    dwhctl --config-file staging.toml --wait-interval 5 up

For more help on a specific command, run:
    dwhctl <command> --help
")]
pub struct Cli {
    /// Path to alternate configuration file
    #[arg(long, global = true, env = "DWHCTL_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value = "auto")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Seconds between describe calls while waiting (overrides [wait] interval_secs)
    #[arg(long, global = true, value_name = "SECS")]
    pub wait_interval: Option<u64>,

    /// Give up waiting after this many seconds (overrides [wait] timeout_secs)
    #[arg(long, global = true, value_name = "SECS")]
    pub wait_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `label : value` lines
    Auto,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the cluster, wait until available, then run setup scripts
    Up,

    /// Delete the cluster without a final snapshot and wait until it is gone
    Down,

    /// Show configured status fields of the cluster
    #[command(visible_alias = "st")]
    Status,

    /// Generate shell completions
    #[command(visible_alias = "comp")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion generation
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bourne Again Shell
    Bash,
    /// Z Shell
    Zsh,
    /// Friendly Interactive Shell
    Fish,
    /// PowerShell
    #[value(name = "powershell", alias = "power-shell")]
    PowerShell,
    /// Elvish
    Elvish,
}
