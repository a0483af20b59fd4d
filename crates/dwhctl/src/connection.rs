//! Builds the per-invocation cluster context

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use dwhctl_core::{ClusterContext, Config, PgConnector, Poller, RedshiftControlPlane};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::Result as CliResult;

/// Load the config file named on the command line, or the default one
pub fn load_config(config_file: Option<&Path>) -> CliResult<Config> {
    let path = Config::resolve_path(config_file)?;
    debug!("Loading config from {:?}", path);
    let config = Config::load_from_path(&path)?;
    info!(
        "Loaded config for cluster '{}' in {}",
        config.cluster_identifier(),
        config.region()
    );
    Ok(config)
}

/// Wait settings from `[wait]`, overridden by `--wait-interval`/`--wait-timeout`
pub fn poller_for(config: &Config, interval: Option<u64>, timeout: Option<u64>) -> Poller {
    let configured = config.poller();
    let interval = interval
        .map(Duration::from_secs)
        .unwrap_or(configured.interval());
    let timeout = timeout.map(Duration::from_secs).or(configured.timeout());
    Poller::new(interval).with_timeout(timeout)
}

/// Construct the Redshift client and database connector for this invocation
pub async fn build_context(cli: &Cli) -> CliResult<ClusterContext> {
    let config = load_config(cli.config_file.as_deref())?;
    let poller = poller_for(&config, cli.wait_interval, cli.wait_timeout);
    debug!(
        "Polling every {:?} (timeout {:?})",
        poller.interval(),
        poller.timeout()
    );

    let credentials = config.resolve_aws_credentials()?;
    if credentials.is_none() {
        debug!("No [credentials] section; using the default AWS provider chain");
    }
    let control_plane = RedshiftControlPlane::connect(config.region(), credentials).await;

    Ok(
        ClusterContext::new(Arc::new(control_plane), Arc::new(PgConnector), config)
            .with_poller(poller),
    )
}
