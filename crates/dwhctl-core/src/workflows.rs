//! Cluster lifecycle workflows
//!
//! Each workflow composes the control plane, the poller and the script
//! runner over one [`ClusterContext`], which is built once per invocation and
//! never mutated.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cluster::ControlPlane;
use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::progress::{Poller, ProgressCallback};
use crate::scripts::{self, SqlConnector};
use crate::status::{self, ProjectedField};

/// Shared state for one command invocation
pub struct ClusterContext {
    control_plane: Arc<dyn ControlPlane>,
    connector: Arc<dyn SqlConnector>,
    config: Config,
    poller: Poller,
}

impl ClusterContext {
    /// The poller is taken from the `[wait]` section
    pub fn new(
        control_plane: Arc<dyn ControlPlane>,
        connector: Arc<dyn SqlConnector>,
        config: Config,
    ) -> Self {
        let poller = config.poller();
        Self {
            control_plane,
            connector,
            config,
            poller,
        }
    }

    #[must_use]
    pub fn with_poller(mut self, poller: Poller) -> Self {
        self.poller = poller;
        self
    }

    pub fn cluster_id(&self) -> &str {
        self.config.cluster_identifier()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn poller(&self) -> &Poller {
        &self.poller
    }

    pub fn control_plane(&self) -> &dyn ControlPlane {
        self.control_plane.as_ref()
    }
}

/// Result of a status query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusReport {
    /// The control plane does not know the cluster
    NotFound(String),
    /// Projected fields in configured order
    Found(Vec<ProjectedField>),
}

/// Create the cluster, wait for it to become available, then run every
/// setup script in order
pub async fn bring_up(ctx: &ClusterContext, on_progress: Option<&ProgressCallback>) -> Result<()> {
    let spec = ctx.config.cluster_spec()?;
    let params = ctx.config.connection_params()?;
    let scripts = ctx.config.scripts();

    info!(
        "Creating cluster '{}' ({} x {})",
        spec.identifier, spec.node_count, spec.node_type
    );
    ctx.control_plane.create_cluster(&spec).await?;

    ctx.poller
        .await_availability(ctx.control_plane(), ctx.cluster_id(), on_progress)
        .await?;

    scripts::run_all(
        ctx.control_plane(),
        ctx.cluster_id(),
        &scripts,
        &params,
        ctx.connector.as_ref(),
        on_progress,
    )
    .await?;

    info!("Cluster '{}' initialised", ctx.cluster_id());
    Ok(())
}

/// Delete the cluster without a final snapshot and wait until it is gone
pub async fn tear_down(ctx: &ClusterContext, on_progress: Option<&ProgressCallback>) -> Result<()> {
    info!("Deleting cluster '{}'", ctx.cluster_id());
    ctx.control_plane.delete_cluster(ctx.cluster_id()).await?;

    ctx.poller
        .await_deletion(ctx.control_plane(), ctx.cluster_id(), on_progress)
        .await?;

    info!("Cluster '{}' deleted", ctx.cluster_id());
    Ok(())
}

/// Describe the cluster once and apply the configured projection
pub async fn report_status(ctx: &ClusterContext) -> Result<StatusReport> {
    let description = match ctx.control_plane.describe_cluster(ctx.cluster_id()).await {
        Ok(description) => description,
        Err(CoreError::ClusterNotFound { identifier }) => {
            debug!("Cluster '{}' not found", identifier);
            return Ok(StatusReport::NotFound(identifier));
        }
        Err(e) => return Err(e),
    };

    let projection = ctx.config.status_projection();
    Ok(StatusReport::Found(status::project(
        &description.document,
        &projection,
    )))
}
