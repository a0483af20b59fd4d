use dwhctl_core::ClusterContext;
use dwhctl_core::workflows;
use tracing::debug;

use super::progress_printer;
use crate::error::Result as CliResult;

pub async fn handle_up(ctx: &ClusterContext) -> CliResult<()> {
    debug!(
        "Bringing up '{}' with {} setup script(s)",
        ctx.cluster_id(),
        ctx.config().sql.len()
    );
    let on_progress = progress_printer();
    workflows::bring_up(ctx, Some(&on_progress)).await?;
    println!("Cluster initialised");
    Ok(())
}
