use dwhctl_core::ClusterContext;
use dwhctl_core::workflows;

use super::progress_printer;
use crate::error::Result as CliResult;

pub async fn handle_down(ctx: &ClusterContext) -> CliResult<()> {
    let on_progress = progress_printer();
    workflows::tear_down(ctx, Some(&on_progress)).await?;
    println!("Cluster was deleted");
    Ok(())
}
