//! `status` command
//!
//! A missing cluster is a normal answer here, not an error.

use dwhctl_core::workflows::{self, StatusReport};
use dwhctl_core::{ClusterContext, ProjectedField};
use indexmap::IndexMap;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::error::Result as CliResult;
use crate::output::{self, print_output};

pub async fn handle_status(ctx: &ClusterContext, format: OutputFormat) -> CliResult<()> {
    let report = workflows::report_status(ctx).await?;
    match format {
        OutputFormat::Auto => {
            for line in render_lines(&report) {
                println!("{}", line);
            }
            Ok(())
        }
        OutputFormat::Json => print_report(&report, output::OutputFormat::Json),
        OutputFormat::Yaml => print_report(&report, output::OutputFormat::Yaml),
    }
}

fn render_lines(report: &StatusReport) -> Vec<String> {
    match report {
        StatusReport::NotFound(identifier) => vec![format!("Cluster not found '{}'", identifier)],
        StatusReport::Found(fields) => fields
            .iter()
            .map(|field| format!("{} : {}", field.label, field.value))
            .collect(),
    }
}

fn print_report(report: &StatusReport, format: output::OutputFormat) -> CliResult<()> {
    match report {
        StatusReport::NotFound(identifier) => print_output(
            &json!({"cluster_identifier": identifier, "found": false}),
            format,
        ),
        StatusReport::Found(fields) => print_output(&as_map(fields), format),
    }
}

fn as_map(fields: &[ProjectedField]) -> IndexMap<&str, &str> {
    fields
        .iter()
        .map(|field| (field.label.as_str(), field.value.as_str()))
        .collect()
}
