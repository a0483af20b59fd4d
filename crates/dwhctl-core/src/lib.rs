//! # dwhctl-core
//!
//! Lifecycle engine for a provisioned Amazon Redshift data warehouse.
//!
//! The CLI is a thin layer over three workflows:
//!
//! - [`bring_up`](workflows::bring_up): create the cluster, poll until it is
//!   available, then run the configured SQL setup scripts in order
//! - [`tear_down`](workflows::tear_down): delete the cluster without a final
//!   snapshot and poll until the control plane no longer knows it
//! - [`report_status`](workflows::report_status): describe the cluster and
//!   project configured fields out of the response
//!
//! ## Seams
//!
//! The control plane ([`ControlPlane`]) and the database driver
//! ([`SqlConnector`]) are traits. Production code uses
//! [`RedshiftControlPlane`] and [`PgConnector`]; tests substitute in-memory
//! implementations.
//!
//! ## Progress
//!
//! Long-running steps report through an optional [`ProgressCallback`]. The
//! core never prints; presentation belongs to the caller.
//!
//! ```rust,ignore
//! use dwhctl_core::{ProgressCallback, ProgressEvent};
//!
//! let on_progress: ProgressCallback = Box::new(|event| match event {
//!     ProgressEvent::Waiting { observed, .. } => println!("still {:?}", observed),
//!     _ => {}
//! });
//! dwhctl_core::workflows::bring_up(&ctx, Some(&on_progress)).await?;
//! ```

pub mod cluster;
pub mod config;
pub mod error;
pub mod postgres;
pub mod progress;
pub mod redshift;
pub mod scripts;
pub mod status;
pub mod workflows;

#[cfg(test)]
mod testing;

pub use cluster::{AVAILABLE, ClusterDescription, ClusterSpec, ControlPlane, Endpoint};
pub use config::{Config, ConfigError, CredentialStore};
pub use error::{CoreError, Result};
pub use postgres::PgConnector;
pub use progress::{Absence, DEFAULT_POLL_INTERVAL, Poller, ProgressCallback, ProgressEvent, WaitTarget};
pub use redshift::RedshiftControlPlane;
pub use scripts::{ConnectionParams, DatabaseError, ScriptSet, SqlConnector, SqlSession};
pub use status::{FieldPath, ProjectedField, StatusProjection, VALUE_NOT_FOUND};
pub use workflows::{ClusterContext, StatusReport};
