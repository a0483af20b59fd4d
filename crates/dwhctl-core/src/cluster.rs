//! Cluster descriptors and the control-plane seam
//!
//! The control plane is only ever reached through [`ControlPlane`], so the
//! poller, the script runner and the workflows can be exercised against an
//! in-memory implementation.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::Result;

/// Availability status reported once a cluster accepts connections
pub const AVAILABLE: &str = "Available";

/// Immutable descriptor used to create a cluster
#[derive(Clone, PartialEq, Eq)]
pub struct ClusterSpec {
    pub identifier: String,
    pub cluster_type: String,
    pub node_type: String,
    pub node_count: u32,
    pub database: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub iam_roles: Vec<String>,
}

impl ClusterSpec {
    /// Multi-node clusters are the only type that accepts a node count
    pub fn is_multi_node(&self) -> bool {
        self.cluster_type.eq_ignore_ascii_case("multi-node")
    }
}

impl fmt::Debug for ClusterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterSpec")
            .field("identifier", &self.identifier)
            .field("cluster_type", &self.cluster_type)
            .field("node_type", &self.node_type)
            .field("node_count", &self.node_count)
            .field("database", &self.database)
            .field("port", &self.port)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"***")
            .field("iam_roles", &self.iam_roles)
            .finish()
    }
}

/// Network endpoint of a provisioned cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    pub port: Option<u16>,
}

/// State observed by a single describe call
///
/// `document` holds the full describe response keyed by the provider's field
/// names (`ClusterStatus`, `Endpoint`, ...) and is what status projections walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterDescription {
    pub identifier: String,
    pub status: Option<String>,
    pub availability_status: Option<String>,
    pub endpoint: Option<Endpoint>,
    pub document: Value,
}

impl ClusterDescription {
    pub fn is_available(&self) -> bool {
        self.availability_status.as_deref() == Some(AVAILABLE)
    }
}

/// Cluster-management API
///
/// Implementations must report a missing cluster as
/// [`CoreError::ClusterNotFound`](crate::CoreError::ClusterNotFound) and
/// every other failure as a different variant.
#[async_trait]
pub trait ControlPlane: Send + Sync {
    /// Dispatch cluster creation; returns once the request is accepted
    async fn create_cluster(&self, spec: &ClusterSpec) -> Result<()>;

    /// Describe a cluster by identifier
    async fn describe_cluster(&self, identifier: &str) -> Result<ClusterDescription>;

    /// Delete a cluster without taking a final snapshot
    async fn delete_cluster(&self, identifier: &str) -> Result<()>;
}
