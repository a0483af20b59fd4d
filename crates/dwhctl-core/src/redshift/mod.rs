//! Amazon Redshift control plane
//!
//! Wraps the AWS SDK client behind [`ControlPlane`]. Only the documented
//! `ClusterNotFoundFault` is reported as [`CoreError::ClusterNotFound`];
//! every other SDK failure becomes [`CoreError::ControlPlane`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_redshift::Client;
use aws_sdk_redshift::config::{Credentials, Region};
use aws_sdk_redshift::error::{DisplayErrorContext, SdkError};
use aws_sdk_redshift::types::Cluster;
use tracing::{debug, info};

use crate::cluster::{ClusterDescription, ClusterSpec, ControlPlane, Endpoint};
use crate::error::{CoreError, Result};

mod document;

use document::cluster_document;

/// Provider name attached to credentials taken from the config file
const CREDENTIALS_PROVIDER_NAME: &str = "dwhctl-config";

/// Redshift implementation of [`ControlPlane`]
#[derive(Debug, Clone)]
pub struct RedshiftControlPlane {
    client: Client,
}

impl RedshiftControlPlane {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client for `region`
    ///
    /// Static credentials are used when given; otherwise the AWS default
    /// provider chain applies.
    pub async fn connect(region: &str, credentials: Option<(String, String)>) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).region(Region::new(region.to_string()));
        if let Some((access_key, secret_key)) = credentials {
            debug!("Using static AWS credentials from config");
            loader = loader.credentials_provider(Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                CREDENTIALS_PROVIDER_NAME,
            ));
        }
        let sdk_config = loader.load().await;
        info!("Redshift client configured for region {}", region);
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl ControlPlane for RedshiftControlPlane {
    async fn create_cluster(&self, spec: &ClusterSpec) -> Result<()> {
        debug!("CreateCluster {:?}", spec);
        let mut request = self
            .client
            .create_cluster()
            .cluster_identifier(&spec.identifier)
            .cluster_type(&spec.cluster_type)
            .node_type(&spec.node_type)
            .db_name(&spec.database)
            .port(i32::from(spec.port))
            .master_username(&spec.admin_username)
            .master_user_password(&spec.admin_password)
            .set_iam_roles(Some(spec.iam_roles.clone()));

        if spec.is_multi_node() {
            let nodes = i32::try_from(spec.node_count).map_err(|_| CoreError::ControlPlane {
                operation: "CreateCluster",
                message: format!("node count {} is out of range", spec.node_count),
            })?;
            request = request.number_of_nodes(nodes);
        }

        let output = request
            .send()
            .await
            .map_err(|e| sdk_failure("CreateCluster", e))?;
        info!(
            "CreateCluster accepted for '{}' (status: {:?})",
            spec.identifier,
            output.cluster().and_then(|c| c.cluster_status())
        );
        Ok(())
    }

    async fn describe_cluster(&self, identifier: &str) -> Result<ClusterDescription> {
        let output = self
            .client
            .describe_clusters()
            .cluster_identifier(identifier)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|se| se.is_cluster_not_found_fault())
                {
                    not_found(identifier)
                } else {
                    sdk_failure("DescribeClusters", e)
                }
            })?;

        let cluster = output
            .clusters()
            .first()
            .ok_or_else(|| not_found(identifier))?;
        Ok(describe(cluster))
    }

    async fn delete_cluster(&self, identifier: &str) -> Result<()> {
        let output = self
            .client
            .delete_cluster()
            .cluster_identifier(identifier)
            .skip_final_cluster_snapshot(true)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error()
                    .is_some_and(|se| se.is_cluster_not_found_fault())
                {
                    not_found(identifier)
                } else {
                    sdk_failure("DeleteCluster", e)
                }
            })?;
        info!(
            "DeleteCluster accepted for '{}' (status: {:?})",
            identifier,
            output.cluster().and_then(|c| c.cluster_status())
        );
        Ok(())
    }
}

fn not_found(identifier: &str) -> CoreError {
    CoreError::ClusterNotFound {
        identifier: identifier.to_string(),
    }
}

fn sdk_failure<E, R>(operation: &'static str, err: SdkError<E, R>) -> CoreError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    CoreError::ControlPlane {
        operation,
        message: DisplayErrorContext(&err).to_string(),
    }
}

fn describe(cluster: &Cluster) -> ClusterDescription {
    let endpoint = cluster.endpoint().and_then(|e| {
        e.address().map(|address| Endpoint {
            address: address.to_string(),
            port: e.port().and_then(|p| u16::try_from(p).ok()),
        })
    });

    ClusterDescription {
        identifier: cluster.cluster_identifier().unwrap_or_default().to_string(),
        status: cluster.cluster_status().map(str::to_string),
        availability_status: cluster.cluster_availability_status().map(str::to_string),
        endpoint,
        document: cluster_document(cluster),
    }
}
