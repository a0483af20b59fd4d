//! Describe-response rendering
//!
//! Converts an SDK [`Cluster`] into the JSON document that status field
//! paths walk. Every member of the `DescribeClusters` response is rendered
//! under the element name the service uses on the wire, nested structures
//! and lists included. Absent scalars and structures are omitted; lists are
//! always present.

use aws_sdk_redshift::primitives::{DateTime, DateTimeFormat};
use aws_sdk_redshift::types::{
    AquaConfiguration, Cluster, ClusterIamRole, ClusterNode, ClusterParameterGroupStatus,
    ClusterParameterStatus, ClusterSecurityGroupMembership, ClusterSnapshotCopyStatus,
    DataTransferProgress, DeferredMaintenanceWindow, ElasticIpStatus, Endpoint, HsmStatus,
    LoggingPublishStatus, NetworkInterface, PendingModifiedValues, ReservedNodeExchangeStatus,
    ResizeInfo, RestoreStatus, S3TablePublishStatus, SecondaryClusterInfo, Tag, VpcEndpoint,
    VpcSecurityGroupMembership,
};
use serde_json::{Map, Value};

/// Ordered JSON object under construction
#[derive(Default)]
struct Fields(Map<String, Value>);

impl Fields {
    fn new() -> Self {
        Self::default()
    }

    fn put<V: Into<Value>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.0.insert(key.to_string(), value.into());
        }
        self
    }

    fn time(self, key: &str, value: Option<&DateTime>) -> Self {
        self.put(key, value.and_then(|t| t.fmt(DateTimeFormat::DateTime).ok()))
    }

    fn object<T>(self, key: &str, value: Option<&T>, render: fn(&T) -> Value) -> Self {
        self.put(key, value.map(render))
    }

    fn list<T>(mut self, key: &str, items: &[T], render: fn(&T) -> Value) -> Self {
        self.0.insert(
            key.to_string(),
            Value::Array(items.iter().map(render).collect()),
        );
        self
    }

    fn strings(self, key: &str, items: &[String]) -> Self {
        self.list(key, items, |s| Value::String(s.clone()))
    }

    fn build(self) -> Value {
        Value::Object(self.0)
    }
}

/// Render a cluster with the provider's field names
pub(crate) fn cluster_document(c: &Cluster) -> Value {
    Fields::new()
        .put("ClusterIdentifier", c.cluster_identifier())
        .put("NodeType", c.node_type())
        .put("ClusterStatus", c.cluster_status())
        .put("ClusterAvailabilityStatus", c.cluster_availability_status())
        .put("ModifyStatus", c.modify_status())
        .put("MasterUsername", c.master_username())
        .put("DBName", c.db_name())
        .object("Endpoint", c.endpoint(), endpoint)
        .time("ClusterCreateTime", c.cluster_create_time())
        .put(
            "AutomatedSnapshotRetentionPeriod",
            c.automated_snapshot_retention_period(),
        )
        .put(
            "ManualSnapshotRetentionPeriod",
            c.manual_snapshot_retention_period(),
        )
        .list(
            "ClusterSecurityGroups",
            c.cluster_security_groups(),
            cluster_security_group,
        )
        .list("VpcSecurityGroups", c.vpc_security_groups(), vpc_security_group)
        .list(
            "ClusterParameterGroups",
            c.cluster_parameter_groups(),
            parameter_group,
        )
        .put("ClusterSubnetGroupName", c.cluster_subnet_group_name())
        .put("VpcId", c.vpc_id())
        .put("AvailabilityZone", c.availability_zone())
        .put("PreferredMaintenanceWindow", c.preferred_maintenance_window())
        .object(
            "PendingModifiedValues",
            c.pending_modified_values(),
            pending_modified_values,
        )
        .put("ClusterVersion", c.cluster_version())
        .put("AllowVersionUpgrade", c.allow_version_upgrade())
        .put("NumberOfNodes", c.number_of_nodes())
        .put("PubliclyAccessible", c.publicly_accessible())
        .put("Encrypted", c.encrypted())
        .object("RestoreStatus", c.restore_status(), restore_status)
        .object(
            "DataTransferProgress",
            c.data_transfer_progress(),
            data_transfer_progress,
        )
        .object("HsmStatus", c.hsm_status(), hsm_status)
        .object(
            "ClusterSnapshotCopyStatus",
            c.cluster_snapshot_copy_status(),
            snapshot_copy_status,
        )
        .put("ClusterPublicKey", c.cluster_public_key())
        .list("ClusterNodes", c.cluster_nodes(), cluster_node)
        .object("ElasticIpStatus", c.elastic_ip_status(), elastic_ip_status)
        .put("ClusterRevisionNumber", c.cluster_revision_number())
        .list("Tags", c.tags(), tag)
        .put("KmsKeyId", c.kms_key_id())
        .put("EnhancedVpcRouting", c.enhanced_vpc_routing())
        .list("IamRoles", c.iam_roles(), iam_role)
        .strings("PendingActions", c.pending_actions())
        .put("MaintenanceTrackName", c.maintenance_track_name())
        .put(
            "ElasticResizeNumberOfNodeOptions",
            c.elastic_resize_number_of_node_options(),
        )
        .list(
            "DeferredMaintenanceWindows",
            c.deferred_maintenance_windows(),
            deferred_maintenance_window,
        )
        .put("SnapshotScheduleIdentifier", c.snapshot_schedule_identifier())
        .put(
            "SnapshotScheduleState",
            c.snapshot_schedule_state().map(|s| s.as_str()),
        )
        .time(
            "ExpectedNextSnapshotScheduleTime",
            c.expected_next_snapshot_schedule_time(),
        )
        .put(
            "ExpectedNextSnapshotScheduleTimeStatus",
            c.expected_next_snapshot_schedule_time_status(),
        )
        .time(
            "NextMaintenanceWindowStartTime",
            c.next_maintenance_window_start_time(),
        )
        .object("ResizeInfo", c.resize_info(), resize_info)
        .put(
            "AvailabilityZoneRelocationStatus",
            c.availability_zone_relocation_status(),
        )
        .put("ClusterNamespaceArn", c.cluster_namespace_arn())
        .put(
            "TotalStorageCapacityInMegaBytes",
            c.total_storage_capacity_in_mega_bytes(),
        )
        .object("AquaConfiguration", c.aqua_configuration(), aqua_configuration)
        .put("DefaultIamRoleArn", c.default_iam_role_arn())
        .object(
            "ReservedNodeExchangeStatus",
            c.reserved_node_exchange_status(),
            reserved_node_exchange_status,
        )
        .put("CustomDomainName", c.custom_domain_name())
        .put("CustomDomainCertificateArn", c.custom_domain_certificate_arn())
        .time(
            "CustomDomainCertificateExpiryDate",
            c.custom_domain_certificate_expiry_date(),
        )
        .put("MasterPasswordSecretArn", c.master_password_secret_arn())
        .put(
            "MasterPasswordSecretKmsKeyId",
            c.master_password_secret_kms_key_id(),
        )
        .put("IpAddressType", c.ip_address_type())
        .put("MultiAZ", c.multi_az())
        .object("MultiAZSecondary", c.multi_az_secondary(), secondary_cluster)
        .put("LakehouseRegistrationStatus", c.lakehouse_registration_status())
        .put("CatalogArn", c.catalog_arn())
        .put(
            "ExtraComputeForAutomaticOptimization",
            c.extra_compute_for_automatic_optimization(),
        )
        .object(
            "LoggingPublishStatus",
            c.logging_publish_status(),
            logging_publish_status,
        )
        .build()
}

fn endpoint(e: &Endpoint) -> Value {
    Fields::new()
        .put("Address", e.address())
        .put("Port", e.port())
        .list("VpcEndpoints", e.vpc_endpoints(), vpc_endpoint)
        .build()
}

fn vpc_endpoint(e: &VpcEndpoint) -> Value {
    Fields::new()
        .put("VpcEndpointId", e.vpc_endpoint_id())
        .put("VpcId", e.vpc_id())
        .list("NetworkInterfaces", e.network_interfaces(), network_interface)
        .build()
}

fn network_interface(n: &NetworkInterface) -> Value {
    Fields::new()
        .put("NetworkInterfaceId", n.network_interface_id())
        .put("SubnetId", n.subnet_id())
        .put("PrivateIpAddress", n.private_ip_address())
        .put("AvailabilityZone", n.availability_zone())
        .put("Ipv6Address", n.ipv6_address())
        .build()
}

fn cluster_security_group(g: &ClusterSecurityGroupMembership) -> Value {
    Fields::new()
        .put("ClusterSecurityGroupName", g.cluster_security_group_name())
        .put("Status", g.status())
        .build()
}

fn vpc_security_group(g: &VpcSecurityGroupMembership) -> Value {
    Fields::new()
        .put("VpcSecurityGroupId", g.vpc_security_group_id())
        .put("Status", g.status())
        .build()
}

fn parameter_group(g: &ClusterParameterGroupStatus) -> Value {
    Fields::new()
        .put("ParameterGroupName", g.parameter_group_name())
        .put("ParameterApplyStatus", g.parameter_apply_status())
        .list(
            "ClusterParameterStatusList",
            g.cluster_parameter_status_list(),
            parameter_status,
        )
        .build()
}

fn parameter_status(p: &ClusterParameterStatus) -> Value {
    Fields::new()
        .put("ParameterName", p.parameter_name())
        .put("ParameterApplyStatus", p.parameter_apply_status())
        .put(
            "ParameterApplyErrorDescription",
            p.parameter_apply_error_description(),
        )
        .build()
}

fn pending_modified_values(p: &PendingModifiedValues) -> Value {
    Fields::new()
        .put("MasterUserPassword", p.master_user_password())
        .put("NodeType", p.node_type())
        .put("NumberOfNodes", p.number_of_nodes())
        .put("ClusterType", p.cluster_type())
        .put("ClusterVersion", p.cluster_version())
        .put(
            "AutomatedSnapshotRetentionPeriod",
            p.automated_snapshot_retention_period(),
        )
        .put("ClusterIdentifier", p.cluster_identifier())
        .put("PubliclyAccessible", p.publicly_accessible())
        .put("EnhancedVpcRouting", p.enhanced_vpc_routing())
        .put("MaintenanceTrackName", p.maintenance_track_name())
        .put("EncryptionType", p.encryption_type())
        .build()
}

fn restore_status(r: &RestoreStatus) -> Value {
    Fields::new()
        .put("Status", r.status())
        .put(
            "CurrentRestoreRateInMegaBytesPerSecond",
            r.current_restore_rate_in_mega_bytes_per_second(),
        )
        .put("SnapshotSizeInMegaBytes", r.snapshot_size_in_mega_bytes())
        .put("ProgressInMegaBytes", r.progress_in_mega_bytes())
        .put("ElapsedTimeInSeconds", r.elapsed_time_in_seconds())
        .put(
            "EstimatedTimeToCompletionInSeconds",
            r.estimated_time_to_completion_in_seconds(),
        )
        .build()
}

fn data_transfer_progress(d: &DataTransferProgress) -> Value {
    Fields::new()
        .put("Status", d.status())
        .put(
            "CurrentRateInMegaBytesPerSecond",
            d.current_rate_in_mega_bytes_per_second(),
        )
        .put("TotalDataInMegaBytes", d.total_data_in_mega_bytes())
        .put("DataTransferredInMegaBytes", d.data_transferred_in_mega_bytes())
        .put(
            "EstimatedTimeToCompletionInSeconds",
            d.estimated_time_to_completion_in_seconds(),
        )
        .put("ElapsedTimeInSeconds", d.elapsed_time_in_seconds())
        .build()
}

fn hsm_status(h: &HsmStatus) -> Value {
    Fields::new()
        .put(
            "HsmClientCertificateIdentifier",
            h.hsm_client_certificate_identifier(),
        )
        .put("HsmConfigurationIdentifier", h.hsm_configuration_identifier())
        .put("Status", h.status())
        .build()
}

fn snapshot_copy_status(s: &ClusterSnapshotCopyStatus) -> Value {
    Fields::new()
        .put("DestinationRegion", s.destination_region())
        .put("RetentionPeriod", s.retention_period())
        .put(
            "ManualSnapshotRetentionPeriod",
            s.manual_snapshot_retention_period(),
        )
        .put("SnapshotCopyGrantName", s.snapshot_copy_grant_name())
        .build()
}

fn cluster_node(n: &ClusterNode) -> Value {
    Fields::new()
        .put("NodeRole", n.node_role())
        .put("PrivateIPAddress", n.private_ip_address())
        .put("PublicIPAddress", n.public_ip_address())
        .build()
}

fn elastic_ip_status(e: &ElasticIpStatus) -> Value {
    Fields::new()
        .put("ElasticIp", e.elastic_ip())
        .put("Status", e.status())
        .build()
}

fn tag(t: &Tag) -> Value {
    Fields::new()
        .put("Key", t.key())
        .put("Value", t.value())
        .build()
}

fn iam_role(r: &ClusterIamRole) -> Value {
    Fields::new()
        .put("IamRoleArn", r.iam_role_arn())
        .put("ApplyStatus", r.apply_status())
        .build()
}

fn deferred_maintenance_window(w: &DeferredMaintenanceWindow) -> Value {
    Fields::new()
        .put("DeferMaintenanceIdentifier", w.defer_maintenance_identifier())
        .time("DeferMaintenanceStartTime", w.defer_maintenance_start_time())
        .time("DeferMaintenanceEndTime", w.defer_maintenance_end_time())
        .build()
}

fn resize_info(r: &ResizeInfo) -> Value {
    Fields::new()
        .put("ResizeType", r.resize_type())
        .put("AllowCancelResize", r.allow_cancel_resize())
        .build()
}

fn aqua_configuration(a: &AquaConfiguration) -> Value {
    Fields::new()
        .put("AquaStatus", a.aqua_status().map(|s| s.as_str()))
        .put(
            "AquaConfigurationStatus",
            a.aqua_configuration_status().map(|s| s.as_str()),
        )
        .build()
}

fn reserved_node_exchange_status(r: &ReservedNodeExchangeStatus) -> Value {
    Fields::new()
        .put(
            "ReservedNodeExchangeRequestId",
            r.reserved_node_exchange_request_id(),
        )
        .put("Status", r.status().map(|s| s.as_str()))
        .time("RequestTime", r.request_time())
        .put("SourceReservedNodeId", r.source_reserved_node_id())
        .put("SourceReservedNodeType", r.source_reserved_node_type())
        .put("SourceReservedNodeCount", r.source_reserved_node_count())
        .put(
            "TargetReservedNodeOfferingId",
            r.target_reserved_node_offering_id(),
        )
        .put("TargetReservedNodeType", r.target_reserved_node_type())
        .put("TargetReservedNodeCount", r.target_reserved_node_count())
        .build()
}

fn secondary_cluster(s: &SecondaryClusterInfo) -> Value {
    Fields::new()
        .put("AvailabilityZone", s.availability_zone())
        .list("ClusterNodes", s.cluster_nodes(), cluster_node)
        .build()
}

fn logging_publish_status(l: &LoggingPublishStatus) -> Value {
    Fields::new()
        .object("S3Tables", l.s3_tables(), s3_table_publish_status)
        .build()
}

fn s3_table_publish_status(s: &S3TablePublishStatus) -> Value {
    let ingestion_times = s.last_ingestion_times().map(|times| {
        times
            .iter()
            .map(|(table, time)| (table.clone(), Value::String(time.clone())))
            .collect::<Map<String, Value>>()
    });
    Fields::new()
        .strings("S3Tables", s.s3_tables())
        .put("S3TableNamespace", s.s3_table_namespace())
        .put("S3TableGranularity", s.s3_table_granularity())
        .put("EnabledAll", s.enabled_all())
        .put("LastIngestionTimes", ingestion_times)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::{StatusProjection, VALUE_NOT_FOUND, project};
    use aws_sdk_redshift::types::{
        AquaConfigurationStatus, AquaStatus, ReservedNodeExchangeStatusType, ScheduleState,
    };
    use pretty_assertions::assert_eq;

    /// Every member of the wire-level `Cluster` structure
    const CLUSTER_FIELDS: &[&str] = &[
        "ClusterIdentifier",
        "NodeType",
        "ClusterStatus",
        "ClusterAvailabilityStatus",
        "ModifyStatus",
        "MasterUsername",
        "DBName",
        "Endpoint",
        "ClusterCreateTime",
        "AutomatedSnapshotRetentionPeriod",
        "ManualSnapshotRetentionPeriod",
        "ClusterSecurityGroups",
        "VpcSecurityGroups",
        "ClusterParameterGroups",
        "ClusterSubnetGroupName",
        "VpcId",
        "AvailabilityZone",
        "PreferredMaintenanceWindow",
        "PendingModifiedValues",
        "ClusterVersion",
        "AllowVersionUpgrade",
        "NumberOfNodes",
        "PubliclyAccessible",
        "Encrypted",
        "RestoreStatus",
        "DataTransferProgress",
        "HsmStatus",
        "ClusterSnapshotCopyStatus",
        "ClusterPublicKey",
        "ClusterNodes",
        "ElasticIpStatus",
        "ClusterRevisionNumber",
        "Tags",
        "KmsKeyId",
        "EnhancedVpcRouting",
        "IamRoles",
        "PendingActions",
        "MaintenanceTrackName",
        "ElasticResizeNumberOfNodeOptions",
        "DeferredMaintenanceWindows",
        "SnapshotScheduleIdentifier",
        "SnapshotScheduleState",
        "ExpectedNextSnapshotScheduleTime",
        "ExpectedNextSnapshotScheduleTimeStatus",
        "NextMaintenanceWindowStartTime",
        "ResizeInfo",
        "AvailabilityZoneRelocationStatus",
        "ClusterNamespaceArn",
        "TotalStorageCapacityInMegaBytes",
        "AquaConfiguration",
        "DefaultIamRoleArn",
        "ReservedNodeExchangeStatus",
        "CustomDomainName",
        "CustomDomainCertificateArn",
        "CustomDomainCertificateExpiryDate",
        "MasterPasswordSecretArn",
        "MasterPasswordSecretKmsKeyId",
        "IpAddressType",
        "MultiAZ",
        "MultiAZSecondary",
        "LakehouseRegistrationStatus",
        "CatalogArn",
        "ExtraComputeForAutomaticOptimization",
        "LoggingPublishStatus",
    ];

    fn node(role: &str, ip: &str) -> ClusterNode {
        ClusterNode::builder()
            .node_role(role)
            .private_ip_address(ip)
            .public_ip_address("54.0.0.1")
            .build()
    }

    fn populated_cluster() -> Cluster {
        let created = DateTime::from_secs(1_700_000_000);
        Cluster::builder()
            .cluster_identifier("dwh")
            .node_type("dc2.large")
            .cluster_status("available")
            .cluster_availability_status("Available")
            .modify_status("none")
            .master_username("admin")
            .db_name("dev")
            .endpoint(
                Endpoint::builder()
                    .address("dwh.abc.us-west-2.redshift.amazonaws.com")
                    .port(5439)
                    .vpc_endpoints(
                        VpcEndpoint::builder()
                            .vpc_endpoint_id("vpce-1")
                            .vpc_id("vpc-1")
                            .network_interfaces(
                                NetworkInterface::builder()
                                    .network_interface_id("eni-1")
                                    .subnet_id("subnet-1")
                                    .private_ip_address("10.0.0.5")
                                    .availability_zone("us-west-2a")
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .cluster_create_time(created)
            .automated_snapshot_retention_period(1)
            .manual_snapshot_retention_period(-1)
            .cluster_security_groups(
                ClusterSecurityGroupMembership::builder()
                    .cluster_security_group_name("default")
                    .status("active")
                    .build(),
            )
            .vpc_security_groups(
                VpcSecurityGroupMembership::builder()
                    .vpc_security_group_id("sg-1")
                    .status("active")
                    .build(),
            )
            .cluster_parameter_groups(
                ClusterParameterGroupStatus::builder()
                    .parameter_group_name("default.redshift-1.0")
                    .parameter_apply_status("in-sync")
                    .cluster_parameter_status_list(
                        ClusterParameterStatus::builder()
                            .parameter_name("require_ssl")
                            .parameter_apply_status("in-sync")
                            .build(),
                    )
                    .build(),
            )
            .cluster_subnet_group_name("default")
            .vpc_id("vpc-1")
            .availability_zone("us-west-2a")
            .preferred_maintenance_window("sun:10:00-sun:10:30")
            .pending_modified_values(
                PendingModifiedValues::builder()
                    .master_user_password("****")
                    .number_of_nodes(2)
                    .build(),
            )
            .cluster_version("1.0")
            .allow_version_upgrade(true)
            .number_of_nodes(2)
            .publicly_accessible(false)
            .encrypted(true)
            .restore_status(
                RestoreStatus::builder()
                    .status("completed")
                    .current_restore_rate_in_mega_bytes_per_second(1.5)
                    .build(),
            )
            .data_transfer_progress(
                DataTransferProgress::builder()
                    .status("complete")
                    .total_data_in_mega_bytes(100)
                    .build(),
            )
            .hsm_status(HsmStatus::builder().status("active").build())
            .cluster_snapshot_copy_status(
                ClusterSnapshotCopyStatus::builder()
                    .destination_region("us-east-1")
                    .retention_period(7)
                    .build(),
            )
            .cluster_public_key("ssh-rsa AAAA")
            .cluster_nodes(node("LEADER", "10.0.0.10"))
            .cluster_nodes(node("COMPUTE-0", "10.0.0.11"))
            .elastic_ip_status(
                ElasticIpStatus::builder()
                    .elastic_ip("54.0.0.2")
                    .status("active")
                    .build(),
            )
            .cluster_revision_number("54321")
            .tags(Tag::builder().key("team").value("analytics").build())
            .kms_key_id("arn:aws:kms:us-west-2:123456789012:key/k")
            .enhanced_vpc_routing(false)
            .iam_roles(
                ClusterIamRole::builder()
                    .iam_role_arn("arn:aws:iam::123456789012:role/s3-read")
                    .apply_status("in-sync")
                    .build(),
            )
            .pending_actions("resize")
            .maintenance_track_name("current")
            .elastic_resize_number_of_node_options("[2,4]")
            .deferred_maintenance_windows(
                DeferredMaintenanceWindow::builder()
                    .defer_maintenance_identifier("dm-1")
                    .defer_maintenance_start_time(created)
                    .defer_maintenance_end_time(DateTime::from_secs(1_700_086_400))
                    .build(),
            )
            .snapshot_schedule_identifier("nightly")
            .snapshot_schedule_state(ScheduleState::Active)
            .expected_next_snapshot_schedule_time(created)
            .expected_next_snapshot_schedule_time_status("OnTrack")
            .next_maintenance_window_start_time(created)
            .resize_info(
                ResizeInfo::builder()
                    .resize_type("ClassicResize")
                    .allow_cancel_resize(true)
                    .build(),
            )
            .availability_zone_relocation_status("disabled")
            .cluster_namespace_arn("arn:aws:redshift:us-west-2:123456789012:namespace:n")
            .total_storage_capacity_in_mega_bytes(640_000)
            .aqua_configuration(
                AquaConfiguration::builder()
                    .aqua_status(AquaStatus::Disabled)
                    .aqua_configuration_status(AquaConfigurationStatus::Auto)
                    .build(),
            )
            .default_iam_role_arn("arn:aws:iam::123456789012:role/s3-read")
            .reserved_node_exchange_status(
                ReservedNodeExchangeStatus::builder()
                    .reserved_node_exchange_request_id("rne-1")
                    .status(ReservedNodeExchangeStatusType::Succeeded)
                    .request_time(created)
                    .build(),
            )
            .custom_domain_name("dwh.example.com")
            .custom_domain_certificate_arn("arn:aws:acm:us-west-2:123456789012:certificate/c")
            .custom_domain_certificate_expiry_date(created)
            .master_password_secret_arn("arn:aws:secretsmanager:us-west-2:123456789012:secret:s")
            .master_password_secret_kms_key_id("k")
            .ip_address_type("ipv4")
            .multi_az("Disabled")
            .multi_az_secondary(
                SecondaryClusterInfo::builder()
                    .availability_zone("us-west-2b")
                    .cluster_nodes(node("LEADER", "10.0.1.10"))
                    .build(),
            )
            .lakehouse_registration_status("Unregistered")
            .catalog_arn("arn:aws:glue:us-west-2:123456789012:catalog")
            .extra_compute_for_automatic_optimization("False")
            .logging_publish_status(
                LoggingPublishStatus::builder()
                    .s3_tables(
                        S3TablePublishStatus::builder()
                            .s3_tables("connectionlog")
                            .s3_table_namespace("logs")
                            .enabled_all(true)
                            .last_ingestion_times("connectionlog", "2023-11-14T22:13:20Z")
                            .build(),
                    )
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_every_cluster_member_is_rendered() {
        let doc = cluster_document(&populated_cluster());
        let members = doc.as_object().unwrap();
        assert_eq!(members.len(), CLUSTER_FIELDS.len());

        let projection = CLUSTER_FIELDS
            .iter()
            .fold(StatusProjection::new(), |p, field| p.with_field(*field, field));
        for field in project(&doc, &projection) {
            assert_ne!(field.value, VALUE_NOT_FOUND, "{} was not rendered", field.label);
        }
    }

    #[test]
    fn test_operational_fields_resolve_by_path() {
        let doc = cluster_document(&populated_cluster());
        let projection = StatusProjection::new()
            .with_field("Subnet", "ClusterSubnetGroupName")
            .with_field("Window", "PreferredMaintenanceWindow")
            .with_field("Evr", "EnhancedVpcRouting")
            .with_field("Retention", "AutomatedSnapshotRetentionPeriod")
            .with_field("Sg", "VpcSecurityGroups,0,VpcSecurityGroupId")
            .with_field("Leader", "ClusterNodes.0.PrivateIPAddress")
            .with_field("Pending", "PendingModifiedValues,NumberOfNodes")
            .with_field("Team", "Tags,0,Value")
            .with_field("Param", "ClusterParameterGroups,0,ClusterParameterStatusList,0,ParameterName")
            .with_field("Eni", "Endpoint,VpcEndpoints,0,NetworkInterfaces,0,SubnetId")
            .with_field("Schedule", "SnapshotScheduleState")
            .with_field("Aqua", "AquaConfiguration,AquaStatus")
            .with_field("Created", "ClusterCreateTime")
            .with_field("MultiAz", "MultiAZ");

        let rendered: Vec<(String, String)> = project(&doc, &projection)
            .into_iter()
            .map(|f| (f.label, f.value))
            .collect();
        let expected: Vec<(String, String)> = [
            ("Subnet", "default"),
            ("Window", "sun:10:00-sun:10:30"),
            ("Evr", "false"),
            ("Retention", "1"),
            ("Sg", "sg-1"),
            ("Leader", "10.0.0.10"),
            ("Pending", "2"),
            ("Team", "analytics"),
            ("Param", "require_ssl"),
            ("Eni", "subnet-1"),
            ("Schedule", "ACTIVE"),
            ("Aqua", "disabled"),
            ("Created", "2023-11-14T22:13:20Z"),
            ("MultiAz", "Disabled"),
        ]
        .into_iter()
        .map(|(l, v)| (l.to_string(), v.to_string()))
        .collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_sparse_cluster_omits_absent_members() {
        let cluster = Cluster::builder()
            .cluster_identifier("dwh")
            .cluster_status("creating")
            .build();
        let doc = cluster_document(&cluster);
        assert_eq!(doc["ClusterIdentifier"], "dwh");
        assert!(doc.get("Endpoint").is_none());
        assert!(doc.get("VpcId").is_none());
        assert!(doc.get("PendingModifiedValues").is_none());
        assert_eq!(doc["Tags"], Value::Array(Vec::new()));
    }
}
