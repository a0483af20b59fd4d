//! In-memory control plane and database doubles for unit tests

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::cluster::{ClusterDescription, ClusterSpec, ControlPlane, Endpoint};
use crate::error::{CoreError, Result};
use crate::progress::{ProgressCallback, ProgressEvent};
use crate::scripts::{ConnectionParams, DatabaseError, SqlConnector, SqlSession};

/// Outcome of one scripted describe call
#[derive(Debug, Clone)]
pub enum Observed {
    Cluster(ClusterDescription),
    NotFound,
    Failure(String),
}

impl Observed {
    pub fn availability(availability: Option<&str>) -> Self {
        Self::cluster(None, availability, None)
    }

    pub fn status(status: &str, availability: Option<&str>) -> Self {
        Self::cluster(Some(status), availability, None)
    }

    pub fn available_at(host: &str) -> Self {
        Self::cluster(Some("available"), Some("Available"), Some(host))
    }

    fn cluster(status: Option<&str>, availability: Option<&str>, host: Option<&str>) -> Self {
        let mut doc = Map::new();
        if let Some(status) = status {
            doc.insert("ClusterStatus".into(), status.into());
        }
        if let Some(availability) = availability {
            doc.insert("ClusterAvailabilityStatus".into(), availability.into());
        }
        if let Some(host) = host {
            doc.insert(
                "Endpoint".into(),
                serde_json::json!({"Address": host, "Port": 5439}),
            );
        }

        Observed::Cluster(ClusterDescription {
            identifier: String::new(),
            status: status.map(str::to_string),
            availability_status: availability.map(str::to_string),
            endpoint: host.map(|address| Endpoint {
                address: address.to_string(),
                port: Some(5439),
            }),
            document: Value::Object(doc),
        })
    }

    fn into_error(self, identifier: &str, operation: &'static str) -> Option<CoreError> {
        match self {
            Observed::NotFound => Some(CoreError::ClusterNotFound {
                identifier: identifier.to_string(),
            }),
            Observed::Failure(message) => Some(CoreError::ControlPlane { operation, message }),
            Observed::Cluster(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create(String),
    Describe,
    Delete,
}

/// Control plane that replays a queue of describe outcomes
pub struct FakeControlPlane {
    identifier: String,
    describes: Mutex<VecDeque<Observed>>,
    calls: Mutex<Vec<Call>>,
    created: Mutex<Option<ClusterSpec>>,
    create_failure: Option<Observed>,
    delete_failure: Option<Observed>,
}

impl FakeControlPlane {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            describes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            created: Mutex::new(None),
            create_failure: None,
            delete_failure: None,
        }
    }

    pub fn with_describes(self, outcomes: impl IntoIterator<Item = Observed>) -> Self {
        self.describes.lock().unwrap().extend(outcomes);
        self
    }

    pub fn with_create_failure(mut self, outcome: Observed) -> Self {
        self.create_failure = Some(outcome);
        self
    }

    pub fn with_delete_failure(mut self, outcome: Observed) -> Self {
        self.delete_failure = Some(outcome);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn describe_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| **call == Call::Describe)
            .count()
    }

    pub fn created_spec(&self) -> Option<ClusterSpec> {
        self.created.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ControlPlane for FakeControlPlane {
    async fn create_cluster(&self, spec: &ClusterSpec) -> Result<()> {
        self.record(Call::Create(spec.identifier.clone()));
        if let Some(err) = self
            .create_failure
            .clone()
            .and_then(|o| o.into_error(&spec.identifier, "CreateCluster"))
        {
            return Err(err);
        }
        *self.created.lock().unwrap() = Some(spec.clone());
        Ok(())
    }

    async fn describe_cluster(&self, identifier: &str) -> Result<ClusterDescription> {
        self.record(Call::Describe);
        if identifier != self.identifier {
            return Err(CoreError::ClusterNotFound {
                identifier: identifier.to_string(),
            });
        }
        let next = self.describes.lock().unwrap().pop_front();
        match next {
            Some(Observed::Cluster(mut description)) => {
                description.identifier = identifier.to_string();
                if let Value::Object(doc) = &mut description.document {
                    doc.insert("ClusterIdentifier".into(), identifier.into());
                }
                Ok(description)
            }
            Some(Observed::NotFound) => Err(CoreError::ClusterNotFound {
                identifier: identifier.to_string(),
            }),
            Some(Observed::Failure(message)) => Err(CoreError::ControlPlane {
                operation: "DescribeClusters",
                message,
            }),
            None => Err(CoreError::ControlPlane {
                operation: "DescribeClusters",
                message: "no scripted describe outcome left".to_string(),
            }),
        }
    }

    async fn delete_cluster(&self, identifier: &str) -> Result<()> {
        self.record(Call::Delete);
        if let Some(err) = self
            .delete_failure
            .clone()
            .and_then(|o| o.into_error(identifier, "DeleteCluster"))
        {
            return Err(err);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlEvent {
    Connect(String),
    Execute(String),
    Close,
}

/// Connector that records every session interaction
#[derive(Default)]
pub struct FakeConnector {
    events: Arc<Mutex<Vec<SqlEvent>>>,
    fail_marker: Option<String>,
    refuse: bool,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any batch containing `marker`
    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn refusing_connections(mut self) -> Self {
        self.refuse = true;
        self
    }

    pub fn events(&self) -> Vec<SqlEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlConnector for FakeConnector {
    async fn connect(
        &self,
        host: &str,
        _params: &ConnectionParams,
    ) -> std::result::Result<Box<dyn SqlSession>, DatabaseError> {
        self.events
            .lock()
            .unwrap()
            .push(SqlEvent::Connect(host.to_string()));
        if self.refuse {
            return Err(DatabaseError("connection refused".to_string()));
        }
        Ok(Box::new(FakeSession {
            events: Arc::clone(&self.events),
            fail_marker: self.fail_marker.clone(),
        }))
    }
}

struct FakeSession {
    events: Arc<Mutex<Vec<SqlEvent>>>,
    fail_marker: Option<String>,
}

#[async_trait]
impl SqlSession for FakeSession {
    async fn execute_batch(&mut self, sql: &str) -> std::result::Result<(), DatabaseError> {
        self.events
            .lock()
            .unwrap()
            .push(SqlEvent::Execute(sql.to_string()));
        match &self.fail_marker {
            Some(marker) if sql.contains(marker.as_str()) => Err(DatabaseError(format!(
                "syntax error at or near \"{}\"",
                marker
            ))),
            _ => Ok(()),
        }
    }

    async fn close(self: Box<Self>) -> std::result::Result<(), DatabaseError> {
        self.events.lock().unwrap().push(SqlEvent::Close);
        Ok(())
    }
}

/// Progress callback that stores every event
pub fn recorder() -> (ProgressCallback, Arc<Mutex<Vec<ProgressEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let callback: ProgressCallback = Box::new(move |event| sink.lock().unwrap().push(event));
    (callback, events)
}
