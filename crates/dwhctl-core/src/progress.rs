//! Progress tracking and readiness polling
//!
//! Cluster creation and deletion are dispatched asynchronously by the control
//! plane. [`Poller`] turns them into a blocking wait by describing the cluster
//! at a fixed interval until a caller-supplied condition holds.
//!
//! There is no iteration limit. A timeout only applies when one is configured
//! explicitly.

use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cluster::{AVAILABLE, ClusterDescription, ControlPlane};
use crate::error::{CoreError, Result};

/// Fixed interval between describe calls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);

/// What a wait is trying to observe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitTarget {
    /// The cluster reports the given availability status
    Availability(String),
    /// The cluster no longer exists
    Deletion,
}

impl WaitTarget {
    /// The value from a describe response that is reported while waiting
    fn observed(&self, description: &ClusterDescription) -> Option<String> {
        match self {
            WaitTarget::Availability(_) => description.availability_status.clone(),
            WaitTarget::Deletion => description.status.clone(),
        }
    }
}

impl fmt::Display for WaitTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitTarget::Availability(status) => write!(f, "availability '{}'", status),
            WaitTarget::Deletion => write!(f, "deletion"),
        }
    }
}

/// How a "cluster not found" describe result is treated while polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// Not found is an error (creation path)
    Fatal,
    /// Not found means the wait is over (deletion path)
    Terminal,
}

/// Progress events emitted while waiting and while running setup scripts
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The condition does not hold yet; the poller is about to sleep
    Waiting {
        identifier: String,
        target: WaitTarget,
        observed: Option<String>,
        elapsed: Duration,
    },
    /// The condition holds
    Reached {
        identifier: String,
        target: WaitTarget,
        elapsed: Duration,
    },
    /// A setup script is about to run
    ScriptStarted { name: String, path: PathBuf },
    /// A setup script finished successfully
    ScriptCompleted { name: String, elapsed: Duration },
}

/// Callback type for progress updates
pub type ProgressCallback = Box<dyn Fn(ProgressEvent) + Send + Sync>;

/// Helper to emit progress events
pub(crate) fn emit(callback: Option<&ProgressCallback>, event: ProgressEvent) {
    if let Some(cb) = callback {
        cb(event);
    }
}

/// Fixed-interval cluster state poller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poller {
    interval: Duration,
    timeout: Option<Duration>,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl Poller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Describe the cluster until `predicate` holds
    ///
    /// With [`Absence::Terminal`], a not-found describe result also ends the
    /// wait successfully. Every other describe error is returned immediately.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use dwhctl_core::{Absence, Poller, WaitTarget};
    ///
    /// Poller::default()
    ///     .await_condition(
    ///         &control_plane,
    ///         "dwh",
    ///         WaitTarget::Availability("Available".to_string()),
    ///         |d| d.availability_status.as_deref() == Some("Available"),
    ///         Absence::Fatal,
    ///         None,
    ///     )
    ///     .await?;
    /// ```
    pub async fn await_condition<P>(
        &self,
        control_plane: &dyn ControlPlane,
        identifier: &str,
        target: WaitTarget,
        predicate: P,
        absence: Absence,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<()>
    where
        P: Fn(&ClusterDescription) -> bool,
    {
        let start = Instant::now();
        debug!(
            "Waiting for {} of '{}' (interval {:?}, timeout {:?})",
            target, identifier, self.interval, self.timeout
        );

        loop {
            let description = match control_plane.describe_cluster(identifier).await {
                Ok(description) => description,
                Err(CoreError::ClusterNotFound { .. }) if absence == Absence::Terminal => {
                    self.reached(identifier, target, start, on_progress);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };

            if predicate(&description) {
                self.reached(identifier, target, start, on_progress);
                return Ok(());
            }

            let elapsed = start.elapsed();
            if let Some(timeout) = self.timeout
                && elapsed >= timeout
            {
                return Err(CoreError::WaitTimeout(timeout));
            }

            emit(
                on_progress,
                ProgressEvent::Waiting {
                    identifier: identifier.to_string(),
                    target: target.clone(),
                    observed: target.observed(&description),
                    elapsed,
                },
            );

            tokio::time::sleep(self.interval).await;
        }
    }

    /// Wait until the cluster reports itself as available
    pub async fn await_availability(
        &self,
        control_plane: &dyn ControlPlane,
        identifier: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<()> {
        self.await_condition(
            control_plane,
            identifier,
            WaitTarget::Availability(AVAILABLE.to_string()),
            ClusterDescription::is_available,
            Absence::Fatal,
            on_progress,
        )
        .await
    }

    /// Wait until the control plane stops knowing about the cluster
    pub async fn await_deletion(
        &self,
        control_plane: &dyn ControlPlane,
        identifier: &str,
        on_progress: Option<&ProgressCallback>,
    ) -> Result<()> {
        self.await_condition(
            control_plane,
            identifier,
            WaitTarget::Deletion,
            |_| false,
            Absence::Terminal,
            on_progress,
        )
        .await
    }

    fn reached(
        &self,
        identifier: &str,
        target: WaitTarget,
        start: Instant,
        on_progress: Option<&ProgressCallback>,
    ) {
        let elapsed = start.elapsed();
        info!("Reached {} of '{}' after {:?}", target, identifier, elapsed);
        emit(
            on_progress,
            ProgressEvent::Reached {
                identifier: identifier.to_string(),
                target,
                elapsed,
            },
        );
    }
}
