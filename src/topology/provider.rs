use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

use super::protocol::{ClusterStateResponse, ENDPOINT_CLUSTER_STATE};
use super::types::{ClusterSnapshot, Topology};
use crate::config::RetryConfig;
use crate::error::TopologyError;

/// Source of consistent cluster snapshots.
///
/// A provider is responsible for reaching whatever coordinates the cluster.
/// It performs a single attempt per call; retries belong to
/// [`fetch_snapshot_with_retry`].
#[async_trait]
pub trait TopologyProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<ClusterSnapshot>;
}

/// Provider for a fixed, locally configured partition list.
#[derive(Debug, Clone)]
pub struct StaticTopologyProvider {
    snapshot: ClusterSnapshot,
}

impl StaticTopologyProvider {
    pub fn new(snapshot: ClusterSnapshot) -> Self {
        Self { snapshot }
    }

    /// Static provider routing by hash range over `topology`.
    pub fn hash_range(topology: Topology) -> Self {
        Self::new(ClusterSnapshot::hash_range(topology))
    }

    pub fn topology(&self) -> &Topology {
        &self.snapshot.topology
    }
}

#[async_trait]
impl TopologyProvider for StaticTopologyProvider {
    async fn fetch_snapshot(&self) -> Result<ClusterSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Provider reading the cluster state from a remote node over HTTP.
///
/// The fetched partitions are bound to a `HashRangeRouter`.
pub struct HttpTopologyProvider {
    base_url: String,
    http_client: reqwest::Client,
    timeout: Duration,
}

impl HttpTopologyProvider {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            timeout,
        }
    }

    pub fn cluster_state_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT_CLUSTER_STATE)
    }
}

#[async_trait]
impl TopologyProvider for HttpTopologyProvider {
    async fn fetch_snapshot(&self) -> Result<ClusterSnapshot> {
        let response = self
            .http_client
            .get(self.cluster_state_url())
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TopologyError::Status(response.status().as_u16()).into());
        }

        let state: ClusterStateResponse = response.json().await?;
        let topology = Topology::new(state.partitions)?.with_version(state.version);
        tracing::debug!(
            "Fetched topology v{} with {} partitions from {}",
            topology.version(),
            topology.partition_count(),
            self.base_url
        );

        Ok(ClusterSnapshot::hash_range(topology))
    }
}

/// Whether a failed fetch may succeed when tried again.
///
/// Connection failures, timeouts, `429` and `5xx` answers are transient.
/// Other statuses, undecodable bodies and empty topologies fail the same way
/// on every attempt. Errors of unknown origin count as transient.
pub fn is_transient(error: &anyhow::Error) -> bool {
    for cause in error.chain() {
        if let Some(e) = cause.downcast_ref::<TopologyError>() {
            return match e {
                TopologyError::Status(code) => *code == 429 || *code >= 500,
                TopologyError::Empty => false,
            };
        }
        if let Some(e) = cause.downcast_ref::<reqwest::Error>() {
            return e.is_connect() || e.is_timeout() || e.is_request();
        }
    }
    true
}

/// Fetches a snapshot, retrying transient failures with exponential backoff.
///
/// Makes at most `1 + retry.max_retries` calls. The delay starts at
/// `retry.initial_backoff`, doubles after every failure up to
/// `retry.max_backoff`, and gets up to `retry.max_jitter` of random jitter.
/// A failure that [`is_transient`] rejects is returned at once, otherwise the
/// last error is returned once attempts run out.
pub async fn fetch_snapshot_with_retry(
    provider: &dyn TopologyProvider,
    retry: &RetryConfig,
) -> Result<ClusterSnapshot> {
    let attempts = retry.max_retries as usize + 1;
    let mut delay = retry.initial_backoff;

    for attempt in 0..attempts {
        match provider.fetch_snapshot().await {
            Ok(snapshot) => {
                if attempt > 0 {
                    tracing::info!("Fetched topology after {} retries", attempt);
                }
                return Ok(snapshot);
            }
            Err(e) => {
                if !is_transient(&e) {
                    return Err(e.context("Topology fetch failed permanently"));
                }
                if attempt + 1 == attempts {
                    return Err(e.context(format!(
                        "Topology fetch failed after {} attempts",
                        attempts
                    )));
                }
                tracing::warn!(
                    "Topology fetch attempt {}/{} failed: {}",
                    attempt + 1,
                    attempts,
                    e
                );
                let jitter_ms = match retry.max_jitter.as_millis() as u64 {
                    0 => 0,
                    max => rand::random::<u64>() % (max + 1),
                };
                tokio::time::sleep(delay + Duration::from_millis(jitter_ms)).await;
                delay = (delay * 2).min(retry.max_backoff);
            }
        }
    }

    Err(anyhow::anyhow!("Retry attempts exhausted"))
}
