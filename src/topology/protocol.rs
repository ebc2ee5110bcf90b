//! Cluster State Protocol
//!
//! The endpoint and document through which nodes share their view of the
//! collection's partitions. A node running the HTTP service serves it, and
//! `HttpTopologyProvider` consumes it.

use serde::{Deserialize, Serialize};

use super::types::Topology;

/// Endpoint serving the current cluster state.
pub const ENDPOINT_CLUSTER_STATE: &str = "/cluster/state";

/// Partition layout of a collection as reported by a coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterStateResponse {
    /// Monotonic version of the layout, `0` when the source does not track one.
    #[serde(default)]
    pub version: u64,
    /// Names of every partition (shard) of the collection.
    pub partitions: Vec<String>,
}

impl From<&Topology> for ClusterStateResponse {
    fn from(topology: &Topology) -> Self {
        Self {
            version: topology.version(),
            partitions: topology.partitions().to_vec(),
        }
    }
}
