use std::fmt;
use std::sync::Arc;

use super::router::{HashRangeRouter, RoutingOracle};
use crate::error::TopologyError;

/// Immutable view of the partitions of one collection.
///
/// Partition names are deduplicated and kept sorted, so two topologies built
/// from the same names in any order compare equal and route identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    partitions: Vec<String>,
    version: u64,
}

impl Topology {
    /// Builds a topology from partition names. Empty names are ignored.
    pub fn new<I, S>(partitions: I) -> Result<Self, TopologyError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut partitions: Vec<String> = partitions
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.is_empty())
            .collect();
        partitions.sort();
        partitions.dedup();

        if partitions.is_empty() {
            return Err(TopologyError::Empty);
        }

        Ok(Self {
            partitions,
            version: 0,
        })
    }

    /// Tags the snapshot with the version reported by its source.
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn partitions(&self) -> &[String] {
        &self.partitions
    }

    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    pub fn contains(&self, partition: &str) -> bool {
        self.partitions
            .binary_search_by(|name| name.as_str().cmp(partition))
            .is_ok()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

/// A topology together with the routing function bound to it.
///
/// Both halves come from the same cluster state, so a generation call that
/// uses one snapshot never mixes topology versions.
#[derive(Clone)]
pub struct ClusterSnapshot {
    pub topology: Topology,
    pub router: Arc<dyn RoutingOracle>,
}

impl ClusterSnapshot {
    pub fn new(topology: Topology, router: Arc<dyn RoutingOracle>) -> Self {
        Self { topology, router }
    }

    /// Snapshot routed by [`HashRangeRouter`].
    pub fn hash_range(topology: Topology) -> Self {
        Self::new(topology, Arc::new(HashRangeRouter))
    }
}

impl fmt::Debug for ClusterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClusterSnapshot")
            .field("topology", &self.topology)
            .finish_non_exhaustive()
    }
}
