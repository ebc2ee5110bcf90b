use xxhash_rust::xxh3::xxh3_64;

use super::types::Topology;
use crate::replication::document::AclDocument;

/// Separator splitting a composite id into its routing prefix and the rest.
pub const COMPOSITE_ID_SEPARATOR: char = '!';

/// Decides which partition a document id would be stored on.
///
/// Implementations must be deterministic for a fixed topology: the same
/// `(candidate_id, topology)` always yields the same partition name.
pub trait RoutingOracle: Send + Sync {
    fn route(&self, candidate_id: &str, document: &AclDocument, topology: &Topology) -> String;
}

impl<F> RoutingOracle for F
where
    F: Fn(&str, &AclDocument, &Topology) -> String + Send + Sync,
{
    fn route(&self, candidate_id: &str, document: &AclDocument, topology: &Topology) -> String {
        self(candidate_id, document, topology)
    }
}

/// Routes ids by hash range.
///
/// The 32-bit hash space is divided evenly among the sorted partitions, the
/// last range absorbing the remainder up to `u32::MAX`. For composite ids
/// (`prefix!rest`) only the prefix is hashed, so all ids sharing a prefix
/// are co-located.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashRangeRouter;

impl HashRangeRouter {
    /// Returns the part of `id` that decides its partition.
    pub fn routing_key(id: &str) -> &str {
        id.split_once(COMPOSITE_ID_SEPARATOR)
            .map_or(id, |(prefix, _)| prefix)
    }

    /// Hashes a routing key to a 32-bit range position.
    pub fn hash_key(key: &[u8]) -> u32 {
        // Upper half of the 64-bit xxh3 digest.
        (xxh3_64(key) >> 32) as u32
    }

    /// Index of the range containing `hash` when the space is split `count` ways.
    pub fn slot(hash: u32, count: usize) -> usize {
        if count <= 1 {
            return 0;
        }
        let count = count as u64;
        let range_size = (u64::from(u32::MAX) / count).max(1);
        (u64::from(hash) / range_size).min(count - 1) as usize
    }
}

impl RoutingOracle for HashRangeRouter {
    fn route(&self, candidate_id: &str, _document: &AclDocument, topology: &Topology) -> String {
        let hash = Self::hash_key(Self::routing_key(candidate_id).as_bytes());
        let slot = Self::slot(hash, topology.partition_count());
        topology.partitions()[slot].clone()
    }
}
