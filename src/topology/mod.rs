//! Cluster Topology Module
//!
//! Everything the generator needs to know about the partitioned collection it writes to.
//!
//! ## Core Concepts
//! - **Topology**: An immutable snapshot of the partition names (shards) of one collection.
//! - **Routing**: A `RoutingOracle` answers which partition a document id would land on.
//!   `HashRangeRouter` splits a 32-bit hash space evenly across the sorted partitions and
//!   treats `!` as a composite-id separator.
//! - **Providers**: A `TopologyProvider` hands out a `ClusterSnapshot` (topology plus the
//!   router bound to it). Fetching is retried with bounded exponential backoff, entirely
//!   outside the shard assignment search.
//!
//! ## Submodules
//! - **`types`**: `Topology` and `ClusterSnapshot`.
//! - **`router`**: The `RoutingOracle` trait and `HashRangeRouter`.
//! - **`provider`**: Static and HTTP providers plus the retry wrapper.
//! - **`protocol`**: The cluster-state endpoint and its DTO.

pub mod protocol;
pub mod provider;
pub mod router;
pub mod types;
