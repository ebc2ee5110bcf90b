//! ACL Shard Replicator Library
//!
//! Places a copy of an access-control (ACL) document on every shard of a partitioned
//! collection, so security-trimming joins can run locally inside each shard.
//!
//! ## Architecture Modules
//! - **`hashing`**: RFC4122 version 5 namespace hashing, truncated to 63 bits.
//! - **`assignment`**: Candidate id strategies and the bounded probing search that finds
//!   one id per shard.
//! - **`replication`**: The schemaless ACL document and the per-shard replica builder.
//! - **`topology`**: Cluster snapshots, routing oracles and topology providers with
//!   retrying fetches.
//! - **`generator`**: The `AclDocumentGenerator` facade and its HTTP API.
//! - **`config`**: Explicit generator and retry settings.
//! - **`error`**: Typed failures of a generation call.

pub mod assignment;
pub mod config;
pub mod error;
pub mod generator;
pub mod hashing;
pub mod replication;
pub mod topology;

pub use assignment::search::{AssignmentMap, assign};
pub use assignment::strategy::IdStrategy;
pub use config::{GeneratorConfig, RetryConfig};
pub use error::{AclError, AclResult, TopologyError};
pub use generator::generator::AclDocumentGenerator;
pub use replication::document::AclDocument;
pub use replication::replicator::{ReplicaFields, ReplicatedDocument, replicate};
pub use topology::router::{HashRangeRouter, RoutingOracle};
pub use topology::types::{ClusterSnapshot, Topology};
