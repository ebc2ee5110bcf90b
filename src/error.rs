//! Error Types
//!
//! Typed failures raised by the ACL generation core. Application edges
//! (topology providers, HTTP handlers, the binary) wrap these in `anyhow`.

use thiserror::Error;

use crate::assignment::search::AssignmentMap;

/// Result alias for ACL generation.
pub type AclResult<T> = Result<T, AclError>;

/// Failures of a single generation call. None of them are retried internally.
#[derive(Debug, Clone, Error)]
pub enum AclError {
    /// The identifier-source field is absent, null or empty.
    #[error("null or empty ACL id field '{field}' on ACL document")]
    MissingIdField { field: String },

    /// The probing budget ran out before every partition received a candidate.
    #[error(
        "could not generate a shard id for '{base_id}' after {attempt_budget} attempts \
         - partitions={partition_count}, assigned={assigned}"
    )]
    ShardAssignmentExhausted {
        base_id: String,
        attempt_budget: u32,
        partition_count: usize,
        assigned: AssignmentMap,
    },

    /// The routing oracle answered with a partition outside the topology.
    #[error("candidate '{candidate}' routed to unknown partition '{partition}'")]
    UnknownPartition { candidate: String, partition: String },
}

/// Failures building a topology snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("topology must contain at least one partition")]
    Empty,

    /// The cluster coordinator answered with a non-success status.
    #[error("cluster state request failed with status {0}")]
    Status(u16),
}
