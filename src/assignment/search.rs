use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

use super::strategy::IdStrategy;
use crate::error::{AclError, AclResult};
use crate::replication::document::AclDocument;
use crate::topology::router::RoutingOracle;
use crate::topology::types::Topology;

/// Partition name to the candidate id chosen for it.
///
/// Only [`assign`] fills it, and an entry is never replaced once written.
/// Iteration is ordered by partition name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AssignmentMap {
    assigned: BTreeMap<String, String>,
}

impl AssignmentMap {
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn get(&self, partition: &str) -> Option<&str> {
        self.assigned.get(partition).map(String::as_str)
    }

    pub fn contains(&self, partition: &str) -> bool {
        self.assigned.contains_key(partition)
    }

    /// `(partition, candidate)` pairs in partition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.assigned
            .iter()
            .map(|(partition, candidate)| (partition.as_str(), candidate.as_str()))
    }

    pub fn partitions(&self) -> impl Iterator<Item = &str> + '_ {
        self.assigned.keys().map(String::as_str)
    }

    /// Records `candidate` for `partition` unless the partition already has one.
    fn assign_if_absent(&mut self, partition: String, candidate: String) -> bool {
        if self.assigned.contains_key(&partition) {
            return false;
        }
        self.assigned.insert(partition, candidate);
        true
    }
}

impl fmt::Display for AssignmentMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (partition, candidate)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", partition, candidate)?;
        }
        write!(f, "}}")
    }
}

/// Finds one candidate id per partition of `topology`.
///
/// Candidates are probed in counter order and routed through `oracle`; the
/// first candidate landing on a partition wins it and later ones for the same
/// partition are dropped. The oracle is called at most `attempt_budget`
/// times. Given a deterministic oracle the result depends only on the
/// arguments.
///
/// # Errors
/// - [`AclError::ShardAssignmentExhausted`] if the budget runs out before every
///   partition has a candidate. The error carries the partial assignment.
/// - [`AclError::UnknownPartition`] if the oracle names a partition that is not
///   part of `topology`.
pub fn assign(
    base_id: &str,
    strategy: IdStrategy,
    oracle: &dyn RoutingOracle,
    document: &AclDocument,
    topology: &Topology,
    attempt_budget: NonZeroU32,
) -> AclResult<AssignmentMap> {
    let partition_count = topology.partition_count();
    let mut assignments = AssignmentMap::default();
    let mut candidates = strategy
        .candidates(base_id)
        .take(attempt_budget.get() as usize);

    while assignments.len() < partition_count {
        let Some(candidate) = candidates.next() else {
            break;
        };

        let partition = oracle.route(&candidate, document, topology);
        if !topology.contains(&partition) {
            return Err(AclError::UnknownPartition {
                candidate,
                partition,
            });
        }

        tracing::trace!("Candidate {} routes to {}", candidate, partition);
        if assignments.assign_if_absent(partition.clone(), candidate.clone()) {
            tracing::debug!("Assigned {} to partition {}", candidate, partition);
        }
    }

    if assignments.len() < partition_count {
        tracing::warn!(
            "Shard assignment for {} exhausted {} attempts with {}/{} partitions covered",
            base_id,
            attempt_budget,
            assignments.len(),
            partition_count
        );
        return Err(AclError::ShardAssignmentExhausted {
            base_id: base_id.to_string(),
            attempt_budget: attempt_budget.get(),
            partition_count,
            assigned: assignments,
        });
    }

    Ok(assignments)
}
