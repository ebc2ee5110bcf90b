use serde::{Deserialize, Serialize};

use super::document::AclDocument;
use crate::assignment::search::AssignmentMap;

/// Default field receiving the per-shard candidate id.
pub const DEFAULT_ID_FIELD: &str = "id";
/// Default boolean field flagging a document as an ACL replica.
pub const DEFAULT_ACL_MARKER_FIELD: &str = "_lw_acl_doc_b";
/// Default field recording the owning partition.
pub const DEFAULT_PARTITION_FIELD: &str = "shard_s";

/// Names of the fields overwritten on every replica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaFields {
    pub id_field: String,
    pub acl_marker_field: String,
    pub partition_field: String,
}

impl Default for ReplicaFields {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            acl_marker_field: DEFAULT_ACL_MARKER_FIELD.to_string(),
            partition_field: DEFAULT_PARTITION_FIELD.to_string(),
        }
    }
}

/// One physical copy of an ACL document, pinned to a partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicatedDocument {
    /// Partition this replica is routed to.
    pub partition: String,
    /// The id assigned to this replica.
    pub id: String,
    /// The full document as it should be written.
    pub document: AclDocument,
}

/// Materializes one replica per entry of `assignments`.
///
/// Every replica is a deep copy of `document` with the id, ACL marker and
/// partition fields overwritten. Replicas come out in partition-name order.
pub fn replicate(
    document: &AclDocument,
    fields: &ReplicaFields,
    assignments: &AssignmentMap,
) -> Vec<ReplicatedDocument> {
    assignments
        .iter()
        .map(|(partition, candidate)| {
            let mut replica = document.clone();
            replica.set_field(&fields.id_field, candidate);
            replica.set_field(&fields.acl_marker_field, true);
            replica.set_field(&fields.partition_field, partition);

            ReplicatedDocument {
                partition: partition.to_string(),
                id: candidate.to_string(),
                document: replica,
            }
        })
        .collect()
}
