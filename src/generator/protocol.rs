//! Generator Network Protocol
//!
//! Endpoint and DTOs of the ACL generation API. Bodies are JSON.

use serde::{Deserialize, Serialize};

use crate::assignment::strategy::IdStrategy;
use crate::replication::document::AclDocument;
use crate::replication::replicator::{DEFAULT_ID_FIELD, ReplicatedDocument};

/// Endpoint expanding one ACL document into per-shard replicas.
pub const ENDPOINT_GENERATE: &str = "/acl/generate";

/// Request to replicate an ACL document onto every shard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The logical ACL document.
    pub document: AclDocument,
    /// Field holding the ACL id. Defaults to `id`.
    #[serde(default = "default_acl_id_field")]
    pub acl_id_field: String,
    /// Overrides the node's configured id strategy for this request.
    #[serde(default)]
    pub strategy: Option<IdStrategy>,
}

fn default_acl_id_field() -> String {
    DEFAULT_ID_FIELD.to_string()
}

/// Result of a generation request.
///
/// On failure `documents` is empty and `error` describes why. A partial
/// replica set is never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    /// Version of the topology the replicas were routed against.
    pub topology_version: u64,
    pub partition_count: usize,
    pub documents: Vec<ReplicatedDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn generated(topology_version: u64, documents: Vec<ReplicatedDocument>) -> Self {
        Self {
            success: true,
            topology_version,
            partition_count: documents.len(),
            documents,
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            topology_version: 0,
            partition_count: 0,
            documents: Vec::new(),
            error: Some(error.to_string()),
        }
    }
}
