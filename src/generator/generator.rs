use anyhow::Result;

use crate::assignment::search::assign;
use crate::assignment::strategy::IdStrategy;
use crate::config::{GeneratorConfig, RetryConfig};
use crate::error::{AclError, AclResult};
use crate::replication::document::AclDocument;
use crate::replication::replicator::{ReplicatedDocument, replicate};
use crate::topology::provider::{TopologyProvider, fetch_snapshot_with_retry};
use crate::topology::types::{ClusterSnapshot, Topology};

/// Generates one ACL document per shard of a collection.
///
/// The generator is bound to a single cluster snapshot. When the cluster
/// layout changes, build a new generator from a fresh snapshot instead of
/// reusing results across topology versions.
#[derive(Debug, Clone)]
pub struct AclDocumentGenerator {
    snapshot: ClusterSnapshot,
    config: GeneratorConfig,
}

impl AclDocumentGenerator {
    pub fn new(snapshot: ClusterSnapshot, config: GeneratorConfig) -> Self {
        Self { snapshot, config }
    }

    /// Fetches a snapshot from `provider`, retrying per `retry`, and binds to it.
    pub async fn connect(
        provider: &dyn TopologyProvider,
        retry: &RetryConfig,
        config: GeneratorConfig,
    ) -> Result<Self> {
        let snapshot = fetch_snapshot_with_retry(provider, retry).await?;
        Ok(Self::new(snapshot, config))
    }

    /// Builds the replicas of `document`, one per partition.
    ///
    /// `acl_id_field` names the field whose value seeds the candidate ids.
    /// It is checked before any routing happens.
    pub fn create_acl_documents(
        &self,
        document: &AclDocument,
        acl_id_field: &str,
    ) -> AclResult<Vec<ReplicatedDocument>> {
        let id = document
            .id_value(acl_id_field)
            .ok_or_else(|| AclError::MissingIdField {
                field: acl_id_field.to_string(),
            })?;

        let assignments = assign(
            &id,
            self.config.strategy,
            self.snapshot.router.as_ref(),
            document,
            &self.snapshot.topology,
            self.config.attempt_budget,
        )?;

        let replicas = replicate(document, &self.config.fields, &assignments);
        tracing::info!(
            "Generated {} ACL documents for {} ({} strategy, topology v{})",
            replicas.len(),
            id,
            self.config.strategy,
            self.snapshot.topology.version()
        );

        Ok(replicas)
    }

    pub fn with_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> IdStrategy {
        self.config.strategy
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn topology(&self) -> &Topology {
        &self.snapshot.topology
    }

    pub fn partition_count(&self) -> usize {
        self.snapshot.topology.partition_count()
    }
}
