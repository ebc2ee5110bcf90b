//! Document Replication Module
//!
//! Turns a finished shard assignment into the physical ACL documents to write.
//!
//! ## Core Concepts
//! - **AclDocument**: A schemaless JSON document. The generator never mutates the caller's copy.
//! - **Replicas**: One deep copy per partition, carrying the partition's candidate id, an ACL
//!   marker flag and the partition name, so security-trimming joins resolve locally on every shard.

pub mod document;
pub mod replicator;

#[cfg(test)]
mod tests;
