//! Shard Assignment Module
//!
//! Searches for a set of document ids that together cover every partition of a collection.
//!
//! ## How It Works
//! 1. **Derivation**: An `IdStrategy` turns the ACL id into a base (`Literal` sanitizes `!`,
//!    `Hashed` uses the 63-bit namespace hash) and appends `___<counter>`.
//! 2. **Probing**: Each candidate is routed through the cluster's `RoutingOracle`.
//! 3. **First writer wins**: The first candidate to land on a partition is kept for it.
//! 4. **Budget**: The search stops when every partition is covered or the attempt budget is spent,
//!    in which case it fails with the partial assignment attached.

pub mod search;
pub mod strategy;
