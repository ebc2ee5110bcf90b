//! ACL Generator Module
//!
//! Entry point tying the pieces together: validate the ACL id, search a shard assignment
//! against one cluster snapshot, and replicate the document onto every shard.
//!
//! ## Submodules
//! - **`generator`**: `AclDocumentGenerator`, the synchronous generation facade.
//! - **`handlers`**: HTTP handlers for the Axum web server.
//! - **`protocol`**: Request and response DTOs of the HTTP API.

pub mod generator;
pub mod handlers;
pub mod protocol;
