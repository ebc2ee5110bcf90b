//! Namespace Hashing Module
//!
//! Deterministic, name-based hashing used to derive compact ACL identifiers.
//!
//! ## Core Concepts
//! - **Version 5 UUIDs**: A name and a fixed namespace UUID are hashed with SHA-1
//!   following RFC4122, so any implementation of the same derivation agrees byte-for-byte.
//! - **63-bit truncation**: Only the high word of the UUID is kept, with the sign bit cleared,
//!   so the value prints as a nonnegative decimal on every platform.

pub mod namespace;
