use uuid::Uuid;

/// Namespace seeding every ACL id hash.
pub const ACL_ID_NAMESPACE: Uuid = Uuid::from_u128(0x89fd4f7d_19cf_451b_b7ef_3c87e28793b6);

const SIGN_BIT_MASK: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Hashes `name` under `namespace` to a nonnegative 63-bit value.
///
/// The value is the most significant half of the RFC4122 version 5 UUID
/// for `(namespace, name)`, read big-endian, with the top bit cleared.
pub fn namespace_hash(namespace: &Uuid, name: &str) -> u64 {
    let (high, _low) = Uuid::new_v5(namespace, name.as_bytes()).as_u64_pair();
    high & SIGN_BIT_MASK
}

/// [`namespace_hash`] under [`ACL_ID_NAMESPACE`].
pub fn acl_id_hash(name: &str) -> u64 {
    namespace_hash(&ACL_ID_NAMESPACE, name)
}
