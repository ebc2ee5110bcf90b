//! Replication Module Tests
//!
//! Validates id extraction from schemaless documents and replica construction.

#[cfg(test)]
mod tests {
    use crate::assignment::search::assign;
    use crate::assignment::strategy::IdStrategy;
    use crate::replication::document::AclDocument;
    use crate::replication::replicator::{ReplicaFields, replicate};
    use crate::topology::router::HashRangeRouter;
    use crate::topology::types::Topology;
    use serde_json::json;
    use std::collections::BTreeSet;
    use std::num::NonZeroU32;

    fn acl_document() -> AclDocument {
        serde_json::from_value(json!({
            "acl_id": "group!engineering",
            "allow_token_ss": ["group:eng", "user:alice"],
            "deny_token_ss": [],
            "nested": { "source": "ldap" }
        }))
        .unwrap()
    }

    // ============================================================
    // DOCUMENT TESTS
    // ============================================================

    #[test]
    fn test_id_value_reads_strings_and_scalars() {
        let doc = AclDocument::new()
            .with_field("s", "acl-1")
            .with_field("n", 42)
            .with_field("b", true)
            .with_field("multi", json!(["first", "second"]));

        assert_eq!(doc.id_value("s").as_deref(), Some("acl-1"));
        assert_eq!(doc.id_value("n").as_deref(), Some("42"));
        assert_eq!(doc.id_value("b").as_deref(), Some("true"));
        assert_eq!(doc.id_value("multi").as_deref(), Some("first"));
    }

    #[test]
    fn test_id_value_rejects_missing_values() {
        let doc = AclDocument::new()
            .with_field("empty", "")
            .with_field("null", json!(null))
            .with_field("empty_list", json!([]))
            .with_field("object", json!({"a": 1}));

        assert_eq!(doc.id_value("absent"), None);
        assert_eq!(doc.id_value("empty"), None);
        assert_eq!(doc.id_value("null"), None);
        assert_eq!(doc.id_value("empty_list"), None);
        assert_eq!(doc.id_value("object"), None);
    }

    #[test]
    fn test_document_serializes_as_plain_object() {
        let doc = AclDocument::new().with_field("id", "a");
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"id": "a"}));
    }

    // ============================================================
    // REPLICATOR TESTS
    // ============================================================

    #[test]
    fn test_replicas_cover_every_partition_once() {
        let doc = acl_document();
        let topo = Topology::new(["s1", "s2", "s3", "s4", "s5"]).unwrap();
        let map = assign(
            "group!engineering",
            IdStrategy::Literal,
            &HashRangeRouter,
            &doc,
            &topo,
            NonZeroU32::new(5000).unwrap(),
        )
        .unwrap();

        let replicas = replicate(&doc, &ReplicaFields::default(), &map);

        assert_eq!(replicas.len(), 5);
        let partitions: BTreeSet<&str> = replicas
            .iter()
            .map(|r| r.document.field("shard_s").unwrap().as_str().unwrap())
            .collect();
        assert_eq!(partitions, BTreeSet::from(["s1", "s2", "s3", "s4", "s5"]));

        let ids: BTreeSet<&str> = replicas.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 5, "replica ids must be distinct");
    }

    #[test]
    fn test_replica_fields_are_overwritten() {
        let doc = acl_document().with_field("id", "stale").with_field("shard_s", "stale");
        let topo = Topology::new(["only"]).unwrap();
        let map = assign(
            "acl",
            IdStrategy::Literal,
            &HashRangeRouter,
            &doc,
            &topo,
            NonZeroU32::new(1).unwrap(),
        )
        .unwrap();

        let replicas = replicate(&doc, &ReplicaFields::default(), &map);
        let replica = &replicas[0];

        assert_eq!(replica.partition, "only");
        assert_eq!(replica.id, "acl___0");
        assert_eq!(replica.document.field("id"), Some(&json!("acl___0")));
        assert_eq!(replica.document.field("_lw_acl_doc_b"), Some(&json!(true)));
        assert_eq!(replica.document.field("shard_s"), Some(&json!("only")));
    }

    #[test]
    fn test_replicas_keep_other_fields_and_source_is_untouched() {
        let doc = acl_document();
        let before = doc.clone();
        let topo = Topology::new(["a", "b"]).unwrap();
        let map = assign(
            "acl",
            IdStrategy::Hashed,
            &HashRangeRouter,
            &doc,
            &topo,
            NonZeroU32::new(5000).unwrap(),
        )
        .unwrap();

        let replicas = replicate(&doc, &ReplicaFields::default(), &map);

        assert_eq!(doc, before);
        for replica in &replicas {
            for (name, value) in doc.fields() {
                assert_eq!(replica.document.field(name), Some(value));
            }
            assert_eq!(replica.document.fields().len(), doc.fields().len() + 3);
        }
    }

    #[test]
    fn test_custom_field_names() {
        let fields = ReplicaFields {
            id_field: "doc_id".to_string(),
            acl_marker_field: "is_acl".to_string(),
            partition_field: "slice".to_string(),
        };
        let doc = AclDocument::new().with_field("acl_id", "x");
        let topo = Topology::new(["p"]).unwrap();
        let map = assign(
            "x",
            IdStrategy::Literal,
            &HashRangeRouter,
            &doc,
            &topo,
            NonZeroU32::new(1).unwrap(),
        )
        .unwrap();

        let replica = replicate(&doc, &fields, &map).remove(0);

        assert_eq!(replica.document.field("doc_id"), Some(&json!("x___0")));
        assert_eq!(replica.document.field("is_acl"), Some(&json!(true)));
        assert_eq!(replica.document.field("slice"), Some(&json!("p")));
        assert_eq!(replica.document.field("id"), None);
    }
}
