// tests/registry_tests.rs
//! Property suite run against every registry backend

mod support;

use std::thread;

use chrono::Utc;
use document_registry::registry::HashRegistry;

#[test]
fn register_on_fresh_registry_succeeds_and_lookup_finds_record() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        assert!(
            registry.register("abc123", "alice").unwrap(),
            "backend {name}"
        );
        let record = registry.lookup("abc123").unwrap().unwrap();
        assert_eq!(record.hash, "abc123", "backend {name}");
        assert_eq!(record.uploader, "alice", "backend {name}");
    }
}

#[test]
fn duplicate_registration_is_rejected_and_first_record_stands() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        assert!(registry.register("abc123", "alice").unwrap());
        let original = registry.lookup("abc123").unwrap().unwrap();

        assert!(
            !registry.register("abc123", "mallory").unwrap(),
            "backend {name}"
        );

        let after = registry.lookup("abc123").unwrap().unwrap();
        assert_eq!(after.uploader, "alice", "backend {name}");
        assert_eq!(after, original, "backend {name}");
    }
}

#[test]
fn lookup_of_unregistered_digest_is_none() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        assert!(registry.lookup("zzz999").unwrap().is_none(), "backend {name}");
    }
}

#[test]
fn registration_timestamp_is_current_time() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        let before = Utc::now().timestamp_millis();
        assert!(registry.register("abc123", "alice").unwrap());
        let after = Utc::now().timestamp_millis();

        let t = registry
            .lookup("abc123")
            .unwrap()
            .unwrap()
            .registered_at_millis();
        assert!(t >= before && t <= after, "backend {name}");
    }
}

#[test]
fn count_reflects_distinct_digests_only() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        assert_eq!(registry.count().unwrap(), 0, "backend {name}");

        assert!(registry.register("d1", "alice").unwrap());
        assert!(registry.register("d2", "alice").unwrap());
        assert!(!registry.register("d1", "bob").unwrap());
        assert!(!registry.register("d1", "alice").unwrap());

        assert_eq!(registry.count().unwrap(), 2, "backend {name}");
        assert_eq!(registry.info().unwrap().hash_count, 2, "backend {name}");
    }
}

#[test]
fn records_snapshot_is_ordered_by_registration() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        assert!(registry.register("aaa", "alice").unwrap());
        assert!(registry.register("bbb", "bob").unwrap());
        assert!(registry.register("ccc", "carol").unwrap());

        let hashes: Vec<_> = registry
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.hash)
            .collect();
        assert_eq!(hashes, ["aaa", "bbb", "ccc"], "backend {name}");
    }
}

#[test]
fn concurrent_registration_of_one_digest_has_exactly_one_winner() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        let winners = thread::scope(|scope| {
            let registry = registry.as_ref();
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    scope.spawn(move || {
                        registry
                            .register("deadbeef", &format!("uploader-{i}"))
                            .unwrap()
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .filter(|&won| won)
                .count()
        });

        assert_eq!(winners, 1, "backend {name}");
        assert_eq!(registry.count().unwrap(), 1, "backend {name}");
    }
}

#[test]
fn distinct_digests_register_concurrently_without_interference() {
    support::init_tracing();
    for (name, registry) in support::all_backends() {
        thread::scope(|scope| {
            for i in 0..8 {
                let registry = registry.as_ref();
                scope.spawn(move || {
                    assert!(registry.register(&format!("digest-{i}"), "worker").unwrap());
                });
            }
        });

        assert_eq!(registry.count().unwrap(), 8, "backend {name}");
    }
}
