// tests/support.rs
//! Test utilities — registry backends and principals

use document_registry::identity::{Principal, Role};
use document_registry::registry::{HashRegistry, MemoryRegistry, SqliteRegistry};

/// Every backend a registry property should hold for
#[allow(dead_code)]
pub fn all_backends() -> Vec<(&'static str, Box<dyn HashRegistry>)> {
    vec![
        ("memory", Box::new(MemoryRegistry::new()) as Box<dyn HashRegistry>),
        (
            "sqlite",
            Box::new(SqliteRegistry::open_in_memory().expect("open sqlite registry")),
        ),
    ]
}

#[allow(dead_code)]
pub fn admin(name: &str) -> Principal {
    Principal::new(name, Role::Admin)
}

#[allow(dead_code)]
pub fn user(name: &str) -> Principal {
    Principal::new(name, Role::User)
}

/// Initialize tracing once per test binary
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
