// src/identity.rs
//! Principal boundary — who is acting, and in which role
//!
//! The registry core never authenticates anyone; it receives an
//! already-authenticated principal from the surrounding application and
//! treats the name as an opaque label. `login` is the demo stand-in for that
//! application: any non-empty username/password pair succeeds. It is glue
//! for the simulation, not a security model.

use serde::{Deserialize, Serialize};

/// Role granted to a logged-in principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// An authenticated principal, as supplied by the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub name: String,
    pub role: Role,
}

impl Principal {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Demo login: succeeds for any non-empty credential pair
pub fn login(username: &str, password: &str, role: Role) -> Option<Principal> {
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some(Principal::new(username, role))
}
