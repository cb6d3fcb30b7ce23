//! User records

use serde::{Deserialize, Serialize};

/// A site user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Opaque credential, never interpreted by the store
    #[serde(skip_serializing)]
    pub password: String,
}

/// Input for creating a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}
