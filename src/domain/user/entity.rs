//! User entity for authentication

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User account able to authenticate against the API
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Store-assigned identifier
    id: i64,
    /// Login email, unique in the store
    email: String,
    /// Bcrypt password hash - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    /// Creation timestamp, set once by the store
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        id: i64,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Fields supplied by the caller when persisting a new account; the store
/// assigns `id` and `created_at`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
