//! User directory entry.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::Password;

/// Identity record owned by the user directory
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub date_joined: DateTime<Utc>,
}

impl User {
    /// Check a plain text password against the stored hash
    pub fn check_password(&self, plain_text: &str) -> bool {
        Password::from_hash(self.password_hash.clone()).verify(plain_text)
    }
}

/// Data needed to create a directory entry. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: Password,
    pub first_name: String,
}
