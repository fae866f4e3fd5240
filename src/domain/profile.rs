//! Application-owned profile, one per user.

use uuid::Uuid;

/// Per-user profile record.
///
/// `password` holds the password exactly as it was submitted and `email`
/// repeats the directory's copy. Both are kept for compatibility with the
/// existing `profiles` table and must not be relied on for authentication;
/// the directory's Argon2 hash is the only credential.
#[derive(Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}

/// Profile fields supplied at signup; the owning user is attached on insert.
#[derive(Clone)]
pub struct NewProfile {
    pub name: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for NewProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewProfile")
            .field("name", &self.name)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .finish()
    }
}
