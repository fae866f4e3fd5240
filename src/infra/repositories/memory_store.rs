//! In-memory user directory for tests and local demos.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::UserStore;
use crate::domain::{NewProfile, NewUser, Profile, Registration, User};
use crate::errors::{AppError, AppResult};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    profiles: HashMap<Uuid, Profile>,
}

/// `UserStore` kept in a process-local map.
///
/// Enforces the same uniqueness rules as the database schema, and
/// `register` inserts both rows under one lock.
#[derive(Default)]
pub struct MemoryUserStore {
    tables: Mutex<Tables>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.lock().map(|t| t.users.len()).unwrap_or(0)
    }

    pub fn profile_count(&self) -> usize {
        self.lock().map(|t| t.profiles.len()).unwrap_or(0)
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| AppError::internal("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn email_taken(&self, email: &str) -> AppResult<bool> {
        Ok(self.lock()?.users.values().any(|u| u.email == email))
    }

    async fn username_taken(&self, username: &str) -> AppResult<bool> {
        Ok(self.lock()?.users.values().any(|u| u.username == username))
    }

    async fn register(&self, new_user: NewUser, new_profile: NewProfile) -> AppResult<Registration> {
        let mut tables = self.lock()?;

        let duplicate = tables
            .users
            .values()
            .any(|u| u.username == new_user.username || u.email == new_user.email);
        if duplicate {
            return Err(AppError::conflict("User"));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password.into_string(),
            first_name: new_user.first_name,
            date_joined: Utc::now(),
        };
        let profile = Profile {
            id: Uuid::new_v4(),
            user_id: user.id,
            name: new_profile.name,
            password: new_profile.password,
            email: new_profile.email,
        };

        tables.users.insert(user.id, user.clone());
        tables.profiles.insert(user.id, profile.clone());

        Ok(Registration { user, profile })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.lock()?.profiles.get(&user_id).cloned())
    }

    async fn ping(&self) -> AppResult<()> {
        self.lock().map(|_| ())
    }
}
