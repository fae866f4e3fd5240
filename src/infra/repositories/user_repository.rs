//! User directory access.
//!
//! `UserStore` is the capability the signup workflow depends on. The
//! database implementation reads through the pool and writes through a
//! unit of work so a user never exists without its profile.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Statement};
use uuid::Uuid;

use super::entities::{profile, user};
use crate::domain::{NewProfile, NewUser, Profile, Registration, User};
use crate::errors::{AppError, AppResult};
use crate::infra::unit_of_work::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User directory capability.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether a user with exactly this email exists
    async fn email_taken(&self, email: &str) -> AppResult<bool>;

    /// Whether a user with exactly this username exists
    async fn username_taken(&self, username: &str) -> AppResult<bool>;

    /// Create the user and its profile together; neither exists if this fails.
    async fn register(&self, user: NewUser, profile: NewProfile) -> AppResult<Registration>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Profile owned by the given user
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;

    /// Check the backing storage is reachable
    async fn ping(&self) -> AppResult<()>;
}

/// Database-backed user directory
pub struct DbUserStore<U: UnitOfWork = Persistence> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DbUserStore<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserStore for DbUserStore<U> {
    async fn email_taken(&self, email: &str) -> AppResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .count(self.uow.connection())
            .await?;

        Ok(count > 0)
    }

    async fn username_taken(&self, username: &str) -> AppResult<bool> {
        let count = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(self.uow.connection())
            .await?;

        Ok(count > 0)
    }

    async fn register(&self, new_user: NewUser, new_profile: NewProfile) -> AppResult<Registration> {
        crate::with_transaction!(self.uow, |ctx| {
            let user = ctx.users().create(new_user).await?;
            let profile = ctx.profiles().create(user.id, new_profile).await?;
            Ok::<_, AppError>(Registration { user, profile })
        })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.uow.connection())
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        let result = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(self.uow.connection())
            .await?;

        Ok(result.map(Profile::from))
    }

    async fn ping(&self) -> AppResult<()> {
        let db = self.uow.connection();
        db.execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1".to_string(),
        ))
        .await?;
        Ok(())
    }
}
