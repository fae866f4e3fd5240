//! Unit of Work pattern implementation.
//!
//! Hands out transaction-scoped repositories so that writes spanning the
//! user directory and the profile table commit or roll back together.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, IsolationLevel, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::repositories::entities::{profile, user};
use crate::domain::{NewProfile, NewUser, Profile, User};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Not object safe because of the generic transaction method; take it as
/// a type parameter.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Plain connection for reads outside a transaction
    fn connection(&self) -> &DatabaseConnection;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Repository access bound to one open transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// User directory writes for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository { txn: self.txn }
    }

    /// Profile writes for this transaction
    pub fn profiles(&self) -> TxProfileRepository<'_> {
        TxProfileRepository { txn: self.txn }
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f).await
    }
}

/// Transaction-aware user directory repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    /// Insert a directory entry. Duplicate username or email yields `Conflict`.
    pub async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let active_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(new_user.password.into_string()),
            first_name: Set(new_user.first_name),
            date_joined: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::from_insert(e, "User"))?;

        Ok(User::from(model))
    }
}

/// Transaction-aware profile repository.
pub struct TxProfileRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxProfileRepository<'a> {
    /// Insert the profile owned by `user_id`.
    pub async fn create(&self, user_id: Uuid, new_profile: NewProfile) -> AppResult<Profile> {
        let active_model = profile::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            name: Set(new_profile.name),
            password: Set(new_profile.password),
            email: Set(new_profile.email),
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(|e| AppError::from_insert(e, "Profile"))?;

        Ok(Profile::from(model))
    }
}

/// Run a block inside `$uow.transaction`, boxing the future for you.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
