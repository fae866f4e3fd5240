//! Infrastructure layer - External systems integration
//!
//! - Database connection and migrations
//! - Repositories implementing the user directory
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{DbUserStore, MemoryUserStore, UserStore};
pub use unit_of_work::{Persistence, TransactionContext, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserStore;
