//! Service Container - Centralized service construction.
//!
//! Wires each service to its infrastructure so handlers only ever see
//! service traits.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{Registrar, SignupService};
use crate::infra::{DbUserStore, Persistence, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get signup service
    fn signup(&self) -> Arc<dyn SignupService>;

    /// Get the user directory the services share
    fn users(&self) -> Arc<dyn UserStore>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_store: Arc<dyn UserStore>,
    signup_service: Arc<dyn SignupService>,
}

impl Services {
    /// Build every service on top of one user directory
    pub fn from_store(user_store: Arc<dyn UserStore>) -> Self {
        let signup_service = Arc::new(Registrar::new(user_store.clone()));

        Self {
            user_store,
            signup_service,
        }
    }

    /// Build services backed by the database
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));
        Self::from_store(Arc::new(DbUserStore::new(uow)))
    }
}

impl ServiceContainer for Services {
    fn signup(&self) -> Arc<dyn SignupService> {
        self.signup_service.clone()
    }

    fn users(&self) -> Arc<dyn UserStore> {
        self.user_store.clone()
    }
}
