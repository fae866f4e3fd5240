//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{ServiceContainer, Services, SignupService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Signup workflow
    pub signup_service: Arc<dyn SignupService>,
    /// User directory (health checks)
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    /// State backed by the database.
    pub fn from_database(database: &Database) -> Self {
        Self::from_services(&Services::from_connection(database.get_connection()))
    }

    /// State backed by any user directory, e.g. `MemoryUserStore`.
    pub fn from_store(store: Arc<dyn UserStore>) -> Self {
        Self::from_services(&Services::from_store(store))
    }

    /// State taken from a service container.
    pub fn from_services(services: &dyn ServiceContainer) -> Self {
        Self {
            signup_service: services.signup(),
            user_store: services.users(),
        }
    }
}
