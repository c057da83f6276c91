//! Application state - Dependency injection container.
//!
//! Provides centralized access to application services and infrastructure.

use std::sync::Arc;

use crate::infra::{Database, Persistence};
use crate::services::{UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a connected database.
    ///
    /// Wires the Unit of Work and user service over the live connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        let uow = Arc::new(Persistence::new(database.get_connection()));
        let user_service = Arc::new(UserManager::new(uow));

        Self {
            user_service,
            database,
        }
    }
}
