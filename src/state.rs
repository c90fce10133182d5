//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ContactService;
use crate::infrastructure::persistence::PgContactRepository;

/// Handler state. Cloned per request; all members are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService<PgContactRepository>>,
}

impl AppState {
    /// Wires the repository and service on top of an existing pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let repository = Arc::new(PgContactRepository::new(pool));

        Self {
            contact_service: Arc::new(ContactService::new(repository)),
        }
    }
}
