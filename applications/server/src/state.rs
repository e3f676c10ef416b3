/// Shared application state
use crate::services::AccessGuard;
use crate::validation::{AnnotatedValidator, PayloadValidator, SchemaValidator};
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub access_guard: Arc<AccessGuard>,
    /// Front-end for the primary routes
    pub validator: Arc<dyn PayloadValidator>,
    /// Front-end for `POST /users/schema`
    pub schema_validator: Arc<dyn PayloadValidator>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, access_guard: Arc<AccessGuard>) -> Self {
        Self {
            store,
            access_guard,
            validator: Arc::new(AnnotatedValidator),
            schema_validator: Arc::new(SchemaValidator::default()),
        }
    }
}
