//! Shared application state for all routes.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    /// Connections are checked out per request through [`crate::extractors::DbConn`].
    pub pool: AnyPool,
}

impl AppState {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}
