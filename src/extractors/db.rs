//! Per-request database connection checked out from the pool.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Any, AnyConnection};
use std::ops::{Deref, DerefMut};

/// A pooled connection scoped to one request. Acquired before the handler
/// runs and handed back to the pool when dropped, whatever the handler returns.
pub struct DbConn(PoolConnection<Any>);

#[async_trait]
impl FromRequestParts<AppState> for DbConn {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        tracing::trace!("connection acquired");
        Ok(DbConn(conn))
    }
}

impl Drop for DbConn {
    fn drop(&mut self) {
        tracing::trace!("connection released");
    }
}

impl Deref for DbConn {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConn {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
