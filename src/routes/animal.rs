//! Animal CRUD routes under `/animais`.

use crate::handlers::animal::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn animal_routes(state: AppState) -> Router {
    Router::new()
        .route("/animais", get(list).post(create))
        .route("/animais/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
