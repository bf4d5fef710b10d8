//! Service-level routes: liveness text and readiness against the `animal` table.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const LIVENESS_TEXT: &str = "API de Adoção de Animais está no ar!";

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    animais: Option<i64>,
}

async fn index() -> &'static str {
    LIVENESS_TEXT
}

/// Ready once the `animal` table answers a query; reports the record count.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    match sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM animal")
        .fetch_one(&state.pool)
        .await
    {
        Ok((count,)) => (
            StatusCode::OK,
            Json(ReadyBody {
                status: "ok",
                animais: Some(count),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "animal table unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyBody {
                    status: "indisponivel",
                    animais: None,
                }),
            )
        }
    }
}

/// GET / and GET /ready.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ready", get(ready))
        .with_state(state)
}
