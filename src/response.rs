//! Response bodies shared by handlers and error mapping.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Error body: `{"erro": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub erro: String,
}

/// Informational body: `{"mensagem": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub mensagem: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(text: &str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            mensagem: text.to_string(),
        }),
    )
}
