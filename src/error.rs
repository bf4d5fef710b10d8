//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorBody;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
    #[error("unsupported database url scheme: {0}")]
    UnsupportedDatabaseUrl(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Dados incompletos")]
    IncompleteData { missing: Vec<&'static str> },
    #[error("Corpo da requisição inválido")]
    InvalidBody(#[source] serde_json::Error),
    #[error("Content-Type deve ser application/json")]
    UnsupportedMediaType { content_type: String },
    #[error("Animal não encontrado")]
    AnimalNotFound { id: String },
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::IncompleteData { .. } | AppError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::AnimalNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::IncompleteData { missing } => {
                tracing::debug!(?missing, "rejected incomplete animal");
                self.to_string()
            }
            AppError::InvalidBody(e) => {
                tracing::debug!(error = %e, "rejected request body");
                self.to_string()
            }
            AppError::UnsupportedMediaType { content_type } => {
                tracing::debug!(%content_type, "rejected non-json body");
                self.to_string()
            }
            AppError::AnimalNotFound { id } => {
                tracing::warn!(%id, "animal not found");
                self.to_string()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                "Erro interno do servidor".to_string()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "database error");
                "Erro interno do servidor".to_string()
            }
        };
        (status, Json(ErrorBody { erro: message })).into_response()
    }
}
