// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Tipo de erro central, com `thiserror` para melhor ergonomia. As mensagens
// viram o corpo `{"error": ...}` da resposta HTTP.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("One or more fields are invalid")]
    Validation(#[from] validator::ValidationErrors),

    // Regras de negócio do checkout (tamanho faltando, desk não escolhido...)
    // Bloqueiam a submissão antes de qualquer escrita.
    #[error("{0}")]
    InvalidSubmission(String),

    #[error("Order not found")]
    OrderNotFound,

    #[error("Status transition not allowed: {from} -> {to}")]
    InvalidStatusTransition { from: &'static str, to: &'static str },

    #[error("Order already synced with the carrier (tracking {0}); pass force=true to resubmit")]
    AlreadySynced(String),

    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    #[error("No API credentials configured for carrier {0}")]
    CarrierNotConfigured(String),

    #[error("Carrier validation error: {0}")]
    CarrierValidation(String),

    #[error("Stop desk rejected by carrier and domicile fallback failed. Office attempt: {office_error} | Domicile attempt: {fallback_error}")]
    StopDeskFallbackFailed {
        office_error: String,
        fallback_error: String,
    },

    #[error("Carrier returned success without a tracking number: {0}")]
    CarrierMissingTracking(String),

    #[error("Delivery API error ({status}): {body}")]
    CarrierRejected { status: u16, body: String },

    #[error("Could not reach the carrier API")]
    CarrierUnreachable(#[from] reqwest::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::Validation(errors) => {
                let mut details = std::collections::HashMap::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    details.insert(field.to_string(), messages);
                }
                let body = Json(json!({
                    "error": "One or more fields are invalid",
                    "details": details,
                }));
                return (StatusCode::BAD_REQUEST, body).into_response();
            }

            AppError::InvalidSubmission(_) | AppError::UnknownCarrier(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InvalidStatusTransition { .. } | AppError::AlreadySynced(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            AppError::CarrierNotConfigured(_) => {
                (StatusCode::FAILED_DEPENDENCY, self.to_string())
            }
            AppError::CarrierValidation(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.to_string())
            }
            AppError::StopDeskFallbackFailed { .. }
            | AppError::CarrierMissingTracking(_)
            | AppError::CarrierRejected { .. }
            | AppError::CarrierUnreachable(_) => {
                tracing::error!("Carrier failure: {}", self);
                (StatusCode::BAD_GATEWAY, self.to_string())
            }

            // Database e Internal viram 500; o detalhe fica só no log.
            e => {
                tracing::error!("Internal server error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
