use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Nie znaleziono zasobu")]
    NotFound,

    #[error("Błędy walidacji")]
    ValidationError(#[from] ValidationErrors),

    #[error("Niepoprawne zapytanie: {0}")]
    BadRequest(String),

    #[error("Wewnętrzny błąd serwera")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Nie znaleziono zasobu".to_string()),
            AppError::ValidationError(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, validation_message(&errors))
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::InternalServerError(message) => {
                tracing::error!("Wewnętrzny błąd serwera: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Wystąpił wewnętrzny błąd serwera".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        tracing::warn!("Niepoprawne parametry zapytania: {:?}", err);
        AppError::BadRequest(format!("Niepoprawne parametry zapytania: {}", err.body_text()))
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error.message.as_ref().map_or_else(
                || format!("Pole '{}' jest nieprawidłowe", field),
                |m| format!("Pole '{}': {}", field, m),
            );
            messages.push(msg);
        }
    }
    // field_errors() to HashMap, więc sortujemy dla stabilnej odpowiedzi
    messages.sort();
    messages.join("; ")
}

/// Błędy wczytywania konfiguracji przy starcie serwera.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Zmienna {name} ma niepoprawną wartość '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("Zmienna {name} musi być większa od zera")]
    NotPositive { name: &'static str },
}
