// src/extractor.rs

use axum::extract::{FromRequestParts, Query};

use crate::errors::AppError;

/// `Query`, który przy błędnych parametrach zwraca nasz JSON `{"error": ...}`
/// zamiast tekstowej odpowiedzi axum.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
