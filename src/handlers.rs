// src/handlers.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::extractor::AppQuery;
use crate::filters::{ListingParams, PageItemsQuery};
use crate::models::Event;
use crate::pagination::{
    DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT, PageItem, PaginatedResponse, PaginationRequest,
};
use crate::services::paginate_events;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PageItemsResponse {
    pub total_pages: i64,
    pub items: Vec<PageItem>,
}

pub async fn page_items_handler(
    AppQuery(query): AppQuery<PageItemsQuery>,
) -> Result<Json<PageItemsResponse>, AppError> {
    query.validate()?;

    let request = PaginationRequest::new(query.current_page, query.total_items, query.page_size)
        .with_sibling_count(query.sibling_count.unwrap_or(DEFAULT_SIBLING_COUNT))
        .with_boundary_count(query.boundary_count.unwrap_or(DEFAULT_BOUNDARY_COUNT));

    if request.total_pages() > 0 && request.current_page > request.total_pages() {
        tracing::warn!(
            "Strona {} poza zakresem (stron: {}), liczymy bez przycinania",
            request.current_page,
            request.total_pages()
        );
    }

    Ok(Json(PageItemsResponse {
        total_pages: request.total_pages(),
        items: request.items(),
    }))
}

pub async fn list_events(
    State(app_state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ListingParams>,
) -> Result<Json<PaginatedResponse<Event>>, AppError> {
    tracing::info!(
        "Obsłużono zapytanie GET /api/events z parametrami: {:?}",
        params
    );
    Ok(Json(paginate_events(&app_state, &params)?))
}

pub async fn get_event_details(
    State(app_state): State<Arc<AppState>>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Event>, AppError> {
    app_state
        .events
        .iter()
        .find(|event| event.id == event_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            tracing::warn!("Nie znaleziono wydarzenia o ID: {}", event_id);
            AppError::NotFound
        })
}

pub async fn health_handler() -> &'static str {
    "ok"
}
