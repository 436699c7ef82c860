// src/main.rs

use std::sync::Arc;

use axum::{Router, routing::get};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Deklaracje modułów
mod config;
mod errors;
mod extractor;
mod filters;
mod handlers;
mod htmx_handlers;
mod models;
mod pagination;
mod response;
mod services;
mod state;

use crate::config::AppConfig;
use crate::handlers::*;
use crate::htmx_handlers::*;
use crate::state::AppState;

fn app(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/pagination", get(page_items_handler))
        .route("/api/events", get(list_events))
        .route("/api/events/{id}", get(get_event_details))
        .route("/htmx/events", get(list_events_htmx_handler))
        .route("/health", get(health_handler))
        .route("/", get(index_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Inicjalizacja systemu logowania (tracing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_events_portal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Inicjalizacja serwera...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Niepoprawna konfiguracja: {}", err);
            std::process::exit(1);
        }
    };

    let addr = config.addr();
    let app_state = Arc::new(AppState::new(config));
    tracing::info!("Załadowano {} wydarzeń", app_state.events.len());

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Nie można powiązać adresu {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Serwer nasłuchuje na {}", addr);

    if let Err(e) = axum::serve(listener, app(app_state).into_make_service()).await {
        tracing::error!("Błąd serwera: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppState::new(AppConfig {
            seed_events: 137,
            ..AppConfig::default()
        })))
    }

    async fn get(uri: &str, htmx: bool) -> (StatusCode, String) {
        let headers: &[(&str, &str)] = if htmx { &[("HX-Request", "true")] } else { &[] };
        get_with_headers(uri, headers).await
    }

    async fn get_with_headers(uri: &str, headers: &[(&str, &str)]) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = test_app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = get(uri, false).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[tokio::test]
    async fn page_items_endpoint_returns_markers() {
        let (status, body) = get_json("/api/pagination?current_page=7&total_items=2500&page_size=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_pages"], 250);
        assert_eq!(
            body["items"],
            serde_json::json!([
                { "type": "page", "value": 1 },
                { "type": "ellipsis" },
                { "type": "page", "value": 6 },
                { "type": "page", "value": 7 },
                { "type": "page", "value": 8 },
                { "type": "ellipsis" },
                { "type": "page", "value": 250 }
            ])
        );
    }

    #[tokio::test]
    async fn page_items_endpoint_honours_window_sizes() {
        let (_, body) = get_json(
            "/api/pagination?current_page=10&total_items=250&page_size=10&boundary_count=2",
        )
        .await;
        let pages: Vec<serde_json::Value> = body["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item.get("value").cloned().unwrap_or(serde_json::Value::Null))
            .collect();
        assert_eq!(
            pages,
            serde_json::json!([1, 2, null, 9, 10, 11, null, 24, 25])
                .as_array()
                .unwrap()
                .clone()
        );
    }

    #[tokio::test]
    async fn page_items_endpoint_rejects_invalid_input() {
        let (status, body) = get_json("/api/pagination?current_page=1&total_items=10&page_size=0").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("page_size"));
    }

    #[tokio::test]
    async fn events_endpoint_paginates() {
        let (status, body) = get_json("/api/events?limit=20&offset=40&category=Warsztaty").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_items"], 28);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["current_page"], 2);
        assert_eq!(body["data"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn events_endpoint_rejects_unknown_category() {
        let (status, _) = get_json("/api/events?category=koncert").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn event_details_found_and_missing() {
        let id = uuid::Uuid::from_u128(3);
        let (status, body) = get_json(&format!("/api/events/{}", id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Rekrutacja #3");

        let missing = uuid::Uuid::from_u128(9999);
        let (status, _) = get_json(&format!("/api/events/{}", missing)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn htmx_listing_is_a_fragment_with_pagination() {
        let (status, body) = get("/htmx/events?offset=60", true).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<!DOCTYPE html>"));
        assert!(body.contains(r#"aria-current="page">7</span>"#));
        assert_eq!(body.matches("…</span>").count(), 2);
    }

    #[tokio::test]
    async fn htmx_grid_target_gets_only_the_grid() {
        let (status, body) = get_with_headers(
            "/htmx/events?offset=10&search=klub",
            &[("HX-Request", "true"), ("HX-Target", "events-grid-container")],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with(r#"<div id="events-grid-container">"#));
        assert!(!body.contains("events-filters"));
        assert!(body.contains(r#"aria-current="page">2</span>"#));
    }

    #[tokio::test]
    async fn malformed_query_returns_json_error() {
        let (status, body) =
            get_json("/api/pagination?current_page=abc&total_items=10&page_size=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Niepoprawne parametry zapytania")
        );

        let (status, body) = get_json("/api/events?limit=many").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn index_renders_full_page() {
        let (status, body) = get("/", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("Nadchodzące wydarzenia"));
        assert!(body.contains(r#"aria-current="page">1</span>"#));
    }

    #[tokio::test]
    async fn health_check() {
        let (status, body) = get("/health", false).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
