// src/htmx_handlers.rs

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap};
use maud::{Markup, html};
use strum::IntoEnumIterator;

use crate::{
    errors::AppError,
    extractor::AppQuery,
    filters::ListingParams,
    models::{Event, EventCategory},
    pagination::{PageItem, PaginatedResponse, PaginationRequest},
    response::{AppResponse, build_response},
    services::paginate_events,
    state::AppState,
};

const BUTTON_CLASS: &str = "px-3 sm:px-4 py-2 border rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-indigo-500";
const DISABLED_CLASS: &str =
    "px-3 sm:px-4 py-2 border rounded-md text-sm font-medium text-gray-400 bg-gray-50 cursor-not-allowed";
const CURRENT_CLASS: &str =
    "px-3 sm:px-4 py-2 border rounded-md text-sm font-medium text-white bg-indigo-600 z-10";

fn page_link(page: i64, per_page: i64, filter_query_string: &str) -> String {
    format!(
        "/htmx/events?offset={}&limit={}{}",
        (page - 1).max(0) * per_page,
        per_page,
        filter_query_string
    )
}

/// Pasek paginacji: poprzednia/następna oraz znaczniki stron z generatora.
pub fn render_pagination_maud(request: &PaginationRequest, filter_query_string: &str) -> Markup {
    let current_page = request.current_page;
    let per_page = request.page_size;
    html! {
        @if request.total_pages() > 1 {
            nav #pagination-controls ."mt-8 flex justify-center items-center space-x-1 sm:space-x-2" aria-label="Paginacja" {
                @if request.has_previous() {
                    button "hx-get"=(page_link(current_page - 1, per_page, filter_query_string))
                           "hx-target"="#events-grid-container" "hx-swap"="outerHTML"
                           class=(BUTTON_CLASS) {
                        "Poprzednia"
                    }
                } @else {
                    span class=(DISABLED_CLASS) { "Poprzednia" }
                }
                @for item in request.items() {
                    @match item {
                        PageItem::Page(page_num) if page_num == current_page => {
                            span class=(CURRENT_CLASS) aria-current="page" { (page_num) }
                        }
                        PageItem::Page(page_num) => {
                            button "hx-get"=(page_link(page_num, per_page, filter_query_string))
                                   "hx-target"="#events-grid-container" "hx-swap"="outerHTML"
                                   class=(BUTTON_CLASS) {
                                (page_num)
                            }
                        }
                        PageItem::Ellipsis => {
                            span class="px-1 sm:px-2 py-2 text-sm text-gray-500" aria-hidden="true" { "…" }
                        }
                    }
                }
                @if request.has_next() {
                    button "hx-get"=(page_link(current_page + 1, per_page, filter_query_string))
                           "hx-target"="#events-grid-container" "hx-swap"="outerHTML"
                           class=(BUTTON_CLASS) {
                        "Następna"
                    }
                } @else {
                    span class=(DISABLED_CLASS) { "Następna" }
                }
            }
        }
    }
}

fn render_filters_maud(params: &ListingParams, per_page: i64) -> Markup {
    let selected = params.category().ok().flatten();
    html! {
        form #events-filters ."flex flex-wrap gap-3 mb-6"
             "hx-get"="/htmx/events" "hx-target"="#events-grid-container" "hx-swap"="outerHTML" {
            input type="hidden" name="limit" value=(per_page);
            @if let Some(sibling_count) = params.explicit_sibling_count() {
                input type="hidden" name="sibling_count" value=(sibling_count);
            }
            @if let Some(boundary_count) = params.explicit_boundary_count() {
                input type="hidden" name="boundary_count" value=(boundary_count);
            }
            input type="search" name="search" placeholder="Szukaj wydarzeń…"
                  value=(params.search().unwrap_or_default())
                  class="border rounded-md px-3 py-2 text-sm";
            select name="category" class="border rounded-md px-3 py-2 text-sm" {
                option value="all" selected[selected.is_none()] { "Wszystkie kategorie" }
                @for category in EventCategory::iter() {
                    option value=(category.as_url_param()) selected[selected == Some(category)] {
                        (category.to_string())
                    }
                }
            }
            button type="submit" class=(BUTTON_CLASS) { "Filtruj" }
        }
    }
}

fn render_events_grid_maud(page: &PaginatedResponse<Event>, params: &ListingParams) -> Markup {
    let request = PaginationRequest::new(page.current_page, page.total_items, page.per_page)
        .with_sibling_count(params.sibling_count())
        .with_boundary_count(params.boundary_count());
    html! {
        div #events-grid-container {
            p ."text-sm text-gray-500 mb-4" {
                "Znaleziono wydarzeń: " (page.total_items)
            }
            div #events-container ."grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6" {
                @if page.data.is_empty() {
                    p ."col-span-full text-center text-gray-500 py-8" {
                        "Brak wydarzeń spełniających wybrane kryteria."
                    }
                } @else {
                    @for event in &page.data {
                        article ."border rounded-lg p-4 shadow-lg flex flex-col bg-white" {
                            p ."text-xs uppercase tracking-wide text-indigo-600 mb-1" { (event.category.to_string()) }
                            h2 ."text-lg font-semibold mb-1 text-gray-800" { (event.title) }
                            p ."text-sm text-gray-700 mb-2" { (event.description) }
                            p ."text-xs text-gray-500 mt-auto" {
                                time datetime=(event.starts_at.to_rfc3339()) {
                                    (event.starts_at.format("%d.%m.%Y, %H:%M").to_string())
                                }
                                " · " (event.venue)
                            }
                        }
                    }
                }
            }
            (render_pagination_maud(&request, &params.filter_query_string()))
        }
    }
}

pub fn render_events_listing_maud(page: &PaginatedResponse<Event>, params: &ListingParams) -> Markup {
    html! {
        section #events-listing {
            h1 ."text-3xl font-bold mb-6" { "Nadchodzące wydarzenia" }
            (render_filters_maud(params, page.per_page))
            (render_events_grid_maud(page, params))
        }
    }
}

pub async fn list_events_htmx_handler(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
    AppQuery(params): AppQuery<ListingParams>,
) -> Result<AppResponse, AppError> {
    tracing::info!("MAUD: /htmx/events z parametrami: {:?}", params);
    let page = paginate_events(&app_state, &params)?;

    // Przyciski paginacji i formularz podmieniają tylko siatkę
    let markup = if headers
        .get("HX-Target")
        .is_some_and(|target| target == "events-grid-container")
    {
        render_events_grid_maud(&page, &params)
    } else {
        render_events_listing_maud(&page, &params)
    };

    Ok(build_response(&headers, markup))
}

pub async fn index_handler(
    State(app_state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<AppResponse, AppError> {
    let params = ListingParams::default();
    let page = paginate_events(&app_state, &params)?;
    Ok(build_response(&headers, render_events_listing_maud(&page, &params)))
}
