// src/services.rs

use crate::errors::AppError;
use crate::filters::ListingParams;
use crate::models::{Event, EventCategory};
use crate::pagination::{PaginatedResponse, PaginationRequest};
use crate::state::AppState;

/// Filtruje katalog wydarzeń po frazie i kategorii.
///
/// Fraza jest porównywana bez rozróżniania wielkości liter z tytułem,
/// opisem i miejscem. Wynik jest posortowany po dacie rozpoczęcia.
pub fn filter_events<'a>(
    events: &'a [Event],
    search: Option<&str>,
    category: Option<EventCategory>,
) -> Vec<&'a Event> {
    let needle = search.map(str::to_lowercase);

    let mut matching: Vec<&Event> = events
        .iter()
        .filter(|event| category.is_none_or(|c| event.category == c))
        .filter(|event| {
            needle.as_deref().is_none_or(|n| {
                event.title.to_lowercase().contains(n)
                    || event.description.to_lowercase().contains(n)
                    || event.venue.to_lowercase().contains(n)
            })
        })
        .collect();

    matching.sort_by(|a, b| a.starts_at.cmp(&b.starts_at).then(a.id.cmp(&b.id)));
    matching
}

/// Zwraca jedną stronę przefiltrowanych wydarzeń razem ze znacznikami paginacji.
///
/// Nieaktualny offset (np. po zawężeniu filtrów) przesuwa nas na ostatnią
/// istniejącą stronę zamiast zwracać pustą listę.
pub fn paginate_events(
    app_state: &AppState,
    params: &ListingParams,
) -> Result<PaginatedResponse<Event>, AppError> {
    let limit = params.limit(app_state.config.default_page_limit);
    let search = params.search();
    let category = params.category()?;

    let matching = filter_events(&app_state.events, search.as_deref(), category);
    let total_items = i64::try_from(matching.len()).map_err(|_| {
        AppError::InternalServerError(format!("Zbyt wiele wydarzeń: {}", matching.len()))
    })?;

    let mut request = PaginationRequest::new(params.current_page(limit), total_items, limit)
        .with_sibling_count(params.sibling_count())
        .with_boundary_count(params.boundary_count());
    let total_pages = request.total_pages();
    request.current_page = request.current_page.clamp(1, total_pages.max(1));

    tracing::debug!(
        "Paginacja wydarzeń: {} pasujących, strona {}/{}",
        total_items,
        request.current_page,
        total_pages
    );

    let data: Vec<Event> = matching
        .into_iter()
        .skip(request.offset_of(request.current_page) as usize)
        .take(limit as usize)
        .cloned()
        .collect();

    Ok(PaginatedResponse {
        total_items,
        total_pages,
        current_page: request.current_page,
        per_page: limit,
        pages: request.items(),
        data,
    })
}
