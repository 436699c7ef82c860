// src/filters.rs
use std::str::FromStr;

use serde::Deserialize;
use validator::Validate;

use crate::errors::AppError;
use crate::models::EventCategory;
use crate::pagination::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const MAX_PAGE_LIMIT: i64 = 50;
pub const MAX_WINDOW: i64 = 5;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    // Paginacja
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    offset: Option<i64>,
    #[serde(default, alias = "sibling-count")]
    sibling_count: Option<i64>,
    #[serde(default, alias = "boundary-count")]
    boundary_count: Option<i64>,

    // Filtry
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

impl ListingParams {
    pub fn limit(&self, default_limit: i64) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 && limit <= MAX_PAGE_LIMIT => limit,
            Some(_) => MAX_PAGE_LIMIT,
            None => default_limit.clamp(1, MAX_PAGE_LIMIT),
        }
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// Numer strony (od 1) wynikający z offsetu i limitu.
    pub fn current_page(&self, default_limit: i64) -> i64 {
        self.offset() / self.limit(default_limit) + 1
    }

    pub fn sibling_count(&self) -> i64 {
        self.sibling_count
            .unwrap_or(DEFAULT_SIBLING_COUNT)
            .clamp(0, MAX_WINDOW)
    }

    pub fn boundary_count(&self) -> i64 {
        self.boundary_count
            .unwrap_or(DEFAULT_BOUNDARY_COUNT)
            .clamp(0, MAX_WINDOW)
    }

    /// Okno sąsiadów tylko wtedy, gdy zostało jawnie podane w zapytaniu.
    pub fn explicit_sibling_count(&self) -> Option<i64> {
        self.sibling_count.map(|_| self.sibling_count())
    }

    pub fn explicit_boundary_count(&self) -> Option<i64> {
        self.boundary_count.map(|_| self.boundary_count())
    }

    pub fn search(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn category(&self) -> Result<Option<EventCategory>, AppError> {
        match self.category.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => EventCategory::from_str(raw)
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Nieznana kategoria: {}", raw))),
        }
    }

    /// Parametry filtrów (bez paginacji) do doklejenia w linkach paska stron.
    pub fn filter_query_string(&self) -> String {
        let mut query = String::new();
        if let Some(search) = self.search() {
            query.push_str(&format!("&search={}", urlencoding::encode(&search)));
        }
        if let Ok(Some(category)) = self.category() {
            query.push_str(&format!("&category={}", category.as_url_param()));
        }
        if let Some(sibling_count) = self.explicit_sibling_count() {
            query.push_str(&format!("&sibling_count={}", sibling_count));
        }
        if let Some(boundary_count) = self.explicit_boundary_count() {
            query.push_str(&format!("&boundary_count={}", boundary_count));
        }
        query
    }
}

/// Parametry surowego generatora znaczników (`/api/pagination`).
#[derive(Debug, Deserialize, Validate)]
pub struct PageItemsQuery {
    #[validate(range(min = 1, message = "Numer strony musi być większy od zera"))]
    pub current_page: i64,
    #[validate(range(min = 0, message = "Liczba elementów nie może być ujemna"))]
    pub total_items: i64,
    #[validate(range(min = 1, message = "Rozmiar strony musi być większy od zera"))]
    pub page_size: i64,
    #[serde(default)]
    #[validate(range(min = 0, max = MAX_WINDOW, message = "Wartość spoza dozwolonego okna"))]
    pub sibling_count: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0, max = MAX_WINDOW, message = "Wartość spoza dozwolonego okna"))]
    pub boundary_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<i64>, offset: Option<i64>) -> ListingParams {
        ListingParams {
            limit,
            offset,
            ..ListingParams::default()
        }
    }

    #[test]
    fn limit_falls_back_and_clamps() {
        assert_eq!(params(None, None).limit(DEFAULT_PAGE_LIMIT), 10);
        assert_eq!(params(None, None).limit(25), 25);
        assert_eq!(params(Some(20), None).limit(DEFAULT_PAGE_LIMIT), 20);
        assert_eq!(params(Some(0), None).limit(DEFAULT_PAGE_LIMIT), MAX_PAGE_LIMIT);
        assert_eq!(params(Some(500), None).limit(DEFAULT_PAGE_LIMIT), MAX_PAGE_LIMIT);
    }

    #[test]
    fn negative_offset_is_zero() {
        assert_eq!(params(None, Some(-30)).offset(), 0);
    }

    #[test]
    fn current_page_follows_offset() {
        assert_eq!(params(Some(10), Some(0)).current_page(DEFAULT_PAGE_LIMIT), 1);
        assert_eq!(params(Some(10), Some(25)).current_page(DEFAULT_PAGE_LIMIT), 3);
        assert_eq!(params(None, Some(60)).current_page(20), 4);
    }

    #[test]
    fn windows_default_to_one_and_are_bounded() {
        let mut p = ListingParams::default();
        assert_eq!(p.sibling_count(), 1);
        assert_eq!(p.boundary_count(), 1);
        p.sibling_count = Some(-2);
        p.boundary_count = Some(99);
        assert_eq!(p.sibling_count(), 0);
        assert_eq!(p.boundary_count(), MAX_WINDOW);
    }

    #[test]
    fn blank_search_is_ignored() {
        let mut p = ListingParams::default();
        p.search = Some("   ".into());
        assert_eq!(p.search(), None);
        p.search = Some("  rajd ".into());
        assert_eq!(p.search().as_deref(), Some("rajd"));
    }

    #[test]
    fn category_is_parsed_or_rejected() {
        let mut p = ListingParams::default();
        assert!(p.category().unwrap().is_none());
        p.category = Some("all".into());
        assert!(p.category().unwrap().is_none());
        p.category = Some("wyjazd".into());
        assert_eq!(p.category().unwrap(), Some(EventCategory::Wyjazd));
        p.category = Some("koncert".into());
        assert!(matches!(p.category(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn filter_query_string_carries_filters_only() {
        let p = ListingParams {
            limit: Some(20),
            offset: Some(40),
            search: Some("noc kina".into()),
            category: Some("Impreza".into()),
            sibling_count: Some(2),
            ..ListingParams::default()
        };
        assert_eq!(
            p.filter_query_string(),
            "&search=noc%20kina&category=Impreza&sibling_count=2"
        );
    }

    #[test]
    fn page_items_query_validation() {
        let valid = PageItemsQuery {
            current_page: 1,
            total_items: 0,
            page_size: 10,
            sibling_count: None,
            boundary_count: Some(2),
        };
        assert!(valid.validate().is_ok());

        let invalid = PageItemsQuery {
            current_page: 0,
            total_items: 10,
            page_size: 0,
            sibling_count: Some(9),
            boundary_count: None,
        };
        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("current_page"));
        assert!(fields.contains_key("page_size"));
        assert!(fields.contains_key("sibling_count"));
    }

    #[test]
    fn window_validation_matches_listing_clamp() {
        let query = |window: i64| PageItemsQuery {
            current_page: 1,
            total_items: 100,
            page_size: 10,
            sibling_count: Some(window),
            boundary_count: Some(window),
        };
        assert!(query(MAX_WINDOW).validate().is_ok());
        let errors = query(MAX_WINDOW + 1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("boundary_count"));

        let listing = ListingParams {
            sibling_count: Some(MAX_WINDOW + 1),
            ..ListingParams::default()
        };
        assert_eq!(listing.sibling_count(), MAX_WINDOW);
        assert_eq!(listing.explicit_sibling_count(), Some(MAX_WINDOW));
        assert_eq!(listing.explicit_boundary_count(), None);
    }
}
