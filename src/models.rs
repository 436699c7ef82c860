// src/models.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum EventCategory {
    Spotkanie,
    Warsztaty,
    Rekrutacja,
    Wyjazd,
    Impreza,
}

impl EventCategory {
    pub fn as_url_param(&self) -> &'static str {
        match self {
            EventCategory::Spotkanie => "Spotkanie",
            EventCategory::Warsztaty => "Warsztaty",
            EventCategory::Rekrutacja => "Rekrutacja",
            EventCategory::Wyjazd => "Wyjazd",
            EventCategory::Impreza => "Impreza",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: EventCategory,
    pub venue: String,
    pub starts_at: DateTime<Utc>,
}

const VENUES: [&str; 4] = [
    "Aula A, budynek główny",
    "Sala 204, Wydział Informatyki",
    "Klub Studencki Pod Dachem",
    "Dom Studenta nr 3",
];

/// Deterministyczny katalog wydarzeń używany przy starcie serwera.
pub fn seed_events(count: usize) -> Vec<Event> {
    let categories: Vec<EventCategory> = EventCategory::iter().collect();
    let first_start = Utc
        .with_ymd_and_hms(2026, 10, 1, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now);

    (0..count)
        .map(|i| {
            let category = categories[i % categories.len()];
            let number = i + 1;
            Event {
                id: Uuid::from_u128(number as u128),
                title: format!("{} #{}", category, number),
                description: format!(
                    "{} organizowane przez samorząd studencki, edycja {}.",
                    category, number
                ),
                category,
                venue: VENUES[i % VENUES.len()].to_string(),
                starts_at: first_start + Duration::days(i as i64),
            }
        })
        .collect()
}
