// src/state.rs

use crate::config::AppConfig;
use crate::models::{Event, seed_events};

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub events: Vec<Event>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let events = seed_events(config.seed_events);
        Self { config, events }
    }
}
