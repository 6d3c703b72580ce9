#![allow(dead_code)]

use async_trait::async_trait;
use show_availability::{
    config::Config,
    error::{AvailabilityError, AvailabilityResult},
    models::{Screen, Seat, Show},
    services::AvailabilityService,
    sources::{BookedSeatSource, InMemoryStore, SeatSource, ShowSource},
    AppState,
};
use std::sync::Arc;

/// Зал из 10 мест: 1-6 REGULAR, 7-10 VIP. Сеанс 1 идет в этом зале.
pub fn cinema() -> InMemoryStore {
    let mut store = InMemoryStore::new()
        .with_screen(10, "Screen 1", 10)
        .with_show(1, "Dune", 10);
    for seat_id in 1..=10 {
        let category = if seat_id <= 6 { "REGULAR" } else { "VIP" };
        store = store.with_seat(seat_id, 10, category);
    }
    store
}

pub fn service(store: InMemoryStore) -> AvailabilityService {
    let store = Arc::new(store);
    AvailabilityService::new(store.clone(), store.clone(), store)
}

pub fn test_config() -> Config {
    Config::from_lookup(|name| match name {
        "DATABASE_URL" => Some("postgres://localhost/test".to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn app_state(service: AvailabilityService) -> Arc<AppState> {
    Arc::new(AppState::from_parts(test_config(), service))
}

/// Источник, у которого каждая операция падает, как при недоступной БД.
pub struct BrokenSource;

fn unavailable<T>() -> AvailabilityResult<T> {
    Err(AvailabilityError::from(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl ShowSource for BrokenSource {
    async fn find_show(&self, _show_id: i32) -> AvailabilityResult<Option<Show>> {
        unavailable()
    }

    async fn find_screen(&self, _screen_id: i32) -> AvailabilityResult<Option<Screen>> {
        unavailable()
    }
}

#[async_trait]
impl SeatSource for BrokenSource {
    async fn seats_for_screen(&self, _screen_id: i32) -> AvailabilityResult<Vec<Seat>> {
        unavailable()
    }
}

#[async_trait]
impl BookedSeatSource for BrokenSource {
    async fn booked_seat_ids(&self, _show_id: i32, _ignored: &[String]) -> AvailabilityResult<Vec<i32>> {
        unavailable()
    }
}
