//! Источники данных для расчета доступности.
//!
//! Агрегатор только читает: сеансы, места зала и занятые места сеанса.
//! Каждый источник отвечает на один целевой запрос, без выборки всей таблицы.

use async_trait::async_trait;

use crate::error::AvailabilityResult;
use crate::models::{Screen, Seat, Show};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;

#[async_trait]
pub trait ShowSource: Send + Sync {
    async fn find_show(&self, show_id: i32) -> AvailabilityResult<Option<Show>>;

    async fn find_screen(&self, screen_id: i32) -> AvailabilityResult<Option<Screen>>;
}

#[async_trait]
pub trait SeatSource: Send + Sync {
    /// Все места зала, упорядоченные по id.
    async fn seats_for_screen(&self, screen_id: i32) -> AvailabilityResult<Vec<Seat>>;
}

#[async_trait]
pub trait BookedSeatSource: Send + Sync {
    /// Id мест, привязанных к бронированиям сеанса.
    ///
    /// Бронирования со статусом из `ignored_statuses` пропускаются. Пустой список
    /// означает, что учитываются все бронирования, включая отмененные.
    /// Результат может содержать повторы.
    async fn booked_seat_ids(
        &self,
        show_id: i32,
        ignored_statuses: &[String],
    ) -> AvailabilityResult<Vec<i32>>;
}
