//! availability.rs
//!
//! Расчет доступности мест на сеанс.
//!
//! Порядок работы:
//! 1. Находим сеанс и его зал.
//! 2. Параллельно загружаем места зала и занятые места сеанса.
//! 3. Считаем общие счетчики и разбивку по категориям мест.
//!
//! Сервис ничего не пишет и не хранит состояние между вызовами.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{info, warn};

use crate::error::{AvailabilityError, AvailabilityResult};
use crate::models::{AvailabilityReport, Screen, Seat, SeatStats, Show};
use crate::sources::{BookedSeatSource, SeatSource, ShowSource};

#[derive(Clone)]
pub struct AvailabilityService {
    shows: Arc<dyn ShowSource>,
    seats: Arc<dyn SeatSource>,
    booked_seats: Arc<dyn BookedSeatSource>,
    ignored_statuses: Arc<[String]>,
}

impl AvailabilityService {
    pub fn new(
        shows: Arc<dyn ShowSource>,
        seats: Arc<dyn SeatSource>,
        booked_seats: Arc<dyn BookedSeatSource>,
    ) -> Self {
        Self {
            shows,
            seats,
            booked_seats,
            ignored_statuses: Arc::from(Vec::new()),
        }
    }

    /// Статусы бронирований, места которых считаются свободными (например `CANCELLED`).
    pub fn with_ignored_statuses(mut self, statuses: Vec<String>) -> Self {
        self.ignored_statuses = Arc::from(statuses);
        self
    }

    pub async fn get_availability(&self, show_id: i32) -> AvailabilityResult<AvailabilityReport> {
        let show = self
            .shows
            .find_show(show_id)
            .await?
            .ok_or_else(|| {
                warn!("Show {} not found", show_id);
                AvailabilityError::show_not_found(show_id)
            })?;

        let (screen, seats, booked_ids) = futures::try_join!(
            self.resolve_screen(show.screen_id),
            self.seats.seats_for_screen(show.screen_id),
            self.booked_seats.booked_seat_ids(show_id, &self.ignored_statuses),
        )?;

        let report = build_report(&show, &screen, &seats, booked_ids);

        info!(
            "Availability for show {}: {} seats, {} booked, {} available",
            report.show_id, report.total_seats, report.booked_seats, report.available_seats
        );

        Ok(report)
    }

    /// Счетчики одной категории мест сеанса.
    pub async fn get_category_availability(
        &self,
        show_id: i32,
        category: &str,
    ) -> AvailabilityResult<SeatStats> {
        let report = self.get_availability(show_id).await?;
        report
            .seat_breakdown
            .get(category)
            .copied()
            .ok_or_else(|| AvailabilityError::category_not_found(category))
    }

    async fn resolve_screen(&self, screen_id: i32) -> AvailabilityResult<Screen> {
        self.shows
            .find_screen(screen_id)
            .await?
            .ok_or_else(|| {
                warn!("Screen {} referenced by a show does not exist", screen_id);
                AvailabilityError::screen_not_found(screen_id)
            })
    }
}

/// Собирает отчет из мест зала и id занятых мест.
///
/// Повторяющиеся id занятых мест считаются один раз, id мест чужого зала
/// игнорируются, поэтому `booked <= total` и для зала, и для каждой категории.
/// Категории группируются по точному совпадению строки.
pub fn build_report<I>(show: &Show, screen: &Screen, seats: &[Seat], booked_ids: I) -> AvailabilityReport
where
    I: IntoIterator<Item = i32>,
{
    let booked: HashSet<i32> = booked_ids.into_iter().collect();

    let mut breakdown: BTreeMap<String, SeatStats> = BTreeMap::new();
    for seat in seats {
        let stats = breakdown.entry(seat.seat_type.clone()).or_default();
        stats.total += 1;
        if booked.contains(&seat.seat_id) {
            stats.booked += 1;
        }
    }
    for stats in breakdown.values_mut() {
        *stats = SeatStats::new(stats.total, stats.booked);
    }

    let total_seats = breakdown.values().map(|s| s.total).sum::<u32>();
    let booked_seats = breakdown.values().map(|s| s.booked).sum::<u32>();

    AvailabilityReport {
        show_id: show.show_id,
        show_name: show.movie_name.clone(),
        screen_name: screen.screen_name.clone(),
        total_seats,
        booked_seats,
        available_seats: total_seats - booked_seats,
        seat_breakdown: breakdown,
    }
}
