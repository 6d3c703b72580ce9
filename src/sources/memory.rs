//! Хранилище в памяти: используется в тестах и бенчмарках вместо PostgreSQL.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;

use crate::error::AvailabilityResult;
use crate::models::{BookedSeat, Booking, Screen, Seat, Show};
use crate::sources::{BookedSeatSource, SeatSource, ShowSource};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    shows: HashMap<i32, Show>,
    screens: HashMap<i32, Screen>,
    seats: Vec<Seat>,
    bookings: HashMap<i32, Booking>,
    booked_seats: Vec<BookedSeat>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, screen_id: i32, screen_name: &str, capacity: i32) -> Self {
        self.screens.insert(screen_id, Screen {
            screen_id,
            screen_name: screen_name.to_string(),
            capacity,
        });
        self
    }

    pub fn with_show(mut self, show_id: i32, movie_name: &str, screen_id: i32) -> Self {
        self.shows.insert(show_id, Show {
            show_id,
            movie_name: movie_name.to_string(),
            screen_id,
            show_date_time: NaiveDateTime::default(),
        });
        self
    }

    pub fn with_seat(mut self, seat_id: i32, screen_id: i32, seat_type: &str) -> Self {
        self.seats.push(Seat {
            seat_id,
            screen_id,
            seat_number: format!("S{}", seat_id),
            seat_type: seat_type.to_string(),
        });
        self
    }

    /// Добавляет бронирование сеанса вместе с его местами.
    pub fn with_booking(mut self, booking_id: i32, show_id: i32, status: &str, seat_ids: &[i32]) -> Self {
        self.bookings.insert(booking_id, Booking {
            booking_id,
            user_id: 1,
            show_id,
            booking_status: status.to_string(),
            created_at: NaiveDateTime::default(),
        });
        for &seat_id in seat_ids {
            let id = self.booked_seats.len() as i32 + 1;
            self.booked_seats.push(BookedSeat { id, booking_id, seat_id });
        }
        self
    }
}

#[async_trait]
impl ShowSource for InMemoryStore {
    async fn find_show(&self, show_id: i32) -> AvailabilityResult<Option<Show>> {
        Ok(self.shows.get(&show_id).cloned())
    }

    async fn find_screen(&self, screen_id: i32) -> AvailabilityResult<Option<Screen>> {
        Ok(self.screens.get(&screen_id).cloned())
    }
}

#[async_trait]
impl SeatSource for InMemoryStore {
    async fn seats_for_screen(&self, screen_id: i32) -> AvailabilityResult<Vec<Seat>> {
        let mut seats: Vec<Seat> = self
            .seats
            .iter()
            .filter(|s| s.screen_id == screen_id)
            .cloned()
            .collect();
        seats.sort_by_key(|s| s.seat_id);
        Ok(seats)
    }
}

#[async_trait]
impl BookedSeatSource for InMemoryStore {
    async fn booked_seat_ids(
        &self,
        show_id: i32,
        ignored_statuses: &[String],
    ) -> AvailabilityResult<Vec<i32>> {
        let ids = self
            .booked_seats
            .iter()
            .filter(|bs| {
                self.bookings.get(&bs.booking_id).is_some_and(|b| {
                    b.show_id == show_id && !ignored_statuses.contains(&b.booking_status)
                })
            })
            .map(|bs| bs.seat_id)
            .collect();
        Ok(ids)
    }
}
