use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: i32,
    pub user_id: i32,
    pub show_id: i32,
    pub booking_status: String, // CONFIRMED, CANCELLED, ...
    pub created_at: NaiveDateTime,
}

// Связь бронирования с конкретным местом (таблица booking_seat)
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct BookedSeat {
    pub id: i32,
    pub booking_id: i32,
    pub seat_id: i32,
}
