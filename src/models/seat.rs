use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Seat {
    pub seat_id: i32,
    pub screen_id: i32,
    pub seat_number: String,
    // REGULAR, VIP, ... (сырое значение, без нормализации)
    pub seat_type: String,
}
