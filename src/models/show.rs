use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Show {
    pub show_id: i32,
    pub movie_name: String,
    pub screen_id: i32,
    pub show_date_time: NaiveDateTime,
}
