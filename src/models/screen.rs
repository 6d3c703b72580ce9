use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Screen {
    pub screen_id: i32,
    pub screen_name: String,
    pub capacity: i32,
}
