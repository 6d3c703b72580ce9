use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Счетчики мест одной категории.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatStats {
    pub total: u32,
    pub booked: u32,
    pub available: u32,
}

impl SeatStats {
    pub fn new(total: u32, booked: u32) -> Self {
        Self {
            total,
            booked,
            available: total.saturating_sub(booked),
        }
    }
}

/// Отчет о доступности мест на сеанс.
///
/// Ключи `seat_breakdown` отсортированы по названию категории, поэтому
/// одинаковые данные всегда дают одинаковый JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub show_id: i32,
    pub show_name: String,
    pub screen_name: String,
    pub total_seats: u32,
    pub booked_seats: u32,
    pub available_seats: u32,
    pub seat_breakdown: BTreeMap<String, SeatStats>,
}
