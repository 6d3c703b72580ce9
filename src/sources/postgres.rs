use async_trait::async_trait;
use tracing::error;

use crate::database::Database;
use crate::error::AvailabilityResult;
use crate::models::{Screen, Seat, Show};
use crate::sources::{BookedSeatSource, SeatSource, ShowSource};

fn log_sql_error(op: &str, id: i32, e: &sqlx::Error) {
    error!("{}: sql ошибка для id {}: {:?}", op, id, e);
}

#[async_trait]
impl ShowSource for Database {
    async fn find_show(&self, show_id: i32) -> AvailabilityResult<Option<Show>> {
        let show = sqlx::query_as::<_, Show>(
            "SELECT show_id, movie_name, screen_id, show_date_time
             FROM shows
             WHERE show_id = $1"
        )
        .bind(show_id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| log_sql_error("find_show", show_id, e))?;

        Ok(show)
    }

    async fn find_screen(&self, screen_id: i32) -> AvailabilityResult<Option<Screen>> {
        let screen = sqlx::query_as::<_, Screen>(
            "SELECT screen_id, screen_name, capacity
             FROM screen
             WHERE screen_id = $1"
        )
        .bind(screen_id)
        .fetch_optional(&self.pool)
        .await
        .inspect_err(|e| log_sql_error("find_screen", screen_id, e))?;

        Ok(screen)
    }
}

#[async_trait]
impl SeatSource for Database {
    async fn seats_for_screen(&self, screen_id: i32) -> AvailabilityResult<Vec<Seat>> {
        let seats = sqlx::query_as::<_, Seat>(
            "SELECT seat_id, screen_id, seat_number, seat_type
             FROM seat
             WHERE screen_id = $1
             ORDER BY seat_id"
        )
        .bind(screen_id)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| log_sql_error("seats_for_screen", screen_id, e))?;

        Ok(seats)
    }
}

#[async_trait]
impl BookedSeatSource for Database {
    async fn booked_seat_ids(
        &self,
        show_id: i32,
        ignored_statuses: &[String],
    ) -> AvailabilityResult<Vec<i32>> {
        // `<> ALL('{}')` истинно, так что пустой список статусов ничего не фильтрует
        let ids = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT DISTINCT bs.seat_id
            FROM booking_seat bs
            JOIN booking b ON b.booking_id = bs.booking_id
            WHERE b.show_id = $1
              AND b.booking_status <> ALL($2)
            "#
        )
        .bind(show_id)
        .bind(ignored_statuses)
        .fetch_all(&self.pool)
        .await
        .inspect_err(|e| log_sql_error("booked_seat_ids", show_id, e))?;

        Ok(ids)
    }
}
