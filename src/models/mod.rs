pub mod show;
pub mod screen;
pub mod seat;
pub mod booking;
pub mod availability;

pub use show::Show;
pub use screen::Screen;
pub use seat::Seat;
pub use booking::{Booking, BookedSeat};
pub use availability::{AvailabilityReport, SeatStats};
