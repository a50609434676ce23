//! Booking domain module.
//!
//! # Module Structure
//!
//! - `model`: Booking records, the create request and availability answers
//! - `status`: Typed view of the free-text booking status

mod model;
mod status;

pub use model::{Availability, Booking, NewBooking, DEFAULT_ROOM_TYPE, DEFAULT_SPECIAL_REQUESTS};
pub use status::BookingStatus;
