//! Booking domain models.

use super::status::BookingStatus;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOM_TYPE: &str = "Standard";
pub const DEFAULT_SPECIAL_REQUESTS: &str = "Reserva desde frontend";

/// A booking as returned by the booking service.
///
/// The create endpoint may answer with only the id and reference, so every
/// other field is optional or defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default, alias = "hotel_id")]
    pub internal_hotel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub check_in_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub check_out_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub currency: String,
    /// Free text; use [`Booking::status`] for the typed view
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub booking_reference: String,
    #[serde(default)]
    pub special_requests: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub fn status(&self) -> BookingStatus {
        BookingStatus::parse(&self.status)
    }

    /// Hotel name when the service joined it in, otherwise the hotel id.
    pub fn hotel_label(&self) -> &str {
        self.hotel_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.internal_hotel_id)
    }
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub hotel_id: String,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub guests: u32,
    pub room_type: String,
    pub special_requests: String,
}

impl NewBooking {
    /// Builds the request for a stay; dates are sent as UTC midnight.
    pub fn for_stay(
        hotel_id: impl Into<String>,
        checkin: NaiveDate,
        checkout: NaiveDate,
        guests: u32,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            check_in_date: utc_midnight(checkin),
            check_out_date: utc_midnight(checkout),
            guests,
            room_type: DEFAULT_ROOM_TYPE.to_string(),
            special_requests: DEFAULT_SPECIAL_REQUESTS.to_string(),
        }
    }
}

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Answer of `GET /availability/:hotelId`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Availability {
    #[serde(default)]
    pub hotel_id: String,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub rooms_available: Option<u32>,
    #[serde(default)]
    pub check_in_date: String,
    #[serde(default)]
    pub check_out_date: String,
    #[serde(default)]
    pub guests: u32,
}
