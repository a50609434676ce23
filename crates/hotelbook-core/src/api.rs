//! Backend service traits.
//!
//! Page flows depend on these traits only; the HTTP implementations live in
//! `hotelbook-interaction`. Authenticated calls pick the bearer token up from
//! the session on their own, so no method takes a token argument.

use crate::booking::{Availability, Booking, NewBooking};
use crate::error::Result;
use crate::hotel::{Hotel, HotelDraft, HotelStats, HotelUpdate, UploadedImage, UploadedImages};
use crate::search::{SearchQuery, SearchResult};
use crate::user::{AuthResponse, LoginRequest, RegisterRequest, User};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Hotel catalog service (`/hotels`, uploads, `/stats`).
#[async_trait]
pub trait HotelCatalogApi: Send + Sync {
    async fn get_hotel(&self, id: &str) -> Result<Hotel>;

    async fn list_hotels(&self) -> Result<Vec<Hotel>>;

    /// Admin only.
    async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel>;

    /// Admin only.
    async fn update_hotel(&self, id: &str, update: &HotelUpdate) -> Result<Hotel>;

    /// Admin only. Callers confirm with the user before calling.
    async fn delete_hotel(&self, id: &str) -> Result<()>;

    /// Uploads one image as multipart field `image`.
    async fn upload_single(&self, file: &Path) -> Result<UploadedImage>;

    /// Uploads several images as repeated multipart field `images`.
    async fn upload_images(&self, files: &[PathBuf]) -> Result<UploadedImages>;

    async fn stats(&self) -> Result<HotelStats>;
}

/// Search service.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Accepts both the bare-list and the `{hotels: [...]}` payload shapes.
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<SearchResult>>;
}

/// Booking and auth service.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> Result<User>;

    /// Does not touch the session; the auth flow persists the answer.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    async fn check_availability(
        &self,
        hotel_id: &str,
        checkin: NaiveDate,
        checkout: NaiveDate,
        guests: u32,
    ) -> Result<Availability>;

    /// Not idempotent: every call creates a booking.
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking>;

    /// Bookings of the logged-in user.
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    async fn profile(&self) -> Result<User>;
}
