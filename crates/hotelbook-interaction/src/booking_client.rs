//! Booking and auth service client.

use crate::http::{ApiClient, not_found_as};
use async_trait::async_trait;
use chrono::NaiveDate;
use hotelbook_core::Result;
use hotelbook_core::api::BookingApi;
use hotelbook_core::booking::{Availability, Booking, NewBooking};
use hotelbook_core::user::{AuthResponse, LoginRequest, RegisterRequest, User};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct AvailabilityQuery {
    checkin: NaiveDate,
    checkout: NaiveDate,
    guests: u32,
}

/// Client for `/auth`, `/availability`, `/bookings` and `/profile`.
///
/// The bearer token comes from the session handle given to the underlying
/// [`ApiClient`]; `login` does not store anything itself.
#[derive(Clone)]
pub struct HttpBookingApi {
    api: ApiClient,
}

impl HttpBookingApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn register(&self, request: &RegisterRequest) -> Result<User> {
        let builder = self.api.request(Method::POST, "auth/register")?.json(request);
        let user: User = self.api.send(builder).await?;
        tracing::info!(email = %user.email, "User registered");
        Ok(user)
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let builder = self.api.request(Method::POST, "auth/login")?.json(request);
        let auth: AuthResponse = self.api.send(builder).await?;
        tracing::info!(email = %auth.user.email, role = %auth.user.role, "Logged in");
        Ok(auth)
    }

    async fn check_availability(
        &self,
        hotel_id: &str,
        checkin: NaiveDate,
        checkout: NaiveDate,
        guests: u32,
    ) -> Result<Availability> {
        let builder = self
            .api
            .request(Method::GET, &format!("availability/{hotel_id}"))?
            .query(&AvailabilityQuery {
                checkin,
                checkout,
                guests,
            });
        self.api
            .send(builder)
            .await
            .map_err(not_found_as("hotel", hotel_id))
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        let builder = self.api.request(Method::POST, "bookings")?.json(booking);
        let created: Booking = self.api.send(builder).await?;
        tracing::info!(
            id = created.id,
            reference = %created.booking_reference,
            hotel_id = %booking.hotel_id,
            "Booking created"
        );
        Ok(created)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let builder = self.api.request(Method::GET, "bookings")?;
        self.api.send_or_default(builder).await
    }

    async fn profile(&self) -> Result<User> {
        let builder = self.api.request(Method::GET, "profile")?;
        self.api.send(builder).await
    }
}
