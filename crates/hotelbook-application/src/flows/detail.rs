//! Hotel detail, availability and booking.

use super::auth::AuthFlow;
use super::messages::{BOOKING_FAILED, DETAIL_FAILED, LOGIN_OK};
use crate::context::AppContext;
use hotelbook_core::HotelbookError;
use hotelbook_core::booking::{Availability, NewBooking};
use hotelbook_core::hotel::Hotel;
use hotelbook_core::navigation::{Route, StayParams};
use hotelbook_core::notification::Notice;
use hotelbook_core::validation::{parse_date, validate_booking_dates};

pub struct DetailFlow {
    ctx: AppContext,
    pub hotel_id: String,
    pub stay: StayParams,
    pub hotel: Option<Hotel>,
    pub availability: Option<Availability>,
    pub error: Option<String>,
    /// Inline login/registration form, open after booking without a session
    pub auth: Option<AuthFlow>,
}

impl DetailFlow {
    pub fn new(ctx: AppContext, hotel_id: impl Into<String>, stay: StayParams) -> Self {
        Self {
            ctx,
            hotel_id: hotel_id.into(),
            stay,
            hotel: None,
            availability: None,
            error: None,
            auth: None,
        }
    }

    /// Fetches the hotel and, when both dates are known, its availability.
    ///
    /// The two requests run concurrently. An availability failure is only
    /// logged: the page still renders and booking stays enabled.
    pub async fn load(&mut self) {
        let dates = parse_date(&self.stay.checkin)
            .ok()
            .zip(parse_date(&self.stay.checkout).ok());

        let hotel_fut = self.ctx.catalog.get_hotel(&self.hotel_id);
        let (hotel, availability) = match dates {
            Some((checkin, checkout)) => {
                let availability_fut = self.ctx.booking.check_availability(
                    &self.hotel_id,
                    checkin,
                    checkout,
                    self.stay.guests,
                );
                let (hotel, availability) = tokio::join!(hotel_fut, availability_fut);
                (hotel, Some(availability))
            }
            None => (hotel_fut.await, None),
        };

        match hotel {
            Ok(hotel) => {
                self.hotel = Some(hotel);
                self.error = None;
            }
            Err(err) => {
                self.ctx.report("hotel detail", &err, DETAIL_FAILED);
                self.error = Some(DETAIL_FAILED.to_string());
            }
        }

        match availability {
            Some(Ok(availability)) => self.availability = Some(availability),
            Some(Err(err)) => {
                tracing::warn!(hotel_id = %self.hotel_id, error = %err, "Availability check failed");
                self.availability = None;
            }
            None => {}
        }
    }

    /// Booking never depends on the availability answer.
    pub fn can_book(&self) -> bool {
        self.hotel.is_some()
    }

    /// Books the stay for the logged-in user.
    ///
    /// Without a session the inline auth form is opened instead and nothing
    /// is sent. The flow is borrowed mutably until the request settles, so a
    /// second submission cannot overlap the first.
    pub async fn book(&mut self) -> Option<Route> {
        if self.ctx.current_session().is_none() {
            tracing::debug!("Booking requires login, opening auth form");
            if self.auth.is_none() {
                self.auth = Some(AuthFlow::new(self.ctx.clone()));
            }
            return None;
        }

        let (checkin, checkout) =
            match validate_booking_dates(&self.stay.checkin, &self.stay.checkout) {
                Ok(dates) => dates,
                Err(err) => {
                    self.ctx
                        .report("booking", &HotelbookError::from(err), BOOKING_FAILED);
                    return None;
                }
            };

        let request = NewBooking::for_stay(&self.hotel_id, checkin, checkout, self.stay.guests);
        match self.ctx.booking.create_booking(&request).await {
            Ok(booking) => Some(Route::confirmation(booking.id, booking.booking_reference)),
            Err(err) => {
                self.ctx.report("booking", &err, BOOKING_FAILED);
                None
            }
        }
    }

    /// Submits the inline login form; the user stays on this page.
    pub async fn inline_login(&mut self) -> bool {
        let Some(auth) = self.auth.as_mut() else {
            return false;
        };
        if auth.authenticate().await.is_some() {
            self.auth = None;
            self.ctx.notify(Notice::success(LOGIN_OK));
            true
        } else {
            false
        }
    }

    /// Submits the inline registration form; the form switches to login.
    pub async fn inline_register(&mut self) -> bool {
        match self.auth.as_mut() {
            Some(auth) => auth.register().await,
            None => false,
        }
    }

    pub fn close_auth(&mut self) {
        self.auth = None;
    }

    /// Back to the results when a search is known, otherwise home.
    pub fn back(&self) -> Route {
        if self.stay.city.trim().is_empty() {
            Route::Home
        } else {
            Route::Results(self.stay.clone())
        }
    }

    /// Thumbnail first, then the gallery, resolved for display.
    pub fn image_urls(&self) -> Vec<String> {
        let Some(hotel) = &self.hotel else {
            return Vec::new();
        };
        std::iter::once(&hotel.thumbnail)
            .chain(hotel.photos.iter())
            .filter(|reference| !reference.trim().is_empty())
            .map(|reference| self.ctx.config.image_url(reference))
            .collect()
    }
}
