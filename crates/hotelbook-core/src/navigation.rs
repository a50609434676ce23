//! Routes between page flows.
//!
//! Navigation state travels as URL query parameters carried as plain strings,
//! exactly like the browser client: `city`, `checkin`, `checkout`, `guests`,
//! `booking_id` and `reference`. Routes render to paths and parse back from
//! them, so a route can be printed, stored or typed in by a user.

use crate::error::{HotelbookError, Result};
use crate::search::Stay;
use crate::session::Session;
use crate::user::Role;
use crate::validation::DATE_FORMAT;
use std::fmt;
use url::form_urlencoded;

const DEFAULT_GUESTS: u32 = 2;

/// Search parameters propagated between Results, Detail and back.
///
/// Values are kept unvalidated; pages re-validate when they need typed data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StayParams {
    pub city: String,
    pub checkin: String,
    pub checkout: String,
    pub guests: u32,
}

impl Default for StayParams {
    fn default() -> Self {
        Self {
            city: String::new(),
            checkin: String::new(),
            checkout: String::new(),
            guests: DEFAULT_GUESTS,
        }
    }
}

impl StayParams {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.checkin.is_empty() && self.checkout.is_empty()
    }

    pub fn has_dates(&self) -> bool {
        !self.checkin.is_empty() && !self.checkout.is_empty()
    }

    fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("city", &self.city)
            .append_pair("checkin", &self.checkin)
            .append_pair("checkout", &self.checkout)
            .append_pair("guests", &self.guests.to_string())
            .finish()
    }

    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let value = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
                .unwrap_or_default()
        };
        Self {
            city: value("city"),
            checkin: value("checkin"),
            checkout: value("checkout"),
            guests: value("guests").parse().unwrap_or(DEFAULT_GUESTS),
        }
    }
}

impl From<&Stay> for StayParams {
    fn from(stay: &Stay) -> Self {
        Self {
            city: stay.city.clone(),
            checkin: stay.checkin.format(DATE_FORMAT).to_string(),
            checkout: stay.checkout.format(DATE_FORMAT).to_string(),
            guests: stay.guests,
        }
    }
}

/// A page of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`: search and auth entry
    Home,
    /// `/results?city&checkin&checkout&guests`
    Results(StayParams),
    /// `/hotel/<id>?city&checkin&checkout&guests`
    HotelDetail { id: String, stay: StayParams },
    /// `/confirmation?booking_id&reference`
    Confirmation {
        booking_id: Option<String>,
        reference: Option<String>,
    },
    /// `/dashboard`: requires a session
    Dashboard,
    /// `/admin`: requires an admin session
    Admin,
}

impl Route {
    /// Landing page right after login.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Route::Admin,
            Role::User => Route::Dashboard,
        }
    }

    pub fn confirmation(booking_id: impl ToString, reference: impl Into<String>) -> Self {
        Route::Confirmation {
            booking_id: Some(booking_id.to_string()),
            reference: Some(reference.into()),
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Admin)
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin)
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Results(stay) if stay.is_empty() => "/results".to_string(),
            Route::Results(stay) => format!("/results?{}", stay.to_query()),
            Route::HotelDetail { id, stay } => {
                let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
                format!("/hotel/{id}?{}", stay.to_query())
            }
            Route::Confirmation {
                booking_id,
                reference,
            } => {
                let mut query = form_urlencoded::Serializer::new(String::new());
                if let Some(booking_id) = booking_id {
                    query.append_pair("booking_id", booking_id);
                }
                if let Some(reference) = reference {
                    query.append_pair("reference", reference);
                }
                let query = query.finish();
                if query.is_empty() {
                    "/confirmation".to_string()
                } else {
                    format!("/confirmation?{query}")
                }
            }
            Route::Dashboard => "/dashboard".to_string(),
            Route::Admin => "/admin".to_string(),
        }
    }

    /// Parses a client path such as `/hotel/abc?city=Mendoza`.
    pub fn parse(path: &str) -> Result<Self> {
        let (raw_path, query) = path.split_once('?').unwrap_or((path, ""));
        let pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        let lookup = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone())
        };

        let segments: Vec<&str> = raw_path
            .trim_end_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["results"] => Ok(Route::Results(StayParams::from_pairs(&pairs))),
            ["hotel", id] => {
                let id: String = form_urlencoded::parse(format!("id={id}").as_bytes())
                    .next()
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default();
                Ok(Route::HotelDetail {
                    id,
                    stay: StayParams::from_pairs(&pairs),
                })
            }
            ["confirmation"] => Ok(Route::Confirmation {
                booking_id: lookup("booking_id"),
                reference: lookup("reference"),
            }),
            ["dashboard"] => Ok(Route::Dashboard),
            ["admin"] => Ok(Route::Admin),
            _ => Err(HotelbookError::not_found("route", path)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Resolves where a navigation attempt actually lands.
///
/// Protected pages without a session go back to `/`; the admin page with a
/// non-admin session goes to `/dashboard`.
pub fn guard(route: Route, session: Option<&Session>) -> Route {
    match session {
        None if route.requires_session() => Route::Home,
        Some(session) if route.requires_admin() && !session.is_admin() => Route::Dashboard,
        _ => route,
    }
}
