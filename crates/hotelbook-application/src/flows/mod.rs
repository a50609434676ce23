//! Page flows.
//!
//! # Module Structure
//!
//! - `search_form`: Home search form, also embedded in the dashboard
//! - `auth`: Login/registration form, standalone or inline on the detail page
//! - `results`: Search results
//! - `detail`: Hotel detail, availability and booking
//! - `confirmation`: Booking confirmation
//! - `dashboard`: Logged-in user home
//! - `admin`: Hotel catalog administration
//! - `messages`: User-facing texts

pub mod admin;
pub mod auth;
pub mod confirmation;
pub mod dashboard;
pub mod detail;
pub mod messages;
pub mod results;
pub mod search_form;

pub use admin::AdminFlow;
pub use auth::{AuthFlow, AuthMode};
pub use confirmation::ConfirmationView;
pub use dashboard::DashboardFlow;
pub use detail::DetailFlow;
pub use results::ResultsFlow;
pub use search_form::SearchForm;

use hotelbook_core::navigation::Route;

/// Outcome of opening a page: the page itself, or where the user was sent
/// instead.
#[derive(Debug)]
pub enum Landing<P> {
    Page(P),
    Redirect(Route),
}

impl<P> Landing<P> {
    pub fn page(self) -> Option<P> {
        match self {
            Landing::Page(page) => Some(page),
            Landing::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<&Route> {
        match self {
            Landing::Page(_) => None,
            Landing::Redirect(route) => Some(route),
        }
    }
}
