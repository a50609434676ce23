use super::Landing;
use super::auth;
use super::messages::DEFAULT_GREETING_NAME;
use super::search_form::SearchForm;
use crate::context::AppContext;
use hotelbook_core::booking::Booking;
use hotelbook_core::navigation::{Route, guard};
use hotelbook_core::session::Session;

/// Home page of a logged-in user: greeting, search form and bookings.
pub struct DashboardFlow {
    ctx: AppContext,
    pub session: Session,
    pub search: SearchForm,
    pub bookings: Vec<Booking>,
}

impl DashboardFlow {
    pub fn open(ctx: AppContext) -> Landing<Self> {
        let session = ctx.current_session();
        match (guard(Route::Dashboard, session.as_ref()), session) {
            (Route::Dashboard, Some(session)) => Landing::Page(Self {
                ctx,
                session,
                search: SearchForm::default(),
                bookings: Vec::new(),
            }),
            (route, _) => Landing::Redirect(route),
        }
    }

    pub fn greeting_name(&self) -> &str {
        let name = self.session.name.trim();
        if name.is_empty() {
            DEFAULT_GREETING_NAME
        } else {
            name
        }
    }

    /// Loads "my bookings". Failures leave the list empty without a notice.
    pub async fn load_bookings(&mut self) {
        match self.ctx.booking.list_bookings().await {
            Ok(bookings) => {
                tracing::debug!(count = bookings.len(), "Bookings loaded");
                self.bookings = bookings;
            }
            Err(err) => {
                tracing::error!(error = %err, "Error loading bookings");
                self.bookings.clear();
            }
        }
    }

    pub fn submit_search(&self) -> Option<Route> {
        self.search.submit(&self.ctx)
    }

    pub fn logout(self) -> Route {
        auth::logout(&self.ctx)
    }
}
