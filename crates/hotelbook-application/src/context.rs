//! Shared dependencies of every flow.

use hotelbook_core::HotelbookError;
use hotelbook_core::api::{BookingApi, HotelCatalogApi, SearchApi};
use hotelbook_core::config::ClientConfig;
use hotelbook_core::notification::{Notice, Notifier};
use hotelbook_core::session::{Session, SessionHandle};
use hotelbook_interaction::{ApiClient, HttpBookingApi, HttpHotelCatalog, HttpSearchApi};
use std::sync::Arc;

/// Service clients, session and notice sink handed to each flow.
///
/// Cloning is cheap; all members are shared.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn HotelCatalogApi>,
    pub search: Arc<dyn SearchApi>,
    pub booking: Arc<dyn BookingApi>,
    pub session: SessionHandle,
    pub notifier: Arc<dyn Notifier>,
    pub config: ClientConfig,
}

impl AppContext {
    pub fn new(
        catalog: Arc<dyn HotelCatalogApi>,
        search: Arc<dyn SearchApi>,
        booking: Arc<dyn BookingApi>,
        session: SessionHandle,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            catalog,
            search,
            booking,
            session,
            notifier,
            config: ClientConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Wires the HTTP clients for the endpoints in `config`.
    pub fn http(config: ClientConfig, session: SessionHandle, notifier: Arc<dyn Notifier>) -> Self {
        let client = |base: &str| ApiClient::new(base).with_session(session.clone());
        Self {
            catalog: Arc::new(HttpHotelCatalog::new(client(&config.endpoints.hotel))),
            search: Arc::new(HttpSearchApi::new(client(&config.endpoints.search))),
            booking: Arc::new(HttpBookingApi::new(client(&config.endpoints.booking))),
            session,
            notifier,
            config,
        }
    }

    /// The live session; a store read failure counts as logged out.
    pub fn current_session(&self) -> Option<Session> {
        self.session.current().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Could not read session store");
            None
        })
    }

    pub fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    /// Logs `err` and emits the one notice for a failed action.
    pub fn report(&self, action: &str, err: &HotelbookError, fallback: &str) {
        if err.is_validation() {
            tracing::debug!(action, error = %err, "Input rejected");
        } else {
            tracing::error!(action, error = %err, "Action failed");
        }
        self.notify(Notice::from_error(err, fallback));
    }
}
