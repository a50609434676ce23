//! Typed session accessors.

use super::model::Session;
use super::store::SessionStore;
use crate::error::Result;
use crate::user::AuthResponse;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;

/// Lifetime of a token issued by the booking service (7 days).
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24 * 7;

/// Shared handle over the session store.
///
/// This is the only way flows and API clients touch the session: they get a
/// typed [`Session`] back and never read raw keys. Expired sessions are
/// cleared on read and reported as absent.
#[derive(Clone)]
pub struct SessionHandle {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
}

impl SessionHandle {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_ttl(store, Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    pub fn with_ttl(store: Arc<dyn SessionStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    pub fn current(&self) -> Result<Option<Session>> {
        self.current_at(Utc::now())
    }

    pub fn current_at(&self, now: DateTime<Utc>) -> Result<Option<Session>> {
        let mut lookup_error = None;
        let session = Session::from_lookup(|key| match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                lookup_error.get_or_insert(err);
                None
            }
        });
        if let Some(err) = lookup_error {
            return Err(err);
        }

        match session {
            Some(session) if session.is_expired(now, self.ttl) => {
                tracing::info!(email = %session.email, "Stored session expired, clearing it");
                self.store.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Persists the session for a successful login.
    pub fn begin(&self, auth: &AuthResponse) -> Result<Session> {
        self.begin_at(auth, Utc::now())
    }

    pub fn begin_at(&self, auth: &AuthResponse, now: DateTime<Utc>) -> Result<Session> {
        let session = Session::from_auth(auth, now);
        self.store.clear()?;
        self.store.set_many(&session.to_entries())?;
        tracing::debug!(email = %session.email, role = %session.role, "Session started");
        Ok(session)
    }

    /// Logout: wipes every stored key unconditionally.
    pub fn end(&self) -> Result<()> {
        self.store.clear()?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    pub fn bearer_token(&self) -> Result<Option<String>> {
        Ok(self.current()?.map(|session| session.token))
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.current()?.is_some())
    }

    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.current()?.is_some_and(|session| session.is_admin()))
    }
}
