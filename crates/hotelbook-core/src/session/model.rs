//! Session domain model.

use crate::user::{AuthResponse, Role};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "userRole";
pub const NAME_KEY: &str = "userName";
pub const EMAIL_KEY: &str = "userEmail";
pub const ISSUED_AT_KEY: &str = "tokenIssuedAt";

/// The user-visible keys written on login.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, ROLE_KEY, NAME_KEY, EMAIL_KEY];

/// An authenticated client session.
///
/// Role, name and email are copied from the login answer and never refreshed
/// from the server afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token
    pub token: String,
    pub role: Role,
    pub name: String,
    pub email: String,
    /// Login instant; sessions written by older clients have none
    pub issued_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn from_auth(auth: &AuthResponse, issued_at: DateTime<Utc>) -> Self {
        Self {
            token: auth.token.clone(),
            role: auth.user.role,
            name: auth.user.display_name(),
            email: auth.user.email.clone(),
            issued_at: Some(issued_at),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// A session without a login instant never expires client-side.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.issued_at.is_some_and(|issued| now - issued >= ttl)
    }

    /// Flat string entries as persisted by a [`super::SessionStore`].
    pub fn to_entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            (TOKEN_KEY, self.token.clone()),
            (ROLE_KEY, self.role.as_str().to_string()),
            (NAME_KEY, self.name.clone()),
            (EMAIL_KEY, self.email.clone()),
        ];
        if let Some(issued_at) = self.issued_at {
            entries.push((ISSUED_AT_KEY, issued_at.to_rfc3339()));
        }
        entries
    }

    /// Rebuilds a session from stored entries; `None` without a token.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Option<Self> {
        let token = lookup(TOKEN_KEY).filter(|token| !token.is_empty())?;
        Some(Self {
            token,
            role: lookup(ROLE_KEY)
                .map(|role| Role::parse(&role))
                .unwrap_or_default(),
            name: lookup(NAME_KEY).unwrap_or_default(),
            email: lookup(EMAIL_KEY).unwrap_or_default(),
            issued_at: lookup(ISSUED_AT_KEY)
                .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
                .map(|at| at.with_timezone(&Utc)),
        })
    }
}
