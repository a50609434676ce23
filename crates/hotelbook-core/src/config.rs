use crate::error::Result;
use crate::session::DEFAULT_SESSION_TTL_HOURS;
use serde::{Deserialize, Serialize};
use url::Url;

pub const HOTEL_URL_ENV: &str = "HOTELBOOK_HOTEL_URL";
pub const SEARCH_URL_ENV: &str = "HOTELBOOK_SEARCH_URL";
pub const BOOKING_URL_ENV: &str = "HOTELBOOK_BOOKING_URL";
pub const ASSET_BASE_ENV: &str = "HOTELBOOK_ASSET_BASE";
pub const LOG_ENV: &str = "HOTELBOOK_LOG";

/// Base URLs of the three backend services.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoints {
    pub hotel: String,
    pub search: String,
    pub booking: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            hotel: "http://localhost:8001/api/v1".to_string(),
            search: "http://localhost:8002/api/v1".to_string(),
            booking: "http://localhost:8003/api/v1".to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    #[serde(default)]
    pub endpoints: ServiceEndpoints,
    /// Host that relative upload URLs are resolved against
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    #[serde(default = "default_session_ttl_hours")]
    pub session_ttl_hours: i64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_asset_base() -> String {
    "http://localhost:8001".to_string()
}

fn default_session_ttl_hours() -> i64 {
    DEFAULT_SESSION_TTL_HOURS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoints: ServiceEndpoints::default(),
            asset_base: default_asset_base(),
            session_ttl_hours: default_session_ttl_hours(),
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    /// Applies overrides from `lookup` (normally the process environment).
    ///
    /// Returns the names of the variables that were applied. Empty values are
    /// ignored.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<&'static str> {
        let mut applied = Vec::new();
        let targets: [(&'static str, &mut String); 5] = [
            (HOTEL_URL_ENV, &mut self.endpoints.hotel),
            (SEARCH_URL_ENV, &mut self.endpoints.search),
            (BOOKING_URL_ENV, &mut self.endpoints.booking),
            (ASSET_BASE_ENV, &mut self.asset_base),
            (LOG_ENV, &mut self.log_level),
        ];
        for (name, target) in targets {
            if let Some(value) = lookup(name).filter(|value| !value.trim().is_empty()) {
                *target = value.trim().to_string();
                applied.push(name);
            }
        }
        applied
    }

    /// Checks that every endpoint is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        for raw in [
            &self.endpoints.hotel,
            &self.endpoints.search,
            &self.endpoints.booking,
            &self.asset_base,
        ] {
            let url = Url::parse(raw)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(crate::HotelbookError::config(format!(
                    "unsupported scheme in {raw}"
                )));
            }
        }
        if self.session_ttl_hours <= 0 {
            return Err(crate::HotelbookError::config(
                "session_ttl_hours must be positive",
            ));
        }
        if chrono::Duration::try_hours(self.session_ttl_hours).is_none() {
            return Err(crate::HotelbookError::config(format!(
                "session_ttl_hours {} is out of range",
                self.session_ttl_hours
            )));
        }
        Ok(())
    }

    /// Falls back to the 7 day default when the value is out of range.
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::try_hours(self.session_ttl_hours)
            .unwrap_or_else(|| chrono::Duration::hours(DEFAULT_SESSION_TTL_HOURS))
    }

    /// Resolves an image reference for display.
    ///
    /// Absolute URLs pass through; relative ones (`/uploads/hotels/x.jpg`)
    /// are joined onto `asset_base`. Empty input stays empty.
    pub fn image_url(&self, reference: &str) -> String {
        let reference = reference.trim();
        if reference.is_empty() || Url::parse(reference).is_ok() {
            return reference.to_string();
        }
        format!(
            "{}/{}",
            self.asset_base.trim_end_matches('/'),
            reference.trim_start_matches('/')
        )
    }
}
