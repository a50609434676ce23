use crate::context::AppContext;
use hotelbook_core::HotelbookError;
use hotelbook_core::navigation::{Route, StayParams};
use hotelbook_core::search::Stay;
use hotelbook_core::validation::{ValidationError, validate_stay};

/// The search form of the home page and the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub city: String,
    /// `YYYY-MM-DD`
    pub checkin: String,
    /// `YYYY-MM-DD`
    pub checkout: String,
    pub guests: u32,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            city: String::new(),
            checkin: String::new(),
            checkout: String::new(),
            guests: 2,
        }
    }
}

impl SearchForm {
    pub fn new(
        city: impl Into<String>,
        checkin: impl Into<String>,
        checkout: impl Into<String>,
        guests: u32,
    ) -> Self {
        Self {
            city: city.into(),
            checkin: checkin.into(),
            checkout: checkout.into(),
            guests,
        }
    }

    /// Prefills the form from route parameters.
    pub fn from_params(params: &StayParams) -> Self {
        Self::new(
            params.city.clone(),
            params.checkin.clone(),
            params.checkout.clone(),
            params.guests,
        )
    }

    pub fn validate(&self) -> Result<Stay, ValidationError> {
        validate_stay(&self.city, &self.checkin, &self.checkout, self.guests)
    }

    /// Route to the results page, or `None` after notifying why not.
    pub fn submit(&self, ctx: &AppContext) -> Option<Route> {
        match self.validate() {
            Ok(stay) => {
                let route = Route::Results(StayParams::from(&stay));
                tracing::debug!(%route, "Search submitted");
                Some(route)
            }
            Err(err) => {
                ctx.report("search", &HotelbookError::from(err), "");
                None
            }
        }
    }
}
