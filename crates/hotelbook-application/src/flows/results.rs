use super::Landing;
use super::messages::SEARCH_FAILED;
use crate::context::AppContext;
use hotelbook_core::navigation::{Route, StayParams};
use hotelbook_core::search::{SearchQuery, SearchResult};
use hotelbook_core::validation::parse_date;

/// Amenities shown per card before the "+N" marker.
pub const AMENITY_PREVIEW: usize = 3;

pub struct ResultsFlow {
    ctx: AppContext,
    pub stay: StayParams,
    pub hotels: Vec<SearchResult>,
    pub error: Option<String>,
}

impl ResultsFlow {
    /// A results page without a city goes back to `/`.
    pub fn open(ctx: AppContext, stay: StayParams) -> Landing<Self> {
        if stay.city.trim().is_empty() {
            return Landing::Redirect(Route::Home);
        }
        Landing::Page(Self {
            ctx,
            stay,
            hotels: Vec::new(),
            error: None,
        })
    }

    /// Query sent to the search service; unparsable dates are left out.
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            checkin: parse_date(&self.stay.checkin).ok(),
            checkout: parse_date(&self.stay.checkout).ok(),
            guests: Some(self.stay.guests),
            ..SearchQuery::for_city(self.stay.city.trim())
        }
    }

    pub async fn load(&mut self) {
        match self.ctx.search.search_hotels(&self.query()).await {
            Ok(hotels) => {
                tracing::info!(city = %self.stay.city, count = hotels.len(), "Search results loaded");
                self.hotels = hotels;
                self.error = None;
            }
            Err(err) => {
                self.ctx.report("search", &err, SEARCH_FAILED);
                self.hotels.clear();
                self.error = Some(SEARCH_FAILED.to_string());
            }
        }
    }

    pub fn thumbnail_url(&self, hotel: &SearchResult) -> String {
        self.ctx.config.image_url(&hotel.thumbnail)
    }

    /// Opens a hotel, carrying the search parameters along.
    pub fn select(&self, hotel_id: &str) -> Route {
        Route::HotelDetail {
            id: hotel_id.to_string(),
            stay: self.stay.clone(),
        }
    }

    pub fn new_search(&self) -> Route {
        Route::Home
    }
}
