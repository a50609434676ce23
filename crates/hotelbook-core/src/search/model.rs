//! Search domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated stay: destination, date range and party size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub city: String,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub guests: u32,
}

impl Stay {
    pub fn nights(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery {
            city: self.city.clone(),
            checkin: Some(self.checkin),
            checkout: Some(self.checkout),
            guests: Some(self.guests),
            ..SearchQuery::default()
        }
    }
}

/// Query string for `GET /search/hotels`.
///
/// Absent filters are left out of the query entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
}

impl SearchQuery {
    pub fn for_city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }
}

/// Projection of a hotel returned by the search service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default)]
    pub max_price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub available: bool,
}

impl SearchResult {
    /// First `limit` amenities plus how many were left out.
    pub fn amenity_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = self.amenities.len().min(limit);
        (&self.amenities[..shown], self.amenities.len() - shown)
    }
}

/// The `data` field of a search response.
///
/// The basic search service returns a bare list; the Solr-backed one wraps it
/// as `{ "hotels": [...] }`. A search without matches may answer `null` for
/// the list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    Wrapped {
        #[serde(default)]
        hotels: Option<Vec<SearchResult>>,
    },
    Flat(Vec<SearchResult>),
}

impl SearchPayload {
    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchPayload::Wrapped { hotels } => hotels.unwrap_or_default(),
            SearchPayload::Flat(hotels) => hotels,
        }
    }
}
