//! Hotel domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nightly price bounds advertised by a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    #[serde(default)]
    pub min_price: f64,
    #[serde(default)]
    pub max_price: f64,
    #[serde(default)]
    pub currency: String,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min_price: 10_000.0,
            max_price: 25_000.0,
            currency: "ARS".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// A hotel as stored by the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    /// Gallery image URLs
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    /// Amenities in display order
    #[serde(default)]
    pub amenities: Vec<String>,
    /// 0 to 5
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload for the admin hotel form.
///
/// `Default` yields the blank form: two starter amenities, rating 4 and the
/// standard ARS price band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDraft {
    pub name: String,
    pub description: String,
    pub city: String,
    pub address: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub price_range: PriceRange,
    pub contact: Contact,
    /// Main image URL
    pub thumbnail: String,
    /// Additional image URLs, sent as `images`
    #[serde(rename = "images", default)]
    pub photos: Vec<String>,
}

impl Default for HotelDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            city: String::new(),
            address: String::new(),
            amenities: default_amenities(),
            rating: 4.0,
            price_range: PriceRange::default(),
            contact: Contact::default(),
            thumbnail: String::new(),
            photos: Vec::new(),
        }
    }
}

fn default_amenities() -> Vec<String> {
    vec!["WiFi".to_string(), "Desayuno".to_string()]
}

impl HotelDraft {
    /// Drops the gallery image at `index`; out-of-range indexes are ignored.
    pub fn remove_photo(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    pub fn add_photos(&mut self, urls: impl IntoIterator<Item = String>) {
        self.photos.extend(urls);
    }
}

/// Seeds the edit form from an existing hotel.
impl From<&Hotel> for HotelDraft {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            description: hotel.description.clone(),
            city: hotel.city.clone(),
            address: hotel.address.clone(),
            amenities: if hotel.amenities.is_empty() {
                default_amenities()
            } else {
                hotel.amenities.clone()
            },
            rating: hotel.rating,
            price_range: hotel.price_range.clone(),
            contact: hotel.contact.clone(),
            thumbnail: hotel.thumbnail.clone(),
            photos: hotel.photos.clone(),
        }
    }
}

/// Partial update body; absent fields are left untouched by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "images", skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl From<HotelDraft> for HotelUpdate {
    fn from(draft: HotelDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            city: Some(draft.city),
            address: Some(draft.address),
            photos: Some(draft.photos),
            thumbnail: Some(draft.thumbnail),
            amenities: Some(draft.amenities),
            rating: Some(draft.rating),
            price_range: Some(draft.price_range),
            contact: Some(draft.contact),
            is_active: None,
        }
    }
}

/// Catalog summary shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelStats {
    #[serde(default)]
    pub total_hotels: u64,
    #[serde(default)]
    pub active_hotels: u64,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub avg_rating: f64,
    #[serde(default)]
    pub recent_activity: String,
}

/// One stored image returned by the upload endpoints.
///
/// `url` is usually relative to the catalog host (`/uploads/hotels/...`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    #[serde(default)]
    pub filename: String,
    pub url: String,
    #[serde(default)]
    pub original: String,
}

/// Response of the multi-image upload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImages {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub files: Vec<UploadedImage>,
}
