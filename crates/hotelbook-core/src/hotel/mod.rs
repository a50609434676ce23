//! Hotel catalog domain module.
//!
//! # Module Structure
//!
//! - `model`: Hotel records, admin drafts, upload results and catalog stats

mod model;

pub use model::{
    Contact, Hotel, HotelDraft, HotelStats, HotelUpdate, PriceRange, UploadedImage,
    UploadedImages,
};
