//! HTTP clients for the hotel catalog, search and booking services.

pub mod booking_client;
pub mod catalog_client;
pub mod http;
pub mod search_client;

pub use booking_client::HttpBookingApi;
pub use catalog_client::HttpHotelCatalog;
pub use http::ApiClient;
pub use search_client::HttpSearchApi;
