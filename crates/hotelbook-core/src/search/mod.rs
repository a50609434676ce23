//! Hotel search domain module.

mod model;

pub use model::{SearchPayload, SearchQuery, SearchResult, Stay};
