pub mod api;
pub mod booking;
pub mod config;
pub mod error;
pub mod hotel;
pub mod navigation;
pub mod notification;
pub mod search;
pub mod session;
pub mod user;
pub mod validation;

// Re-export common error type
pub use error::{HotelbookError, Result};
