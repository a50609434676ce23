//! User and authentication domain module.

mod model;

pub use model::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
