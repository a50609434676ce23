//! Client session domain module.
//!
//! # Module Structure
//!
//! - `model`: The typed session and the flat keys it is persisted under
//! - `store`: Key/value persistence trait
//! - `handle`: Typed accessors over a store, including the expiry check

mod handle;
mod model;
mod store;

pub use handle::{DEFAULT_SESSION_TTL_HOURS, SessionHandle};
pub use model::{
    EMAIL_KEY, ISSUED_AT_KEY, NAME_KEY, ROLE_KEY, SESSION_KEYS, Session, TOKEN_KEY,
};
pub use store::SessionStore;
