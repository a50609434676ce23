//! Application layer for hotelbook.
//!
//! Each page of the client is a flow type holding its form state. Flows
//! validate input, call the service traits from `hotelbook-core`, report
//! outcomes through a [`hotelbook_core::notification::Notifier`] and hand back
//! the next [`hotelbook_core::navigation::Route`].

pub mod context;
pub mod flows;
pub mod notifier;

pub use context::AppContext;
pub use flows::Landing;
pub use notifier::CollectingNotifier;
