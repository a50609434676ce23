use super::messages::NOT_AVAILABLE;
use hotelbook_core::navigation::{Route, StayParams};

/// Booking confirmation, built from the route parameters alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationView {
    pub booking_id: Option<String>,
    pub reference: Option<String>,
}

impl ConfirmationView {
    pub fn new(booking_id: Option<String>, reference: Option<String>) -> Self {
        Self {
            booking_id: booking_id.filter(|value| !value.trim().is_empty()),
            reference: reference.filter(|value| !value.trim().is_empty()),
        }
    }

    /// `None` for any other route.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Confirmation {
                booking_id,
                reference,
            } => Some(Self::new(booking_id.clone(), reference.clone())),
            _ => None,
        }
    }

    pub fn booking_id_label(&self) -> &str {
        self.booking_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn reference_label(&self) -> &str {
        self.reference.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn home(&self) -> Route {
        Route::Home
    }

    pub fn more_hotels(&self) -> Route {
        Route::Results(StayParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let view = ConfirmationView::from_route(&Route::confirmation(42, "REF42")).unwrap();
        assert_eq!(view.booking_id_label(), "42");
        assert_eq!(view.reference_label(), "REF42");

        let empty = ConfirmationView::from_route(&Route::parse("/confirmation").unwrap()).unwrap();
        assert_eq!(empty.booking_id_label(), "No disponible");
        assert_eq!(empty.reference_label(), "No disponible");
        assert_eq!(empty.more_hotels().to_path(), "/results");
    }

    #[test]
    fn test_other_routes() {
        assert!(ConfirmationView::from_route(&Route::Dashboard).is_none());
    }
}
