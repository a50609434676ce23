use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking status as reported by the service.
///
/// The service sends free text in English or Spanish with arbitrary casing;
/// unknown values are preserved as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "confirmed" | "confirmada" => Self::Confirmed,
            "pending" | "pendiente" => Self::Pending,
            "cancelled" | "cancelada" => Self::Cancelled,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// User-facing label.
    pub fn label(&self) -> &str {
        match self {
            Self::Confirmed => "Confirmada",
            Self::Pending => "Pendiente",
            Self::Cancelled => "Cancelada",
            Self::Other(raw) => raw,
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
