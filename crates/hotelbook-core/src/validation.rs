//! Shared input validation.
//!
//! Every entry point (home search, dashboard search, booking, auth forms,
//! hotel admin) runs the same checks and reports the same messages. Messages
//! are user-facing and stay in Spanish.

use crate::hotel::HotelDraft;
use crate::search::Stay;
use crate::user::{LoginRequest, RegisterRequest};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used by the forms and by every URL query parameter.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Guests accepted by the booking service.
pub const MIN_GUESTS: u32 = 1;
pub const MAX_GUESTS: u32 = 10;

/// Upload limit per image file (5 MB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// A rejected form input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("La ciudad es obligatoria")]
    MissingCity,

    #[error("Las fechas son obligatorias")]
    MissingDates,

    #[error("La fecha de check-out debe ser posterior al check-in")]
    CheckoutNotAfterCheckin,

    #[error("Fecha inválida: {0}")]
    InvalidDate(String),

    #[error("El número de huéspedes debe estar entre 1 y 10")]
    GuestsOutOfRange,

    #[error("Necesitas fechas de check-in y check-out para hacer una reserva")]
    MissingStayDates,

    #[error("Por favor completa todos los campos obligatorios")]
    MissingRequiredFields,

    #[error("Por favor completa todos los campos obligatorios: Nombre, Ciudad, Dirección y Email")]
    MissingHotelFields,

    #[error("Por favor ingresa un email válido")]
    InvalidEmail,

    #[error("La calificación debe estar entre 0 y 5")]
    RatingOutOfRange,

    #[error("El precio mínimo no puede superar al máximo")]
    PriceRangeInverted,

    #[error("{0} no es un archivo de imagen válido")]
    NotAnImage(String),

    #[error("{0} es muy grande. Máximo 5MB por archivo")]
    FileTooLarge(String),
}

/// Parses a `YYYY-MM-DD` form date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Checks that both dates are present, parse, and that checkout is strictly
/// after checkin.
pub fn validate_date_range(
    checkin: &str,
    checkout: &str,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if checkin.trim().is_empty() || checkout.trim().is_empty() {
        return Err(ValidationError::MissingDates);
    }

    let checkin = parse_date(checkin)?;
    let checkout = parse_date(checkout)?;

    if checkout <= checkin {
        return Err(ValidationError::CheckoutNotAfterCheckin);
    }

    Ok((checkin, checkout))
}

pub fn validate_guests(guests: u32) -> Result<u32, ValidationError> {
    if (MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
        Ok(guests)
    } else {
        Err(ValidationError::GuestsOutOfRange)
    }
}

/// Validates a search form submission.
///
/// Order matches what the user sees first: city, then dates, then guests.
pub fn validate_stay(
    city: &str,
    checkin: &str,
    checkout: &str,
    guests: u32,
) -> Result<Stay, ValidationError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(ValidationError::MissingCity);
    }

    let (checkin, checkout) = validate_date_range(checkin, checkout)?;
    let guests = validate_guests(guests)?;

    Ok(Stay {
        city: city.to_string(),
        checkin,
        checkout,
        guests,
    })
}

/// Validates the dates carried into the booking action.
pub fn validate_booking_dates(
    checkin: &str,
    checkout: &str,
) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if checkin.trim().is_empty() || checkout.trim().is_empty() {
        return Err(ValidationError::MissingStayDates);
    }
    validate_date_range(checkin, checkout)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_login(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }
    Ok(())
}

/// Email, password, first and last name are mandatory; phone is optional.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ValidationError> {
    let required = [
        request.email.trim(),
        request.password.as_str(),
        request.first_name.trim(),
        request.last_name.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingRequiredFields);
    }
    if !is_valid_email(request.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_hotel_draft(draft: &HotelDraft) -> Result<(), ValidationError> {
    let required = [
        draft.name.trim(),
        draft.city.trim(),
        draft.address.trim(),
        draft.contact.email.trim(),
    ];
    if required.iter().any(|field| field.is_empty()) {
        return Err(ValidationError::MissingHotelFields);
    }
    if !is_valid_email(draft.contact.email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }
    if !(0.0..=5.0).contains(&draft.rating) {
        return Err(ValidationError::RatingOutOfRange);
    }
    if draft.price_range.min_price > draft.price_range.max_price {
        return Err(ValidationError::PriceRangeInverted);
    }
    Ok(())
}

/// Rejects files that are not images (by name) or exceed [`MAX_IMAGE_BYTES`].
pub fn validate_image(file_name: &str, size_bytes: u64) -> Result<(), ValidationError> {
    let is_image = mime_guess::from_path(file_name)
        .first()
        .is_some_and(|mime| mime.type_() == mime_guess::mime::IMAGE);
    if !is_image {
        return Err(ValidationError::NotAnImage(file_name.to_string()));
    }
    if size_bytes > MAX_IMAGE_BYTES {
        return Err(ValidationError::FileTooLarge(file_name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel::Contact;

    #[test]
    fn test_validate_stay_ok() {
        let stay = validate_stay(" Córdoba ", "2025-01-10", "2025-01-12", 2).unwrap();
        assert_eq!(stay.city, "Córdoba");
        assert_eq!(stay.nights(), 2);
    }

    #[test]
    fn test_validate_stay_missing_city() {
        let err = validate_stay("   ", "2025-01-10", "2025-01-12", 2).unwrap_err();
        assert_eq!(err, ValidationError::MissingCity);
    }

    #[test]
    fn test_validate_stay_missing_dates() {
        let err = validate_stay("Mendoza", "", "2025-01-12", 2).unwrap_err();
        assert_eq!(err, ValidationError::MissingDates);
    }

    #[test]
    fn test_checkout_must_be_after_checkin() {
        let same_day = validate_stay("Mendoza", "2025-01-10", "2025-01-10", 2).unwrap_err();
        assert_eq!(same_day, ValidationError::CheckoutNotAfterCheckin);

        let before = validate_stay("Mendoza", "2025-01-10", "2025-01-09", 2).unwrap_err();
        assert_eq!(before, ValidationError::CheckoutNotAfterCheckin);
        assert_eq!(
            before.to_string(),
            "La fecha de check-out debe ser posterior al check-in"
        );
    }

    #[test]
    fn test_invalid_date_text() {
        let err = validate_stay("Mendoza", "10/01/2025", "2025-01-12", 2).unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("10/01/2025".to_string()));
    }

    #[test]
    fn test_guest_bounds() {
        assert!(validate_guests(1).is_ok());
        assert!(validate_guests(10).is_ok());
        assert_eq!(validate_guests(0), Err(ValidationError::GuestsOutOfRange));
        assert_eq!(validate_guests(11), Err(ValidationError::GuestsOutOfRange));
    }

    #[test]
    fn test_booking_dates_message() {
        let err = validate_booking_dates("", "").unwrap_err();
        assert_eq!(err, ValidationError::MissingStayDates);
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("ana@example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_registration_requires_names() {
        let request = RegisterRequest {
            email: "ana@example.com".to_string(),
            password: "secret1".to_string(),
            first_name: "Ana".to_string(),
            last_name: String::new(),
            ..RegisterRequest::default()
        };
        assert_eq!(
            validate_registration(&request),
            Err(ValidationError::MissingRequiredFields)
        );
    }

    #[test]
    fn test_hotel_draft_checks() {
        let mut draft = HotelDraft::default();
        assert_eq!(
            validate_hotel_draft(&draft),
            Err(ValidationError::MissingHotelFields)
        );

        draft.name = "Sierras Inn".to_string();
        draft.city = "Córdoba".to_string();
        draft.address = "Av. Colón 123".to_string();
        draft.contact = Contact {
            email: "reservas@sierras".to_string(),
            ..Contact::default()
        };
        assert_eq!(validate_hotel_draft(&draft), Err(ValidationError::InvalidEmail));

        draft.contact.email = "reservas@sierras.com".to_string();
        assert!(validate_hotel_draft(&draft).is_ok());

        draft.rating = 5.5;
        assert_eq!(
            validate_hotel_draft(&draft),
            Err(ValidationError::RatingOutOfRange)
        );

        draft.rating = 4.0;
        draft.price_range.min_price = 50_000.0;
        assert_eq!(
            validate_hotel_draft(&draft),
            Err(ValidationError::PriceRangeInverted)
        );
    }

    #[test]
    fn test_image_checks() {
        assert!(validate_image("lobby.jpg", 1024).is_ok());
        assert_eq!(
            validate_image("notes.pdf", 1024),
            Err(ValidationError::NotAnImage("notes.pdf".to_string()))
        );
        assert_eq!(
            validate_image("huge.png", MAX_IMAGE_BYTES + 1),
            Err(ValidationError::FileTooLarge("huge.png".to_string()))
        );
    }
}
