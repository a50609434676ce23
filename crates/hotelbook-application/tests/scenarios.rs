//! Page flow scenarios against mock services.

use async_trait::async_trait;
use chrono::NaiveDate;
use hotelbook_application::flows::messages;
use hotelbook_application::flows::{
    AdminFlow, AuthFlow, AuthMode, DashboardFlow, DetailFlow, ResultsFlow, SearchForm,
};
use hotelbook_application::{AppContext, CollectingNotifier, Landing};
use hotelbook_core::api::{BookingApi, HotelCatalogApi, SearchApi};
use hotelbook_core::booking::{Availability, Booking, NewBooking};
use hotelbook_core::hotel::{Hotel, HotelDraft, HotelStats, HotelUpdate, UploadedImage, UploadedImages};
use hotelbook_core::navigation::{Route, StayParams};
use hotelbook_core::notification::NoticeKind;
use hotelbook_core::search::{SearchQuery, SearchResult};
use hotelbook_core::session::{SESSION_KEYS, SessionHandle, SessionStore};
use hotelbook_core::user::{AuthResponse, LoginRequest, RegisterRequest, Role, User};
use hotelbook_core::{HotelbookError, Result};
use hotelbook_infrastructure::MemorySessionStore;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

// ============================================================================
// Mocks
// ============================================================================

fn hotel(id: &str) -> Hotel {
    serde_json::from_value(json!({
        "id": id,
        "name": "Hotel Sierras",
        "city": "Córdoba",
        "thumbnail": "/uploads/hotels/front.jpg",
        "photos": ["https://img.example.com/pool.jpg"],
        "is_active": true
    }))
    .unwrap()
}

#[derive(Default)]
struct MockCatalog {
    missing: bool,
    /// Both detail requests wait here when set, so they must run together.
    barrier: Option<Arc<Barrier>>,
    created: Mutex<Vec<HotelDraft>>,
    updated: Mutex<Vec<(String, HotelUpdate)>>,
    deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl HotelCatalogApi for MockCatalog {
    async fn get_hotel(&self, id: &str) -> Result<Hotel> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.missing {
            return Err(HotelbookError::not_found("hotel", id));
        }
        Ok(hotel(id))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        Ok(vec![hotel("h1"), hotel("h2")])
    }

    async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel> {
        self.created.lock().unwrap().push(draft.clone());
        Ok(hotel("new"))
    }

    async fn update_hotel(&self, id: &str, update: &HotelUpdate) -> Result<Hotel> {
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), update.clone()));
        Ok(hotel(id))
    }

    async fn delete_hotel(&self, id: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn upload_single(&self, file: &Path) -> Result<UploadedImage> {
        let name = file.file_name().unwrap().to_string_lossy().into_owned();
        Ok(UploadedImage {
            filename: name.clone(),
            url: format!("/uploads/hotels/{name}"),
            original: name,
        })
    }

    async fn upload_images(&self, files: &[PathBuf]) -> Result<UploadedImages> {
        let mut uploaded = UploadedImages::default();
        for file in files {
            uploaded.files.push(self.upload_single(file).await?);
        }
        Ok(uploaded)
    }

    async fn stats(&self) -> Result<HotelStats> {
        Ok(HotelStats {
            total_hotels: 2,
            active_hotels: 2,
            ..HotelStats::default()
        })
    }
}

#[derive(Default)]
struct MockSearch {
    fail: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

#[async_trait]
impl SearchApi for MockSearch {
    async fn search_hotels(&self, query: &SearchQuery) -> Result<Vec<SearchResult>> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(HotelbookError::network("connection refused"));
        }
        Ok(vec![serde_json::from_value(json!({ "id": "h1", "name": "Hotel Sierras" })).unwrap()])
    }
}

#[derive(Default)]
struct MockBooking {
    role: Option<Role>,
    fail_availability: bool,
    fail_bookings: bool,
    fail_register: bool,
    barrier: Option<Arc<Barrier>>,
    created: Mutex<Vec<NewBooking>>,
    registered: Mutex<Vec<RegisterRequest>>,
}

#[async_trait]
impl BookingApi for MockBooking {
    async fn register(&self, request: &RegisterRequest) -> Result<User> {
        if self.fail_register {
            return Err(HotelbookError::http(409, "El email ya está registrado"));
        }
        self.registered.lock().unwrap().push(request.clone());
        Ok(user(Role::User))
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        match self.role {
            Some(role) if request.password == "secret" => Ok(AuthResponse {
                token: "tok".to_string(),
                user: user(role),
            }),
            _ => Err(HotelbookError::unauthorized("Credenciales inválidas")),
        }
    }

    async fn check_availability(
        &self,
        hotel_id: &str,
        _checkin: NaiveDate,
        _checkout: NaiveDate,
        guests: u32,
    ) -> Result<Availability> {
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if self.fail_availability {
            return Err(HotelbookError::http(500, "Amadeus unavailable"));
        }
        Ok(Availability {
            hotel_id: hotel_id.to_string(),
            available: true,
            guests,
            ..Availability::default()
        })
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking> {
        self.created.lock().unwrap().push(booking.clone());
        Ok(serde_json::from_value(json!({ "id": 42, "booking_reference": "REF42" })).unwrap())
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        if self.fail_bookings {
            return Err(HotelbookError::http(500, "boom"));
        }
        Ok(vec![serde_json::from_value(json!({ "id": 1, "status": "pendiente" })).unwrap()])
    }

    async fn profile(&self) -> Result<User> {
        Ok(user(Role::User))
    }
}

fn user(role: Role) -> User {
    User {
        id: 5,
        email: "ana@example.com".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Paz".to_string(),
        phone: String::new(),
        role,
    }
}

struct Harness {
    ctx: AppContext,
    store: Arc<MemorySessionStore>,
    notifier: Arc<CollectingNotifier>,
    catalog: Arc<MockCatalog>,
    search: Arc<MockSearch>,
    booking: Arc<MockBooking>,
}

impl Harness {
    fn new(catalog: MockCatalog, search: MockSearch, booking: MockBooking) -> Self {
        let store = Arc::new(MemorySessionStore::new());
        let notifier = Arc::new(CollectingNotifier::new());
        let catalog = Arc::new(catalog);
        let search = Arc::new(search);
        let booking = Arc::new(booking);
        let ctx = AppContext::new(
            catalog.clone(),
            search.clone(),
            booking.clone(),
            SessionHandle::new(store.clone()),
            notifier.clone(),
        );
        Self {
            ctx,
            store,
            notifier,
            catalog,
            search,
            booking,
        }
    }

    fn with_role(role: Role) -> Self {
        Self::new(
            MockCatalog::default(),
            MockSearch::default(),
            MockBooking {
                role: Some(role),
                ..MockBooking::default()
            },
        )
    }

    async fn log_in(&self) {
        let mut auth = AuthFlow::new(self.ctx.clone());
        auth.login = LoginRequest::new("ana@example.com", "secret");
        assert!(auth.login().await.is_some());
        self.notifier.drain();
    }
}

fn cordoba() -> StayParams {
    StayParams {
        city: "Córdoba".to_string(),
        checkin: "2025-01-10".to_string(),
        checkout: "2025-01-12".to_string(),
        guests: 2,
    }
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_form_routes_to_encoded_results() {
    let harness = Harness::with_role(Role::User);
    let form = SearchForm::new("Córdoba", "2025-01-10", "2025-01-12", 2);

    let route = form.submit(&harness.ctx).unwrap();
    assert_eq!(
        route.to_path(),
        "/results?city=C%C3%B3rdoba&checkin=2025-01-10&checkout=2025-01-12&guests=2"
    );
    assert!(harness.notifier.notices().is_empty());
}

#[test]
fn test_search_form_blocks_checkout_before_checkin() {
    let harness = Harness::with_role(Role::User);
    let form = SearchForm::new("Córdoba", "2025-01-12", "2025-01-12", 2);

    assert!(form.submit(&harness.ctx).is_none());
    let notices = harness.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Validation);
    assert_eq!(
        notices[0].message,
        "La fecha de check-out debe ser posterior al check-in"
    );
}

#[tokio::test]
async fn test_results_without_city_go_home() {
    let harness = Harness::with_role(Role::User);
    let landing = ResultsFlow::open(harness.ctx.clone(), StayParams::default());
    assert_eq!(landing.redirect(), Some(&Route::Home));
}

#[tokio::test]
async fn test_results_load_and_select() {
    let harness = Harness::with_role(Role::User);
    let mut results = ResultsFlow::open(harness.ctx.clone(), cordoba())
        .page()
        .unwrap();

    results.load().await;

    assert_eq!(results.hotels.len(), 1);
    let query = harness.search.queries.lock().unwrap()[0].clone();
    assert_eq!(query.city, "Córdoba");
    assert_eq!(query.guests, Some(2));
    assert!(query.checkin.is_some());

    let route = results.select("h1");
    assert!(route.to_path().starts_with("/hotel/h1?city=C%C3%B3rdoba"));
}

#[tokio::test]
async fn test_results_failure_notifies_once() {
    let harness = Harness::new(
        MockCatalog::default(),
        MockSearch {
            fail: true,
            ..MockSearch::default()
        },
        MockBooking::default(),
    );
    let mut results = ResultsFlow::open(harness.ctx.clone(), cordoba())
        .page()
        .unwrap();

    results.load().await;

    assert!(results.hotels.is_empty());
    let notices = harness.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Network);
    assert_eq!(notices[0].message, messages::SEARCH_FAILED);
}

// ============================================================================
// Auth and guards
// ============================================================================

#[tokio::test]
async fn test_admin_login_lands_on_admin() {
    let harness = Harness::with_role(Role::Admin);
    let mut auth = AuthFlow::new(harness.ctx.clone());
    auth.login = LoginRequest::new("ana@example.com", "secret");

    assert_eq!(auth.login().await, Some(Route::Admin));
    assert!(AdminFlow::open(harness.ctx.clone()).page().is_some());
    // A second visit to the login page skips the form.
    assert_eq!(
        AuthFlow::open(harness.ctx.clone()).redirect(),
        Some(&Route::Admin)
    );
}

#[tokio::test]
async fn test_user_is_denied_admin_page() {
    let harness = Harness::with_role(Role::User);
    harness.log_in().await;

    let landing = AdminFlow::open(harness.ctx.clone());

    assert_eq!(landing.redirect(), Some(&Route::Dashboard));
    let notices = harness.notifier.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Auth);
    assert_eq!(notices[0].message, messages::ACCESS_DENIED);
}

#[tokio::test]
async fn test_failed_login_keeps_session_empty() {
    let harness = Harness::with_role(Role::User);
    let mut auth = AuthFlow::new(harness.ctx.clone());
    auth.login = LoginRequest::new("ana@example.com", "wrong");

    assert!(auth.login().await.is_none());
    assert!(harness.store.keys().unwrap().is_empty());
    assert_eq!(harness.notifier.messages(), vec![messages::LOGIN_FAILED]);
    assert_eq!(harness.notifier.notices()[0].kind, NoticeKind::Auth);
}

#[tokio::test]
async fn test_register_returns_to_login_mode() {
    let harness = Harness::with_role(Role::User);
    let mut auth = AuthFlow::new(harness.ctx.clone());
    auth.mode = AuthMode::Register;
    auth.register = RegisterRequest {
        email: "nuevo@example.com".to_string(),
        password: "pw".to_string(),
        first_name: "Nuevo".to_string(),
        last_name: "Usuario".to_string(),
        ..RegisterRequest::default()
    };

    assert!(auth.register().await);

    assert_eq!(auth.mode, AuthMode::Login);
    assert_eq!(auth.login.email, "nuevo@example.com");
    assert_eq!(harness.notifier.messages(), vec![messages::REGISTER_OK]);
    let sent = harness.booking.registered.lock().unwrap()[0].clone();
    assert_eq!(
        sent.date_of_birth.map(|d| d.to_rfc3339()),
        Some("1990-01-01T00:00:00+00:00".to_string())
    );
    // Registration alone does not log in.
    assert!(harness.store.keys().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_failure_message() {
    let harness = Harness::new(
        MockCatalog::default(),
        MockSearch::default(),
        MockBooking {
            fail_register: true,
            ..MockBooking::default()
        },
    );
    let mut auth = AuthFlow::new(harness.ctx.clone());
    auth.register = RegisterRequest {
        email: "ana@example.com".to_string(),
        password: "pw".to_string(),
        first_name: "Ana".to_string(),
        last_name: "Paz".to_string(),
        ..RegisterRequest::default()
    };

    assert!(!auth.register().await);
    assert_eq!(harness.notifier.messages(), vec![messages::REGISTER_FAILED]);
    assert_eq!(harness.notifier.notices()[0].kind, NoticeKind::Server);
}

#[tokio::test]
async fn test_logout_clears_keys_and_guards_dashboard() {
    let harness = Harness::with_role(Role::User);
    harness.log_in().await;
    let dashboard = DashboardFlow::open(harness.ctx.clone()).page().unwrap();

    assert_eq!(dashboard.logout(), Route::Home);

    for key in SESSION_KEYS {
        assert!(harness.store.get(key).unwrap().is_none());
    }
    assert_eq!(
        DashboardFlow::open(harness.ctx.clone()).redirect(),
        Some(&Route::Home)
    );
    assert_eq!(
        AdminFlow::open(harness.ctx.clone()).redirect(),
        Some(&Route::Home)
    );
}

// ============================================================================
// Detail and booking
// ============================================================================

#[tokio::test]
async fn test_detail_fetches_hotel_and_availability_together() {
    let barrier = Arc::new(Barrier::new(2));
    let harness = Harness::new(
        MockCatalog {
            barrier: Some(barrier.clone()),
            ..MockCatalog::default()
        },
        MockSearch::default(),
        MockBooking {
            barrier: Some(barrier),
            ..MockBooking::default()
        },
    );
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());

    tokio::time::timeout(Duration::from_secs(5), detail.load())
        .await
        .expect("hotel and availability must be requested concurrently");

    assert!(detail.hotel.is_some());
    assert!(detail.availability.as_ref().unwrap().available);
}

#[tokio::test]
async fn test_availability_failure_is_silent() {
    let harness = Harness::new(
        MockCatalog::default(),
        MockSearch::default(),
        MockBooking {
            fail_availability: true,
            ..MockBooking::default()
        },
    );
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());

    detail.load().await;

    assert!(detail.hotel.is_some());
    assert!(detail.availability.is_none());
    assert!(detail.can_book());
    assert!(harness.notifier.notices().is_empty());
}

#[tokio::test]
async fn test_detail_load_failure() {
    let harness = Harness::new(
        MockCatalog {
            missing: true,
            ..MockCatalog::default()
        },
        MockSearch::default(),
        MockBooking::default(),
    );
    let mut detail = DetailFlow::new(harness.ctx.clone(), "gone", StayParams::default());

    detail.load().await;

    assert!(detail.hotel.is_none());
    assert_eq!(detail.error.as_deref(), Some(messages::DETAIL_FAILED));
    assert_eq!(harness.notifier.messages(), vec![messages::DETAIL_FAILED]);
    assert_eq!(detail.back(), Route::Home);
}

#[tokio::test]
async fn test_booking_routes_to_confirmation() {
    let harness = Harness::with_role(Role::User);
    harness.log_in().await;
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());
    detail.load().await;

    let route = detail.book().await.unwrap();

    assert_eq!(route.to_path(), "/confirmation?booking_id=42&reference=REF42");
    let sent = harness.booking.created.lock().unwrap()[0].clone();
    assert_eq!(sent.hotel_id, "h1");
    assert_eq!(sent.guests, 2);
    assert_eq!(sent.room_type, "Standard");
    assert_eq!(sent.check_in_date.to_rfc3339(), "2025-01-10T00:00:00+00:00");
}

#[tokio::test]
async fn test_booking_without_session_opens_inline_auth() {
    let harness = Harness::with_role(Role::User);
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());
    detail.load().await;

    assert!(detail.book().await.is_none());
    assert!(detail.auth.is_some());
    assert!(harness.booking.created.lock().unwrap().is_empty());

    detail.auth.as_mut().unwrap().login = LoginRequest::new("ana@example.com", "secret");
    assert!(detail.inline_login().await);
    assert!(detail.auth.is_none());
    assert_eq!(harness.notifier.messages(), vec![messages::LOGIN_OK]);

    assert!(detail.book().await.is_some());
}

#[tokio::test]
async fn test_inline_registration_then_login_books() {
    let harness = Harness::with_role(Role::User);
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());
    detail.load().await;
    assert!(!detail.inline_register().await);

    assert!(detail.book().await.is_none());
    let auth = detail.auth.as_mut().unwrap();
    auth.mode = AuthMode::Register;
    auth.register = RegisterRequest {
        email: " nueva@example.com ".to_string(),
        password: "pw".to_string(),
        first_name: "Nueva".to_string(),
        last_name: "Huésped".to_string(),
        ..RegisterRequest::default()
    };

    assert!(detail.inline_register().await);

    let auth = detail.auth.as_mut().unwrap();
    assert_eq!(auth.mode, AuthMode::Login);
    assert_eq!(auth.login.email, "nueva@example.com");
    assert_eq!(harness.notifier.messages(), vec![messages::REGISTER_OK]);
    assert_eq!(harness.booking.registered.lock().unwrap().len(), 1);
    assert!(harness.store.keys().unwrap().is_empty());
    assert!(detail.book().await.is_none());

    detail.auth.as_mut().unwrap().login.password = "secret".to_string();
    assert!(detail.inline_login().await);
    assert!(detail.book().await.is_some());
}

#[tokio::test]
async fn test_booking_without_dates_is_rejected() {
    let harness = Harness::with_role(Role::User);
    harness.log_in().await;
    let stay = StayParams {
        city: "Córdoba".to_string(),
        ..StayParams::default()
    };
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", stay);
    detail.load().await;

    assert!(detail.book().await.is_none());
    assert_eq!(
        harness.notifier.messages(),
        vec!["Necesitas fechas de check-in y check-out para hacer una reserva"]
    );
    assert!(harness.booking.created.lock().unwrap().is_empty());
    assert!(matches!(detail.back(), Route::Results(_)));
}

#[tokio::test]
async fn test_detail_image_urls_resolve_relative_paths() {
    let harness = Harness::with_role(Role::User);
    let mut detail = DetailFlow::new(harness.ctx.clone(), "h1", cordoba());
    detail.load().await;

    assert_eq!(
        detail.image_urls(),
        vec![
            "http://localhost:8001/uploads/hotels/front.jpg".to_string(),
            "https://img.example.com/pool.jpg".to_string(),
        ]
    );
}

// ============================================================================
// Dashboard and admin
// ============================================================================

#[tokio::test]
async fn test_dashboard_bookings_failure_yields_empty_list() {
    let harness = Harness::new(
        MockCatalog::default(),
        MockSearch::default(),
        MockBooking {
            role: Some(Role::User),
            fail_bookings: true,
            ..MockBooking::default()
        },
    );
    harness.log_in().await;
    let mut dashboard = DashboardFlow::open(harness.ctx.clone()).page().unwrap();

    dashboard.load_bookings().await;

    assert!(dashboard.bookings.is_empty());
    assert!(harness.notifier.notices().is_empty());
    assert_eq!(dashboard.greeting_name(), "Ana Paz");
}

#[tokio::test]
async fn test_dashboard_greeting_fallback_and_bookings() {
    let harness = Harness::with_role(Role::User);
    harness.log_in().await;
    harness.store.set("userName", "").unwrap();
    let mut dashboard = DashboardFlow::open(harness.ctx.clone()).page().unwrap();

    dashboard.load_bookings().await;

    assert_eq!(dashboard.greeting_name(), "Usuario");
    assert_eq!(dashboard.bookings[0].status().label(), "Pendiente");
}

#[tokio::test]
async fn test_admin_create_validates_then_saves() {
    let harness = Harness::with_role(Role::Admin);
    harness.log_in().await;
    let mut admin = AdminFlow::open(harness.ctx.clone()).page().unwrap();
    admin.refresh().await;
    assert_eq!(admin.hotels.len(), 2);

    admin.draft.name = "Hotel Nuevo".to_string();
    assert!(!admin.save().await);
    assert_eq!(
        harness.notifier.drain()[0].message,
        "Por favor completa todos los campos obligatorios: Nombre, Ciudad, Dirección y Email"
    );

    admin.draft.city = "Salta".to_string();
    admin.draft.address = "Av. Belgrano 100".to_string();
    admin.draft.contact.email = "reservas@nuevo.com".to_string();
    assert!(admin.upload_thumbnail(Path::new("/tmp/front.jpg")).await);
    assert!(
        admin
            .upload_gallery(&[PathBuf::from("/tmp/a.jpg"), PathBuf::from("/tmp/b.jpg")])
            .await
    );
    admin.remove_photo(0);
    assert!(admin.save().await);

    let created = harness.catalog.created.lock().unwrap()[0].clone();
    assert_eq!(created.thumbnail, "http://localhost:8001/uploads/hotels/front.jpg");
    assert_eq!(created.photos, vec!["http://localhost:8001/uploads/hotels/b.jpg"]);
    assert_eq!(
        harness.notifier.messages(),
        vec![
            messages::THUMBNAIL_UPLOADED.to_string(),
            messages::images_uploaded(2),
            messages::HOTEL_CREATED.to_string(),
        ]
    );
    assert_eq!(admin.draft, HotelDraft::default());
}

#[tokio::test]
async fn test_admin_edit_and_delete() {
    let harness = Harness::with_role(Role::Admin);
    harness.log_in().await;
    let mut admin = AdminFlow::open(harness.ctx.clone()).page().unwrap();
    admin.refresh().await;

    let existing = admin.hotels[0].clone();
    admin.start_edit(&existing);
    admin.draft.address = "San Martín 1".to_string();
    admin.draft.contact.email = "info@sierras.com".to_string();
    assert!(admin.save().await);

    let (id, update) = harness.catalog.updated.lock().unwrap()[0].clone();
    assert_eq!(id, "h1");
    assert_eq!(update.address.as_deref(), Some("San Martín 1"));
    assert!(admin.editing.is_none());

    assert!(admin.delete("h2").await);
    assert_eq!(harness.catalog.deleted.lock().unwrap().clone(), vec!["h2"]);
    assert_eq!(
        harness.notifier.messages(),
        vec![messages::HOTEL_UPDATED, messages::HOTEL_DELETED]
    );
}
