//! Hotel catalog administration.

use super::Landing;
use super::auth;
use super::messages::{
    ACCESS_DENIED, HOTEL_CREATE_FAILED, HOTEL_CREATED, HOTEL_DELETE_FAILED, HOTEL_DELETED,
    HOTEL_UPDATE_FAILED, HOTEL_UPDATED, HOTELS_LOAD_FAILED, IMAGES_UPLOAD_FAILED,
    THUMBNAIL_UPLOAD_FAILED, THUMBNAIL_UPLOADED, images_uploaded,
};
use crate::context::AppContext;
use hotelbook_core::HotelbookError;
use hotelbook_core::hotel::{Hotel, HotelDraft, HotelStats, HotelUpdate};
use hotelbook_core::navigation::{Route, guard};
use hotelbook_core::notification::Notice;
use hotelbook_core::session::Session;
use hotelbook_core::validation::validate_hotel_draft;
use std::path::{Path, PathBuf};

pub struct AdminFlow {
    ctx: AppContext,
    pub session: Session,
    pub hotels: Vec<Hotel>,
    pub stats: Option<HotelStats>,
    /// Create/edit form
    pub draft: HotelDraft,
    /// Id of the hotel being edited; `None` while creating
    pub editing: Option<String>,
}

impl AdminFlow {
    /// Admin only. Without a session the user goes to `/`; a non-admin is
    /// told so and sent to `/dashboard`.
    pub fn open(ctx: AppContext) -> Landing<Self> {
        let session = ctx.current_session();
        match (guard(Route::Admin, session.as_ref()), session) {
            (Route::Admin, Some(session)) => Landing::Page(Self {
                ctx,
                session,
                hotels: Vec::new(),
                stats: None,
                draft: HotelDraft::default(),
                editing: None,
            }),
            (Route::Dashboard, Some(session)) => {
                tracing::warn!(email = %session.email, "Non-admin tried to open the admin page");
                ctx.notify(Notice::denied(ACCESS_DENIED));
                Landing::Redirect(Route::Dashboard)
            }
            (route, _) => Landing::Redirect(route),
        }
    }

    /// Reloads the hotel list and the stats.
    pub async fn refresh(&mut self) {
        match self.ctx.catalog.list_hotels().await {
            Ok(hotels) => self.hotels = hotels,
            Err(err) => self.ctx.report("list hotels", &err, HOTELS_LOAD_FAILED),
        }
        match self.ctx.catalog.stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(err) => tracing::warn!(error = %err, "Stats unavailable"),
        }
    }

    pub fn start_create(&mut self) {
        self.draft = HotelDraft::default();
        self.editing = None;
    }

    pub fn start_edit(&mut self, hotel: &Hotel) {
        self.draft = HotelDraft::from(hotel);
        self.editing = Some(hotel.id.clone());
    }

    /// Creates or updates the hotel in the form; the list is reloaded on
    /// success.
    pub async fn save(&mut self) -> bool {
        let failed = if self.editing.is_some() {
            HOTEL_UPDATE_FAILED
        } else {
            HOTEL_CREATE_FAILED
        };
        if let Err(err) = validate_hotel_draft(&self.draft) {
            self.ctx
                .report("save hotel", &HotelbookError::from(err), failed);
            return false;
        }

        let result = match &self.editing {
            Some(id) => self
                .ctx
                .catalog
                .update_hotel(id, &HotelUpdate::from(self.draft.clone()))
                .await
                .map(|_| HOTEL_UPDATED),
            None => self
                .ctx
                .catalog
                .create_hotel(&self.draft)
                .await
                .map(|_| HOTEL_CREATED),
        };

        match result {
            Ok(message) => {
                self.ctx.notify(Notice::success(message));
                self.start_create();
                self.refresh().await;
                true
            }
            Err(err) => {
                self.ctx.report("save hotel", &err, failed);
                false
            }
        }
    }

    /// Deletes a hotel. The caller has already asked for confirmation.
    pub async fn delete(&mut self, id: &str) -> bool {
        match self.ctx.catalog.delete_hotel(id).await {
            Ok(()) => {
                self.ctx.notify(Notice::success(HOTEL_DELETED));
                if self.editing.as_deref() == Some(id) {
                    self.start_create();
                }
                self.refresh().await;
                true
            }
            Err(err) => {
                self.ctx.report("delete hotel", &err, HOTEL_DELETE_FAILED);
                false
            }
        }
    }

    /// Uploads the main image and puts its URL in the form.
    pub async fn upload_thumbnail(&mut self, file: &Path) -> bool {
        match self.ctx.catalog.upload_single(file).await {
            Ok(uploaded) => {
                self.draft.thumbnail = self.ctx.config.image_url(&uploaded.url);
                self.ctx.notify(Notice::success(THUMBNAIL_UPLOADED));
                true
            }
            Err(err) => {
                self.ctx.report("upload thumbnail", &err, THUMBNAIL_UPLOAD_FAILED);
                false
            }
        }
    }

    /// Uploads gallery images and appends their URLs to the form.
    pub async fn upload_gallery(&mut self, files: &[PathBuf]) -> bool {
        if files.is_empty() {
            return false;
        }
        match self.ctx.catalog.upload_images(files).await {
            Ok(uploaded) => {
                let urls: Vec<String> = uploaded
                    .files
                    .iter()
                    .map(|file| self.ctx.config.image_url(&file.url))
                    .collect();
                let count = urls.len();
                self.draft.add_photos(urls);
                self.ctx.notify(Notice::success(images_uploaded(count)));
                true
            }
            Err(err) => {
                self.ctx.report("upload images", &err, IMAGES_UPLOAD_FAILED);
                false
            }
        }
    }

    pub fn remove_photo(&mut self, index: usize) {
        self.draft.remove_photo(index);
    }

    pub fn logout(self) -> Route {
        auth::logout(&self.ctx)
    }
}
