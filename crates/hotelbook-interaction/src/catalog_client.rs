//! Hotel catalog service client.

use crate::http::{ApiClient, not_found_as};
use async_trait::async_trait;
use hotelbook_core::api::HotelCatalogApi;
use hotelbook_core::hotel::{
    Hotel, HotelDraft, HotelStats, HotelUpdate, UploadedImage, UploadedImages,
};
use hotelbook_core::validation::validate_image;
use hotelbook_core::{HotelbookError, Result};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct HttpHotelCatalog {
    api: ApiClient,
}

impl HttpHotelCatalog {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

/// Reads an image from disk and wraps it as a multipart part.
///
/// The file is checked for type and size before anything is sent.
async fn image_part(file: &Path) -> Result<Part> {
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| HotelbookError::io(format!("{} is not a file", file.display())))?;

    let size = tokio::fs::metadata(file).await?.len();
    validate_image(&file_name, size)?;

    let bytes = tokio::fs::read(file).await?;
    let mime = mime_guess::from_path(file).first_or_octet_stream();
    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime.essence_str())
        .map_err(|err| HotelbookError::internal(format!("Invalid mime type: {err}")))
}

#[async_trait]
impl HotelCatalogApi for HttpHotelCatalog {
    async fn get_hotel(&self, id: &str) -> Result<Hotel> {
        let request = self.api.request(Method::GET, &format!("hotels/{id}"))?;
        self.api.send(request).await.map_err(not_found_as("hotel", id))
    }

    async fn list_hotels(&self) -> Result<Vec<Hotel>> {
        let request = self.api.request(Method::GET, "hotels")?;
        self.api.send_or_default(request).await
    }

    async fn create_hotel(&self, draft: &HotelDraft) -> Result<Hotel> {
        let request = self.api.request(Method::POST, "hotels")?.json(draft);
        let hotel: Hotel = self.api.send(request).await?;
        tracing::info!(id = %hotel.id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    async fn update_hotel(&self, id: &str, update: &HotelUpdate) -> Result<Hotel> {
        let request = self
            .api
            .request(Method::PUT, &format!("hotels/{id}"))?
            .json(update);
        let hotel = self
            .api
            .send(request)
            .await
            .map_err(not_found_as("hotel", id))?;
        tracing::info!(%id, "Hotel updated");
        Ok(hotel)
    }

    async fn delete_hotel(&self, id: &str) -> Result<()> {
        let request = self.api.request(Method::DELETE, &format!("hotels/{id}"))?;
        self.api
            .send_empty(request)
            .await
            .map_err(not_found_as("hotel", id))?;
        tracing::info!(%id, "Hotel deleted");
        Ok(())
    }

    async fn upload_single(&self, file: &Path) -> Result<UploadedImage> {
        let form = Form::new().part("image", image_part(file).await?);
        let request = self
            .api
            .request(Method::POST, "hotels/upload-single")?
            .multipart(form);
        let uploaded: UploadedImage = self.api.send(request).await?;
        tracing::info!(url = %uploaded.url, "Image uploaded");
        Ok(uploaded)
    }

    async fn upload_images(&self, files: &[PathBuf]) -> Result<UploadedImages> {
        if files.is_empty() {
            return Ok(UploadedImages::default());
        }

        // Every file is validated before the first byte goes out.
        let mut form = Form::new();
        for file in files {
            form = form.part("images", image_part(file).await?);
        }
        let request = self
            .api
            .request(Method::POST, "hotels/upload-images")?
            .multipart(form);
        let uploaded: UploadedImages = self.api.send(request).await?;
        tracing::info!(count = uploaded.files.len(), "Images uploaded");
        Ok(uploaded)
    }

    async fn stats(&self) -> Result<HotelStats> {
        let request = self.api.request(Method::GET, "stats")?;
        self.api.send(request).await
    }
}
