//! `hotelbook admin ...`: catalog administration through [`AdminFlow`].

use super::Client;
use crate::console;
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use hotelbook_application::Landing;
use hotelbook_application::flows::AdminFlow;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum AdminAction {
    /// List every hotel in the catalog
    Hotels,
    /// Catalog summary
    Stats,
    /// Create a hotel
    Create(HotelFields),
    /// Update a hotel; omitted fields keep their current value
    Update {
        id: String,
        #[command(flatten)]
        fields: HotelFields,
    },
    /// Delete a hotel
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Upload a main image and print its URL
    UploadThumbnail { file: PathBuf },
    /// Upload gallery images and print their URLs
    UploadImages {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

#[derive(Args)]
pub struct HotelFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    website: Option<String>,
    #[arg(long)]
    rating: Option<f64>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    /// Comma separated; replaces the current list
    #[arg(long, value_delimiter = ',')]
    amenities: Option<Vec<String>>,
    /// Image file uploaded as the main image
    #[arg(long)]
    thumbnail: Option<PathBuf>,
    /// Image files uploaded and appended to the gallery
    #[arg(long)]
    photo: Vec<PathBuf>,
}

impl HotelFields {
    fn apply(self, admin: &mut AdminFlow) -> (Option<PathBuf>, Vec<PathBuf>) {
        let draft = &mut admin.draft;
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(city) = self.city {
            draft.city = city;
        }
        if let Some(address) = self.address {
            draft.address = address;
        }
        if let Some(email) = self.email {
            draft.contact.email = email;
        }
        if let Some(phone) = self.phone {
            draft.contact.phone = phone;
        }
        if let Some(website) = self.website {
            draft.contact.website = website;
        }
        if let Some(rating) = self.rating {
            draft.rating = rating;
        }
        if let Some(min_price) = self.min_price {
            draft.price_range.min_price = min_price;
        }
        if let Some(max_price) = self.max_price {
            draft.price_range.max_price = max_price;
        }
        if let Some(amenities) = self.amenities {
            draft.amenities = amenities
                .into_iter()
                .map(|amenity| amenity.trim().to_string())
                .filter(|amenity| !amenity.is_empty())
                .collect();
        }
        (self.thumbnail, self.photo)
    }
}

pub async fn run(client: &Client, action: AdminAction) -> Result<()> {
    let mut admin = match AdminFlow::open(client.ctx.clone()) {
        Landing::Page(admin) => admin,
        Landing::Redirect(route) => {
            console::redirected(&route);
            return Ok(());
        }
    };

    match action {
        AdminAction::Hotels => {
            admin.refresh().await;
            for hotel in &admin.hotels {
                let state = if hotel.is_active {
                    "activo".green()
                } else {
                    "inactivo".bright_black()
                };
                println!(
                    "{} {} {} {}",
                    hotel.name.bold(),
                    hotel.city,
                    state,
                    format!("[{}]", hotel.id).bright_black()
                );
            }
        }
        AdminAction::Stats => {
            admin.refresh().await;
            if let Some(stats) = &admin.stats {
                console::heading("Catálogo");
                console::field("Hoteles", stats.total_hotels);
                console::field("Activos", stats.active_hotels);
                console::field("Ciudades", stats.cities.join(", "));
                console::field("Calificación media", format!("{:.1}", stats.avg_rating));
            }
        }
        AdminAction::Create(fields) => {
            admin.start_create();
            save(&mut admin, fields).await;
        }
        AdminAction::Update { id, fields } => {
            admin.refresh().await;
            let Some(hotel) = admin.hotels.iter().find(|hotel| hotel.id == id).cloned() else {
                eprintln!("{}", format!("✗ Hotel {id} no encontrado").red());
                return Ok(());
            };
            admin.start_edit(&hotel);
            save(&mut admin, fields).await;
        }
        AdminAction::Delete { id, yes } => {
            if !yes {
                println!("¿Eliminar el hotel {id}? Repite con --yes para confirmar");
                return Ok(());
            }
            admin.delete(&id).await;
        }
        AdminAction::UploadThumbnail { file } => {
            if admin.upload_thumbnail(&file).await {
                println!("{}", admin.draft.thumbnail);
            }
        }
        AdminAction::UploadImages { files } => {
            if admin.upload_gallery(&files).await {
                for url in &admin.draft.photos {
                    println!("{url}");
                }
            }
        }
    }
    Ok(())
}

/// Uploads any images first so their URLs land in the saved hotel.
async fn save(admin: &mut AdminFlow, fields: HotelFields) {
    let (thumbnail, photos) = fields.apply(admin);
    if let Some(thumbnail) = thumbnail
        && !admin.upload_thumbnail(&thumbnail).await
    {
        return;
    }
    if !photos.is_empty() && !admin.upload_gallery(&photos).await {
        return;
    }
    admin.save().await;
}
