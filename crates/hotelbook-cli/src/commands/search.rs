use super::Client;
use crate::console;
use anyhow::Result;
use colored::Colorize;
use hotelbook_application::flows::results::AMENITY_PREVIEW;
use hotelbook_application::flows::{ResultsFlow, SearchForm};
use hotelbook_application::Landing;
use hotelbook_core::navigation::Route;

pub async fn run(
    client: &Client,
    city: String,
    checkin: String,
    checkout: String,
    guests: u32,
) -> Result<()> {
    let form = SearchForm::new(city, checkin, checkout, guests);
    let Some(route) = form.submit(&client.ctx) else {
        return Ok(());
    };
    console::redirected(&route);
    let Route::Results(stay) = route else {
        return Ok(());
    };

    let mut results = match ResultsFlow::open(client.ctx.clone(), stay) {
        Landing::Page(results) => results,
        Landing::Redirect(route) => {
            console::redirected(&route);
            return Ok(());
        }
    };
    results.load().await;

    if results.error.is_some() {
        return Ok(());
    }
    if results.hotels.is_empty() {
        println!("No se encontraron hoteles en {}", results.stay.city);
        return Ok(());
    }

    console::heading(&format!("Hoteles en {}", results.stay.city));
    for hotel in &results.hotels {
        let (amenities, hidden) = hotel.amenity_preview(AMENITY_PREVIEW);
        let mut amenities = amenities.join(", ");
        if hidden > 0 {
            amenities.push_str(&format!(" +{hidden}"));
        }
        println!(
            "{} {} {}",
            hotel.name.bold(),
            format!("★ {:.1}", hotel.rating).yellow(),
            format!("[{}]", hotel.id).bright_black()
        );
        console::field(
            "Precio",
            format!("{} - {} {}", hotel.min_price, hotel.max_price, hotel.currency),
        );
        if !amenities.is_empty() {
            console::field("Servicios", amenities);
        }
        let thumbnail = results.thumbnail_url(hotel);
        if !thumbnail.is_empty() {
            console::field("Imagen", thumbnail);
        }
        console::field("Ver", results.select(&hotel.id));
    }
    Ok(())
}
