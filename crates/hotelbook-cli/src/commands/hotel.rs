use super::Client;
use crate::console;
use anyhow::Result;
use colored::Colorize;
use hotelbook_application::flows::{ConfirmationView, DetailFlow};
use hotelbook_core::navigation::StayParams;

fn stay(checkin: String, checkout: String, guests: u32) -> StayParams {
    StayParams {
        checkin,
        checkout,
        guests,
        ..StayParams::default()
    }
}

pub async fn show(
    client: &Client,
    id: String,
    checkin: String,
    checkout: String,
    guests: u32,
    book_now: bool,
) -> Result<()> {
    let mut detail = DetailFlow::new(client.ctx.clone(), id, stay(checkin, checkout, guests));
    detail.load().await;

    let Some(hotel) = &detail.hotel else {
        return Ok(());
    };

    console::heading(&hotel.name);
    console::field("Ciudad", &hotel.city);
    if !hotel.address.is_empty() {
        console::field("Dirección", &hotel.address);
    }
    console::field("Calificación", format!("★ {:.1}", hotel.rating));
    console::field(
        "Precio",
        format!(
            "{} - {} {}",
            hotel.price_range.min_price, hotel.price_range.max_price, hotel.price_range.currency
        ),
    );
    if !hotel.amenities.is_empty() {
        console::field("Servicios", hotel.amenities.join(", "));
    }
    if !hotel.description.is_empty() {
        println!("\n{}\n", hotel.description);
    }
    for url in detail.image_urls() {
        console::field("Imagen", url);
    }

    match &detail.availability {
        Some(availability) if availability.available => {
            let price = availability
                .price
                .map(|price| format!(" desde {price} {}", availability.currency))
                .unwrap_or_default();
            println!("{}", format!("Disponible{price}").green());
        }
        Some(_) => println!("{}", "Sin disponibilidad para esas fechas".yellow()),
        None => {}
    }

    if book_now {
        submit(&mut detail).await;
    }
    Ok(())
}

pub async fn book(
    client: &Client,
    hotel_id: String,
    checkin: String,
    checkout: String,
    guests: u32,
) -> Result<()> {
    let mut detail = DetailFlow::new(
        client.ctx.clone(),
        hotel_id,
        stay(checkin, checkout, guests),
    );
    detail.load().await;
    if detail.can_book() {
        submit(&mut detail).await;
    }
    Ok(())
}

async fn submit(detail: &mut DetailFlow) {
    match detail.book().await {
        Some(route) => {
            console::redirected(&route);
            if let Some(view) = ConfirmationView::from_route(&route) {
                console::heading("¡Reserva confirmada!");
                console::field("Reserva", view.booking_id_label());
                console::field("Referencia", view.reference_label());
            }
        }
        None if detail.auth.is_some() => {
            detail.close_auth();
            println!(
                "{}",
                "Inicia sesión con `hotelbook login` para reservar".yellow()
            );
        }
        None => {}
    }
}
