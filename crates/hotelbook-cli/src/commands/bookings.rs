use super::Client;
use crate::console;
use anyhow::Result;
use colored::Colorize;
use hotelbook_application::Landing;
use hotelbook_application::flows::DashboardFlow;
use hotelbook_core::booking::BookingStatus;

pub async fn list(client: &Client) -> Result<()> {
    let mut dashboard = match DashboardFlow::open(client.ctx.clone()) {
        Landing::Page(dashboard) => dashboard,
        Landing::Redirect(route) => {
            console::redirected(&route);
            return Ok(());
        }
    };
    dashboard.load_bookings().await;

    console::heading(&format!("¡Hola, {}!", dashboard.greeting_name()));
    if dashboard.bookings.is_empty() {
        println!("No tienes reservas todavía");
        return Ok(());
    }

    for booking in &dashboard.bookings {
        let status = booking.status();
        let label = match status {
            BookingStatus::Confirmed => status.label().green(),
            BookingStatus::Pending => status.label().yellow(),
            BookingStatus::Cancelled => status.label().red(),
            BookingStatus::Other(_) => status.label().normal(),
        };
        println!(
            "{} {} {}",
            booking.hotel_label().bold(),
            label,
            format!("#{}", booking.id).bright_black()
        );
        if let (Some(checkin), Some(checkout)) = (booking.check_in_date, booking.check_out_date) {
            console::field(
                "Fechas",
                format!("{} → {}", checkin.format("%Y-%m-%d"), checkout.format("%Y-%m-%d")),
            );
        }
        console::field("Huéspedes", booking.guests);
        if !booking.booking_reference.is_empty() {
            console::field("Referencia", &booking.booking_reference);
        }
    }
    Ok(())
}
