use super::Client;
use crate::console;
use anyhow::Result;
use colored::Colorize;
use hotelbook_application::flows::{AuthFlow, AuthMode, auth as auth_flow};
use hotelbook_application::flows::messages::LOGIN_OK;
use hotelbook_application::Landing;
use hotelbook_core::notification::Notice;
use hotelbook_core::user::{LoginRequest, RegisterRequest};

pub async fn login(client: &Client, email: String, password: String) -> Result<()> {
    let mut auth = match AuthFlow::open(client.ctx.clone()) {
        Landing::Page(auth) => auth,
        Landing::Redirect(route) => {
            println!("Ya iniciaste sesión");
            console::redirected(&route);
            return Ok(());
        }
    };
    auth.login = LoginRequest::new(email, password);

    if let Some(route) = auth.login().await {
        client.ctx.notify(Notice::success(LOGIN_OK));
        console::redirected(&route);
    }
    Ok(())
}

pub async fn register(
    client: &Client,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
) -> Result<()> {
    let mut auth = AuthFlow::new(client.ctx.clone());
    auth.mode = AuthMode::Register;
    auth.register = RegisterRequest {
        email,
        password,
        first_name,
        last_name,
        phone,
        ..RegisterRequest::default()
    };

    if auth.register().await {
        println!("Ahora puedes iniciar sesión como {}", auth.login.email.bold());
    }
    Ok(())
}

pub fn logout(client: &Client) -> Result<()> {
    let route = auth_flow::logout(&client.ctx);
    println!("Sesión cerrada");
    console::redirected(&route);
    Ok(())
}

pub async fn whoami(client: &Client) -> Result<()> {
    let Some(session) = client.ctx.current_session() else {
        println!("{}", "Sin sesión".bright_black());
        return Ok(());
    };
    console::heading(&session.name);
    console::field("Email", &session.email);
    console::field("Rol", session.role);
    if let Some(issued_at) = session.issued_at {
        console::field("Desde", issued_at.format("%Y-%m-%d %H:%M UTC"));
    }
    match client.ctx.booking.profile().await {
        Ok(user) if !user.phone.is_empty() => console::field("Teléfono", user.phone),
        Ok(_) => {}
        Err(err) => tracing::warn!(error = %err, "Could not load profile"),
    }
    Ok(())
}
