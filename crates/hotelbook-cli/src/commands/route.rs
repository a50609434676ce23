use super::Client;
use crate::console;
use anyhow::Result;
use hotelbook_core::navigation::{Route, guard};

/// Prints where `path` lands for the stored session.
pub fn resolve(client: &Client, path: &str) -> Result<()> {
    let route = Route::parse(path)?;
    let session = client.ctx.current_session();
    let landed = guard(route.clone(), session.as_ref());

    if landed == route {
        println!("{landed}");
    } else {
        println!("{route}");
        console::redirected(&landed);
    }
    Ok(())
}
