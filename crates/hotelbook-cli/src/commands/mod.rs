pub mod admin;
pub mod auth;
pub mod bookings;
pub mod hotel;
pub mod route;
pub mod search;

use crate::console::ConsoleNotifier;
use anyhow::{Context, Result};
use hotelbook_application::AppContext;
use hotelbook_core::config::ClientConfig;
use hotelbook_core::session::SessionHandle;
use hotelbook_infrastructure::{ConfigService, FileSessionStore, HotelbookPaths};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command needs, wired from the home directory.
pub struct Client {
    pub paths: HotelbookPaths,
    pub config: ClientConfig,
    pub ctx: AppContext,
}

impl Client {
    pub fn open(home: Option<PathBuf>) -> Result<Self> {
        let paths = HotelbookPaths::new(home)?;
        let config = ConfigService::new(&paths)
            .get_config()
            .with_context(|| format!("Failed to load {}", paths.config_file().display()))?;

        let store = Arc::new(FileSessionStore::new(paths.session_file()));
        let session = SessionHandle::with_ttl(store, config.session_ttl());
        let ctx = AppContext::http(config.clone(), session, Arc::new(ConsoleNotifier));

        Ok(Self { paths, config, ctx })
    }
}
