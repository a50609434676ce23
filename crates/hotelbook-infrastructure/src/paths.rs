//! Path management for hotelbook files.
//!
//! Everything the client persists lives under one base directory, by default
//! the platform config dir (`~/.config/hotelbook` on Linux). A custom base can
//! be given with `--home`, which tests use to stay inside a temp dir.

use hotelbook_core::HotelbookError;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "hotelbook";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for HotelbookError {
    fn from(err: PathError) -> Self {
        HotelbookError::config(err.to_string())
    }
}

/// Resolved locations of the hotelbook files.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/hotelbook/
/// ├── config.toml      # ClientConfig
/// ├── session.toml     # token, userRole, userName, userEmail, tokenIssuedAt
/// └── logs/
///     └── hotelbook.log.YYYY-MM-DD
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelbookPaths {
    base: PathBuf,
}

impl HotelbookPaths {
    /// Uses `home` when given, the platform config dir otherwise.
    pub fn new(home: Option<PathBuf>) -> Result<Self, PathError> {
        let base = match home {
            Some(home) => home,
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join(APP_DIR),
        };
        Ok(Self { base })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn config_file(&self) -> PathBuf {
        self.base.join("config.toml")
    }

    /// Holds the bearer token; written with user-only permissions.
    pub fn session_file(&self) -> PathBuf {
        self.base.join("session.toml")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.base.join("logs")
    }
}
