//! Session store trait.

use crate::error::Result;

/// Flat string key/value persistence for the client session.
///
/// Reads and writes are synchronous. Implementations must make `set_many`
/// visible as a whole and `clear` remove every key, not only the known ones.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes several entries at once.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<()>;

    /// Removes every stored key.
    fn clear(&self) -> Result<()>;

    /// Lists the stored keys.
    fn keys(&self) -> Result<Vec<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value.to_string())])
    }
}
