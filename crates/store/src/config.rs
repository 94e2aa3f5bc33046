use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for where the store keeps its data.
///
/// The location is always supplied explicitly at construction time.
///
/// # Example
/// ```
/// use store::StoreConfig;
///
/// // In-memory (for tests)
/// let config = StoreConfig::in_memory();
///
/// // On-disk database file
/// let config = StoreConfig::path("data/support_bot.db");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub enum StoreConfig {
    /// SQLite database file at the given path. Missing parent directories
    /// are created on open.
    OnDisk { path: PathBuf },
    /// In-memory database. Contents vanish when the store is dropped.
    #[default]
    InMemory,
}

impl StoreConfig {
    /// Create an on-disk store configuration.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        StoreConfig::OnDisk { path: path.into() }
    }

    /// Create an in-memory store configuration.
    pub fn in_memory() -> Self {
        StoreConfig::InMemory
    }
}
