//! In-memory theme store. Constructed once by the entry point and shared
//! with handlers through `AppState`; records live as long as the process.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{ids::parse_theme_id, ThemeRecord};

pub type SharedThemeStore = Arc<ThemeStore>;

/// Append-only collection of theme records in insertion order.
///
/// The runtime is multi-threaded, so the backing `Vec` sits behind an
/// `RwLock`. Guards are never held across other awaits.
#[derive(Debug, Default)]
pub struct ThemeStore {
    records: RwLock<Vec<ThemeRecord>>,
}

impl ThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedThemeStore {
        Arc::new(Self::new())
    }

    /// Adds the record to the end of the collection.
    pub async fn append(&self, record: ThemeRecord) {
        self.records.write().await.push(record);
    }

    /// First record whose id equals the given string. Linear scan; other
    /// spellings of the same UUID (uppercase, unhyphenated, braced) never match.
    pub async fn find_by_id(&self, id: &str) -> Option<ThemeRecord> {
        let id = parse_theme_id(id)?;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned()
    }

    /// Snapshot of every record, oldest first.
    pub async fn list(&self) -> Vec<ThemeRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
