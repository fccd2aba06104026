//! The draft configuration mirrored under a single fixed storage key.

use crate::error::Result;
use crate::models::ThemeConfig;
use crate::storage::DraftStorage;

pub const DRAFT_KEY: &str = "themeConfig";

/// Last stored configuration. Unreadable or corrupt drafts are logged and
/// treated as absent so start-up falls back to the defaults.
pub fn load<S: DraftStorage + ?Sized>(storage: &S) -> Option<ThemeConfig> {
    let raw = match storage.get_item(DRAFT_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::warn!("[theme] failed to read saved theme: {}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("[theme] failed to parse saved theme: {}", e);
            None
        }
    }
}

pub fn store<S: DraftStorage + ?Sized>(storage: &mut S, config: &ThemeConfig) -> Result<()> {
    let json = serde_json::to_string(config)?;
    storage.set_item(DRAFT_KEY, &json)
}

pub fn clear<S: DraftStorage + ?Sized>(storage: &mut S) -> Result<()> {
    storage.remove_item(DRAFT_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDraftStorage;

    #[test]
    fn store_then_load() {
        let mut s = MemoryDraftStorage::new();
        let cfg = ThemeConfig::draft("#8b5cf6", "#f59e0b");
        store(&mut s, &cfg).unwrap();
        assert_eq!(load(&s), Some(cfg));
    }

    #[test]
    fn corrupt_draft_reads_as_absent() {
        let mut s = MemoryDraftStorage::new();
        s.set_item(DRAFT_KEY, "{not json").unwrap();
        assert_eq!(load(&s), None);
        s.set_item(DRAFT_KEY, r##"{"accentColor":"#fff"}"##).unwrap();
        assert_eq!(load(&s), None);
    }

    #[test]
    fn clear_removes_draft() {
        let mut s = MemoryDraftStorage::new();
        store(&mut s, &ThemeConfig::default()).unwrap();
        clear(&mut s).unwrap();
        assert_eq!(load(&s), None);
    }
}
