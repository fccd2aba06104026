//! Customizer session: the current configuration plus the storage it is
//! restored from and saved to.

use crate::api::ThemeApiClient;
use crate::css;
use crate::draft;
use crate::error::{ClientError, Result};
use crate::models::ThemeConfig;
use crate::storage::DraftStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSlot {
    Accent,
    Primary,
}

#[derive(Debug)]
pub enum SaveOutcome {
    /// Stored by the server; the returned record is now the local draft too.
    Saved(ThemeConfig),
    /// The server save failed, the draft was written locally instead.
    LocalOnly(ClientError),
}

impl SaveOutcome {
    pub fn is_local_only(&self) -> bool {
        matches!(self, SaveOutcome::LocalOnly(_))
    }
}

pub struct ThemeCustomizer<S: DraftStorage> {
    storage: S,
    config: ThemeConfig,
}

impl<S: DraftStorage> ThemeCustomizer<S> {
    /// Starts from the stored draft, or the default theme if there is none.
    pub fn restore(storage: S) -> Self {
        let config = draft::load(&storage).unwrap_or_default();
        log::debug!(
            "[theme] restored accent={} primary={}",
            config.accent_color,
            config.primary_color
        );
        Self { storage, config }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn custom_properties(&self) -> [(&'static str, String); 2] {
        css::custom_properties(&self.config)
    }

    /// Changes one color and returns the properties to re-apply. Editing a
    /// saved theme turns it back into a draft; nothing is persisted until `save`.
    pub fn set_color(&mut self, slot: ColorSlot, color: impl Into<String>) -> [(&'static str, String); 2] {
        let color = color.into();
        match slot {
            ColorSlot::Accent => self.config.accent_color = color,
            ColorSlot::Primary => self.config.primary_color = color,
        }
        self.config.id = None;
        self.config.saved_at = None;
        self.custom_properties()
    }

    /// Saves to the server and mirrors the result locally. If the server
    /// save fails the draft is written locally and `LocalOnly` is returned;
    /// `Err` means the local write failed as well.
    pub async fn save(&mut self, client: &ThemeApiClient) -> Result<SaveOutcome> {
        match client
            .create_theme(&self.config.accent_color, &self.config.primary_color)
            .await
        {
            Ok(record) => {
                log::info!("[theme] saved {:?}", record.id);
                if let Err(e) = draft::store(&mut self.storage, &record) {
                    log::warn!("[theme] saved remotely but local mirror failed: {}", e);
                }
                self.config = record.clone();
                Ok(SaveOutcome::Saved(record))
            }
            Err(e) => {
                log::warn!("[theme] save failed, keeping theme locally: {}", e);
                draft::store(&mut self.storage, &self.config)?;
                Ok(SaveOutcome::LocalOnly(e))
            }
        }
    }

    /// Back to the default theme; the stored draft is removed.
    pub fn reset(&mut self) -> Result<[(&'static str, String); 2]> {
        self.config = ThemeConfig::default();
        draft::clear(&mut self.storage)?;
        Ok(self.custom_properties())
    }
}
