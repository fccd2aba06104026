//! Client-side half of the theme customizer: draft persistence under the
//! `themeConfig` key, CSS custom-property mapping, and the save flow that
//! falls back to local storage when the backend cannot be reached.

pub mod api;
pub mod css;
pub mod customizer;
pub mod draft;
pub mod error;
pub mod models;
pub mod palette;
pub mod storage;

pub use api::ThemeApiClient;
pub use customizer::{ColorSlot, SaveOutcome, ThemeCustomizer};
pub use error::ClientError;
pub use models::ThemeConfig;
pub use storage::{DraftStorage, FileDraftStorage, MemoryDraftStorage};
