//! Theme configuration as the client sees it (draft or saved record).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::palette;

/// A draft has no `id`/`saved_at`; a configuration returned by the server has both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub accent_color: String,
    pub primary_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

impl ThemeConfig {
    pub fn draft(accent_color: impl Into<String>, primary_color: impl Into<String>) -> Self {
        Self {
            id: None,
            accent_color: accent_color.into(),
            primary_color: primary_color.into(),
            saved_at: None,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// `saved_at` parsed as a UTC timestamp, if present and well-formed.
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        self.saved_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::draft(palette::DEFAULT_ACCENT, palette::DEFAULT_PRIMARY)
    }
}

/// Body of `POST /api/themes`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateThemeBody<'a> {
    pub accent_color: &'a str,
    pub primary_color: &'a str,
}
