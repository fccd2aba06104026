use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{new_theme_id, ThemeId};

/// A stored color configuration. Created once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub id: ThemeId,
    pub accent_color: String,
    pub primary_color: String,
    #[serde(with = "crate::utils::timestamp")]
    pub saved_at: DateTime<Utc>,
}

impl ThemeRecord {
    /// New record with a fresh id, stamped with the current time.
    pub fn new(accent_color: String, primary_color: String) -> Self {
        Self {
            id: new_theme_id(),
            accent_color,
            primary_color,
            saved_at: crate::utils::timestamp::now(),
        }
    }
}
