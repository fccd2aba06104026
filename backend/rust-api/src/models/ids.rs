//! Theme identifiers are UUID v4. Lookups take raw path strings, so parsing
//! happens at the store boundary.

use uuid::Uuid;

pub type ThemeId = Uuid;

pub fn new_theme_id() -> ThemeId {
    Uuid::new_v4()
}

/// Parse a path segment into a theme id. Only the exact form ids are
/// issued in (lowercase, hyphenated) matches; anything else is `None`.
pub fn parse_theme_id(id: &str) -> Option<ThemeId> {
    Uuid::parse_str(id)
        .ok()
        .filter(|parsed| parsed.hyphenated().to_string() == id)
}
