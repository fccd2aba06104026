//! Shared types: theme records and their identifiers.

pub mod ids;
pub mod theme;

pub use ids::ThemeId;
pub use theme::ThemeRecord;
