pub mod docs;
pub mod themes;

pub use docs::{api_docs, health_check};
pub use themes::{create_theme, get_theme, list_themes, CreateThemeRequest};
