//! CSS custom properties set on the document root for a theme.
//!
//! `--primary` carries the accent color and `--accent` carries the primary
//! color; stylesheets written against the customizer depend on that mapping.

use std::collections::{BTreeMap, HashMap};

use crate::models::ThemeConfig;

pub const PRIMARY_VAR: &str = "--primary";
pub const ACCENT_VAR: &str = "--accent";

/// Anything custom properties can be written to (a DOM style declaration,
/// a map in tests).
pub trait StyleTarget {
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleTarget for HashMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl StyleTarget for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

pub fn custom_properties(config: &ThemeConfig) -> [(&'static str, String); 2] {
    [
        (PRIMARY_VAR, config.accent_color.clone()),
        (ACCENT_VAR, config.primary_color.clone()),
    ]
}

/// Inline style for the root element, e.g. `--primary: #3b82f6; --accent: #000000;`.
pub fn root_style(config: &ThemeConfig) -> String {
    custom_properties(config)
        .iter()
        .map(|(name, value)| format!("{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply<T: StyleTarget + ?Sized>(target: &mut T, config: &ThemeConfig) {
    for (name, value) in custom_properties(config) {
        target.set_property(name, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_drives_primary_var() {
        let cfg = ThemeConfig::draft("#ef4444", "#06b6d4");
        let mut style = BTreeMap::new();
        apply(&mut style, &cfg);
        assert_eq!(style.get("--primary").map(String::as_str), Some("#ef4444"));
        assert_eq!(style.get("--accent").map(String::as_str), Some("#06b6d4"));
    }

    #[test]
    fn root_style_renders_both_vars() {
        assert_eq!(
            root_style(&ThemeConfig::default()),
            "--primary: #3b82f6; --accent: #000000;"
        );
    }
}
