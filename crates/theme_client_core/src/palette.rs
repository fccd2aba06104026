//! Named swatches offered by the color picker, and the default theme.

pub const DEFAULT_ACCENT: &str = "#3b82f6";
pub const DEFAULT_PRIMARY: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub name: &'static str,
    pub value: &'static str,
}

pub const SWATCHES: [Swatch; 8] = [
    Swatch { name: "Blue", value: "#3b82f6" },
    Swatch { name: "Green", value: "#10b981" },
    Swatch { name: "Purple", value: "#8b5cf6" },
    Swatch { name: "Red", value: "#ef4444" },
    Swatch { name: "Amber", value: "#f59e0b" },
    Swatch { name: "Pink", value: "#ec4899" },
    Swatch { name: "Cyan", value: "#06b6d4" },
    Swatch { name: "Slate", value: "#64748b" },
];

/// Swatch name for a color value (case-insensitive), if it is one of ours.
pub fn swatch_name(value: &str) -> Option<&'static str> {
    SWATCHES
        .iter()
        .find(|s| s.value.eq_ignore_ascii_case(value))
        .map(|s| s.name)
}
