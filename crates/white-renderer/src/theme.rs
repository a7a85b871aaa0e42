//! Named theme colors.
//!
//! Theme colors are fixed shorthand names (`primary`, `danger`, ...) that
//! resolve to hexadecimal values. Lookups are exact-match; anything else is
//! assumed to already be a valid CSS color and passes through unchanged.

/// Name to hex pairs, in theme order.
const THEME_COLORS: &[(&str, &str)] = &[
    ("primary", "#3498db"),
    ("secondary", "#2980b9"),
    ("success", "#27ae60"),
    ("warning", "#f39c12"),
    ("danger", "#e74c3c"),
    ("info", "#17a2b8"),
    ("light", "#f8f9fa"),
    ("dark", "#2c3e50"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray", "#6c757d"),
    ("blue", "#007bff"),
    ("green", "#28a745"),
    ("red", "#dc3545"),
    ("yellow", "#ffc107"),
    ("purple", "#6f42c1"),
    ("pink", "#e83e8c"),
    ("orange", "#fd7e14"),
];

/// Look up a theme color by name.
///
/// Returns `None` for names that are not theme colors.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static str> {
    THEME_COLORS
        .iter()
        .find(|(theme_name, _)| *theme_name == name)
        .map(|(_, hex)| *hex)
}

/// Resolve a color value through the theme table.
///
/// Theme names become their hex value; any other value (hex, `rgb(...)`,
/// named CSS colors) is returned as-is.
#[must_use]
pub fn resolve(value: &str) -> &str {
    lookup(value).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_name() {
        assert_eq!(lookup("primary"), Some("#3498db"));
        assert_eq!(lookup("danger"), Some("#e74c3c"));
        assert_eq!(lookup("orange"), Some("#fd7e14"));
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(lookup("magenta"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("Primary"), None);
    }

    #[test]
    fn test_resolve_passes_through_css_values() {
        assert_eq!(resolve("#123456"), "#123456");
        assert_eq!(resolve("rgb(1,2,3)"), "rgb(1,2,3)");
        assert_eq!(resolve("rebeccapurple"), "rebeccapurple");
    }

    #[test]
    fn test_resolve_theme_name() {
        assert_eq!(resolve("red"), "#dc3545");
    }
}
