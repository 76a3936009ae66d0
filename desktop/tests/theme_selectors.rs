#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The dashboard views emit these class names directly from Rust; if a refactor
renames one in `ui/assets/theme/main.css` without touching the markup (or the
other way round) the window silently loses that styling.

When renaming a selector:
    1. Update the Dioxus markup in `ui/src/views` or `ui/src/components`.
    2. Adjust REQUIRED_SELECTORS here.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Selectors / tokens the dashboard markup relies on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".dashboard {",
    ".dashboard__main",
    ".dashboard__footer",
    ".visually-hidden",
    // Sidebar
    ".sidebar {",
    ".sidebar__option",
    ".sidebar__option--active",
    ".sidebar__locale",
    // Panels & artifacts
    ".panel {",
    ".panel__heading",
    ".columns {",
    ".columns__col",
    ".artifact {",
    ".artifact__image",
    ".artifact__image--fill",
    ".artifact__caption",
    // Warnings
    ".warning {",
    ".warning--error",
    ".warning__detail",
    // Datasets
    ".datasets__select",
    ".data-grid {",
    ".data-grid__table",
    ".data-grid__index",
    ".data-grid__cell--numeric",
    ".data-grid__summary",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn warning_block_consistency() {
    let has_base = THEME_CSS.contains(".warning {");
    let has_error = THEME_CSS.contains(".warning--error");
    assert!(
        has_base && has_error,
        "Warning selectors missing (base: {has_base}, error: {has_error})"
    );
}
