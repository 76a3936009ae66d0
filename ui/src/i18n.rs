//! Internationalization (i18n) support for `sentiview-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/sentiview_ui.ftl   (fallback/reference)
//!   es-ES/sentiview_ui.ftl   (additional locale)
//! ```
//!
//! Only dashboard chrome is localized. Artifact captions and dataset names
//! come from the panel registry and stay as the pipeline labels them.
//!
//! Public API surface:
//! - `init()` – load localization bundles (safe to call multiple times).
//! - `set_language(tag: &str)` – switch language at runtime.
//! - `available_languages()` – discover embedded language tags (for a picker).
//! - `t!` – keyed lookup through the shared `LOADER`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::warn;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-title")
///     t!("warning-image-missing", path = "outputs/x.png")
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; fallback file path must be `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "sentiview_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Plain strings in the DOM; no bidi isolation marks around arguments.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = i18n_embed::DesktopLanguageRequester::requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            // `select` rebuilds the bundles, which resets isolation.
            Ok(_) => LOADER.set_use_isolating(false),
            Err(err) => {
                warn!(error = %err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let _ = set_language("en-US");
        assert_eq!(fl!(&*LOADER, "nav-title"), "Navigation");
    }

    #[test]
    fn arguments_are_not_isolated() {
        init();
        let _ = set_language("en-US");
        let s = fl!(&*LOADER, "warning-image-missing", path = "outputs/a.png");
        assert_eq!(s, "Image not found: outputs/a.png");
    }

    #[test]
    fn reselecting_language_keeps_arguments_plain() {
        init();
        set_language("en-US").unwrap();
        let missing = fl!(&*LOADER, "warning-file-missing", path = "processed_data/x.csv");
        let truncated = fl!(&*LOADER, "datasets-truncated", shown = 1000, total = 1200);
        assert_eq!(missing, "File not found: processed_data/x.csv");

        for s in [missing, truncated] {
            assert!(
                !s.contains('\u{2068}') && !s.contains('\u{2069}'),
                "bidi isolation marks in {s:?}"
            );
        }
    }

    #[test]
    fn unknown_language_keeps_current_bundle() {
        init();
        let _ = set_language("en-US");
        let before = fl!(&*LOADER, "nav-title");
        let _ = set_language("zz-ZZ");
        let after = fl!(&*LOADER, "nav-title");
        assert_eq!(before, after);
    }
}
