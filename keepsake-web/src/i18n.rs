//! Locale bundles for the card's UI strings.
//!
//! The card's copy is Ukrainian first; an English bundle exists for shared
//! viewing. Keys are nested (`login.error`), values are plain strings with
//! optional `{var}` placeholders.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
    pub rtl: bool,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "uk",
        name: "Українська",
        rtl: false,
    },
    LocaleMeta {
        code: "en",
        name: "English",
        rtl: false,
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("uk", include_str!("../i18n/uk.json")),
    ("en", include_str!("../i18n/en.json")),
];

const DEFAULT_LANG: &str = "uk";
const STORAGE_KEY: &str = "keepsake.locale";

pub struct I18nBundle {
    pub lang: String,
    pub rtl: bool,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let rtl = LOCALE_META.iter().any(|m| m.code == lang && m.rtl);

    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        rtl,
        translations,
        fallback,
    })
}

/// Supported locales with their native names and direction metadata.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        rtl: false,
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .unwrap_or_else(|| build_bundle(DEFAULT_LANG).unwrap_or_else(fallback_bundle))
    });
}

/// Switch the active language, update `<html lang dir>` and persist the
/// choice for future sessions.
pub fn set_lang(lang: &str) {
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                if let Some(el) = doc.document_element() {
                    CURRENT.with(|cell| {
                        let read = cell.borrow();
                        let _ = el.set_attribute("lang", &read.lang);
                        let _ = el.set_attribute("dir", if read.rtl { "rtl" } else { "ltr" });
                    });
                }
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, lang);
            }
        }
    }
}

/// The two-letter code of the active locale.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

/// Whether the active locale reads right to left.
#[must_use]
pub fn is_rtl() -> bool {
    CURRENT.with(|c| c.borrow().rtl)
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key, falling back to the default locale, then to the key
/// itself so missing strings stay visible instead of vanishing.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with `{var}` substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_resolves_keys() {
        set_lang("uk");
        assert_eq!(t("login.submit"), "Відкрити");
        assert_eq!(t("menu.letter_note"), "Слова від серця");
    }

    #[test]
    fn english_bundle_covers_the_gate() {
        set_lang("en");
        assert_eq!(t("login.submit"), "Open");
        set_lang("uk");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        set_lang("uk");
        assert_eq!(t("nope.missing"), "nope.missing");
    }

    #[test]
    fn interpolates_variables() {
        set_lang("uk");
        let mut vars = BTreeMap::new();
        vars.insert("current", "2");
        vars.insert("total", "6");
        assert_eq!(tr("gallery.counter", Some(&vars)), "Фото 2 / 6");
    }

    #[test]
    fn unknown_locale_falls_back_to_default_strings() {
        set_lang("uk");
        set_lang("xx");
        assert_eq!(current_lang(), "xx");
        assert_eq!(t("login.submit"), "Відкрити");
        set_lang("uk");
    }
}
