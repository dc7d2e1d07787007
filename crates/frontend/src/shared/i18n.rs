//! Language context: reactive wrapper over the typed translation table in
//! `contracts`, with the locale flag persisted in localStorage.

use contracts::shared::i18n::{category_label, text, Locale, TextKey};
use leptos::prelude::*;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "site-language";

fn load_locale_from_storage() -> Locale {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .map(|s| Locale::from_str(&s))
        .unwrap_or_default()
}

fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, locale.as_str());
    }
}

/// Language context type.
#[derive(Clone, Copy)]
pub struct LanguageContext {
    /// Current locale signal.
    pub locale: RwSignal<Locale>,
}

impl LanguageContext {
    /// Copy for the key in the current locale. Reactive when called inside
    /// a tracking scope.
    pub fn t(&self, key: TextKey) -> &'static str {
        text(self.locale.get(), key)
    }

    /// Localized display name for a catalog category.
    pub fn category(&self, category: &str) -> String {
        category_label(self.locale.get(), category)
    }

    /// Switch to the other locale and persist the flag.
    pub fn toggle_locale(&self) {
        let next = self.locale.get().toggled();
        self.locale.set(next);
        save_locale_to_storage(next);
    }
}

/// Provides language context to children components.
#[component]
pub fn LanguageProvider(children: Children) -> impl IntoView {
    let locale = RwSignal::new(load_locale_from_storage());
    provide_context(LanguageContext { locale });
    children()
}

/// Hook to use the language context.
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>()
        .expect("LanguageContext not found. Wrap your app with LanguageProvider.")
}
