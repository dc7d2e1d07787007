//! Fixed top navigation with theme, language and cart controls.

use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use crate::domain::cart::use_cart;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_section;
use crate::shared::theme::{use_theme, Theme};

const NAV_LINKS: &[(&str, TextKey)] = &[
    ("home", TextKey::NavHome),
    ("collections", TextKey::NavCollections),
    ("products", TextKey::NavProducts),
    ("about", TextKey::NavAbout),
    ("faq", TextKey::NavFaq),
    ("consultation", TextKey::NavConsultation),
    ("contact", TextKey::NavContact),
];

#[component]
pub fn Header() -> impl IntoView {
    let cart_ctx = use_cart();
    let theme_ctx = use_theme();
    let lang = use_language();

    view! {
        <header class="site-header">
            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|&(anchor, key)| {
                        view! {
                            <button
                                class="site-header__link"
                                on:click=move |_| scroll_to_section(anchor)
                            >
                                {move || lang.t(key)}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="site-header__actions">
                <button
                    class="button button--icon"
                    on:click=move |_| theme_ctx.toggle_theme()
                >
                    {move || {
                        if theme_ctx.theme.get() == Theme::Dark {
                            icon("sun")
                        } else {
                            icon("moon")
                        }
                    }}
                </button>
                <button
                    class="button button--icon site-header__locale"
                    on:click=move |_| lang.toggle_locale()
                >
                    {icon("languages")}
                    <span>{move || lang.locale.get().as_str().to_uppercase()}</span>
                </button>
                <button
                    class="button button--icon site-header__cart"
                    on:click=move |_| cart_ctx.open_cart()
                >
                    {icon("shopping-cart")}
                    <Show when=move || { cart_ctx.count() > 0 }>
                        <span class="badge">{move || cart_ctx.count()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
