use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use crate::shared::i18n::use_language;

#[component]
pub fn Hero() -> impl IntoView {
    let lang = use_language();

    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1 class="hero__brand">"Wan Furniture"</h1>
                <p class="hero__text">{move || lang.t(TextKey::HeroText)}</p>
            </div>
        </section>
    }
}
