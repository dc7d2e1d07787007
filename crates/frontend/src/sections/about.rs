use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use crate::shared::i18n::use_language;

#[component]
pub fn About() -> impl IntoView {
    let lang = use_language();

    view! {
        <section id="about" class="about">
            <div class="section-heading">
                <h2>{move || lang.t(TextKey::AboutTitle)}</h2>
                <p>{move || lang.t(TextKey::AboutSubtitle)}</p>
            </div>
        </section>
    }
}
