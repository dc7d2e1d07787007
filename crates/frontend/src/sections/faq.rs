use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

const ENTRIES: &[(TextKey, TextKey)] = &[
    (TextKey::FaqMaterialsQ, TextKey::FaqMaterialsA),
    (TextKey::FaqProductionQ, TextKey::FaqProductionA),
    (TextKey::FaqCustomQ, TextKey::FaqCustomA),
];

#[component]
pub fn Faq() -> impl IntoView {
    let lang = use_language();
    let open_index: RwSignal<Option<usize>> = RwSignal::new(None);

    view! {
        <section id="faq" class="faq">
            <div class="section-heading">
                <h2>{move || lang.t(TextKey::FaqTitle)}</h2>
                <p>{move || lang.t(TextKey::FaqSubtitle)}</p>
            </div>
            <div class="faq__list">
                {ENTRIES
                    .iter()
                    .enumerate()
                    .map(|(i, &(question, answer))| {
                        let is_open = move || open_index.get() == Some(i);
                        let toggle = move |_| {
                            open_index
                                .update(|open| {
                                    *open = if *open == Some(i) { None } else { Some(i) };
                                });
                        };
                        view! {
                            <div class="faq__item">
                                <button class="faq__question" on:click=toggle>
                                    <span>{move || lang.t(question)}</span>
                                    <span class=move || {
                                        if is_open() {
                                            "faq__chevron faq__chevron--open"
                                        } else {
                                            "faq__chevron"
                                        }
                                    }>{icon("chevron-down")}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="faq__answer">{move || lang.t(answer)}</p>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
