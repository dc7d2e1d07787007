//! Consultation form. The storefront has no backend: submission is
//! acknowledged locally after a short delay.

use contracts::shared::i18n::TextKey;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::i18n::use_language;

const SUBMIT_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormStatus {
    Editing,
    Sending,
    Submitted,
}

#[component]
pub fn ConsultationForm() -> impl IntoView {
    let lang = use_language();
    let status = RwSignal::new(FormStatus::Editing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() != FormStatus::Editing {
            return;
        }
        status.set(FormStatus::Sending);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            status.set(FormStatus::Submitted);
        });
    };

    view! {
        <section id="consultation" class="consultation">
            <div class="section-heading">
                <h2>{move || lang.t(TextKey::ConsultationTitle)}</h2>
                <p>{move || lang.t(TextKey::ConsultationSubtitle)}</p>
            </div>
            <Show
                when=move || status.get() != FormStatus::Submitted
                fallback=move || {
                    view! {
                        <div class="consultation__thanks">
                            <h3>{move || lang.t(TextKey::ConsultationThankYou)}</h3>
                            <p>{move || lang.t(TextKey::ConsultationReceived)}</p>
                            <p class="consultation__response">
                                {move || lang.t(TextKey::ConsultationResponse)}
                            </p>
                        </div>
                    }
                }
            >
                <form class="consultation__form" on:submit=on_submit>
                    <div class="consultation__row">
                        <label>
                            <span>{move || lang.t(TextKey::ConsultationFirstName)}</span>
                            <input type="text" name="first_name" required />
                        </label>
                        <label>
                            <span>{move || lang.t(TextKey::ConsultationLastName)}</span>
                            <input type="text" name="last_name" required />
                        </label>
                    </div>
                    <label>
                        <span>{move || lang.t(TextKey::ConsultationEmail)}</span>
                        <input type="email" name="email" required />
                    </label>
                    <label>
                        <span>{move || lang.t(TextKey::ConsultationPhone)}</span>
                        <input type="tel" name="phone" />
                    </label>
                    <label>
                        <span>{move || lang.t(TextKey::ConsultationVision)}</span>
                        <textarea
                            name="vision"
                            rows="4"
                            placeholder=move || lang.t(TextKey::ConsultationVisionPlaceholder)
                        ></textarea>
                    </label>
                    <button
                        class="button button--primary"
                        type="submit"
                        disabled=move || status.get() == FormStatus::Sending
                    >
                        {move || {
                            if status.get() == FormStatus::Sending {
                                lang.t(TextKey::ConsultationSending)
                            } else {
                                lang.t(TextKey::ConsultationSubmit)
                            }
                        }}
                    </button>
                </form>
            </Show>
        </section>
    }
}
