//! Checkout overlays, driven by the session state.

use contracts::domain::checkout::CheckoutState;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use super::driver::use_checkout;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

/// Mounts the three checkout surfaces and ties the popup/monitor lifetime
/// to this component.
#[component]
pub fn CheckoutOverlays() -> impl IntoView {
    let controller = use_checkout();

    on_cleanup({
        let controller = controller.clone();
        move || controller.teardown()
    });

    let session = controller.session();
    let state = move || session.with(|s| s.as_ref().map(|x| x.state()));

    view! {
        <Show when=move || matches!(state(), Some(CheckoutState::ConfirmingStart))>
            <ConfirmStartModal />
        </Show>
        <Show when=move || matches!(state(), Some(CheckoutState::InProgress { .. }))>
            <ProgressPanel />
        </Show>
        <Show when=move || matches!(state(), Some(CheckoutState::AwaitingRetry { .. }))>
            <RetryModal />
        </Show>
    }
}

/// "You are about to leave for Tokopedia" confirmation.
#[component]
fn ConfirmStartModal() -> impl IntoView {
    let controller = use_checkout();
    let lang = use_language();
    let session = controller.session();

    let single_item =
        move || session.with(|s| s.as_ref().is_some_and(|x| x.items().len() == 1));

    let cancel_overlay = {
        let controller = controller.clone();
        move |_| controller.cancel_start()
    };
    let cancel = {
        let controller = controller.clone();
        move |_| controller.cancel_start()
    };
    let confirm = {
        let controller = controller.clone();
        move |_| controller.confirm_start()
    };

    view! {
        <div class="checkout-overlay" on:click=cancel_overlay></div>
        <div class="checkout-modal">
            <div class="checkout-modal__icon">{icon("lock")}</div>
            <h3 class="checkout-modal__title">{move || lang.t(TextKey::CheckoutSecureTitle)}</h3>
            <p class="checkout-modal__text">
                {move || {
                    if single_item() {
                        lang.t(TextKey::CheckoutSingleDesc)
                    } else {
                        lang.t(TextKey::CheckoutMultiDesc)
                    }
                }}
            </p>
            <div class="checkout-modal__actions">
                <button class="button button--ghost" on:click=cancel>
                    {move || lang.t(TextKey::CheckoutCancel)}
                </button>
                <button class="button button--primary" on:click=confirm>
                    {move || lang.t(TextKey::CheckoutContinue)}
                </button>
            </div>
        </div>
    }
}

/// Side panel shown while the external page is open: current item, finish,
/// and — except on the last item — next.
#[component]
fn ProgressPanel() -> impl IntoView {
    let controller = use_checkout();
    let lang = use_language();
    let session = controller.session();

    let current = move || session.with(|s| s.as_ref().and_then(|x| x.current_item().cloned()));
    let is_last = move || session.with(|s| s.as_ref().is_none_or(|x| x.is_last()));

    let finish = {
        let controller = controller.clone();
        move |_| controller.finish()
    };
    let next = {
        let controller = controller.clone();
        move |_| controller.advance()
    };

    view! {
        <aside class="checkout-progress">
            {move || {
                current()
                    .map(|line| {
                        view! {
                            <div class="checkout-progress__media">
                                {if line.product.has_image() {
                                    view! {
                                        <img
                                            src=line.product.image_url.clone()
                                            alt=line.product.name.clone()
                                        />
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="checkout-progress__no-image">
                                            {lang.t(TextKey::ProductsNoImage)}
                                        </div>
                                    }
                                        .into_any()
                                }}
                            </div>
                            <h3 class="checkout-progress__name">{line.product.name.clone()}</h3>
                        }
                    })
            }}
            <p class="checkout-progress__note">{move || lang.t(TextKey::CheckoutProgressNote)}</p>
            <div class="checkout-progress__actions">
                <button class="button button--ghost" on:click=finish>
                    {move || lang.t(TextKey::CheckoutFinish)}
                </button>
                <Show when=move || !is_last()>
                    <button class="button button--primary" on:click=next.clone()>
                        <span>{move || lang.t(TextKey::CheckoutNextProduct)}</span>
                        {icon("arrow-right")}
                    </button>
                </Show>
            </div>
        </aside>
    }
}

/// Prompt raised when the external page was closed early.
#[component]
fn RetryModal() -> impl IntoView {
    let controller = use_checkout();
    let lang = use_language();

    let cancel_overlay = {
        let controller = controller.clone();
        move |_| controller.cancel_retry()
    };
    let cancel = {
        let controller = controller.clone();
        move |_| controller.cancel_retry()
    };
    let retry = {
        let controller = controller.clone();
        move |_| controller.retry()
    };

    view! {
        <div class="checkout-overlay" on:click=cancel_overlay></div>
        <div class="checkout-modal checkout-modal--retry">
            <div class="checkout-modal__icon">{icon("alert-circle")}</div>
            <h3 class="checkout-modal__title">{move || lang.t(TextKey::CheckoutClosedTitle)}</h3>
            <p class="checkout-modal__text">{move || lang.t(TextKey::CheckoutClosedDesc)}</p>
            <div class="checkout-modal__actions">
                <button class="button button--ghost" on:click=cancel>
                    {move || lang.t(TextKey::CheckoutCancel)}
                </button>
                <button class="button button--primary" on:click=retry>
                    {move || lang.t(TextKey::CheckoutTryAgain)}
                </button>
            </div>
        </div>
    }
}
