//! Modal listing the products of one collection.

use contracts::domain::product::Product;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::card::ProductCard;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

#[component]
pub fn CategoryModal(
    /// Category name shown in the header
    #[prop(into)]
    title: Signal<String>,
    /// Products of the selected category
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Callback when the modal should close
    on_close: Callback<()>,
) -> impl IntoView {
    // Handle Escape key
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" {
                    on_close.run(());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    let lang = use_language();

    let handle_overlay_click = move |_| {
        on_close.run(());
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || lang.category(&title.get())}</h2>
                    <button class="button button--icon modal__close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <div class="modal-product-grid">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product| view! { <ProductCard product /> }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
