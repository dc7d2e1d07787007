//! Cart drawer: line list, totals, and the entry into checkout.

use contracts::domain::cart::CartLine;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use super::context::use_cart;
use crate::domain::checkout::use_checkout;
use crate::shared::format::format_rupiah;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

#[component]
pub fn CartDrawer() -> impl IntoView {
    let cart_ctx = use_cart();
    let lang = use_language();
    let checkout = use_checkout();

    let lines = move || cart_ctx.cart.with(|c| c.lines().to_vec());
    let is_empty = move || cart_ctx.cart.with(|c| c.is_empty());
    let total = move || format_rupiah(cart_ctx.cart.with(|c| c.total_amount()));

    let complete_order = {
        let checkout = checkout.clone();
        move |_| {
            let items = cart_ctx.cart.with_untracked(|c| c.lines().to_vec());
            if items.is_empty() {
                return;
            }
            checkout.start(items);
        }
    };

    view! {
        <Show when=move || cart_ctx.is_open.get()>
            <div class="drawer-overlay" on:click=move |_| cart_ctx.close_cart()></div>
            <aside class="cart-drawer">
                <header class="cart-drawer__header">
                    {icon("shopping-cart")}
                    <h2>{move || lang.t(TextKey::CartTitle)}</h2>
                    <Show when=move || { cart_ctx.count() > 0 }>
                        <span class="badge">{move || cart_ctx.count()}</span>
                    </Show>
                    <button
                        class="button button--icon cart-drawer__close"
                        on:click=move |_| cart_ctx.close_cart()
                    >
                        {icon("x")}
                    </button>
                </header>
                <Show
                    when=move || !is_empty()
                    fallback=move || {
                        view! {
                            <div class="cart-drawer__empty">
                                <h3>{move || lang.t(TextKey::CartEmpty)}</h3>
                                <p>{move || lang.t(TextKey::CartEmptyDesc)}</p>
                            </div>
                        }
                    }
                >
                    <div class="cart-drawer__lines">
                        <For
                            each=lines
                            key=|line| (line.product.id.clone(), line.quantity)
                            children=move |line| view! { <CartLineRow line /> }
                        />
                    </div>
                    <footer class="cart-drawer__footer">
                        <div class="cart-drawer__total">
                            <span>{move || lang.t(TextKey::CartTotal)}</span>
                            <strong>{total}</strong>
                        </div>
                        <button
                            class="button button--primary cart-drawer__complete"
                            on:click=complete_order.clone()
                        >
                            {icon("external-link")}
                            <span>{move || lang.t(TextKey::CartComplete)}</span>
                        </button>
                    </footer>
                </Show>
            </aside>
        </Show>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart_ctx = use_cart();
    let lang = use_language();

    let product = line.product;
    let quantity = line.quantity;
    let price = format_rupiah(product.price_amount());
    let category = product.category.clone();

    let decrement = {
        let id = product.id.clone();
        move |_| cart_ctx.set_quantity(&id, quantity.saturating_sub(1))
    };
    let increment = {
        let id = product.id.clone();
        move |_| cart_ctx.set_quantity(&id, quantity + 1)
    };
    let remove = {
        let id = product.id.clone();
        move |_| cart_ctx.remove_from_cart(&id)
    };

    view! {
        <div class="cart-line">
            <div class="cart-line__media">
                {if product.has_image() {
                    view! {
                        <img src=product.image_url.clone() alt=product.name.clone() loading="lazy" />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="cart-line__no-image">
                            {move || lang.t(TextKey::ProductsNoImage)}
                        </div>
                    }
                        .into_any()
                }}
            </div>
            <div class="cart-line__info">
                <h3>{product.name.clone()}</h3>
                <p class="cart-line__category">{move || lang.category(&category)}</p>
                <p class="cart-line__price">{price}</p>
            </div>
            <div class="cart-line__controls">
                <button class="button button--icon" on:click=decrement>{icon("minus")}</button>
                <span class="cart-line__qty">{quantity}</span>
                <button class="button button--icon" on:click=increment>{icon("plus")}</button>
                <button class="button button--icon cart-line__remove" on:click=remove>
                    {icon("trash")}
                </button>
            </div>
        </div>
    }
}
