//! Product card used by the grid and the category modal.

use contracts::domain::product::Product;
use contracts::shared::i18n::TextKey;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::cart::use_cart;
use crate::shared::format::{format_rupiah, usd_estimate};
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;

/// How long the "Added!" confirmation stays on the button.
const ADDED_FLASH_MS: u32 = 1200;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart_ctx = use_cart();
    let lang = use_language();

    let amount = product.price_amount();
    let rupiah = format_rupiah(amount);
    let usd = usd_estimate(amount);
    let category = product.category.clone();

    let added = RwSignal::new(false);

    let add_to_cart = {
        let product = product.clone();
        move |_| {
            cart_ctx.add_to_cart(product.clone());
            added.set(true);
            spawn_local(async move {
                TimeoutFuture::new(ADDED_FLASH_MS).await;
                added.set(false);
            });
        }
    };

    view! {
        <article class="product-card">
            <div class="product-card__media">
                {if product.has_image() {
                    view! {
                        <img src=product.image_url.clone() alt=product.name.clone() loading="lazy" />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="product-card__no-image">
                            {move || lang.t(TextKey::ProductsImageComingSoon)}
                        </div>
                    }
                        .into_any()
                }}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__category">{move || lang.category(&category)}</p>
                <div class="product-card__price">
                    <span class="product-card__price-rp">{rupiah}</span>
                    <span class="product-card__price-usd">"/ "{usd}</span>
                </div>
                <button class="button button--outline product-card__add" on:click=add_to_cart>
                    {icon("shopping-cart")}
                    <span>
                        {move || {
                            if added.get() {
                                lang.t(TextKey::ProductsAdded)
                            } else {
                                lang.t(TextKey::ProductsAddToCart)
                            }
                        }}
                    </span>
                </button>
            </div>
        </article>
    }
}
