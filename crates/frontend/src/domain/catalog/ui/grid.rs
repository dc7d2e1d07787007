//! Paginated product grid with category filter chips.

use contracts::domain::product::Product;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use super::card::ProductCard;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_section;

const PRODUCTS_PER_PAGE: usize = 12;

#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let lang = use_language();

    // None = all categories
    let selected_category: RwSignal<Option<String>> = RwSignal::new(None);
    let page = RwSignal::new(0usize);

    let categories = Memo::new(move |_| {
        let mut categories: Vec<String> = Vec::new();
        products.with(|list| {
            for product in list {
                if !categories.contains(&product.category) {
                    categories.push(product.category.clone());
                }
            }
        });
        categories.sort();
        categories
    });

    let filtered = Memo::new(move |_| {
        let selected = selected_category.get();
        products.with(|list| {
            list.iter()
                .filter(|p| selected.as_deref().is_none_or(|c| p.category == c))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let total_pages = Memo::new(move |_| filtered.with(|f| f.len().div_ceil(PRODUCTS_PER_PAGE)));

    let page_products = Memo::new(move |_| {
        filtered.with(|f| {
            f.iter()
                .skip(page.get() * PRODUCTS_PER_PAGE)
                .take(PRODUCTS_PER_PAGE)
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let change_page = move |new_page: usize| {
        page.set(new_page);
        scroll_to_section("products");
    };

    let select_category = move |category: Option<String>| {
        selected_category.set(category);
        page.set(0);
    };

    view! {
        <section id="products" class="products">
            <div class="section-heading">
                <h2>{move || lang.t(TextKey::ProductsTitle)}</h2>
                <p>{move || lang.t(TextKey::ProductsSubtitle)}</p>
            </div>

            <div class="category-filter">
                <button
                    class=move || {
                        if selected_category.get().is_none() { "chip chip--active" } else { "chip" }
                    }
                    on:click=move |_| select_category(None)
                >
                    {move || lang.t(TextKey::ProductsAll)}
                </button>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category: String| {
                        let is_active = {
                            let category = category.clone();
                            move || selected_category.get().as_deref() == Some(category.as_str())
                        };
                        let label = {
                            let category = category.clone();
                            move || lang.category(&category)
                        };
                        let select = move |_| select_category(Some(category.clone()));
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "chip chip--active" } else { "chip" }
                                }
                                on:click=select
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            <div class="product-grid">
                <For
                    each=move || page_products.get()
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product /> }
                />
            </div>

            <Show when=move || { total_pages.get() > 1 }>
                <nav class="pagination">
                    <button
                        class="pagination-btn"
                        disabled=move || page.get() == 0
                        on:click=move |_| {
                            let current = page.get();
                            if current > 0 {
                                change_page(current - 1);
                            }
                        }
                    >
                        {icon("chevron-left")}
                    </button>
                    <For
                        each=move || 0..total_pages.get()
                        key=|p| *p
                        children=move |p| {
                            view! {
                                <button
                                    class=move || {
                                        if page.get() == p {
                                            "pagination-btn pagination-btn--active"
                                        } else {
                                            "pagination-btn"
                                        }
                                    }
                                    on:click=move |_| change_page(p)
                                >
                                    {p + 1}
                                </button>
                            }
                        }
                    />
                    <button
                        class="pagination-btn"
                        disabled=move || page.get() + 1 >= total_pages.get()
                        on:click=move |_| {
                            let current = page.get();
                            if current + 1 < total_pages.get() {
                                change_page(current + 1);
                            }
                        }
                    >
                        {icon("chevron-right")}
                    </button>
                </nav>
            </Show>
        </section>
    }
}
