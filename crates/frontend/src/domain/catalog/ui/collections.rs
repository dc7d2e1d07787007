//! Collection cards: the catalog grouped by category.

use contracts::domain::product::Product;
use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use super::category_modal::CategoryModal;
use crate::shared::i18n::use_language;

#[component]
pub fn Collections(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let lang = use_language();
    let selected: RwSignal<Option<String>> = RwSignal::new(None);

    // Группировка по категории с сохранением порядка каталога
    let collections = Memo::new(move |_| {
        let mut groups: Vec<(String, Vec<Product>)> = Vec::new();
        products.with(|list| {
            for product in list {
                match groups.iter_mut().find(|(name, _)| *name == product.category) {
                    Some((_, members)) => members.push(product.clone()),
                    None => groups.push((product.category.clone(), vec![product.clone()])),
                }
            }
        });
        groups
    });

    let selected_products = Memo::new(move |_| {
        let Some(name) = selected.get() else {
            return Vec::new();
        };
        collections.with(|groups| {
            groups
                .iter()
                .find(|(group, _)| *group == name)
                .map(|(_, members)| members.clone())
                .unwrap_or_default()
        })
    });

    view! {
        <section id="collections" class="collections">
            <div class="section-heading">
                <h2>{move || lang.t(TextKey::CollectionsTitle)}</h2>
                <p>{move || lang.t(TextKey::CollectionsSubtitle)}</p>
            </div>
            <div class="collections__grid">
                <For
                    each=move || collections.get()
                    key=|(name, members)| (name.clone(), members.len())
                    children=move |(name, members): (String, Vec<Product>)| {
                        let cover = members
                            .iter()
                            .find(|p| p.has_image())
                            .map(|p| p.image_url.clone());
                        let count = members.len();
                        let label = {
                            let name = name.clone();
                            move || lang.category(&name)
                        };
                        let open = {
                            let name = name.clone();
                            move |_| selected.set(Some(name.clone()))
                        };
                        view! {
                            <button class="collection-card" on:click=open>
                                <div class="collection-card__media">
                                    {match cover {
                                        Some(url) => {
                                            view! { <img src=url alt=name.clone() loading="lazy" /> }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <div class="collection-card__no-image">
                                                    {move || lang.t(TextKey::ProductsNoImage)}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <h3>{label}</h3>
                                <p class="collection-card__count">
                                    {count}" "{move || lang.t(TextKey::ProductsPieces)}
                                </p>
                                <span class="collection-card__view">
                                    {move || lang.t(TextKey::CollectionsView)}
                                </span>
                            </button>
                        }
                    }
                />
            </div>
            <Show when=move || selected.get().is_some()>
                <CategoryModal
                    title=Signal::derive(move || selected.get().unwrap_or_default())
                    products=Signal::derive(move || selected_products.get())
                    on_close=Callback::new(move |_| selected.set(None))
                />
            </Show>
        </section>
    }
}
