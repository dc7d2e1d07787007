//! Footer: quick links, static contact links, credits.

use contracts::shared::i18n::TextKey;
use leptos::prelude::*;

use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::scroll::scroll_to_section;

const WHATSAPP_NUMBER: &str = "62839223364";
const CONTACT_EMAIL: &str = "irwanjepara30@gmail.com";
const INSTAGRAM_URL: &str = "https://www.instagram.com/wanfurniture/";

const QUICK_LINKS: &[(&str, TextKey)] = &[
    ("home", TextKey::NavHome),
    ("collections", TextKey::NavCollections),
    ("products", TextKey::NavProducts),
    ("faq", TextKey::NavFaq),
];

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();

    let whatsapp_url = format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode("Hello! I'd like to ask about your furniture.")
    );
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contact" class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__brand">
                    <h3>"Wan Furniture"</h3>
                    <p>{move || lang.t(TextKey::FooterTagline)}</p>
                </div>
                <div>
                    <h4>{move || lang.t(TextKey::FooterQuickLinks)}</h4>
                    <ul class="site-footer__links">
                        {QUICK_LINKS
                            .iter()
                            .map(|&(anchor, key)| {
                                view! {
                                    <li>
                                        <button on:click=move |_| scroll_to_section(anchor)>
                                            {move || lang.t(key)}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>{move || lang.t(TextKey::FooterConnect)}</h4>
                    <div class="site-footer__social">
                        <a href=whatsapp_url target="_blank" rel="noreferrer">
                            {icon("message-circle")}
                        </a>
                        <a href=format!("mailto:{CONTACT_EMAIL}")>{icon("mail")}</a>
                        <a href=INSTAGRAM_URL target="_blank" rel="noreferrer">
                            {icon("instagram")}
                        </a>
                    </div>
                </div>
            </div>
            <div class="site-footer__rights">
                <span>
                    {format!("© {year} Wan Furniture. ")}
                    {move || lang.t(TextKey::FooterRights)}
                </span>
            </div>
        </footer>
    }
}
