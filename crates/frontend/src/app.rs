use leptos::prelude::*;

use crate::domain::cart::ui::CartDrawer;
use crate::domain::cart::CartContext;
use crate::domain::catalog::loader::load_products;
use crate::domain::catalog::ui::{Collections, ProductGrid};
use crate::domain::checkout::ui::CheckoutOverlays;
use crate::domain::checkout::CheckoutController;
use crate::layout::{Footer, Header};
use crate::sections::{About, ConsultationForm, Faq, Hero};
use crate::shared::i18n::LanguageProvider;
use crate::shared::theme::ThemeProvider;

#[component]
pub fn App() -> impl IntoView {
    // Shared state for the whole app: cart and the checkout controller.
    provide_context(CartContext::new());
    provide_context(CheckoutController::new());

    // The catalog is bundled; one parse at mount is all the loading there is.
    let products = RwSignal::new(load_products());

    view! {
        <ThemeProvider>
            <LanguageProvider>
                <div class="page">
                    <Header />
                    <main>
                        <Hero />
                        <Collections products=products />
                        <ProductGrid products=products />
                        <About />
                        <Faq />
                        <ConsultationForm />
                    </main>
                    <Footer />
                    <CartDrawer />
                    <CheckoutOverlays />
                </div>
            </LanguageProvider>
        </ThemeProvider>
    }
}
