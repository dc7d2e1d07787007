//! Cart state shared across the app via context.

use contracts::domain::cart::Cart;
use contracts::domain::product::Product;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
    /// Whether the cart drawer is showing.
    pub is_open: RwSignal<bool>,
}

impl CartContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(Cart::new()),
            is_open: RwSignal::new(false),
        }
    }

    pub fn add_to_cart(&self, product: Product) {
        self.cart.update(|cart| cart.add(product));
    }

    pub fn set_quantity(&self, product_id: &str, quantity: u32) {
        self.cart.update(|cart| cart.set_quantity(product_id, quantity));
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        self.cart.update(|cart| cart.remove(product_id));
    }

    /// Units in the cart; drives the header badge.
    pub fn count(&self) -> u32 {
        self.cart.with(|cart| cart.count())
    }

    pub fn open_cart(&self) {
        self.is_open.set(true);
    }

    pub fn close_cart(&self) {
        self.is_open.set(false);
    }
}

/// Hook to use the cart context.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Provide it at the app root.")
}
