use crate::domain::product::Product;
use serde::{Deserialize, Serialize};

/// One product entry in the shopping cart plus its quantity.
///
/// Quantity is always positive; a line whose quantity would drop below 1 is
/// removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Client-side shopping cart.
///
/// Lives for the page session only — nothing here is persisted across
/// reloads. Lines keep insertion order and are keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the product, merging into an existing line.
    pub fn add(&mut self, product: Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product,
                quantity: 1,
            });
        }
    }

    /// Sets the quantity for a line; zero removes the line.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total in rupiah, from the display prices of each line.
    pub fn total_amount(&self) -> u64 {
        self.lines
            .iter()
            .map(|l| l.product.price_amount() * u64::from(l.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            category: "Sofa".into(),
            image_url: String::new(),
            description: String::new(),
            price: price.into(),
            url: String::new(),
        }
    }

    #[test]
    fn add_merges_lines_for_the_same_product() {
        let mut cart = Cart::new();
        cart.add(product("product-1", "Rp1.000"));
        cart.add(product("product-2", "Rp2.000"));
        cart.add(product("product-1", "Rp1.000"));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn set_quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(product("product-1", "Rp1.000"));
        cart.set_quantity("product-1", 5);
        assert_eq!(cart.lines()[0].quantity, 5);

        cart.set_quantity("product-1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_for_unknown_product_is_a_noop() {
        let mut cart = Cart::new();
        cart.add(product("product-1", "Rp1.000"));
        cart.set_quantity("product-9", 4);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn totals_follow_display_prices() {
        let mut cart = Cart::new();
        cart.add(product("product-1", "Rp1.500.000"));
        cart.add(product("product-2", "Rp500.000"));
        cart.set_quantity("product-1", 2);

        assert_eq!(cart.total_amount(), 3_500_000);
    }

    #[test]
    fn remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(product("product-1", "Rp1"));
        cart.add(product("product-2", "Rp2"));

        cart.remove("product-1");
        assert_eq!(cart.lines().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_amount(), 0);
    }
}
