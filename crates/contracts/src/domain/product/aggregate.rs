use serde::{Deserialize, Serialize};

// Категория с опечаткой, которая встречается в старых выгрузках каталога
const MISSPELLED_CATEGORY: &str = "Dinning chairs";
const CANONICAL_CATEGORY: &str = "Dining chairs";

/// A single catalog entry as published on the storefront.
///
/// `price` stays a display-formatted string (`Rp2.500.000`); consumers that
/// need the numeric amount go through [`Product::price_amount`]. `image_url`,
/// `description` and `url` may be empty — a product without a purchase link
/// is still listed, it just cannot be checked out yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub description: String,
    pub price: String,
    pub url: String,
}

impl Product {
    /// Numeric price in rupiah, recovered by stripping every non-digit
    /// character from the display string. Returns 0 when nothing remains.
    pub fn price_amount(&self) -> u64 {
        let digits: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }

    /// Trimmed external marketplace link, `None` when blank.
    pub fn purchase_url(&self) -> Option<&str> {
        let url = self.url.trim();
        (!url.is_empty()).then_some(url)
    }
}

/// Rewrites the known misspelled category label to its canonical spelling;
/// any other value passes through unchanged.
pub fn normalize_category(raw: &str) -> String {
    if raw.eq_ignore_ascii_case(MISSPELLED_CATEGORY) {
        CANONICAL_CATEGORY.to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_price(price: &str) -> Product {
        Product {
            id: "product-1".into(),
            name: "Teak bench".into(),
            category: "Sofa".into(),
            image_url: String::new(),
            description: String::new(),
            price: price.into(),
            url: String::new(),
        }
    }

    #[test]
    fn price_amount_strips_formatting() {
        assert_eq!(product_with_price("Rp2.500.000").price_amount(), 2_500_000);
        assert_eq!(product_with_price("Rp 1.250.000,-").price_amount(), 1_250_000);
        assert_eq!(product_with_price("").price_amount(), 0);
        assert_eq!(product_with_price("call us").price_amount(), 0);
    }

    #[test]
    fn category_normalization_is_case_insensitive() {
        assert_eq!(normalize_category("Dinning chairs"), "Dining chairs");
        assert_eq!(normalize_category("dinning CHAIRS"), "Dining chairs");
        assert_eq!(normalize_category("Dining chairs"), "Dining chairs");
        assert_eq!(normalize_category("Sofa"), "Sofa");
    }

    #[test]
    fn purchase_url_ignores_whitespace() {
        let mut p = product_with_price("Rp100");
        p.url = "  ".into();
        assert_eq!(p.purchase_url(), None);
        p.url = " https://www.tokopedia.com/wanfurniture/teak-bench ".into();
        assert_eq!(
            p.purchase_url(),
            Some("https://www.tokopedia.com/wanfurniture/teak-bench")
        );
    }

    #[test]
    fn serializes_with_camel_case_image_url() {
        let json = serde_json::to_value(product_with_price("Rp100")).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json.get("image_url").is_none());
    }
}
