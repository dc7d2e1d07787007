//! Build-time bundled catalog.

use contracts::domain::product::{parse_catalog, Product};

// Каталог вшивается в бандл на этапе сборки — бэкенда у витрины нет
const CATALOG_CSV: &str = include_str!("../../../data/catalog.csv");

/// Parses the bundled catalog into the product list.
///
/// Never fails: malformed rows are dropped by the parser, and an
/// unexpectedly empty catalog is only visible in the console log.
pub fn load_products() -> Vec<Product> {
    let products = parse_catalog(CATALOG_CSV);
    if products.is_empty() {
        log::error!("catalog: no products parsed from bundled data");
    } else {
        log::info!("catalog: loaded {} products", products.len());
    }
    products
}
