// fixtures/mod.rs - Built-in product data
//
// The storefront ships with a fixed sample catalog. It is defined once
// here and reused by the Catalog, the demo binary and the tests.

pub mod products;

pub use products::NeoDesignProducts;

use crate::storefront::model::Product;

/// A source of statically defined products
pub trait CatalogFixture {
    /// The products, in catalog order
    fn products() -> Vec<Product>;
}
