// common/mod.rs - Shared test helpers
//
// Every integration test runs against the built-in sample catalog, so
// the expected ids below can be checked by hand against the fixtures.

#![allow(dead_code)]

use neo_catalog::{Catalog, FilterSpec, Product};

pub fn sample_catalog() -> Catalog {
    Catalog::sample()
}

pub fn ids(products: &[Product]) -> Vec<u32> {
    products.iter().map(|p| p.id).collect()
}

pub fn search_ids(catalog: &Catalog, filters: &FilterSpec) -> Vec<u32> {
    ids(&catalog.search(filters).results)
}

/// Every spec we want the property checks to run over
pub fn assorted_specs() -> Vec<FilterSpec> {
    use neo_catalog::{Category, SortOption, StockFilter, Tag};

    let base = FilterSpec::default();
    vec![
        base.clone(),
        base.with_category_toggled(Category::Textile),
        base.with_category_toggled(Category::Lighting)
            .with_category_toggled(Category::Floor),
        base.with_tag_toggled(Tag::Lux),
        base.with_tag_toggled(Tag::Eco).with_tag_toggled(Tag::Classic),
        base.with_price_bounds(Some(1_850_000), None),
        base.with_price_bounds(None, Some(5_200_000)),
        base.with_price_bounds(Some(1_000_000), Some(10_000_000)),
        base.with_stock(StockFilter::In),
        base.with_stock(StockFilter::Out),
        base.with_sort(SortOption::PriceAsc),
        base.with_sort(SortOption::PriceDesc),
        base.with_sort(SortOption::RatingDesc),
        base.with_query("چراغ"),
        base.with_tag_toggled(Tag::Modern)
            .with_stock(StockFilter::In)
            .with_sort(SortOption::PriceDesc),
    ]
}
