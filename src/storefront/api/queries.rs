// storefront/api/queries.rs - Catalog query engine
//
// Filtering and sorting over the in-memory product set.
//
// Philosophy: Pure functions that take the products and a FilterSpec,
// return a new ordered sequence. Nothing here mutates its inputs.

use std::cmp::Ordering;

use crate::storefront::model::*;

/// Whether a product satisfies every active constraint in `filters`.
///
/// Unset constraints (empty query, empty sets, missing bounds, `all`
/// stock) are skipped.
pub fn matches_filters(product: &Product, filters: &FilterSpec) -> bool {
    let query = filters.query.trim();
    if !query.is_empty() && !product.title.contains(query) {
        return false;
    }
    if !filters.categories.is_empty() && !filters.categories.contains(&product.category) {
        return false;
    }
    if !filters.tags.is_empty() && !product.has_any_tag(&filters.tags) {
        return false;
    }
    if filters.min_price.is_some_and(|min| product.price < min) {
        return false;
    }
    if filters.max_price.is_some_and(|max| product.price > max) {
        return false;
    }
    filters.stock.admits(product.in_stock)
}

/// Filter stage. Keeps catalog order.
pub fn filter_products<'a>(products: &'a [Product], filters: &FilterSpec) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_filters(p, filters))
        .collect()
}

fn compare(a: &Product, b: &Product, sort: SortOption) -> Ordering {
    match sort {
        SortOption::Popular | SortOption::RatingDesc => b.rating.cmp(&a.rating),
        SortOption::PriceAsc => a.price.cmp(&b.price),
        SortOption::PriceDesc => b.price.cmp(&a.price),
    }
}

/// Sort stage. `sort_by` is stable, so ties keep their filtered order.
pub fn sort_products(products: &mut [&Product], sort: SortOption) {
    products.sort_by(|a, b| compare(a, b, sort));
}

/// Filter then sort, borrowing from the catalog
pub fn search_products<'a>(products: &'a [Product], filters: &FilterSpec) -> Vec<&'a Product> {
    let mut results = filter_products(products, filters);
    sort_products(&mut results, filters.sort);
    tracing::debug!(
        "query engine: {} of {} products match (sort={})",
        results.len(),
        products.len(),
        filters.sort.as_str()
    );
    results
}

/// Per-category counts over `results`, in category order, zeros omitted
pub fn category_facets(results: &[&Product]) -> Vec<FacetCount> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let count = results.iter().filter(|p| p.category == category).count();
            (count > 0).then(|| FacetCount {
                value: category.as_str().to_string(),
                count,
            })
        })
        .collect()
}

/// Per-tag counts over `results`, in tag order, zeros omitted
pub fn tag_facets(results: &[&Product]) -> Vec<FacetCount> {
    Tag::ALL
        .into_iter()
        .filter_map(|tag| {
            let count = results.iter().filter(|p| p.tags.contains(&tag)).count();
            (count > 0).then(|| FacetCount {
                value: tag.as_str().to_string(),
                count,
            })
        })
        .collect()
}

/// Full search: ordered results plus facet counts
pub fn search_catalog(products: &[Product], filters: &FilterSpec) -> SearchResults {
    let matched = search_products(products, filters);

    SearchResults {
        total_count: matched.len(),
        category_facets: category_facets(&matched),
        tag_facets: tag_facets(&matched),
        results: matched.into_iter().cloned().collect(),
    }
}
