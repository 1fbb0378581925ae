// Query engine behavior against the sample catalog
//
// Covers the filter semantics per facet, sort orders, stability and
// the concrete storefront scenarios.

mod common;

use std::collections::BTreeSet;

use common::*;
use neo_catalog::storefront::api::queries::{filter_products, search_products, sort_products};
use neo_catalog::{search_catalog, Category, FacetCount, FilterSpec, Product, SortOption, StockFilter, Tag};
use rust_decimal::Decimal;

#[test]
fn test_default_spec_returns_everything_by_rating() {
    let catalog = sample_catalog();
    let results = catalog.search(&FilterSpec::default());

    assert_eq!(results.total_count, 8);
    // 4.9, 4.7, 4.6, 4.4, 4.3, 4.2, 4.1, 4.0
    assert_eq!(ids(&results.results), vec![2, 7, 1, 4, 8, 3, 5, 6]);
    for pair in results.results.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn test_lighting_by_price_ascending() {
    let catalog = sample_catalog();
    let filters = FilterSpec::default()
        .with_category_toggled(Category::Lighting)
        .with_stock(StockFilter::All)
        .with_sort(SortOption::PriceAsc);

    let results = catalog.search(&filters);
    assert_eq!(ids(&results.results), vec![8, 1]);
    assert_eq!(results.results[0].price, 1_450_000);
    assert_eq!(results.results[1].price, 9_800_000);
}

#[test]
fn test_eco_in_stock_excludes_the_sofa() {
    let catalog = sample_catalog();
    let filters = FilterSpec::default()
        .with_tag_toggled(Tag::Eco)
        .with_stock(StockFilter::In);

    let found: BTreeSet<u32> = search_ids(&catalog, &filters).into_iter().collect();
    assert_eq!(found, BTreeSet::from([5, 8]));
}

#[test]
fn test_query_rug() {
    let catalog = sample_catalog();
    let filters = FilterSpec::default().with_query("فرش");
    assert_eq!(search_ids(&catalog, &filters), vec![2]);
}

#[test]
fn test_query_without_match() {
    let catalog = sample_catalog();
    let results = catalog.search(&FilterSpec::default().with_query("میز"));
    assert!(results.is_empty());
    assert_eq!(results.total_count, 0);
    assert!(results.category_facets.is_empty());
    assert!(results.tag_facets.is_empty());
}

#[test]
fn test_category_constraint_holds() {
    let catalog = sample_catalog();
    for spec in assorted_specs().into_iter().filter(|s| !s.categories.is_empty()) {
        for product in catalog.search(&spec).results {
            assert!(spec.categories.contains(&product.category), "{spec:?} let {} through", product.id);
        }
    }
}

#[test]
fn test_tag_constraint_holds() {
    let catalog = sample_catalog();
    for spec in assorted_specs().into_iter().filter(|s| !s.tags.is_empty()) {
        for product in catalog.search(&spec).results {
            assert!(product.tags.iter().any(|t| spec.tags.contains(t)));
        }
    }
}

#[test]
fn test_price_bounds_hold() {
    let catalog = sample_catalog();
    for spec in assorted_specs() {
        for product in catalog.search(&spec).results {
            if let Some(min) = spec.min_price {
                assert!(product.price >= min);
            }
            if let Some(max) = spec.max_price {
                assert!(product.price <= max);
            }
        }
    }
}

#[test]
fn test_stock_filter_modes() {
    let catalog = sample_catalog();

    let in_stock = catalog.search(&FilterSpec::default().with_stock(StockFilter::In));
    assert_eq!(in_stock.total_count, 7);
    assert!(in_stock.results.iter().all(|p| p.in_stock));

    let out_of_stock = catalog.search(&FilterSpec::default().with_stock(StockFilter::Out));
    assert_eq!(ids(&out_of_stock.results), vec![4]);

    let all = catalog.search(&FilterSpec::default().with_stock(StockFilter::All));
    assert!(all.results.iter().any(|p| p.in_stock));
    assert!(all.results.iter().any(|p| !p.in_stock));
}

#[test]
fn test_price_sorts() {
    let catalog = sample_catalog();

    let asc = search_ids(&catalog, &FilterSpec::default().with_sort(SortOption::PriceAsc));
    assert_eq!(asc, vec![6, 8, 3, 7, 5, 1, 4, 2]);

    let desc = search_ids(&catalog, &FilterSpec::default().with_sort(SortOption::PriceDesc));
    assert_eq!(desc, vec![2, 4, 1, 5, 7, 3, 8, 6]);
}

#[test]
fn test_popular_and_rating_desc_agree() {
    let catalog = sample_catalog();
    let popular = search_ids(&catalog, &FilterSpec::default().with_sort(SortOption::Popular));
    let rating = search_ids(&catalog, &FilterSpec::default().with_sort(SortOption::RatingDesc));
    assert_eq!(popular, rating);
}

fn priced(id: u32, price: u64) -> Product {
    Product {
        id,
        title: format!("کالا {id}"),
        price,
        rating: Decimal::new(40 + i64::from(id), 1),
        category: Category::Decor,
        tags: vec![Tag::Modern],
        in_stock: true,
        image: String::new(),
    }
}

#[test]
fn test_price_sort_is_stable() {
    let products = vec![
        priced(1, 500),
        priced(2, 100),
        priced(3, 500),
        priced(4, 100),
        priced(5, 300),
        priced(6, 500),
    ];
    let filters = FilterSpec::default().with_sort(SortOption::PriceAsc);
    let ids: Vec<u32> = search_products(&products, &filters).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![2, 4, 5, 1, 3, 6]);

    let desc = FilterSpec::default().with_sort(SortOption::PriceDesc);
    let ids: Vec<u32> = search_products(&products, &desc).iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3, 6, 5, 2, 4]);
}

#[test]
fn test_sort_after_filter_keeps_filtered_order_for_ties() {
    let products = vec![priced(1, 200), priced(2, 100), priced(3, 200), priced(4, 200)];
    let filters = FilterSpec::default().with_price_bounds(Some(150), None);

    let mut filtered = filter_products(&products, &filters);
    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 4]);

    sort_products(&mut filtered, SortOption::PriceAsc);
    assert_eq!(filtered.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3, 4]);
}

#[test]
fn test_search_is_idempotent() {
    let catalog = sample_catalog();
    for spec in assorted_specs() {
        let first = catalog.search(&spec);
        let second = catalog.search(&spec);
        assert_eq!(first, second);
    }
}

#[test]
fn test_search_leaves_inputs_untouched() {
    let catalog = sample_catalog();
    let before = catalog.products().to_vec();
    let spec = FilterSpec::default().with_sort(SortOption::PriceAsc);
    let spec_before = spec.clone();

    let _ = search_catalog(catalog.products(), &spec);

    assert_eq!(catalog.products(), before.as_slice());
    assert_eq!(spec, spec_before);
}

#[test]
fn test_facets_describe_results() {
    let catalog = sample_catalog();
    let results = catalog.search(&FilterSpec::default().with_stock(StockFilter::In));

    assert_eq!(
        results.category_facets,
        vec![
            FacetCount { value: "lighting".to_string(), count: 2 },
            FacetCount { value: "wall".to_string(), count: 1 },
            FacetCount { value: "floor".to_string(), count: 1 },
            FacetCount { value: "textile".to_string(), count: 2 },
            FacetCount { value: "decor".to_string(), count: 1 },
        ]
    );
    let modern = results.tag_facets.iter().find(|f| f.value == "modern").map(|f| f.count);
    assert_eq!(modern, Some(6));
}

#[test]
fn test_combined_facets() {
    let catalog = sample_catalog();
    let filters = FilterSpec::default()
        .with_category_toggled(Category::Textile)
        .with_category_toggled(Category::Decor)
        .with_tag_toggled(Tag::Lux)
        .with_price_bounds(Some(1_000_000), None)
        .with_sort(SortOption::PriceAsc);

    assert_eq!(search_ids(&catalog, &filters), vec![7, 2]);
}
