// lib.rs - Root module for the neo_catalog library
//
// The storefront catalog of Neo Design Group: products, the filter/sort
// engine, and the state that drives it. Rendering lives elsewhere.

/// Built-in sample product data
pub mod fixtures;

/// Catalog model, query engine and filter state
pub mod storefront;

/// Environment-driven settings for the demo binary
pub mod config;

pub use storefront::api::queries::search_catalog;
pub use storefront::model::{
    Category, FacetCount, FilterSpec, Product, SearchResults, SortOption, StockFilter, Tag,
};
pub use storefront::{Catalog, CatalogError, FilterState};
