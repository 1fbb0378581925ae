// storefront/api/mod.rs - Catalog entry points
//
// - queries.rs: the filter/sort engine (pure functions)
// - catalog.rs: the validated product set, lookups, JSON loading
// - site.rs: process-wide document settings, set once at startup

pub mod catalog;
pub mod queries;
pub mod site;

pub use catalog::{Catalog, ProductImport};
