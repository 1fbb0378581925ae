// storefront/mod.rs - Root module for the storefront catalog
//
// Architecture:
// - model/: Products, the fixed category/tag sets, FilterSpec
// - api/: Query engine, Catalog wrapper, site settings
// - state/: Filter state controller (the engine's caller)
// - display.rs: Prices, stars and badges for product cards
// - error.rs: Errors from parsing and loading outside input

pub mod api;
pub mod display;
pub mod error;
pub mod model;
pub mod state;

pub use api::Catalog;
pub use error::CatalogError;
pub use state::FilterState;
