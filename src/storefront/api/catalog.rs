// storefront/api/catalog.rs - The validated product set and its entry points
//
// These are thin wrappers around the query engine, in the same spirit as
// a server function layer:
// - Catalog holds products that passed validation
// - All filtering/sorting logic lives in queries.rs (pure functions)
// - Logging happens here, at the boundary

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::queries;
use crate::fixtures::{CatalogFixture, NeoDesignProducts};
use crate::storefront::error::CatalogError;
use crate::storefront::model::*;

/// Product record as found in a JSON catalog file (flexible schema)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImport {
    pub id: u32,
    pub title: String,
    pub price: u64,
    pub rating: f64,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub in_stock: Option<bool>,
    pub image: Option<String>,
}

impl TryFrom<ProductImport> for Product {
    type Error = CatalogError;

    fn try_from(record: ProductImport) -> Result<Self, Self::Error> {
        if !record.rating.is_finite() {
            return Err(CatalogError::InvalidRating { id: record.id });
        }
        // checked on the raw value so nothing near the edge rounds into range
        if !(0.0..=5.0).contains(&record.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: record.id,
                rating: record.rating.to_string(),
            });
        }
        let rating = Decimal::from_f64(record.rating)
            .ok_or(CatalogError::InvalidRating { id: record.id })?;

        Ok(Product {
            id: record.id,
            title: record.title,
            price: record.price,
            rating,
            category: record.category,
            tags: record.tags,
            in_stock: record.in_stock.unwrap_or(true),
            image: record.image.unwrap_or_default(),
        })
    }
}

/// Either a bare array or `{ "products": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<ProductImport>),
    Wrapped { products: Option<Vec<ProductImport>> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids, duplicate tags on a
    /// product, and ratings outside [0, 5]
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let max_rating = Decimal::from(5);
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
            if product.rating < Decimal::ZERO || product.rating > max_rating {
                return Err(CatalogError::RatingOutOfRange {
                    id: product.id,
                    rating: product.rating.to_string(),
                });
            }
            let mut tags = HashSet::with_capacity(product.tags.len());
            if let Some(dup) = product.tags.iter().find(|t| !tags.insert(**t)) {
                return Err(CatalogError::DuplicateTag {
                    id: product.id,
                    tag: dup.as_str().to_string(),
                });
            }
        }

        tracing::debug!("Catalog built with {} products", products.len());
        Ok(Self { products })
    }

    /// The built-in Neo Design Group sample set
    pub fn sample() -> Self {
        Self {
            products: NeoDesignProducts::products(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records = match serde_json::from_str::<CatalogDocument>(json) {
            Ok(CatalogDocument::Bare(records)) => records,
            Ok(CatalogDocument::Wrapped { products: Some(records) }) => records,
            Ok(CatalogDocument::Wrapped { products: None }) => {
                return Err(CatalogError::MissingProducts)
            }
            // untagged enums swallow the real error, so parse again for a useful message
            Err(_) => {
                let value: serde_json::Value = serde_json::from_str(json)?;
                let records = match value.get("products") {
                    Some(products) => products.clone(),
                    None if value.is_array() => value,
                    None => return Err(CatalogError::MissingProducts),
                };
                serde_json::from_value::<Vec<ProductImport>>(records)?
            }
        };

        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Loaded {} products from JSON", products.len());
        Self::new(products)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::info!("Reading catalog from {}", path.display());

        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a single product, e.g. for a detail view
    pub fn get_product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Run the query engine over this catalog
    pub fn search(&self, filters: &FilterSpec) -> SearchResults {
        tracing::info!(
            "Search request: query='{}', categories={:?}, tags={:?}, price={:?}..{:?}, stock={}, sort={}",
            filters.query,
            filters.categories,
            filters.tags,
            filters.min_price,
            filters.max_price,
            filters.stock.as_str(),
            filters.sort.as_str()
        );

        let results = queries::search_catalog(&self.products, filters);

        if results.is_empty() {
            tracing::info!("Search returned no products");
        } else {
            tracing::info!("Search successful: found {} results", results.total_count);
        }
        results
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
