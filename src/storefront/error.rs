// storefront/error.rs - Error type for the fallible edges of the catalog
//
// The query engine itself cannot fail. Errors only come from turning
// outside input (ids, JSON catalogs, files) into typed values.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("unknown stock filter: {0}")]
    UnknownStockFilter(String),

    #[error("unknown sort option: {0}")]
    UnknownSortOption(String),

    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),

    #[error("product {id} lists tag {tag} more than once")]
    DuplicateTag { id: u32, tag: String },

    #[error("product {id} has rating {rating}, expected a value in [0, 5]")]
    RatingOutOfRange { id: u32, rating: String },

    #[error("product {id} has a rating that is not a finite number")]
    InvalidRating { id: u32 },

    #[error("catalog JSON has no 'products' array")]
    MissingProducts,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
