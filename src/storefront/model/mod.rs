// storefront/model/mod.rs - Shared data models for the catalog
//
// These types describe the product catalog and the user's current
// search/filter/sort selection. Everything here is plain data: the
// query engine reads it, the state controller replaces it.

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::storefront::error::CatalogError;

/// Product category (fixed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lighting,
    Wall,
    Floor,
    Furniture,
    Textile,
    Decor,
}

impl Category {
    /// Every category, in storefront display order
    pub const ALL: [Category; 6] = [
        Category::Lighting,
        Category::Wall,
        Category::Floor,
        Category::Furniture,
        Category::Textile,
        Category::Decor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lighting => "lighting",
            Category::Wall => "wall",
            Category::Floor => "floor",
            Category::Furniture => "furniture",
            Category::Textile => "textile",
            Category::Decor => "decor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Lighting => "روشنایی",
            Category::Wall => "دیواری",
            Category::Floor => "کفپوش",
            Category::Furniture => "مبلمان",
            Category::Textile => "پارچه و پرده",
            Category::Decor => "اکسسوری",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Product tag (fixed set)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Eco,
    Lux,
    Modern,
    Classic,
}

impl Tag {
    pub const ALL: [Tag; 4] = [Tag::Eco, Tag::Lux, Tag::Modern, Tag::Classic];

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Eco => "eco",
            Tag::Lux => "lux",
            Tag::Modern => "modern",
            Tag::Classic => "classic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tag::Eco => "دوست‌دار محیط‌زیست",
            Tag::Lux => "لاکچری",
            Tag::Modern => "مدرن",
            Tag::Classic => "کلاسیک",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Tag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownTag(s.to_string()))
    }
}

/// Stock availability filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockFilter {
    #[default]
    All,
    In,
    Out,
}

impl StockFilter {
    pub const ALL: [StockFilter; 3] = [StockFilter::All, StockFilter::In, StockFilter::Out];

    pub fn as_str(self) -> &'static str {
        match self {
            StockFilter::All => "all",
            StockFilter::In => "in",
            StockFilter::Out => "out",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockFilter::All => "همه",
            StockFilter::In => "موجود",
            StockFilter::Out => "ناموجود",
        }
    }

    /// Whether a product with the given availability passes this filter
    pub fn admits(self, in_stock: bool) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::In => in_stock,
            StockFilter::Out => !in_stock,
        }
    }
}

impl std::fmt::Display for StockFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StockFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockFilter::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownStockFilter(s.to_string()))
    }
}

/// Result ordering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// Rating stands in for popularity; there is no separate field
    #[default]
    #[serde(rename = "popular")]
    Popular,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 4] = [
        SortOption::Popular,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Popular => "popular",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::RatingDesc => "rating-desc",
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOption::Popular => write!(f, "محبوب‌ترین"),
            SortOption::PriceAsc => write!(f, "ارزان‌ترین"),
            SortOption::PriceDesc => write!(f, "گران‌ترین"),
            SortOption::RatingDesc => write!(f, "بالاترین امتیاز"),
        }
    }
}

impl FromStr for SortOption {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortOption(s.to_string()))
    }
}

/// A catalog product. Immutable once the catalog is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// Whole Toman, no minor unit
    pub price: u64,
    /// In [0, 5]
    pub rating: Decimal,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub in_stock: bool,
    pub image: String,
}

impl Product {
    pub fn has_any_tag(&self, wanted: &BTreeSet<Tag>) -> bool {
        self.tags.iter().any(|t| wanted.contains(t))
    }
}

/// Parse the text of a price field.
///
/// Accepts a whole non-negative number, with Persian or Arabic-Indic
/// digits allowed. Anything else (empty, non-numeric, negative,
/// fractional) means "no bound".
pub fn parse_price_input(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let ascii: String = trimmed
        .chars()
        .map(|c| match c {
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            other => other,
        })
        .collect();

    if !ascii.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    ascii.parse::<u64>().ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPriceBound {
    Whole(u64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// A price bound from a FilterSpec document. Whole numbers and numeric
/// text are kept; anything else (negative, fractional, null, garbage)
/// leaves the bound unset instead of failing the whole document.
fn lenient_price_bound<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawPriceBound::deserialize(deserializer)? {
        RawPriceBound::Whole(value) => Some(value),
        RawPriceBound::Text(text) => parse_price_input(&text),
        RawPriceBound::Other(_) => None,
    })
}

/// The complete search/filter/sort selection at a point in time.
///
/// Treated as an immutable value: every `with_*` method returns a new
/// spec and leaves `self` untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterSpec {
    pub query: String,
    pub categories: BTreeSet<Category>,
    pub tags: BTreeSet<Tag>,
    #[serde(deserialize_with = "lenient_price_bound")]
    pub min_price: Option<u64>,
    #[serde(deserialize_with = "lenient_price_bound")]
    pub max_price: Option<u64>,
    pub stock: StockFilter,
    pub sort: SortOption,
}

impl FilterSpec {
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..self.clone()
        }
    }

    /// Adds the category if absent, removes it if present
    pub fn with_category_toggled(&self, category: Category) -> Self {
        let mut categories = self.categories.clone();
        if !categories.remove(&category) {
            categories.insert(category);
        }
        Self {
            categories,
            ..self.clone()
        }
    }

    pub fn with_tag_toggled(&self, tag: Tag) -> Self {
        let mut tags = self.tags.clone();
        if !tags.remove(&tag) {
            tags.insert(tag);
        }
        Self {
            tags,
            ..self.clone()
        }
    }

    pub fn with_price_bounds(&self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        Self {
            min_price,
            max_price,
            ..self.clone()
        }
    }

    pub fn with_stock(&self, stock: StockFilter) -> Self {
        Self {
            stock,
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortOption) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// True when no constraint is active (sort is not a constraint)
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.categories.is_empty()
            && self.tags.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.stock == StockFilter::All
    }
}

/// Facet count for filters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Search response with results and facets
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: Vec<Product>,
    pub total_count: usize,
    pub category_facets: Vec<FacetCount>,
    pub tag_facets: Vec<FacetCount>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn ids(&self) -> Vec<u32> {
        self.results.iter().map(|p| p.id).collect()
    }
}
