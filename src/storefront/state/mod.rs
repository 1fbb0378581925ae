// storefront/state/mod.rs - Filter state controller
//
// Owns the current FilterSpec and the transient panel toggles of the
// storefront (filter drawer, mobile menu, drawer sections). It is the
// only caller of the query engine.
//
// Every filter operation swaps in a new FilterSpec value; the old one is
// never edited in place.

use serde::{Deserialize, Serialize};

use crate::storefront::api::Catalog;
use crate::storefront::model::*;

pub use crate::storefront::model::parse_price_input;

/// Collapsible sections inside the filter drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawerSection {
    Categories,
    Price,
    Tags,
    Stock,
}

/// Which drawer sections are expanded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerSections {
    pub categories: bool,
    pub price: bool,
    pub tags: bool,
    pub stock: bool,
}

impl Default for DrawerSections {
    fn default() -> Self {
        Self {
            categories: true,
            price: true,
            tags: false,
            stock: false,
        }
    }
}

impl DrawerSections {
    pub fn is_expanded(&self, section: DrawerSection) -> bool {
        match section {
            DrawerSection::Categories => self.categories,
            DrawerSection::Price => self.price,
            DrawerSection::Tags => self.tags,
            DrawerSection::Stock => self.stock,
        }
    }

    pub fn toggled(self, section: DrawerSection) -> Self {
        match section {
            DrawerSection::Categories => Self { categories: !self.categories, ..self },
            DrawerSection::Price => Self { price: !self.price, ..self },
            DrawerSection::Tags => Self { tags: !self.tags, ..self },
            DrawerSection::Stock => Self { stock: !self.stock, ..self },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    filters: FilterSpec,
    drawer_open: bool,
    menu_open: bool,
    sections: DrawerSections,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing spec, e.g. one restored from a URL or JSON
    pub fn with_filters(filters: FilterSpec) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    /// Replace the whole spec
    pub fn replace(&mut self, filters: FilterSpec) {
        tracing::debug!("filter state replaced: {:?}", filters);
        self.filters = filters;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.replace(self.filters.with_query(query));
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.replace(self.filters.with_category_toggled(category));
    }

    pub fn toggle_tag(&mut self, tag: Tag) {
        self.replace(self.filters.with_tag_toggled(tag));
    }

    pub fn set_price_bounds(&mut self, min_price: Option<u64>, max_price: Option<u64>) {
        self.replace(self.filters.with_price_bounds(min_price, max_price));
    }

    /// Set the lower bound from raw field text; invalid text clears it
    pub fn set_min_price_input(&mut self, input: &str) {
        let max = self.filters.max_price;
        self.set_price_bounds(parse_price_input(input), max);
    }

    /// Set the upper bound from raw field text; invalid text clears it
    pub fn set_max_price_input(&mut self, input: &str) {
        let min = self.filters.min_price;
        self.set_price_bounds(min, parse_price_input(input));
    }

    pub fn set_stock_filter(&mut self, stock: StockFilter) {
        self.replace(self.filters.with_stock(stock));
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.replace(self.filters.with_sort(sort));
    }

    /// Restore the default spec. Panel toggles are left alone.
    pub fn reset_all(&mut self) {
        self.replace(FilterSpec::default());
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub fn open_drawer(&mut self) {
        self.drawer_open = true;
    }

    pub fn close_drawer(&mut self) {
        self.drawer_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn sections(&self) -> DrawerSections {
        self.sections
    }

    pub fn toggle_section(&mut self, section: DrawerSection) {
        self.sections = self.sections.toggled(section);
    }

    /// Run the current spec against a catalog
    pub fn results(&self, catalog: &Catalog) -> SearchResults {
        catalog.search(&self.filters)
    }
}
