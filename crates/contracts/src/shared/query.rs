//! Query state driving the catalog views

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display label of [`CategoryFilter::All`]
pub const ALL_PRODUCTS_LABEL: &str = "All Products";

/// Ordering of the product list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Cache order as returned by the API
    #[default]
    Relevance,
    /// Alphabetical by title
    Name,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Name => "name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::Name => "Name (A-Z)",
        }
    }

    pub fn all() -> [SortMode; 2] {
        [SortMode::Relevance, SortMode::Name]
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relevance" | "" => Ok(SortMode::Relevance),
            "name" => Ok(SortMode::Name),
            other => Err(format!("Unknown sort mode: {other}")),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection of the catalog
///
/// `All` is a distinct variant, so a real category whose name equals the
/// "All Products" label is still filterable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn only(name: impl Into<String>) -> Self {
        CategoryFilter::Only(name.into())
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_PRODUCTS_LABEL,
            CategoryFilter::Only(name) => name,
        }
    }

    /// Category name for the server query, `None` for no filter
    pub fn as_name(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(name) => Some(name),
        }
    }

    /// Exact, case-sensitive match against a product's category
    pub fn admits(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => category == Some(name.as_str()),
        }
    }
}

/// Landing page toggle between the full list and the featured slice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogView {
    #[default]
    Featured,
    All,
}

/// Optional server-side query for `GET /products`
///
/// The API may pre-filter with these; the client still filters the cache
/// itself, so results never depend on the server honouring them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ProductQuery {
    pub fn from_state(category: &CategoryFilter, search_term: &str, sort: SortMode) -> Self {
        let q = search_term.trim();
        Self {
            category: category.as_name().map(str::to_string),
            q: (!q.is_empty()).then(|| q.to_string()),
            sort: (sort != SortMode::Relevance).then(|| sort.as_str().to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.q.is_none() && self.sort.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parse() {
        assert_eq!("name".parse::<SortMode>(), Ok(SortMode::Name));
        assert_eq!("Relevance".parse::<SortMode>(), Ok(SortMode::Relevance));
        assert_eq!("".parse::<SortMode>(), Ok(SortMode::Relevance));
        assert!("price".parse::<SortMode>().is_err());
        assert_eq!(SortMode::Name.to_string(), "name");
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = CategoryFilter::only("Industrial Chemicals");
        assert!(filter.admits(Some("Industrial Chemicals")));
        assert!(!filter.admits(Some("Industrial Chemicals Extra")));
        assert!(!filter.admits(Some("industrial chemicals")));
        assert!(!filter.admits(None));
        assert!(CategoryFilter::All.admits(None));
    }

    #[test]
    fn test_real_category_named_like_the_label() {
        let filter = CategoryFilter::only(ALL_PRODUCTS_LABEL);
        assert_ne!(filter, CategoryFilter::All);
        assert!(!filter.admits(Some("Solvents")));
        assert_eq!(filter.label(), CategoryFilter::All.label());
    }

    #[test]
    fn test_product_query_from_state() {
        let query = ProductQuery::from_state(&CategoryFilter::All, "  ", SortMode::Relevance);
        assert!(query.is_empty());

        let query = ProductQuery::from_state(&CategoryFilter::only("Solvents"), " aci ", SortMode::Name);
        assert_eq!(query.category.as_deref(), Some("Solvents"));
        assert_eq!(query.q.as_deref(), Some("aci"));
        assert_eq!(query.sort.as_deref(), Some("name"));
    }
}
