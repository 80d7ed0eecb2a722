//! Derived views over the cached catalog lists
//!
//! Every function here is pure: it borrows the cache, never mutates it and
//! returns a fresh `Vec` in the order the UI must render. No function fails;
//! an empty cache or no matches simply yields an empty list. Missing optional
//! fields (`cas_number`, `category`) never match and never panic.
//!
//! All catalog pages and the admin panel call these instead of filtering
//! inline, so the storefront and the admin tables always agree.

use std::cmp::Ordering;

use crate::domain::a001_category::Category;
use crate::domain::a002_product::Product;
use crate::domain::a003_contact_request::ContactRequest;
use crate::shared::query::{CategoryFilter, SortMode};

/// Featured slice on the home page
pub const HOME_FEATURED_LIMIT: usize = 6;
/// Featured slice on the catalog landing view
pub const LANDING_FEATURED_LIMIT: usize = 8;

/// Lowercased, trimmed search term
///
/// `None` when the term is blank, meaning "no text filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn parse(term: &str) -> Option<Needle> {
        let term = term.trim();
        if term.is_empty() {
            None
        } else {
            Some(Needle(term.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring test
    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    /// Absent fields never match
    pub fn found_in_opt(&self, haystack: Option<&str>) -> bool {
        haystack.is_some_and(|h| self.found_in(h))
    }
}

/// Types that take part in the free-text filter
pub trait Searchable {
    /// Fields the search term is matched against
    fn search_fields(&self) -> Vec<Option<&str>>;

    fn matches_filter(&self, needle: &Needle) -> bool {
        self.search_fields()
            .into_iter()
            .any(|field| needle.found_in_opt(field))
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            self.cas_number.as_deref(),
            self.category.as_deref(),
        ]
    }
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), Some(self.slug.as_str())]
    }
}

impl Searchable for ContactRequest {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.mobile_number.as_str()),
            Some(self.country_code.as_str()),
        ]
    }
}

/// Title/CAS match used by the featured slice and the search suggestions.
/// Category is deliberately not examined here.
fn matches_title_or_cas(product: &Product, needle: &Needle) -> bool {
    needle.found_in(&product.title) || needle.found_in_opt(product.cas_number.as_deref())
}

/// Keep the items matching `search_term`, in cache order
pub fn filter_list<T: Searchable + Clone>(items: &[T], search_term: &str) -> Vec<T> {
    match Needle::parse(search_term) {
        None => items.to_vec(),
        Some(needle) => items
            .iter()
            .filter(|item| item.matches_filter(&needle))
            .cloned()
            .collect(),
    }
}

/// Locale-aware title ordering
///
/// Case-insensitive first; on a tie lowercase sorts before uppercase, then
/// raw code points decide so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Main catalog list
///
/// 1. keep products of the selected category (exact, case-sensitive);
/// 2. keep products whose title, CAS number or category contain the term;
/// 3. `SortMode::Name` stable-sorts by title, `Relevance` keeps cache order.
pub fn filter_products(
    products: &[Product],
    category: &CategoryFilter,
    search_term: &str,
    sort: SortMode,
) -> Vec<Product> {
    let needle = Needle::parse(search_term);

    let mut list: Vec<Product> = products
        .iter()
        .filter(|p| category.admits(p.category.as_deref()))
        .filter(|p| needle.as_ref().map_or(true, |n| p.matches_filter(n)))
        .cloned()
        .collect();

    if sort == SortMode::Name {
        list.sort_by(|a, b| locale_compare(&a.title, &b.title));
    }

    list
}

/// Featured slice: the first `limit` products, or the first `limit` title/CAS
/// matches when a term is given. Category selection is ignored.
pub fn featured_products(products: &[Product], search_term: &str, limit: usize) -> Vec<Product> {
    match Needle::parse(search_term) {
        None => products.iter().take(limit).cloned().collect(),
        Some(needle) => products
            .iter()
            .filter(|p| matches_title_or_cas(p, &needle))
            .take(limit)
            .cloned()
            .collect(),
    }
}

/// Typeahead under the search box: every title/CAS match, empty for a blank term
pub fn suggested_products(products: &[Product], search_term: &str) -> Vec<Product> {
    match Needle::parse(search_term) {
        None => Vec::new(),
        Some(needle) => products
            .iter()
            .filter(|p| matches_title_or_cas(p, &needle))
            .cloned()
            .collect(),
    }
}

/// Admin category table: name/slug match, cache order
pub fn filter_categories(categories: &[Category], search_term: &str) -> Vec<Category> {
    filter_list(categories, search_term)
}

/// Admin contact-request table: mobile number or country code match, cache order
///
/// The denormalized product title is shown in the table but never searched.
pub fn filter_contact_requests(
    requests: &[ContactRequest],
    search_term: &str,
) -> Vec<ContactRequest> {
    filter_list(requests, search_term)
}

/// Catalog sidebar: "All Products" followed by each cached category name
pub fn category_options(categories: &[Category]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            categories
                .iter()
                .map(|c| CategoryFilter::Only(c.name.clone())),
        )
        .collect()
}

/// Open vs completed counters for the triage header
pub fn contact_request_counts(requests: &[ContactRequest]) -> (usize, usize) {
    let done = requests.iter().filter(|r| r.complete).count();
    (requests.len() - done, done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, cas: Option<&str>, category: Option<&str>) -> Product {
        Product {
            id,
            title: title.to_string(),
            cas_number: cas.map(str::to_string),
            image_url: String::new(),
            description: String::new(),
            category: category.map(str::to_string),
            category_entity: None,
            slug: None,
            anchor: None,
        }
    }

    fn acid_and_base() -> Vec<Product> {
        vec![
            product(1, "Acid A", Some("123"), Some("X")),
            product(2, "Base B", Some("456"), Some("Y")),
        ]
    }

    fn titles(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_every_match_contains_term() {
        let products = vec![
            product(1, "Acetic Acid", Some("64-19-7"), Some("Solvents")),
            product(2, "Toluene", Some("108-88-3"), Some("Solvents")),
            product(3, "Sodium Acetate", None, Some("Laboratory Chemical")),
            product(4, "Benzene", Some("71-43-2"), None),
            product(5, "Acetone", Some("67-64-1"), Some("Solvents")),
        ];
        for term in ["ace", "SOLV", "64", "lab", "zzz", " 7 "] {
            let needle = Needle::parse(term).unwrap();
            let result = filter_products(&products, &CategoryFilter::All, term, SortMode::Relevance);
            for p in &result {
                assert!(
                    needle.found_in(&p.title)
                        || needle.found_in_opt(p.cas_number.as_deref())
                        || needle.found_in_opt(p.category.as_deref()),
                    "{} does not contain {term}",
                    p.title
                );
            }
        }
    }

    #[test]
    fn test_empty_cache_yields_empty() {
        for sort in SortMode::all() {
            assert!(filter_products(&[], &CategoryFilter::All, "", sort).is_empty());
            assert!(filter_products(&[], &CategoryFilter::only("X"), "acid", sort).is_empty());
        }
        assert!(featured_products(&[], "", HOME_FEATURED_LIMIT).is_empty());
        assert!(filter_categories(&[], "x").is_empty());
        assert!(filter_contact_requests(&[], "x").is_empty());
    }

    #[test]
    fn test_name_sort_is_idempotent() {
        let products = vec![
            product(1, "toluene", None, None),
            product(2, "Acetone", None, None),
            product(3, "acetone", None, None),
            product(4, "Benzene", None, None),
        ];
        let once = filter_products(&products, &CategoryFilter::All, "", SortMode::Name);
        let twice = filter_products(&once, &CategoryFilter::All, "", SortMode::Name);
        assert_eq!(once, twice);
        assert_eq!(titles(&once), vec!["acetone", "Acetone", "Benzene", "toluene"]);
    }

    #[test]
    fn test_featured_respects_limit() {
        let products: Vec<Product> = (1..=20)
            .map(|i| product(i, &format!("Acid {i}"), None, None))
            .collect();
        for limit in [0, 1, HOME_FEATURED_LIMIT, LANDING_FEATURED_LIMIT, 50] {
            assert!(featured_products(&products, "", limit).len() <= limit);
            assert!(featured_products(&products, "acid", limit).len() <= limit);
        }
        assert_eq!(featured_products(&products, "", HOME_FEATURED_LIMIT).len(), 6);
        assert_eq!(featured_products(&products[..3], "", LANDING_FEATURED_LIMIT).len(), 3);
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let products = vec![
            product(1, "Phenol", None, Some("Industrial Chemicals Extra")),
            product(2, "Xylene", None, Some("Industrial Chemicals")),
        ];
        let result = filter_products(
            &products,
            &CategoryFilter::only("Industrial Chemicals"),
            "",
            SortMode::Relevance,
        );
        assert_eq!(titles(&result), vec!["Xylene"]);
    }

    #[test]
    fn test_title_substring_match() {
        let result = filter_products(&acid_and_base(), &CategoryFilter::All, "aci", SortMode::Relevance);
        assert_eq!(titles(&result), vec!["Acid A"]);
    }

    #[test]
    fn test_category_only() {
        let result = filter_products(&acid_and_base(), &CategoryFilter::only("Y"), "", SortMode::Relevance);
        assert_eq!(titles(&result), vec!["Base B"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut products = acid_and_base();
        products.reverse();
        let result = filter_products(&products, &CategoryFilter::All, "", SortMode::Name);
        assert_eq!(titles(&result), vec!["Acid A", "Base B"]);
    }

    #[test]
    fn test_missing_cas_number_does_not_match() {
        let products = vec![
            product(1, "Mystery Salt", None, None),
            product(2, "Reagent 123", None, Some("Lab")),
        ];
        let result = filter_products(&products, &CategoryFilter::All, "123", SortMode::Relevance);
        assert_eq!(titles(&result), vec!["Reagent 123"]);
    }

    #[test]
    fn test_relevance_keeps_cache_order_and_input_untouched() {
        let products = vec![
            product(3, "Zinc", None, Some("X")),
            product(1, "Acid", None, Some("X")),
            product(2, "Mercury", None, Some("X")),
        ];
        let before = products.clone();
        let result = filter_products(&products, &CategoryFilter::only("X"), "", SortMode::Relevance);
        assert_eq!(titles(&result), vec!["Zinc", "Acid", "Mercury"]);
        assert_eq!(products, before);
    }

    #[test]
    fn test_search_term_is_trimmed_and_case_insensitive() {
        let result = filter_products(&acid_and_base(), &CategoryFilter::All, "  BASE ", SortMode::Relevance);
        assert_eq!(titles(&result), vec!["Base B"]);
        let result = filter_products(&acid_and_base(), &CategoryFilter::All, "   ", SortMode::Relevance);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_featured_ignores_category_field_and_selection() {
        let products = vec![
            product(1, "Acid A", None, Some("Solvents")),
            product(2, "Base B", Some("777"), Some("Y")),
        ];
        assert!(featured_products(&products, "solv", LANDING_FEATURED_LIMIT).is_empty());
        let result = featured_products(&products, "777", LANDING_FEATURED_LIMIT);
        assert_eq!(titles(&result), vec!["Base B"]);
    }

    #[test]
    fn test_suggestions() {
        assert!(suggested_products(&acid_and_base(), "").is_empty());
        let result = suggested_products(&acid_and_base(), "45");
        assert_eq!(titles(&result), vec!["Base B"]);
    }

    #[test]
    fn test_filter_categories_by_name_or_slug() {
        let categories = vec![
            Category::new(1, "Industrial Chemicals"),
            Category {
                id: 2,
                name: "Lab".into(),
                slug: "laboratory-chemical".into(),
                url: String::new(),
            },
        ];
        let names = |list: Vec<Category>| list.into_iter().map(|c| c.name).collect::<Vec<_>>();
        assert_eq!(names(filter_categories(&categories, "INDUS")), vec!["Industrial Chemicals"]);
        assert_eq!(names(filter_categories(&categories, "oratory")), vec!["Lab"]);
        assert_eq!(filter_categories(&categories, "").len(), 2);
    }

    #[test]
    fn test_filter_contact_requests() {
        let request = |id: i64, code: &str, number: &str, complete: bool| ContactRequest {
            id: Some(id),
            country_code: code.into(),
            mobile_number: number.into(),
            product_id: None,
            product: None,
            complete,
            created_at: None,
        };
        let requests = vec![
            request(1, "+91", "9876543210", false),
            request(2, "+44", "7700900123", true),
        ];
        let result = filter_contact_requests(&requests, "+44");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, Some(2));
        assert_eq!(filter_contact_requests(&requests, "98765").len(), 1);
        assert_eq!(contact_request_counts(&requests), (1, 1));
    }

    #[test]
    fn test_contact_requests_ignore_product_title() {
        let request = ContactRequest {
            id: Some(1),
            country_code: "+91".into(),
            mobile_number: "9876543210".into(),
            product_id: Some(7),
            product: Some("Acetic Acid".into()),
            complete: false,
            created_at: None,
        };
        assert!(filter_contact_requests(std::slice::from_ref(&request), "acid").is_empty());
        assert_eq!(filter_contact_requests(&[request], "+91").len(), 1);
    }

    #[test]
    fn test_category_options() {
        let options = category_options(&[Category::new(1, "Solvents"), Category::new(2, "All Products")]);
        assert_eq!(options.len(), 3);
        assert_eq!(options[0], CategoryFilter::All);
        assert_eq!(options[1], CategoryFilter::only("Solvents"));
        assert_eq!(options[2], CategoryFilter::only("All Products"));
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Acid", "Acid"), Ordering::Equal);
        assert_eq!(locale_compare("acid b", "acid a"), Ordering::Greater);
    }
}
