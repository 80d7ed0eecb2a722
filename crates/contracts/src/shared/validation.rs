//! Form validation and input sanitization
//!
//! Shared by every admin and storefront form. Rules mirror the constraints the
//! API enforces on its DTOs so most invalid submissions never leave the browser.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Default maximum length for free-text inputs
pub const DEFAULT_MAX_INPUT_LEN: usize = 255;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{7,}$").expect("valid phone regex"));
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid mobile regex"));
static COUNTRY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{1,3}$").expect("valid country code regex"));
static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("valid url regex"));
static SLUG_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

/// A single failed rule on a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// All failures found on one form submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message reported for `field`, if any
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Consume the collector: `Ok(())` when no rule failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Required + length bounds on a trimmed value
    pub fn check_length(&mut self, field: &str, label: &str, value: &str, min: usize, max: usize) {
        let len = value.trim().chars().count();
        if len == 0 && min > 0 {
            self.add(field, format!("{label} is required"));
        } else if len < min || len > max {
            self.add(
                field,
                format!("{label} must be between {min} and {max} characters"),
            );
        }
    }

    /// Upper bound only; empty is accepted
    pub fn check_max(&mut self, field: &str, label: &str, value: &str, max: usize) {
        if value.trim().chars().count() > max {
            self.add(field, format!("{label} cannot exceed {max} characters"));
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Trim whitespace and cap the length (in characters, not bytes)
pub fn sanitize_input(input: &str, max_len: usize) -> String {
    input.trim().chars().take(max_len).collect()
}

/// Inline markup a product description may carry (formulas need sub/sup)
const DESCRIPTION_TAGS: [&str; 10] = ["p", "br", "b", "strong", "i", "em", "sub", "sup", "ul", "li"];

/// Reduce rich text to the inline markup allowed in product descriptions
///
/// Scripts and styles are dropped with their content, event handler
/// attributes and unknown tags are removed, and stray text is entity-escaped.
pub fn sanitize_html(html: &str) -> String {
    if html.trim().is_empty() {
        return String::new();
    }
    ammonia::Builder::new()
        .tags(HashSet::from(DESCRIPTION_TAGS))
        .generic_attributes(HashSet::new())
        .clean(html)
        .to_string()
}

/// General phone format: digits, `+`, `-`, spaces and parentheses, at least 7
pub fn is_valid_phone_number(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Storefront contact form: exactly ten ASCII digits, no separators
pub fn is_valid_mobile_number(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODE_RE.is_match(code)
}

/// Absolute http(s) URL
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(url.trim())
}

/// URL-friendly slug: lowercase ASCII alphanumerics separated by single hyphens
///
/// "Industrial  Chemicals & Co." -> "industrial-chemicals-co"
pub fn slugify(input: &str) -> String {
    let lower = input.trim().to_lowercase();
    SLUG_SEPARATORS_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_input_trims_and_truncates() {
        assert_eq!(sanitize_input("  acid  ", 255), "acid");
        assert_eq!(sanitize_input("abcdef", 3), "abc");
        assert_eq!(sanitize_input("ééé", 2), "éé");
    }

    #[test]
    fn test_sanitize_html_keeps_formula_markup() {
        assert_eq!(
            sanitize_html(r#"H<sub>2</sub>O<script>alert(1)</script><b onclick="x()">pure</b>"#),
            "H<sub>2</sub>O<b>pure</b>"
        );
        assert_eq!(sanitize_html(r#"<img src="x" onerror="alert(1)">ok"#), "ok");
        assert_eq!(sanitize_html("   "), "");
    }

    #[test]
    fn test_phone_rules() {
        assert!(is_valid_phone_number("+91 98765-43210"));
        assert!(is_valid_phone_number("(022) 1234567"));
        assert!(!is_valid_phone_number("12345"));
        assert!(!is_valid_phone_number("98765abc10"));

        assert!(is_valid_mobile_number("9876543210"));
        assert!(!is_valid_mobile_number("987654321"));
        assert!(!is_valid_mobile_number("98765 43210"));
    }

    #[test]
    fn test_mobile_number_ascii_digits_only() {
        // Arabic-Indic and fullwidth digits are Unicode `\d` but not accepted
        assert!(!is_valid_mobile_number("١٢٣٤٥٦٧٨٩٠"));
        assert!(!is_valid_mobile_number("９８７６５４３２１０"));
        assert!(!is_valid_country_code("+٩١"));
    }

    #[test]
    fn test_country_code() {
        assert!(is_valid_country_code("+91"));
        assert!(is_valid_country_code("1"));
        assert!(!is_valid_country_code("+1234"));
        assert!(!is_valid_country_code(""));
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url("https://cdn.example.com/img/1.png"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Industrial  Chemicals & Co."), "industrial-chemicals-co");
        assert_eq!(slugify("  --Solvents--  "), "solvents");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_collector() {
        let mut errors = ValidationErrors::new();
        errors.check_length("title", "Title", "  ", 3, 255);
        errors.check_length("name", "Name", "a", 2, 100);
        errors.check_max("description", "Description", "short", 2000);
        assert_eq!(errors.for_field("title"), Some("Title is required"));
        assert_eq!(
            errors.for_field("name"),
            Some("Name must be between 2 and 100 characters")
        );
        assert!(errors.for_field("description").is_none());
        assert!(errors.into_result().is_err());
    }
}
