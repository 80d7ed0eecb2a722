use serde::{Deserialize, Serialize};

use crate::domain::common::serde_ext::null_as_empty;
use crate::domain::common::Resource;
use crate::shared::validation::{is_valid_url, slugify, ValidationErrors};

/// Category names shown when the API cannot be reached
pub const DEFAULT_CATEGORY_NAMES: [&str; 5] = [
    "Industrial Chemicals",
    "Laboratory Chemical",
    "Pharmaceutical Ingredients",
    "Solvents",
    "Speciality Chemicals",
];

// ============================================================================
// Record
// ============================================================================

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self {
            id,
            url: format!("/products?category={}", slug),
            name,
            slug,
        }
    }
}

/// Offline stand-ins built from [`DEFAULT_CATEGORY_NAMES`], ids counted from 1
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Category::new(i as i64 + 1, *name))
        .collect()
}

impl Resource for Category {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn resource_index() -> &'static str {
        "a001"
    }

    fn collection_path() -> &'static str {
        "/categories"
    }

    fn element_name() -> &'static str {
        "Category"
    }

    fn list_name() -> &'static str {
        "Categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update body for `POST /categories` and `PUT /categories/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub slug: String,
    pub url: String,
}

impl CategoryDto {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            slug: category.slug.clone(),
            url: category.url.clone(),
        }
    }

    /// Trim every field and derive the slug from the name when left blank
    pub fn normalized(&self) -> Self {
        let name = self.name.trim().to_string();
        let slug = match self.slug.trim() {
            "" => slugify(&name),
            s => slugify(s),
        };
        Self {
            id: self.id,
            name,
            slug,
            url: self.url.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("name", "Category name", &self.name, 2, 100);
        errors.check_length("slug", "Category slug", &self.slug, 2, 100);

        let url = self.url.trim();
        if url.is_empty() {
            errors.add("url", "Category URL is required");
        } else if !url.starts_with('/') && !is_valid_url(url) {
            errors.add("url", "Category URL must be an absolute URL or a site path");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_null_fields() {
        let json = r#"{"id": 3, "name": "Solvents", "slug": null, "url": null}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Solvents");
        assert_eq!(category.slug, "");
        assert_eq!(category.url, "");
    }

    #[test]
    fn test_normalized_derives_slug() {
        let dto = CategoryDto {
            id: None,
            name: "  Laboratory Chemical ".into(),
            slug: String::new(),
            url: "/products?category=lab".into(),
        };
        let dto = dto.normalized();
        assert_eq!(dto.name, "Laboratory Chemical");
        assert_eq!(dto.slug, "laboratory-chemical");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let errors = CategoryDto::default().validate().unwrap_err();
        assert_eq!(errors.for_field("name"), Some("Category name is required"));
        assert_eq!(errors.for_field("url"), Some("Category URL is required"));
    }

    #[test]
    fn test_new_for_item_path() {
        let category = Category::new(7, "Speciality Chemicals");
        assert_eq!(category.slug, "speciality-chemicals");
        assert_eq!(Category::item_path(7), "/categories/7");
        assert_eq!(Category::full_name(), "a001_categories");
    }

    #[test]
    fn test_create_body_omits_id() {
        let dto = CategoryDto {
            id: None,
            name: "Solvents".into(),
            slug: "solvents".into(),
            url: "/solvents".into(),
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), DEFAULT_CATEGORY_NAMES.len());
        assert_eq!(defaults[0].id, 1);
        assert_eq!(defaults[3].name, "Solvents");
        assert_eq!(defaults[3].url, "/products?category=solvents");
    }
}
