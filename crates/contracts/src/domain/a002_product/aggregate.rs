use serde::{Deserialize, Serialize};

use crate::domain::a001_category::Category;
use crate::domain::common::serde_ext::null_as_empty;
use crate::domain::common::Resource;
use crate::shared::validation::{is_valid_url, sanitize_html, ValidationErrors};

// ============================================================================
// Record
// ============================================================================

/// Catalog product
///
/// `category` is a denormalized copy of the owning category's name. It is not
/// checked against the category cache and may be stale or missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,

    /// CAS registry number
    #[serde(default)]
    pub cas_number: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default, alias = "categoryName")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_entity: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl Product {
    /// Category name, falling back to the embedded category entity
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_deref()
            .or_else(|| self.category_entity.as_ref().map(|c| c.name.as_str()))
    }

    /// CAS number for display; "-" when unknown
    pub fn cas_display(&self) -> &str {
        match self.cas_number.as_deref() {
            Some(cas) if !cas.trim().is_empty() => cas,
            _ => "-",
        }
    }

    /// Description markup safe to mount as HTML; `None` when there is none
    pub fn description_html(&self) -> Option<String> {
        let html = sanitize_html(&self.description);
        (!html.trim().is_empty()).then_some(html)
    }
}

impl Resource for Product {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        Some(self.id)
    }

    fn display_name(&self) -> String {
        self.title.clone()
    }

    fn resource_index() -> &'static str {
        "a002"
    }

    fn collection_path() -> &'static str {
        "/products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update body for `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub cas_number: String,
    pub image_url: String,
    pub description: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl ProductDto {
    /// Prefill an edit form; the category id is resolved by name against `categories`
    pub fn from_product(product: &Product, categories: &[Category]) -> Self {
        let category_id = product
            .category_entity
            .as_ref()
            .map(|c| c.id)
            .or_else(|| {
                let name = product.category_name()?;
                categories.iter().find(|c| c.name == name).map(|c| c.id)
            });

        Self {
            id: Some(product.id),
            title: product.title.clone(),
            cas_number: product.cas_number.clone().unwrap_or_default(),
            image_url: product.image_url.clone(),
            description: product.description.clone(),
            category_id,
            category_name: product.category_name().map(str::to_string),
            slug: product.slug.clone(),
            anchor: product.anchor.clone(),
        }
    }

    /// Select the owning category and copy its name into the denormalized field
    pub fn set_category(&mut self, category: Option<&Category>) {
        self.category_id = category.map(|c| c.id);
        self.category_name = category.map(|c| c.name.clone());
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("title", "Product title", &self.title, 3, 255);
        errors.check_max("casNumber", "CAS number", &self.cas_number, 50);
        errors.check_max("description", "Description", &self.description, 2000);

        if self.category_id.is_none() {
            errors.add("categoryId", "Category is required");
        }

        let image_url = self.image_url.trim();
        if !image_url.is_empty() && !is_valid_url(image_url) {
            errors.add("imageUrl", "Image URL must be an absolute http(s) URL");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_api_dto_shape() {
        let json = r#"{
            "id": 1,
            "title": "Acid A",
            "casNumber": null,
            "imageUrl": null,
            "description": "High purity",
            "categoryName": "Industrial Chemicals",
            "categoryId": 4
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.cas_number, None);
        assert_eq!(product.image_url, "");
        assert_eq!(product.category.as_deref(), Some("Industrial Chemicals"));
        assert_eq!(product.cas_display(), "-");
    }

    #[test]
    fn test_category_name_falls_back_to_entity() {
        let json = r#"{
            "id": 2,
            "title": "Base B",
            "categoryEntity": {"id": 9, "name": "Solvents", "slug": "solvents", "url": "/s"}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category, None);
        assert_eq!(product.category_name(), Some("Solvents"));
    }

    #[test]
    fn test_description_html_is_sanitized() {
        let json = r#"{
            "id": 3,
            "title": "Water",
            "description": "H<sub>2</sub>O <script>alert(1)</script>"
        }"#;
        let mut product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description_html().as_deref(), Some("H<sub>2</sub>O "));

        product.description = "<script>alert(1)</script>".into();
        assert_eq!(product.description_html(), None);
    }

    #[test]
    fn test_from_product_resolves_category_by_name() {
        let categories = vec![Category::new(1, "Solvents"), Category::new(2, "Laboratory Chemical")];
        let product = Product {
            id: 5,
            title: "Toluene".into(),
            cas_number: Some("108-88-3".into()),
            image_url: String::new(),
            description: String::new(),
            category: Some("Laboratory Chemical".into()),
            category_entity: None,
            slug: None,
            anchor: None,
        };
        let dto = ProductDto::from_product(&product, &categories);
        assert_eq!(dto.id, Some(5));
        assert_eq!(dto.category_id, Some(2));
        assert_eq!(dto.cas_number, "108-88-3");
    }

    #[test]
    fn test_validate() {
        let mut dto = ProductDto {
            title: "Ac".into(),
            image_url: "not-a-url".into(),
            ..Default::default()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.for_field("title").is_some());
        assert_eq!(errors.for_field("categoryId"), Some("Category is required"));
        assert!(errors.for_field("imageUrl").is_some());

        dto.title = "Acetone".into();
        dto.image_url = "https://cdn.example.com/acetone.png".into();
        dto.set_category(Some(&Category::new(3, "Solvents")));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.category_name.as_deref(), Some("Solvents"));
    }
}
