use serde::{Deserialize, Serialize};

use crate::domain::a002_product::Product;
use crate::domain::common::serde_ext::{null_as_empty, null_as_false};
use crate::domain::common::Resource;
use crate::shared::validation::{
    is_valid_country_code, is_valid_mobile_number, is_valid_phone_number, sanitize_input,
    ValidationErrors,
};

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

// ============================================================================
// Record
// ============================================================================

/// Lead captured from the storefront contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Absent until the API has persisted the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub country_code: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub mobile_number: String,

    #[serde(default)]
    pub product_id: Option<i64>,

    /// Denormalized product title
    #[serde(default)]
    pub product: Option<String>,

    #[serde(default, alias = "isComplete", deserialize_with = "null_as_false")]
    pub complete: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ContactRequest {
    /// Copy with the triage flag set, used as the `PUT /contact/{id}` body
    pub fn with_complete(&self, complete: bool) -> Self {
        Self {
            complete,
            ..self.clone()
        }
    }

    /// "+91 9876543210"
    pub fn full_number(&self) -> String {
        match (self.country_code.trim(), self.mobile_number.trim()) {
            ("", number) => number.to_string(),
            (code, number) => format!("{code} {number}"),
        }
    }
}

impl Resource for ContactRequest {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> String {
        self.full_number()
    }

    fn resource_index() -> &'static str {
        "a003"
    }

    fn collection_path() -> &'static str {
        "/contact"
    }

    fn element_name() -> &'static str {
        "Contact request"
    }

    fn list_name() -> &'static str {
        "Contact requests"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Storefront contact form, `POST /contact` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequestDto {
    pub country_code: String,
    pub mobile_number: String,
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl Default for ContactRequestDto {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            mobile_number: String::new(),
            product_id: None,
            product: None,
        }
    }
}

impl ContactRequestDto {
    /// Empty form linked to the product the visitor asked about
    pub fn for_product(product: Option<&Product>) -> Self {
        Self {
            product_id: product.map(|p| p.id),
            product: product.map(|p| p.title.clone()),
            ..Self::default()
        }
    }

    /// Trim inputs and strip separators a visitor may type into the number
    pub fn normalized(&self) -> Self {
        Self {
            country_code: sanitize_input(&self.country_code, 4),
            mobile_number: self
                .mobile_number
                .chars()
                .filter(|c| !c.is_whitespace() && *c != '-')
                .collect(),
            product_id: self.product_id,
            product: self.product.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.country_code.trim().is_empty() {
            errors.add("countryCode", "Country code is required");
        } else if !is_valid_country_code(self.country_code.trim()) {
            errors.add("countryCode", "Invalid country code");
        }

        let mobile = self.mobile_number.trim();
        if mobile.is_empty() {
            errors.add("mobileNumber", "Mobile number is required");
        } else if !is_valid_phone_number(mobile) {
            errors.add("mobileNumber", "Invalid phone number format");
        } else if !is_valid_mobile_number(mobile) {
            errors.add("mobileNumber", "Mobile number must be exactly 10 digits");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_persisted_request() {
        let json = r#"{
            "id": 12,
            "countryCode": "+91",
            "mobileNumber": "9876543210",
            "productId": 3,
            "complete": false,
            "createdAt": "2024-03-15T14:02:26"
        }"#;
        let request: ContactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, Some(12));
        assert_eq!(request.product, None);
        assert_eq!(request.full_number(), "+91 9876543210");
        assert!(request.with_complete(true).complete);
    }

    #[test]
    fn test_decode_null_flags() {
        let json = r#"{"countryCode": null, "mobileNumber": "555", "isComplete": null}"#;
        let request: ContactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, None);
        assert!(!request.complete);
        assert_eq!(request.full_number(), "555");
    }

    #[test]
    fn test_default_country_code() {
        let dto = ContactRequestDto::for_product(None);
        assert_eq!(dto.country_code, "+91");
        assert_eq!(dto.product_id, None);
    }

    #[test]
    fn test_validate_mobile_number() {
        let mut dto = ContactRequestDto {
            mobile_number: "98765 43210".into(),
            ..Default::default()
        };
        assert!(dto.normalized().validate().is_ok());

        dto.mobile_number = "12345".into();
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.for_field("mobileNumber"),
            Some("Invalid phone number format")
        );

        dto.mobile_number = "123456789".into();
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            errors.for_field("mobileNumber"),
            Some("Mobile number must be exactly 10 digits")
        );
    }

    #[test]
    fn test_create_body_shape() {
        let dto = ContactRequestDto {
            mobile_number: "9876543210".into(),
            product_id: Some(4),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["countryCode"], "+91");
        assert_eq!(json["productId"], 4);
        assert!(json.get("product").is_none());
    }
}
