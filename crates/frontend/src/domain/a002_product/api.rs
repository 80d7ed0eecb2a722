//! `/products` endpoints

use contracts::domain::a002_product::{Product, ProductDto};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;
use contracts::shared::query::ProductQuery;

use crate::shared::api_utils::{get_json, send_json, send_no_content, HttpMethod};

/// `GET /products`, forwarding the catalog state as optional query parameters
///
/// The API may ignore them; callers filter the returned list themselves.
pub async fn fetch_products(query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
    get_json(&products_path(query)).await
}

pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    get_json(&Product::item_path(id)).await
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, ApiError> {
    send_json(HttpMethod::Post, Product::collection_path(), dto).await
}

pub async fn update_product(id: i64, dto: &ProductDto) -> Result<Product, ApiError> {
    send_json(HttpMethod::Put, &Product::item_path(id), dto).await
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    send_no_content(HttpMethod::Delete, &Product::item_path(id)).await
}

fn products_path(query: &ProductQuery) -> String {
    if query.is_empty() {
        return Product::collection_path().to_string();
    }
    match serde_qs::to_string(query) {
        Ok(qs) => format!("{}?{}", Product::collection_path(), qs),
        Err(e) => {
            log::warn!("Could not encode product query, fetching unfiltered: {e}");
            Product::collection_path().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::query::{CategoryFilter, SortMode};

    #[test]
    fn test_products_path() {
        assert_eq!(products_path(&ProductQuery::default()), "/products");

        let query = ProductQuery::from_state(
            &CategoryFilter::only("Solvents"),
            " acid ",
            SortMode::Name,
        );
        assert_eq!(
            products_path(&query),
            "/products?category=Solvents&q=acid&sort=name"
        );
    }
}
