//! `/categories` endpoints

use contracts::domain::a001_category::{Category, CategoryDto};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{get_json, send_json, send_no_content, HttpMethod};

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json(Category::collection_path()).await
}

pub async fn create_category(dto: &CategoryDto) -> Result<Category, ApiError> {
    send_json(HttpMethod::Post, Category::collection_path(), dto).await
}

pub async fn update_category(id: i64, dto: &CategoryDto) -> Result<Category, ApiError> {
    send_json(HttpMethod::Put, &Category::item_path(id), dto).await
}

pub async fn delete_category(id: i64) -> Result<(), ApiError> {
    send_no_content(HttpMethod::Delete, &Category::item_path(id)).await
}
