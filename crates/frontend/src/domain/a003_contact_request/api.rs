//! `/contact` endpoints

use contracts::domain::a003_contact_request::{ContactRequest, ContactRequestDto};
use contracts::domain::common::Resource;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{
    get_json, send_json, send_json_no_content, send_no_content, HttpMethod,
};

pub async fn fetch_contact_requests() -> Result<Vec<ContactRequest>, ApiError> {
    get_json(ContactRequest::collection_path()).await
}

/// Submit a storefront lead; the response body is not needed
pub async fn submit_contact_request(dto: &ContactRequestDto) -> Result<(), ApiError> {
    send_json_no_content(HttpMethod::Post, ContactRequest::collection_path(), dto).await
}

/// Replace a request, used to flip its completion flag
pub async fn update_contact_request(
    id: i64,
    request: &ContactRequest,
) -> Result<ContactRequest, ApiError> {
    send_json(HttpMethod::Put, &ContactRequest::item_path(id), request).await
}

pub async fn delete_contact_request(id: i64) -> Result<(), ApiError> {
    send_no_content(HttpMethod::Delete, &ContactRequest::item_path(id)).await
}
