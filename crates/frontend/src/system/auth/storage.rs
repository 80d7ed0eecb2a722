use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "catalog_admin_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the operator token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        if storage.set_item(ACCESS_TOKEN_KEY, token).is_err() {
            log::warn!("Could not persist the admin session");
        }
    }
}

/// Operator token from localStorage, if any
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.trim().is_empty())
}

pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
