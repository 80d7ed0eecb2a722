use std::fmt::Display;

/// Trait for a record exposed by the remote REST API
///
/// Describes where a record lives on the API and how it is named in the UI.
pub trait Resource {
    /// Identifier type used in item paths
    type Id: Copy + Display + PartialEq;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Identifier of the record, `None` until the API has persisted it
    fn id(&self) -> Option<Self::Id>;

    /// Human readable name of the record (title, name, phone number)
    fn display_name(&self) -> String;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Resource index in the system (e.g. "a002")
    fn resource_index() -> &'static str;

    /// Collection path relative to the API base (e.g. "/products")
    fn collection_path() -> &'static str;

    /// Singular UI name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Products")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Path of a single record (e.g. "/products/42")
    fn item_path(id: Self::Id) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }

    /// Full system name (e.g. "a002_products")
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::resource_index(),
            Self::collection_path().trim_start_matches('/')
        )
    }
}
