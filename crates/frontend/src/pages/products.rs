use crate::domain::a002_product::ui::catalog::ProductCatalog;
use crate::shared::api_utils::use_features;
use leptos::prelude::*;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let features = use_features();

    view! {
        <div class="page products-page">
            <ProductCatalog enquiries=features.contact_form />
        </div>
    }
}
