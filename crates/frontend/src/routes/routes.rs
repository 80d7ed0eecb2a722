use crate::layout::global_context::{use_global_context, AppPage};
use crate::pages::admin::AdminPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::products::ProductsPage;
use crate::shared::api_utils::use_features;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Page for the active address, honouring the feature switches
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();
    let features = use_features();

    move || {
        let page = ctx.page.get();
        match page {
            AppPage::Home => view! { <HomePage /> }.into_any(),
            AppPage::Products if features.product_catalog => view! { <ProductsPage /> }.into_any(),
            AppPage::Admin if features.admin_panel => view! { <AdminPage /> }.into_any(),
            AppPage::Login if features.admin_panel => view! { <LoginPage /> }.into_any(),
            other => {
                log::debug!("No page for {}", other.path());
                view! { <NotFoundPage path=other.path().to_string() /> }.into_any()
            }
        }
    }
}
