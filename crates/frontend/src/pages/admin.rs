use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_contact_request::ui::list::ContactRequestList;
use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminTab {
    Products,
    Categories,
    ContactRequests,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 3] {
        [AdminTab::Products, AdminTab::Categories, AdminTab::ContactRequests]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Products => "Products",
            AdminTab::Categories => "Categories",
            AdminTab::ContactRequests => "Contact requests",
        }
    }
}

/// Admin panel, only rendered for an admin session
#[component]
pub fn AdminPage() -> impl IntoView {
    let active = RwSignal::new(AdminTab::Products);

    view! {
        <RequireAdmin>
            <div class="admin">
                <nav class="admin__tabs">
                    {AdminTab::all().into_iter().map(|tab| view! {
                        <button
                            class="admin__tab"
                            class:admin__tab--active=move || active.get() == tab
                            on:click=move |_| active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }).collect_view()}
                </nav>
                <div class="admin__content">
                    {move || match active.get() {
                        AdminTab::Products => view! { <ProductList /> }.into_any(),
                        AdminTab::Categories => view! { <CategoryList /> }.into_any(),
                        AdminTab::ContactRequests => view! { <ContactRequestList /> }.into_any(),
                    }}
                </div>
            </div>
        </RequireAdmin>
    }
}
