use crate::layout::global_context::{use_global_context, AppPage};
use crate::shared::api_utils::use_features;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_global_context();
    let features = use_features();
    let (auth_state, set_auth_state) = use_auth();

    let nav_link = move |page: AppPage, label: &'static str| {
        let target = page.clone();
        view! {
            <button
                class="header__nav-link"
                class:header__nav-link--active=move || ctx.page.with(|p| *p == page)
                on:click=move |_| ctx.navigate(target.clone())
            >
                {label}
            </button>
        }
    };

    let sign_out = move |_| {
        do_logout(set_auth_state);
        ctx.navigate(AppPage::Home);
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title" on:click=move |_| ctx.navigate(AppPage::Home)>
                    {icon("flask")}
                    "Chem Catalog"
                </span>
                <nav class="header__nav">
                    {nav_link(AppPage::Home, "Home")}
                    {features.product_catalog.then(|| nav_link(AppPage::Products, "Products"))}
                    {features.admin_panel.then(|| nav_link(AppPage::Admin, "Admin"))}
                </nav>
            </div>
            <div class="header__actions">
                <Show when=move || features.admin_panel>
                    <Show
                        when=move || auth_state.with(|s| s.access_token.is_some())
                        fallback=move || view! {
                            <button class="button button--ghost" on:click=move |_| ctx.navigate(AppPage::Login)>
                                "Sign in"
                            </button>
                        }
                    >
                        <span class="header__user">
                            {move || auth_state.with(|s| s.claims.as_ref().map(|c| c.username.clone()).unwrap_or_default())}
                        </span>
                        <button class="button button--ghost" on:click=sign_out>
                            {icon("logout")}
                            "Sign out"
                        </button>
                    </Show>
                </Show>
            </div>
        </header>
    }
}
