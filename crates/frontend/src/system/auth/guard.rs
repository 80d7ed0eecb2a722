use leptos::prelude::*;

use super::context::use_auth;
use crate::layout::global_context::{use_global_context, AppPage};

/// Renders `children` only for an unexpired admin session
///
/// Anyone else arriving here is sent to the sign-in page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let ctx = use_global_context();

    let allowed = Memo::new(move |_| auth_state.with(|s| s.is_admin()));

    // Checked once on entry; a session ending later only swaps in the fallback
    if !allowed.get_untracked() {
        log::warn!("Admin panel requested without an admin session; redirecting to sign-in");
        ctx.navigate(AppPage::Login);
    }

    view! {
        <Show
            when=move || allowed.get()
            fallback=move || view! {
                <div class="page">
                    <p>"Access denied. Admin privileges required."</p>
                    <button class="button button--primary" on:click=move |_| ctx.navigate(AppPage::Login)>
                        "Sign in"
                    </button>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
