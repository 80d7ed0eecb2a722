use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notify::{NoticeBar, Notifier};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    provide_context(api_utils::config().clone());
    provide_context(ModalStackService::new());
    provide_context(Notifier::new());

    view! {
        <AuthProvider>
            <Shell>
                <NoticeBar />
                <AppRoutes />
            </Shell>
            <ModalHost />
        </AuthProvider>
    }
}
