use crate::layout::global_context::{use_global_context, AppPage};
use leptos::prelude::*;

#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="page not-found">
            <h1>"Page not found"</h1>
            <p>{format!("Nothing lives at {path}.")}</p>
            <button class="button button--primary" on:click=move |_| ctx.navigate(AppPage::Home)>
                "Back to home"
            </button>
        </div>
    }
}
