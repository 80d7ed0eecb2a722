use crate::shared::api_utils::get_json;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "API: Online",
            ServerStatus::Offline => "API: Offline",
            ServerStatus::Checking => "API: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    let check_server = move || {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let result = ping_server().await;
            let _ = status.try_set(if result {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    // Check once on mount
    Effect::new(move |_| {
        check_server();
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span>{"© Chem Catalog"}</span>
            <span
                class=move || status.get().css_class()
                title="Click to check again"
                on:click=move |_| check_server()
            >
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}

/// The category list is small and public, so it doubles as a health check
async fn ping_server() -> bool {
    get_json::<serde_json::Value>("/categories").await.is_ok()
}
