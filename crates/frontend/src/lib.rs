pub mod app;
pub mod domain;
pub mod layout;
pub mod pages;
pub mod routes;
pub mod shared;
pub mod system;

use contracts::shared::config::ClientConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = match ClientConfig::embedded(!cfg!(debug_assertions)) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&shared::api_utils::fallback_notice(&e).into());
            shared::api_utils::fallback_config()
        }
    };

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level());
    console_error_panic_hook::set_once();

    log::info!("Catalog client starting, API at {}", config.api_url);
    shared::api_utils::init(config);

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
