use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// Top level screens, one per address-bar path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPage {
    Home,
    Products,
    Admin,
    Login,
    NotFound(String),
}

impl AppPage {
    pub fn from_path(path: &str) -> AppPage {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "" | "/" | "/home" => AppPage::Home,
            "/products" => AppPage::Products,
            "/admin" => AppPage::Admin,
            "/admin/login" | "/login" => AppPage::Login,
            other => AppPage::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            AppPage::Home => "/",
            AppPage::Products => "/products",
            AppPage::Admin => "/admin",
            AppPage::Login => "/admin/login",
            AppPage::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppPage::Home => "Home",
            AppPage::Products => "Products",
            AppPage::Admin => "Admin",
            AppPage::Login => "Sign in",
            AppPage::NotFound(_) => "Not found",
        }
    }
}

/// Split "/products?category=solvents" into its path and query (without '?')
pub fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Navigation state shared by the whole app
///
/// The active page and query string mirror `location`; changing them pushes a
/// history entry and browser back/forward flows back in through `popstate`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<AppPage>,
    /// Query string of the current URL, without the leading '?'
    pub search: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(AppPage::Home),
            search: RwSignal::new(String::new()),
        }
    }

    fn read_location(&self) {
        let Some(location) = window().map(|w| w.location()) else {
            return;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        self.page.set(AppPage::from_path(&path));
        self.search.set(search.trim_start_matches('?').to_string());
    }

    pub fn init_router_integration(&self) {
        self.read_location();

        let this = *self;
        let on_pop = Closure::wrap(Box::new(move |_: web_sys::Event| {
            this.read_location();
        }) as Box<dyn FnMut(_)>);
        if let Some(w) = window() {
            w.set_onpopstate(Some(on_pop.as_ref().unchecked_ref()));
        }
        // handler lives as long as the app
        on_pop.forget();

        Effect::new(move |_| {
            let page = this.page.get();
            let search = this.search.get();
            let new_url = if search.is_empty() {
                page.path().to_string()
            } else {
                format!("{}?{}", page.path(), search)
            };

            let Some(w) = window() else {
                return;
            };
            let location = w.location();
            let current = format!(
                "{}{}",
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default()
            );

            // Only push when the state actually moved away from the address bar
            if current != new_url {
                if let Ok(history) = w.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&new_url));
                }
            }
            if let Some(document) = w.document() {
                document.set_title(&format!("{} | Chem Catalog", page.title()));
            }
        });
    }

    pub fn navigate(&self, page: AppPage) {
        log::debug!("navigate: {}", page.path());
        self.search.set(String::new());
        self.page.set(page);
    }

    /// Navigate to an in-app URL such as a category link
    pub fn navigate_url(&self, url: &str) {
        let (path, query) = split_url(url);
        log::debug!("navigate: {url}");
        self.search.set(query.to_string());
        self.page.set(AppPage::from_path(path));
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(AppPage::from_path("/"), AppPage::Home);
        assert_eq!(AppPage::from_path(""), AppPage::Home);
        assert_eq!(AppPage::from_path("/products/"), AppPage::Products);
        assert_eq!(AppPage::from_path("/admin"), AppPage::Admin);
        assert_eq!(AppPage::from_path("/admin/login"), AppPage::Login);
        assert_eq!(
            AppPage::from_path("/nope"),
            AppPage::NotFound("/nope".to_string())
        );
    }

    #[test]
    fn test_path_round_trip() {
        for page in [AppPage::Home, AppPage::Products, AppPage::Admin, AppPage::Login] {
            assert_eq!(AppPage::from_path(page.path()), page);
        }
    }

    #[test]
    fn test_split_url() {
        assert_eq!(
            split_url("/products?category=solvents"),
            ("/products", "category=solvents")
        );
        assert_eq!(split_url("/admin"), ("/admin", ""));
    }
}
