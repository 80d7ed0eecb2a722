//! Storefront catalog
//!
//! One fetch of products and categories per mount; everything the visitor
//! does afterwards (category, search, sort, featured/all) is recomputed from
//! the cached snapshot by the derived view builder without touching the API.

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::card::ProductCard;
use crate::domain::a002_product::ui::preview::ProductPreview;
use crate::domain::a003_contact_request::ui::form::ContactForm;
use crate::layout::global_context::use_global_context;
use crate::shared::cache_cell::CacheCell;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{use_modal_stack, ModalHandle, ModalStackService};
use contracts::domain::a001_category::{default_categories, Category};
use contracts::domain::a002_product::{sample_catalog, Product};
use contracts::shared::api_error::ApiError;
use contracts::shared::derived_view::{
    category_options, featured_products, filter_products, suggested_products,
    LANDING_FEATURED_LIMIT,
};
use contracts::shared::query::{CatalogView, CategoryFilter, ProductQuery, SortMode};
use leptos::prelude::*;
use serde::Deserialize;
use thaw::*;

pub const SAMPLE_CATALOG_STATUS: &str = "Using sample catalog while API is offline.";
pub const DEFAULT_CATEGORIES_STATUS: &str = "Using default categories while API is offline.";

/// Catalog state carried in the address bar, e.g. `/products?category=solvents`
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct CatalogParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl CatalogParams {
    /// Unreadable query strings are ignored
    pub fn parse(query: &str) -> Self {
        if query.trim().is_empty() {
            return Self::default();
        }
        serde_qs::from_str(query).unwrap_or_else(|e| {
            log::warn!("Ignoring catalog query '{query}': {e}");
            Self::default()
        })
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

/// Map a `?category=` value to a filter by slug or exact name
///
/// Only an empty value means every category; "all" is an ordinary name.
/// Unknown values still filter by that name, which matches nothing.
pub fn resolve_category(param: &str, categories: &[Category]) -> CategoryFilter {
    let param = param.trim();
    if param.is_empty() {
        return CategoryFilter::All;
    }
    categories
        .iter()
        .find(|c| c.name == param || (!c.slug.is_empty() && c.slug.eq_ignore_ascii_case(param)))
        .map(|c| CategoryFilter::only(c.name.clone()))
        .unwrap_or_else(|| CategoryFilter::only(param))
}

/// Substitute the sample catalog for a failed or empty product fetch
///
/// The flag is `true` when the samples were used.
pub fn products_or_samples(result: Result<Vec<Product>, ApiError>) -> (Vec<Product>, bool) {
    match result {
        Ok(products) if !products.is_empty() => (products, false),
        Ok(_) => {
            log::warn!("Product list is empty, showing sample catalog");
            (sample_catalog(), true)
        }
        Err(e) => {
            log::warn!("Products unavailable ({e}), showing sample catalog");
            (sample_catalog(), true)
        }
    }
}

/// Substitute the default category names for a failed or empty category fetch
pub fn categories_or_defaults(result: Result<Vec<Category>, ApiError>) -> (Vec<Category>, bool) {
    match result {
        Ok(categories) if !categories.is_empty() => (categories, false),
        Ok(_) => (default_categories(), true),
        Err(e) => {
            log::warn!("Categories unavailable ({e}), showing defaults");
            (default_categories(), true)
        }
    }
}

/// Fill `cache` from the API, falling back to the sample catalog
pub fn load_storefront_products(
    cache: CacheCell<Product>,
    query: ProductQuery,
    status: RwSignal<Option<String>>,
) {
    cache.load_with(async move { api::fetch_products(&query).await }, move |result| {
        let (products, fallback) = products_or_samples(result);
        status.set(fallback.then(|| SAMPLE_CATALOG_STATUS.to_string()));
        Ok(products)
    });
}

/// Fill `cache` from the API, falling back to the default categories
pub fn load_storefront_categories(cache: CacheCell<Category>, status: RwSignal<Option<String>>) {
    cache.load_with(category_api::fetch_categories(), move |result| {
        let (categories, fallback) = categories_or_defaults(result);
        status.set(fallback.then(|| DEFAULT_CATEGORIES_STATUS.to_string()));
        Ok(categories)
    });
}

/// Open the contact form on top of the stack
///
/// `parent` is the preview the form was opened from; it closes together with
/// the form once the enquiry is done.
pub fn open_contact_form(
    modal_stack: ModalStackService,
    product: Option<Product>,
    parent: Option<ModalHandle>,
    best_effort: bool,
) {
    modal_stack.push("Request a call back", move |handle| {
        let on_done = Callback::new(move |_| {
            handle.close();
            if let Some(parent) = parent {
                parent.close();
            }
        });
        let on_cancel = Callback::new(move |_| handle.close());

        view! {
            <ContactForm
                product=product.clone()
                best_effort=best_effort
                on_done=on_done
                on_cancel=on_cancel
            />
        }
        .into_any()
    });
}

/// Open the product preview; `enquiries` adds the contact form entry point
pub fn open_product_preview(
    modal_stack: ModalStackService,
    product: Product,
    enquiries: bool,
    best_effort: bool,
) {
    let title = product.title.clone();
    modal_stack.push_with_class(title, Some("product-preview-modal".to_string()), move |handle| {
        let on_enquire = enquiries.then(|| {
            Callback::new(move |p: Product| {
                open_contact_form(modal_stack, Some(p), Some(handle), best_effort)
            })
        });
        let on_close = Callback::new(move |_| handle.close());

        view! { <ProductPreview product=product.clone() on_enquire=on_enquire on_close=on_close /> }
            .into_any()
    });
}

#[derive(Clone, Copy)]
struct CatalogState {
    category: RwSignal<CategoryFilter>,
    search: RwSignal<String>,
    sort: RwSignal<SortMode>,
    view: RwSignal<CatalogView>,
}

impl CatalogState {
    fn select_category(&self, filter: CategoryFilter) {
        self.search.set(String::new());
        self.view.set(CatalogView::All);
        self.category.set(filter);
    }

    /// Searching always spans every category
    fn focus_search(&self) {
        if self.category.get_untracked() != CategoryFilter::All {
            self.category.set(CategoryFilter::All);
        }
    }
}

/// Product catalog with category sidebar, search, sort and featured/all toggle
#[component]
pub fn ProductCatalog(
    /// Show "Enquire" buttons that open the contact form
    #[prop(optional)]
    enquiries: bool,
) -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();

    let products = CacheCell::<Product>::new("catalog products");
    let categories = CacheCell::<Category>::new("catalog categories");
    let product_status = RwSignal::new(None::<String>);
    let category_status = RwSignal::new(None::<String>);

    let initial = CatalogParams::parse(&ctx.search.get_untracked());
    let state = CatalogState {
        category: RwSignal::new(CategoryFilter::All),
        search: RwSignal::new(initial.q.clone().unwrap_or_default()),
        sort: RwSignal::new(initial.sort_mode()),
        view: RwSignal::new(if initial.category.is_some() || initial.q.is_some() {
            CatalogView::All
        } else {
            CatalogView::Featured
        }),
    };
    let search_focused = RwSignal::new(false);

    // Only ordering is sent as a hint; narrowing the fetch would leave the
    // cache incomplete for the other views.
    let fetch = move || {
        let query = ProductQuery::from_state(&CategoryFilter::All, "", state.sort.get_untracked());
        load_storefront_products(products, query, product_status);
        load_storefront_categories(categories, category_status);
    };

    // `?category=` may name a slug, which needs the category list to resolve
    Effect::new(move |_| {
        let params = CatalogParams::parse(&ctx.search.get());
        if let Some(param) = params.category.as_deref() {
            let filter = categories.items.with(|cats| resolve_category(param, cats));
            state.category.set(filter);
            state.view.set(CatalogView::All);
        }
    });

    let visible = Memo::new(move |_| {
        let term = state.search.get();
        products.items.with(|items| match state.view.get() {
            CatalogView::Featured => featured_products(items, &term, LANDING_FEATURED_LIMIT),
            CatalogView::All => {
                state.category.with(|cat| filter_products(items, cat, &term, state.sort.get()))
            }
        })
    });
    let suggestions = Memo::new(move |_| {
        let term = state.search.get();
        products.items.with(|items| suggested_products(items, &term))
    });
    let options = Memo::new(move |_| categories.items.with(|cats| category_options(cats)));

    Effect::new(move |_| {
        visible.track();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let open_preview = Callback::new(move |product: Product| {
        open_product_preview(modal_stack, product, enquiries, false)
    });
    let enquire = enquiries.then(|| {
        Callback::new(move |product: Product| {
            open_contact_form(modal_stack, Some(product), None, false)
        })
    });

    fetch();

    view! {
        <div class="catalog">
            <aside class="catalog__sidebar">
                <h3 class="catalog__sidebar-title">"Categories"</h3>
                <ul class="catalog__categories">
                    <For
                        each=move || options.get()
                        key=|option| option.clone()
                        children=move |option| {
                            let label = option.label().to_string();
                            let is_active = {
                                let option = option.clone();
                                move || state.view.get() == CatalogView::All && state.category.with(|c| *c == option)
                            };
                            view! {
                                <li>
                                    <button
                                        class="catalog__category"
                                        class:catalog__category--active=is_active
                                        on:click=move |_| state.select_category(option.clone())
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                {move || category_status.get().map(|s| view! { <p class="catalog__status">{s}</p> })}
            </aside>

            <section class="catalog__main">
                <div class="header">
                    <div class="header__content">
                        <h1 class="header__title">
                            {move || match state.view.get() {
                                CatalogView::Featured => "Featured products".to_string(),
                                CatalogView::All => state.category.with(|c| c.label().to_string()),
                            }}
                        </h1>
                        <span class="header__count">{move || format!("{} products", visible.get().len())}</span>
                    </div>
                    <div class="header__actions">
                        <div class="catalog__search">
                            <div class="search-input" class:search-input--active=move || !state.search.get().trim().is_empty()>
                                <span class="search-input__icon">{icon("search")}</span>
                                <input
                                    type="text"
                                    class="search-input__field"
                                    placeholder="Search by name or CAS number..."
                                    prop:value=move || state.search.get()
                                    on:input=move |ev| state.search.set(event_target_value(&ev))
                                    on:focus=move |_| {
                                        search_focused.set(true);
                                        state.focus_search();
                                    }
                                    on:blur=move |_| search_focused.set(false)
                                />
                            </div>
                            <Show when=move || search_focused.get() && !suggestions.with(|s| s.is_empty())>
                                <ul class="catalog__suggestions">
                                    {move || suggestions.get().into_iter().map(|product| {
                                        let title = product.title.clone();
                                        let cas = product.cas_display().to_string();
                                        view! {
                                            // mousedown fires before the input loses focus
                                            <li
                                                class="catalog__suggestion"
                                                on:mousedown=move |ev| {
                                                    ev.prevent_default();
                                                    open_preview.run(product.clone());
                                                }
                                            >
                                                <span class="catalog__suggestion-title">{title}</span>
                                                <span class="catalog__suggestion-cas">{cas}</span>
                                            </li>
                                        }
                                    }).collect_view()}
                                </ul>
                            </Show>
                        </div>
                        <select
                            class="select"
                            prop:value=move || state.sort.get().as_str()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                match value.parse::<SortMode>() {
                                    Ok(mode) => state.sort.set(mode),
                                    Err(e) => log::warn!("{e}"),
                                }
                            }
                        >
                            {SortMode::all().into_iter().map(|mode| view! {
                                <option value=mode.as_str()>{mode.label()}</option>
                            }).collect_view()}
                        </select>
                        <div class="catalog__view-toggle">
                            <Button
                                appearance=Signal::derive(move || if state.view.get() == CatalogView::Featured {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                })
                                on_click=move |_| state.view.set(CatalogView::Featured)
                            >
                                {icon("star")}
                                "Featured"
                            </Button>
                            <Button
                                appearance=Signal::derive(move || if state.view.get() == CatalogView::All {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                })
                                on_click=move |_| state.view.set(CatalogView::All)
                            >
                                {icon("grid")}
                                "All products"
                            </Button>
                        </div>
                    </div>
                </div>

                {move || product_status.get().map(|s| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{s}</span>
                    </div>
                })}

                <Show
                    when=move || !products.loading.get() || !visible.with(|v| v.is_empty())
                    fallback=|| view! { <div class="catalog__loading"><Spinner /></div> }
                >
                    <div class="catalog__grid">
                        <For
                            each=move || visible.get()
                            key=|product| product.id
                            children=move |product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        highlight=state.search
                                        on_open=open_preview
                                        on_enquire=enquire
                                    />
                                }
                            }
                        />
                    </div>
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="catalog__empty">
                            <p>"No products found"</p>
                            <Show when=move || !state.search.get().trim().is_empty()>
                                <p class="catalog__hint">"Try a different name or CAS number."</p>
                            </Show>
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_parse() {
        let params = CatalogParams::parse("category=solvents&sort=name");
        assert_eq!(params.category.as_deref(), Some("solvents"));
        assert_eq!(params.sort_mode(), SortMode::Name);

        let empty = CatalogParams::parse("");
        assert_eq!(empty, CatalogParams::default());
        assert_eq!(empty.sort_mode(), SortMode::Relevance);

        assert_eq!(CatalogParams::parse("sort=bogus").sort_mode(), SortMode::Relevance);
    }

    #[test]
    fn test_resolve_category_by_slug_or_name() {
        let categories = default_categories();
        assert_eq!(
            resolve_category("solvents", &categories),
            CategoryFilter::only("Solvents")
        );
        assert_eq!(
            resolve_category("Industrial Chemicals", &categories),
            CategoryFilter::only("Industrial Chemicals")
        );
        assert_eq!(resolve_category("", &categories), CategoryFilter::All);
        assert_eq!(
            resolve_category("unknown", &categories),
            CategoryFilter::only("unknown")
        );
    }

    #[test]
    fn test_category_named_all_is_selectable() {
        let mut categories = default_categories();
        categories.push(Category::new(9, "All"));
        assert_eq!(resolve_category("all", &categories), CategoryFilter::only("All"));
        assert_eq!(resolve_category("  ", &categories), CategoryFilter::All);
    }

    #[test]
    fn test_products_fallback() {
        let (products, fallback) = products_or_samples(Err(ApiError::Network("offline".into())));
        assert!(fallback);
        assert_eq!(products, sample_catalog());

        let (products, fallback) = products_or_samples(Ok(Vec::new()));
        assert!(fallback);
        assert!(!products.is_empty());

        let one = sample_catalog().into_iter().take(1).collect::<Vec<_>>();
        let (products, fallback) = products_or_samples(Ok(one.clone()));
        assert!(!fallback);
        assert_eq!(products, one);
    }

    #[test]
    fn test_categories_fallback() {
        let (categories, fallback) =
            categories_or_defaults(Err(ApiError::from_status(503, "Service Unavailable", None)));
        assert!(fallback);
        assert_eq!(categories, default_categories());

        let real = vec![Category::new(9, "Reagents")];
        assert_eq!(categories_or_defaults(Ok(real.clone())), (real, false));
    }
}
