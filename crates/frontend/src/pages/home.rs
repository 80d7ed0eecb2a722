use crate::domain::a002_product::ui::card::ProductCard;
use crate::domain::a002_product::ui::catalog::{
    load_storefront_categories, load_storefront_products, open_contact_form, open_product_preview,
};
use crate::layout::global_context::{use_global_context, AppPage};
use crate::shared::api_utils::use_features;
use crate::shared::cache_cell::CacheCell;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::use_modal_stack;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::Product;
use contracts::shared::derived_view::{featured_products, HOME_FEATURED_LIMIT};
use contracts::shared::query::ProductQuery;
use leptos::prelude::*;

/// Landing page: hero, featured products and the category strip
///
/// Enquiries sent from here are best-effort: the visitor is thanked even when
/// the API is unreachable.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();
    let features = use_features();

    let products = CacheCell::<Product>::new("home products");
    let categories = CacheCell::<Category>::new("home categories");
    let product_status = RwSignal::new(None::<String>);
    let category_status = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());

    load_storefront_products(products, ProductQuery::default(), product_status);
    load_storefront_categories(categories, category_status);

    let featured = Memo::new(move |_| {
        let term = search.get();
        products
            .items
            .with(|items| featured_products(items, &term, HOME_FEATURED_LIMIT))
    });

    let open_preview = Callback::new(move |product: Product| {
        open_product_preview(modal_stack, product, features.contact_form, true)
    });
    let enquire = features.contact_form.then(|| {
        Callback::new(move |product: Product| {
            open_contact_form(modal_stack, Some(product), None, true)
        })
    });

    view! {
        <div class="home">
            <section class="hero">
                <h1 class="hero__title">"Chemicals for industry and research"</h1>
                <p class="hero__subtitle">
                    "Industrial chemicals, laboratory reagents, pharmaceutical ingredients and solvents."
                </p>
                <div class="hero__actions">
                    <Show when=move || features.product_catalog>
                        <button class="button button--primary" on:click=move |_| ctx.navigate(AppPage::Products)>
                            "Browse the catalog"
                        </button>
                    </Show>
                    <Show when=move || features.contact_form>
                        <button
                            class="button button--secondary"
                            on:click=move |_| open_contact_form(modal_stack, None, None, true)
                        >
                            "Contact us"
                        </button>
                    </Show>
                </div>
            </section>

            <section class="home__categories">
                <h2>"Categories"</h2>
                <div class="home__category-strip">
                    <For
                        each=move || categories.items.get()
                        key=|category| category.id
                        children=move |category| {
                            let url = if category.url.starts_with('/') {
                                category.url.clone()
                            } else {
                                format!("/products?category={}", category.slug)
                            };
                            view! {
                                <button class="home__category" on:click=move |_| ctx.navigate_url(&url)>
                                    {category.name.clone()}
                                </button>
                            }
                        }
                    />
                </div>
                {move || category_status.get().map(|s| view! { <p class="catalog__status">{s}</p> })}
            </section>

            <section class="home__featured">
                <div class="header">
                    <div class="header__content">
                        <h2 class="header__title">"Featured products"</h2>
                    </div>
                    <div class="header__actions">
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v| search.set(v))
                            placeholder="Search by name or CAS number..."
                        />
                    </div>
                </div>
                {move || product_status.get().map(|s| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{s}</span>
                    </div>
                })}
                <div class="catalog__grid">
                    <For
                        each=move || featured.get()
                        key=|product| product.id
                        children=move |product| view! {
                            <ProductCard product=product highlight=search on_open=open_preview on_enquire=enquire />
                        }
                    />
                </div>
                <Show when=move || !products.loading.get() && featured.with(|f| f.is_empty())>
                    <p class="catalog__empty">"No products match your search."</p>
                </Show>
            </section>
        </div>
    }
}
