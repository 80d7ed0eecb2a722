use crate::domain::a002_product::ui::card::image_src;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Modal body with the full product record
#[component]
pub fn ProductPreview(
    product: Product,
    #[prop(optional_no_strip)] on_enquire: Option<Callback<Product>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let src = image_src(&product);
    let description = match product.description_html() {
        Some(html) => view! { <p class="product-preview__description" inner_html=html></p> }.into_any(),
        None => view! { <p class="product-preview__description">"No description available."</p> }
            .into_any(),
    };
    let category = product.category_name().unwrap_or("Uncategorized").to_string();
    let cas = product.cas_display().to_string();
    let title = product.title.clone();

    view! {
        <div class="product-preview">
            <div class="product-preview__image">
                <img src=src alt=title.clone() />
            </div>
            <div class="product-preview__info">
                <h2 class="product-preview__title">{title}</h2>
                <dl class="product-preview__facts">
                    <dt>"CAS number"</dt>
                    <dd>{cas}</dd>
                    <dt>"Category"</dt>
                    <dd>{category}</dd>
                </dl>
                {description}
            </div>
            <div class="details-actions">
                {on_enquire.map(|cb| view! {
                    <button class="button button--primary" on:click=move |_| cb.run(product.clone())>
                        "Enquire about this product"
                    </button>
                })}
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
