use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a002_product::Product;
use leptos::prelude::*;

/// Image shown when a product has none
pub const PLACEHOLDER_IMAGE: &str = "/assets/product-placeholder.svg";

pub fn image_src(product: &Product) -> String {
    if product.image_url.trim().is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        product.image_url.clone()
    }
}

/// Catalog tile: image, title, CAS number and category
#[component]
pub fn ProductCard(
    product: Product,
    /// Search term to highlight in the title and CAS number
    #[prop(optional, into)]
    highlight: Signal<String>,
    on_open: Callback<Product>,
    #[prop(optional_no_strip)] on_enquire: Option<Callback<Product>>,
) -> impl IntoView {
    let src = image_src(&product);
    let title = product.title.clone();
    let cas = product.cas_display().to_string();
    let category = product.category_name().map(str::to_string);
    let for_open = product.clone();
    let for_enquire = product;

    view! {
        <article class="product-card" on:click=move |_| on_open.run(for_open.clone())>
            <div class="product-card__image">
                <img src=src alt=title.clone() loading="lazy" />
            </div>
            <div class="product-card__body">
                <h3 class="product-card__title">
                    {
                        let title = title.clone();
                        move || highlight_matches(&title, &highlight.get())
                    }
                </h3>
                <div class="product-card__cas">
                    <span class="product-card__label">"CAS: "</span>
                    {
                        let cas = cas.clone();
                        move || highlight_matches(&cas, &highlight.get())
                    }
                </div>
                {category.map(|c| view! { <span class="badge product-card__category">{c}</span> })}
            </div>
            {on_enquire.map(|cb| view! {
                <div class="product-card__actions">
                    <button
                        class="button button--primary"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cb.run(for_enquire.clone());
                        }
                    >
                        {icon("phone")}
                        "Enquire"
                    </button>
                </div>
            })}
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_src_falls_back_to_placeholder() {
        let mut product: Product =
            serde_json::from_str(r#"{"id": 1, "title": "Acetone", "imageUrl": "  "}"#).unwrap();
        assert_eq!(image_src(&product), PLACEHOLDER_IMAGE);

        product.image_url = "https://cdn.example.com/acetone.png".to_string();
        assert_eq!(image_src(&product), "https://cdn.example.com/acetone.png");
    }
}
