use crate::domain::a002_product::api;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::cache_cell::CacheCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::use_notifier;
use contracts::domain::a002_product::Product;
use contracts::shared::derived_view::filter_list;
use contracts::shared::query::ProductQuery;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    pub cas_number: String,
    pub category: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            cas_number: p.cas_display().to_string(),
            category: p.category_name().unwrap_or("-").to_string(),
            title: p.title,
        }
    }
}

/// Admin table of products with search, create, edit and delete
#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let cache = CacheCell::<Product>::new("admin products");
    let search = RwSignal::new(String::new());
    let modal_stack = use_modal_stack();
    let notifier = use_notifier();

    let fetch = move || {
        cache.load(async { api::fetch_products(&ProductQuery::default()).await });
    };

    let rows = Memo::new(move |_| {
        let term = search.get();
        cache.items.with(|items| {
            filter_list(items, &term)
                .into_iter()
                .map(ProductRow::from)
                .collect::<Vec<_>>()
        })
    });

    let open_details_modal = move |id: Option<i64>, title: String| {
        let title = match id {
            Some(_) => format!("Edit product: {title}"),
            None => "New product".to_string(),
        };
        modal_stack.push_with_class(title, Some("product-details-modal".to_string()), move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                notifier.success("Product saved");
                fetch();
            });
            let on_cancel = Callback::new(move |_| handle.close());

            view! { <ProductDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
        });
    };

    let delete_product = move |id: i64, title: String| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!("Are you sure you want to delete \"{title}\"?"))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    notifier.success("Product deleted successfully");
                    fetch();
                }
                Err(e) => notifier.error(format!("Failed to delete product: {}", e.user_message())),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Products"}</h1>
                    <span class="header__count">{move || format!("{} of {}", rows.get().len(), cache.items.get().len())}</span>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| search.set(v))
                        placeholder="Search by title, CAS or category..."
                    />
                    <button class="button button--primary" on:click=move |_| open_details_modal(None, String::new())>
                        {icon("plus")}
                        {"New product"}
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch() disabled=move || cache.loading.get()>
                        {icon("refresh")}
                        {"Refresh"}
                    </button>
                </div>
            </div>

            {move || cache.error_message().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"ID"}</th>
                            <th class="table__header-cell">{"Title"}</th>
                            <th class="table__header-cell">{"CAS number"}</th>
                            <th class="table__header-cell">{"Category"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let term = search.get();
                            rows.get().into_iter().map(|row| {
                                let id = row.id;
                                let title_for_edit = row.title.clone();
                                let title_for_delete = row.title.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details_modal(Some(id), title_for_edit.clone())>
                                        <td class="table__cell">{id}</td>
                                        <td class="table__cell">{highlight_matches(&row.title, &term)}</td>
                                        <td class="table__cell">{highlight_matches(&row.cas_number, &term)}</td>
                                        <td class="table__cell">{highlight_matches(&row.category, &term)}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_product(id, title_for_delete.clone());
                                                }
                                            >
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !cache.loading.get() && rows.get().is_empty()>
                    <div class="table__empty">{"No products found"}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_product_without_optional_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": 4, "title": "Toluene", "casNumber": null, "category": null}"#,
        )
        .unwrap();
        let row = ProductRow::from(product);
        assert_eq!(row.cas_number, "-");
        assert_eq!(row.category, "-");
        assert_eq!(row.title, "Toluene");
    }
}
