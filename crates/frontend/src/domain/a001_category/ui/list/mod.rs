use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::cache_cell::CacheCell;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::notify::use_notifier;
use contracts::domain::a001_category::Category;
use contracts::shared::derived_view::filter_categories;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Admin table of categories with search, create, edit and delete
#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let cache = CacheCell::<Category>::new("categories");
    let search = RwSignal::new(String::new());
    let modal_stack = use_modal_stack();
    let notifier = use_notifier();

    let fetch = move || cache.load(api::fetch_categories());

    let visible = Memo::new(move |_| {
        let term = search.get();
        cache.items.with(|items| filter_categories(items, &term))
    });

    let open_details_modal = move |category: Option<Category>| {
        let title = match &category {
            Some(c) => format!("Edit category: {}", c.name),
            None => "New category".to_string(),
        };
        modal_stack.push(title, move |handle| {
            let on_saved = Callback::new(move |_| {
                handle.close();
                notifier.success("Category saved");
                fetch();
            });
            let on_cancel = Callback::new(move |_| handle.close());

            view! {
                <CategoryDetails category=category.clone() on_saved=on_saved on_cancel=on_cancel />
            }
            .into_any()
        });
    };

    let delete_category = move |category: Category| {
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Are you sure you want to delete \"{}\"?",
                    category.name
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_category(category.id).await {
                Ok(()) => {
                    notifier.success("Category deleted successfully");
                    fetch();
                }
                Err(e) => notifier.error(format!("Failed to delete category: {}", e.user_message())),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Categories"}</h1>
                    <span class="header__count">{move || format!("{} of {}", visible.get().len(), cache.items.get().len())}</span>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| search.set(v))
                        placeholder="Search by name or slug..."
                    />
                    <button class="button button--primary" on:click=move |_| open_details_modal(None)>
                        {icon("plus")}
                        {"New category"}
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
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Slug"}</th>
                            <th class="table__header-cell">{"URL"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let term = search.get();
                            visible.get().into_iter().map(|row| {
                                let for_edit = row.clone();
                                let for_delete = row.clone();
                                view! {
                                    <tr class="table__row" on:click=move |_| open_details_modal(Some(for_edit.clone()))>
                                        <td class="table__cell">{highlight_matches(&row.name, &term)}</td>
                                        <td class="table__cell">{highlight_matches(&row.slug, &term)}</td>
                                        <td class="table__cell">{row.url.clone()}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    delete_category(for_delete.clone());
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
                <Show when=move || !cache.loading.get() && visible.get().is_empty()>
                    <div class="table__empty">{"No categories found"}</div>
                </Show>
            </div>
        </div>
    }
}
