use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_category::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    /// Category to edit; `None` creates a new one
    category: Option<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(category.as_ref());

    view! {
        <div class="details-container category-details">
            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">{"Name"}</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| vm.set_name(event_target_value(&ev))
                        placeholder="e.g. Industrial Chemicals"
                        maxlength="100"
                    />
                    {move || vm.field_error("name").map(|e| view! { <small class="field-error">{e}</small> })}
                </div>

                <div class="form-group">
                    <label for="category-slug">{"Slug"}</label>
                    <input
                        type="text"
                        id="category-slug"
                        prop:value=move || vm.form.get().slug
                        on:input=move |ev| vm.set_slug(event_target_value(&ev))
                        placeholder="generated from the name when left empty"
                        maxlength="100"
                    />
                    {move || vm.field_error("slug").map(|e| view! { <small class="field-error">{e}</small> })}
                </div>

                <div class="form-group">
                    <label for="category-url">{"URL"}</label>
                    <input
                        type="text"
                        id="category-url"
                        prop:value=move || vm.form.get().url
                        on:input=move |ev| vm.set_url(event_target_value(&ev))
                        placeholder="/products?category=..."
                    />
                    {move || vm.field_error("url").map(|e| view! { <small class="field-error">{e}</small> })}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("cancel")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
