use super::view_model::ProductDetailsViewModel;
use crate::shared::icons::icon;
use contracts::domain::a002_product::ProductDto;
use leptos::prelude::*;

#[component]
pub fn ProductDetails(
    /// Product to edit; `None` creates a new one
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();
    vm.load(id);

    let text_field = move |field: &'static str,
                           label: &'static str,
                           placeholder: &'static str,
                           get: fn(&ProductDto) -> String,
                           set: fn(&mut ProductDto, String)| {
        view! {
            <div class="form-group">
                <label for=format!("product-{field}")>{label}</label>
                <input
                    type="text"
                    id=format!("product-{field}")
                    prop:value=move || vm.form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                    placeholder=placeholder
                />
                {move || vm.field_error(field).map(|e| view! { <small class="field-error">{e}</small> })}
            </div>
        }
    };

    view! {
        <div class="details-container product-details">
            <Show when=move || vm.loading.get()>
                <div class="details-loading">{"Loading..."}</div>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {text_field("title", "Title", "Product title", |f| f.title.clone(), |f, v| f.title = v)}
                {text_field(
                    "casNumber",
                    "CAS number",
                    "e.g. 64-19-7 (optional)",
                    |f| f.cas_number.clone(),
                    |f, v| f.cas_number = v,
                )}

                <div class="form-group">
                    <label for="product-category">{"Category"}</label>
                    <select
                        id="product-category"
                        prop:value=move || vm.form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| vm.select_category(event_target_value(&ev))
                    >
                        <option value="">{"Select a category"}</option>
                        {move || vm.categories.items.get().into_iter().map(|c| {
                            let selected = vm.form.with(|f| f.category_id == Some(c.id));
                            view! { <option value=c.id.to_string() selected=selected>{c.name}</option> }
                        }).collect_view()}
                    </select>
                    {move || vm.field_error("categoryId").map(|e| view! { <small class="field-error">{e}</small> })}
                </div>

                {text_field("imageUrl", "Image URL", "https://...", |f| f.image_url.clone(), |f, v| f.image_url = v)}

                <div class="form-group">
                    <label for="product-description">{"Description"}</label>
                    <textarea
                        id="product-description"
                        rows="4"
                        maxlength="2000"
                        prop:value=move || vm.form.get().description
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Grade, purity, typical applications"
                    />
                    {move || vm.field_error("description").map(|e| view! { <small class="field-error">{e}</small> })}
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| vm.save_command(on_saved)
                    disabled=move || vm.saving.get() || vm.loading.get()
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
