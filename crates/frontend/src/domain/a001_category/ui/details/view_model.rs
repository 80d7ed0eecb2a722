use contracts::domain::a001_category::{Category, CategoryDto};
use contracts::shared::validation::{slugify, ValidationErrors};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_category::api;

/// ViewModel for the category form
#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Slug typed by hand; until then it follows the name
    slug_touched: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(category: Option<&Category>) -> Self {
        let form = category.map(CategoryDto::from_category).unwrap_or_default();
        Self {
            slug_touched: RwSignal::new(form.id.is_some()),
            form: RwSignal::new(form),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.for_field(field).map(str::to_string))
    }

    pub fn set_name(&self, name: String) {
        let follow = !self.slug_touched.get_untracked();
        self.form.update(|f| {
            if follow {
                f.slug = slugify(&name);
                f.url = format!("/products?category={}", f.slug);
            }
            f.name = name;
        });
    }

    pub fn set_slug(&self, slug: String) {
        self.slug_touched.set(true);
        self.form.update(|f| f.slug = slug);
    }

    pub fn set_url(&self, url: String) {
        self.form.update(|f| f.url = url);
    }

    /// Validate and send the form; `on_saved` runs after the API accepted it
    pub fn save_command(&self, on_saved: Callback<()>) {
        let dto = self.form.get_untracked().normalized();
        if let Err(errors) = dto.validate() {
            self.error.set(Some(errors.to_string()));
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());
        self.error.set(None);
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            let result = match dto.id {
                Some(id) => api::update_category(id, &dto).await,
                None => api::create_category(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Category '{}' saved", saved.name);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
        });
    }
}
