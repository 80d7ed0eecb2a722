use contracts::domain::a001_category::Category;
use contracts::domain::a002_product::ProductDto;
use contracts::shared::validation::{sanitize_input, ValidationErrors};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_category::api as category_api;
use crate::domain::a002_product::api;
use crate::shared::cache_cell::CacheCell;

/// ViewModel for the product form
#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub categories: CacheCell<Category>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        let vm = Self {
            form: RwSignal::new(ProductDto::default()),
            categories: CacheCell::new("product form categories"),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        };

        // A product loaded before the choices only knows its category by name
        Effect::new(move |_| {
            let resolved = vm.categories.items.with(|list| {
                vm.form.with_untracked(|f| match (&f.category_id, &f.category_name) {
                    (None, Some(name)) => list.iter().find(|c| &c.name == name).cloned(),
                    _ => None,
                })
            });
            if let Some(category) = resolved {
                vm.form.update(|f| f.set_category(Some(&category)));
            }
        });

        vm
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.for_field(field).map(str::to_string))
    }

    /// Fetch the category choices and, when editing, the product itself
    pub fn load(&self, id: Option<i64>) {
        self.categories.load(category_api::fetch_categories());

        let Some(id) = id else {
            return;
        };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            let result = api::fetch_product(id).await;
            vm.loading.set(false);
            match result {
                Ok(product) => {
                    let categories = vm.categories.snapshot();
                    vm.form.set(ProductDto::from_product(&product, &categories));
                }
                Err(e) => vm
                    .error
                    .set(Some(format!("Failed to load product: {}", e.user_message()))),
            }
        });
    }

    pub fn select_category(&self, raw_id: String) {
        let id = raw_id.parse::<i64>().ok();
        let category = id.and_then(|id| {
            self.categories
                .items
                .with_untracked(|list| list.iter().find(|c| c.id == id).cloned())
        });
        self.form.update(|f| f.set_category(category.as_ref()));
    }

    /// Validate and send the form; `on_saved` runs after the API accepted it
    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.title = sanitize_input(&dto.title, 255);
        dto.cas_number = sanitize_input(&dto.cas_number, 50);
        dto.image_url = dto.image_url.trim().to_string();
        dto.description = dto.description.trim().to_string();

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
                Some(id) => api::update_product(id, &dto).await,
                None => api::create_product(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(saved) => {
                    log::info!("Product #{} '{}' saved", saved.id, saved.title);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
