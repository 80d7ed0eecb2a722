//! Storefront contact form
//!
//! Collects a phone number for a product enquiry and posts it to `/contact`.
//! In best-effort mode (landing page) a failed submission is still
//! acknowledged to the visitor; the failure is only logged.

use crate::domain::a003_contact_request::api;
use crate::shared::notify::use_notifier;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_contact_request::ContactRequestDto;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const SENT_MESSAGE: &str = "Your inquiry has been sent. We will contact you soon.";
pub const BEST_EFFORT_SENT_MESSAGE: &str = "Thank you! We will contact you shortly.";
pub const BEST_EFFORT_FAILED_MESSAGE: &str = "Request noted. We will reach out soon.";

#[derive(Clone, Copy)]
struct ContactFormState {
    form: RwSignal<ContactRequestDto>,
    errors: RwSignal<ValidationErrors>,
    sending: RwSignal<bool>,
}

impl ContactFormState {
    fn new(product: Option<&Product>) -> Self {
        Self {
            form: RwSignal::new(ContactRequestDto::for_product(product)),
            errors: RwSignal::new(ValidationErrors::new()),
            sending: RwSignal::new(false),
        }
    }

    fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.for_field(field).map(str::to_string))
    }

    /// Keep the product link, clear what the visitor typed
    fn reset(&self) {
        self.form.update(|f| {
            *f = ContactRequestDto {
                product_id: f.product_id,
                product: f.product.clone(),
                ..ContactRequestDto::default()
            }
        });
        self.errors.set(ValidationErrors::new());
    }
}

#[component]
pub fn ContactForm(
    /// Product the enquiry is about, if any
    #[prop(optional_no_strip)]
    product: Option<Product>,
    /// Acknowledge the visitor even when the API call fails
    #[prop(optional)]
    best_effort: bool,
    on_done: Callback<()>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let state = ContactFormState::new(product.as_ref());
    let notifier = use_notifier();
    let product_title = product.map(|p| p.title);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.sending.get_untracked() {
            return;
        }

        let dto = state.form.get_untracked().normalized();
        if let Err(errors) = dto.validate() {
            state.errors.set(errors);
            return;
        }
        state.errors.set(ValidationErrors::new());
        state.sending.set(true);

        spawn_local(async move {
            let result = api::submit_contact_request(&dto).await;
            state.sending.set(false);
            match result {
                Ok(()) => {
                    log::info!("Contact request submitted successfully");
                    notifier.success(if best_effort {
                        BEST_EFFORT_SENT_MESSAGE
                    } else {
                        SENT_MESSAGE
                    });
                    state.reset();
                    on_done.run(());
                }
                Err(e) if best_effort => {
                    log::warn!("Contact request not delivered: {e}");
                    notifier.info(BEST_EFFORT_FAILED_MESSAGE);
                    state.reset();
                    on_done.run(());
                }
                Err(e) => {
                    notifier.error(format!(
                        "Failed to submit contact form: {}",
                        e.user_message()
                    ));
                }
            }
        });
    };

    view! {
        <form class="details-container contact-form" on:submit=submit>
            {product_title.map(|t| view! {
                <p class="contact-form__product">"Enquiry about "<strong>{t}</strong></p>
            })}

            <div class="details-form">
                <div class="contact-form__phone">
                    <div class="form-group contact-form__code">
                        <label for="contact-country-code">{"Code"}</label>
                        <input
                            type="text"
                            id="contact-country-code"
                            maxlength="4"
                            prop:value=move || state.form.with(|f| f.country_code.clone())
                            on:input=move |ev| state.form.update(|f| f.country_code = event_target_value(&ev))
                        />
                        {move || state.field_error("countryCode").map(|e| view! { <small class="field-error">{e}</small> })}
                    </div>
                    <div class="form-group contact-form__number">
                        <label for="contact-mobile">{"Mobile number"}</label>
                        <input
                            type="tel"
                            id="contact-mobile"
                            placeholder="10 digit mobile number"
                            maxlength="14"
                            prop:value=move || state.form.with(|f| f.mobile_number.clone())
                            on:input=move |ev| state.form.update(|f| f.mobile_number = event_target_value(&ev))
                        />
                        {move || state.field_error("mobileNumber").map(|e| view! { <small class="field-error">{e}</small> })}
                    </div>
                </div>
            </div>

            <div class="details-actions">
                <button type="submit" class="button button--primary" disabled=move || state.sending.get()>
                    {move || if state.sending.get() { "Sending..." } else { "Request a call back" }}
                </button>
                {on_cancel.map(|cb| view! {
                    <button type="button" class="button button--secondary" on:click=move |_| cb.run(())>
                        {"Cancel"}
                    </button>
                })}
            </div>
        </form>
    }
}
