use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_global_context, AppPage};
use crate::system::auth::context::{do_login, use_auth};

/// Admin sign-in with an operator-issued access token
#[component]
pub fn LoginPage() -> impl IntoView {
    let token = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let (auth_state, set_auth_state) = use_auth();
    let ctx = use_global_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        match do_login(&token.get_untracked(), set_auth_state) {
            Ok(()) => {
                token.set(String::new());
                ctx.navigate(AppPage::Admin);
            }
            Err(e) => {
                log::warn!("Sign-in rejected: {e}");
                set_error_message.set(Some(e));
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Chem Catalog"</h1>
                <h2>"Admin sign-in"</h2>

                <Show when=move || auth_state.get().is_admin()>
                    <div class="warning-box">
                        <span class="warning-box__text">"You are already signed in."</span>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.navigate(AppPage::Admin)>
                            "Open admin panel"
                        </Button>
                    </div>
                </Show>

                {move || error_message.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="access-token">"Access token"</label>
                        <textarea
                            id="access-token"
                            rows="4"
                            placeholder="Paste the token issued by the API"
                            prop:value=move || token.get()
                            on:input=move |ev| token.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="button button--primary">
                        "Sign in"
                    </button>
                </form>
            </div>
        </div>
    }
}
