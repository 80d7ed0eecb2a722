use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Overlay plus a titled surface with a close button
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    /// Called on overlay click or the close button
    on_close: Callback<()>,
    /// Stacking order (default: 1000)
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for the surface (`div.modal`)
    #[prop(optional, into)]
    modal_class: String,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let pressed_on_overlay = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Closing needs both press and release on the overlay, so a text selection
    // dragged out of the dialog does not dismiss it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        pressed_on_overlay.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = pressed_on_overlay.get_untracked() && is_direct_overlay_event(&ev);
        pressed_on_overlay.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = if modal_class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {modal_class}")
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=surface_class role="dialog" aria-modal="true" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{title}</h3>
                    <button class="modal__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
