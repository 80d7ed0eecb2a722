use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

const MODAL_BASE_Z: i32 = 1000;

/// Stacking order for the modal at `depth` (0 is the bottom of the stack)
pub fn modal_z_index(depth: usize) -> i32 {
    MODAL_BASE_Z + depth as i32
}

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    title: String,
    builder: ModalBuilder,
    modal_class: Option<String>,
}

/// Returned by [`ModalStackService::push`]; lets the modal content close itself
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open dialogs (product preview, contact form, admin editors)
///
/// The preview can open the contact form on top of itself; Escape closes only
/// the topmost entry.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    // Removal is deferred one tick so the DOM event that triggered it finishes
    // dispatching before its handler is dropped.
    fn defer(&self, f: impl FnOnce(ModalStackService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a titled dialog
    pub fn push<F>(&self, title: impl Into<String>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_with_class(title, None, builder)
    }

    /// Open a titled dialog with an extra class on the surface (sizing)
    pub fn push_with_class<F>(
        &self,
        title: impl Into<String>,
        modal_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let title = title.into();
        log::debug!("modal #{id} opened: {title}");
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                title,
                builder: Arc::new(builder),
                modal_class,
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    pub fn close_deferred(&self, id: u64) {
        self.defer(move |svc| svc.close(id));
    }

    pub fn pop_deferred(&self) {
        self.defer(|svc| {
            svc.stack.update(|s| {
                s.pop();
            })
        });
    }

    pub fn clear(&self) {
        self.stack.set(Vec::new());
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

/// Renders the modal stack; mounted once at the application root
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    // Escape closes only the topmost modal
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.stack.with_untracked(|s| !s.is_empty()) {
                    svc.pop_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=move || {
                    svc.stack
                        .get()
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<(usize, ModalEntry)>>()
                }
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let id = entry.id;
                    let on_close = Callback::new(move |_| svc.close_deferred(id));
                    let handle = ModalHandle { id, svc };
                    let content = (entry.builder)(handle);

                    view! {
                        <ModalFrame
                            title=entry.title.clone()
                            z_index=modal_z_index(idx)
                            on_close=on_close
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_z_index_grows_with_depth() {
        assert_eq!(modal_z_index(0), 1000);
        assert!(modal_z_index(1) > modal_z_index(0));
        assert_eq!(modal_z_index(2), 1002);
    }
}
