//! Page level notifications
//!
//! One notice is visible at a time. Each notice clears itself after
//! [`NOTICE_TTL_MS`] unless a newer one replaced it first.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub const NOTICE_TTL_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn css_modifier(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notice--info",
            NoticeKind::Success => "notice--success",
            NoticeKind::Error => "notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(1),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text.into());
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Notice { id, kind, text }));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            let still_shown = current
                .try_with_untracked(|n| n.as_ref().is_some_and(|n| n.id == id))
                .unwrap_or(false);
            if still_shown {
                current.set(None);
            }
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context (provide it in app root)")
}

/// Renders the current notice with a dismiss button
#[component]
pub fn NoticeBar() -> impl IntoView {
    let notifier = use_notifier();

    move || {
        notifier.current().map(|notice| {
            view! {
                <div class=format!("notice {}", notice.kind.css_modifier()) role="status">
                    <span class="notice__text">{notice.text}</span>
                    <button
                        class="notice__close"
                        aria-label="Dismiss"
                        on:click=move |_| notifier.dismiss()
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
            }
        })
    }
}
