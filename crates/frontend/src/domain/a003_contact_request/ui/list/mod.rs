use crate::domain::a003_contact_request::api;
use crate::shared::cache_cell::CacheCell;
use crate::shared::date_utils::format_created_at;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::notify::use_notifier;
use contracts::domain::a003_contact_request::ContactRequest;
use contracts::shared::derived_view::{contact_request_counts, filter_contact_requests};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Which requests the triage table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Open,
    Done,
}

impl StatusFilter {
    pub fn admits(&self, request: &ContactRequest) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => !request.complete,
            StatusFilter::Done => request.complete,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Open => "open",
            StatusFilter::Done => "done",
        }
    }

    fn parse(value: &str) -> Self {
        match value {
            "open" => StatusFilter::Open,
            "done" => StatusFilter::Done,
            _ => StatusFilter::All,
        }
    }
}

/// Admin triage table of storefront leads
#[component]
#[allow(non_snake_case)]
pub fn ContactRequestList() -> impl IntoView {
    let cache = CacheCell::<ContactRequest>::new("contact requests");
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(StatusFilter::All);
    let notifier = use_notifier();

    let fetch = move || cache.load(api::fetch_contact_requests());

    let visible = Memo::new(move |_| {
        let term = search.get();
        let status = status.get();
        cache.items.with(|items| {
            filter_contact_requests(items, &term)
                .into_iter()
                .filter(|r| status.admits(r))
                .collect::<Vec<_>>()
        })
    });
    let counts = Memo::new(move |_| cache.items.with(|items| contact_request_counts(items)));

    let toggle_complete = move |request: ContactRequest| {
        let Some(id) = request.id else {
            return;
        };
        let updated = request.with_complete(!request.complete);
        spawn_local(async move {
            match api::update_contact_request(id, &updated).await {
                Ok(saved) => {
                    notifier.success(if saved.complete {
                        "Marked as done"
                    } else {
                        "Reopened"
                    });
                    fetch();
                }
                Err(e) => notifier.error(format!("Failed to update request: {}", e.user_message())),
            }
        });
    };

    let delete_request = move |request: ContactRequest| {
        let Some(id) = request.id else {
            return;
        };
        let confirmed = web_sys::window()
            .and_then(|win| {
                win.confirm_with_message(&format!(
                    "Delete the request from {}?",
                    request.full_number()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::delete_contact_request(id).await {
                Ok(()) => {
                    notifier.success("Contact request deleted");
                    fetch();
                }
                Err(e) => notifier.error(format!("Failed to delete request: {}", e.user_message())),
            }
        });
    };

    fetch();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Contact requests"}</h1>
                    <span class="header__count">
                        {move || {
                            let (open, done) = counts.get();
                            format!("{open} open, {done} done")
                        }}
                    </span>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |v| search.set(v))
                        placeholder="Search by number or country code..."
                    />
                    <select
                        class="select"
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| status.set(StatusFilter::parse(&event_target_value(&ev)))
                    >
                        <option value="all">{"All"}</option>
                        <option value="open">{"Open"}</option>
                        <option value="done">{"Done"}</option>
                    </select>
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
                            <th class="table__header-cell">{"Received"}</th>
                            <th class="table__header-cell">{"Phone"}</th>
                            <th class="table__header-cell">{"Product"}</th>
                            <th class="table__header-cell">{"Status"}</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let term = search.get();
                            visible.get().into_iter().map(|request| {
                                let received = format_created_at(request.created_at.as_deref());
                                let phone = request.full_number();
                                let product = request.product.clone().unwrap_or_else(|| "-".to_string());
                                let complete = request.complete;
                                let for_toggle = request.clone();
                                let for_delete = request;
                                view! {
                                    <tr class="table__row" class:table__row--done=complete>
                                        <td class="table__cell">{received}</td>
                                        <td class="table__cell">{highlight_matches(&phone, &term)}</td>
                                        <td class="table__cell">{product}</td>
                                        <td class="table__cell">
                                            <span class={if complete { "badge badge--success" } else { "badge badge--warning" }}>
                                                {if complete { "Done" } else { "Open" }}
                                            </span>
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| toggle_complete(for_toggle.clone())
                                            >
                                                {if complete { "Reopen" } else { "Mark done" }}
                                            </button>
                                            <button
                                                class="button button--ghost"
                                                title="Delete"
                                                on:click=move |_| delete_request(for_delete.clone())
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
                    <div class="table__empty">{"No contact requests"}</div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(complete: bool) -> ContactRequest {
        ContactRequest {
            id: Some(1),
            country_code: "+91".into(),
            mobile_number: "9876543210".into(),
            product_id: None,
            product: None,
            complete,
            created_at: None,
        }
    }

    #[test]
    fn test_status_filter() {
        assert!(StatusFilter::All.admits(&request(true)));
        assert!(StatusFilter::Open.admits(&request(false)));
        assert!(!StatusFilter::Open.admits(&request(true)));
        assert!(StatusFilter::Done.admits(&request(true)));
        assert_eq!(StatusFilter::parse("done"), StatusFilter::Done);
        assert_eq!(StatusFilter::parse("bogus"), StatusFilter::All);
    }
}
