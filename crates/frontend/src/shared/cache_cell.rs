//! Reactive holder for the latest snapshot of one API collection
//!
//! A cell is created empty when its owning component mounts, is filled by a
//! one-shot fetch and replaced wholesale on every refresh. Results are fenced:
//! a fetch that was superseded by a newer one, or that completes after the
//! owner unmounted, is dropped.

use contracts::shared::api_error::ApiError;
use contracts::shared::fetch_fence::FetchFence;
use leptos::prelude::*;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

pub struct CacheCell<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    fence: StoredValue<FetchFence>,
    label: &'static str,
}

impl<T: Send + Sync + 'static> Clone for CacheCell<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for CacheCell<T> {}

impl<T: Clone + Send + Sync + 'static> CacheCell<T> {
    /// Empty cell owned by the current reactive scope
    ///
    /// Must be called inside a component: the fence is closed when that
    /// component is cleaned up.
    pub fn new(label: &'static str) -> Self {
        let fence = FetchFence::new();
        let on_unmount = fence.clone();
        on_cleanup(move || on_unmount.close());

        Self {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            fence: StoredValue::new(fence),
            label,
        }
    }

    /// Fetch and replace the snapshot
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        self.load_with(fetch, |result| result);
    }

    /// Fetch, pass the outcome through `settle`, then replace the snapshot
    ///
    /// `settle` runs only for the newest fetch and may substitute a fallback
    /// list for an error or an empty response.
    pub fn load_with<F, S>(&self, fetch: F, settle: S)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
        S: FnOnce(Result<Vec<T>, ApiError>) -> Result<Vec<T>, ApiError> + 'static,
    {
        let ticket = self.fence.with_value(|fence| fence.issue());
        let cell = *self;
        cell.loading.set(true);

        spawn_local(async move {
            let result = fetch.await;
            if !ticket.is_current() {
                log::debug!("{}: dropping stale fetch #{}", cell.label, ticket.seq());
                return;
            }

            match settle(result) {
                Ok(items) => {
                    log::info!("{}: loaded {} items", cell.label, items.len());
                    cell.items.set(items);
                    cell.error.set(None);
                }
                Err(e) => {
                    log::log!(e.log_level(), "{}: {}", cell.label, e);
                    cell.error.set(Some(e));
                }
            }
            cell.loading.set(false);
        });
    }

    /// Current snapshot without tracking
    pub fn snapshot(&self) -> Vec<T> {
        self.items.get_untracked()
    }

    /// User facing text of the last failure
    pub fn error_message(&self) -> Option<String> {
        self.error.get().map(|e| e.user_message())
    }
}
