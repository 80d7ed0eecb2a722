//! Request fencing for cache cells
//!
//! Each cache cell owns one fence. Every fetch takes a ticket; when the fetch
//! resolves, its result is applied only if the ticket is still the newest one
//! and the owner has not been torn down. A slow refresh can therefore never
//! overwrite the result of a newer one, and results arriving after unmount are
//! dropped.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct FenceState {
    latest: AtomicU64,
    closed: AtomicBool,
}

#[derive(Debug, Clone, Default)]
pub struct FetchFence {
    state: Arc<FenceState>,
}

/// Proof that a fetch was started; compare against the fence on completion
#[derive(Debug, Clone)]
pub struct FetchTicket {
    seq: u64,
    state: Arc<FenceState>,
}

impl FetchFence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, superseding every ticket issued before
    pub fn issue(&self) -> FetchTicket {
        let seq = self.state.latest.fetch_add(1, Ordering::SeqCst) + 1;
        FetchTicket {
            seq,
            state: Arc::clone(&self.state),
        }
    }

    /// Stop accepting results (owner unmounted)
    pub fn close(&self) {
        self.state.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// Sequence number of the newest ticket, 0 before the first fetch
    pub fn latest(&self) -> u64 {
        self.state.latest.load(Ordering::SeqCst)
    }
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Whether the result of this fetch may still be applied
    pub fn is_current(&self) -> bool {
        !self.state.closed.load(Ordering::SeqCst)
            && self.state.latest.load(Ordering::SeqCst) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let fence = FetchFence::new();
        let first = fence.issue();
        assert!(first.is_current());

        let second = fence.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(fence.latest(), 2);
        assert!(second.seq() > first.seq());
    }

    #[test]
    fn test_close_rejects_everything() {
        let fence = FetchFence::new();
        let ticket = fence.issue();
        fence.clone().close();
        assert!(fence.is_closed());
        assert!(!ticket.is_current());
        assert!(!fence.issue().is_current());
    }
}
