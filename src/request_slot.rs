//! Request Slots
//!
//! Every async request a view can have in flight is tied to a slot. Issuing
//! a request bumps the slot's generation and hands out a ticket; a result is
//! applied only while its ticket is still the slot's latest, so a slow
//! answer to an old query can never overwrite a newer one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Proof of which generation a request was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSlot {
    generation: Arc<AtomicU64>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in flight
    pub fn issue(&self) -> Ticket {
        Ticket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Supersede in-flight requests without starting one
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `apply` only for the latest ticket; returns whether it ran
    pub fn apply_if_current(&self, ticket: Ticket, apply: impl FnOnce()) -> bool {
        if self.is_current(ticket) {
            apply();
            true
        } else {
            false
        }
    }

    /// Drive a request issued under `ticket` to completion.
    ///
    /// Waits out `delay` first and skips `request` entirely if a newer
    /// ticket was issued meanwhile. The result reaches `apply` only if the
    /// ticket is still current once it arrives. Returns whether it did.
    pub async fn settle<T, D, F, Fut>(
        &self,
        ticket: Ticket,
        delay: D,
        request: F,
        apply: impl FnOnce(T),
    ) -> bool
    where
        D: Future<Output = ()>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        delay.await;
        if !self.is_current(ticket) {
            return false;
        }
        let result = request().await;
        self.apply_if_current(ticket, || apply(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use tokio::sync::oneshot;

    #[test]
    fn test_late_result_for_older_query_is_dropped() {
        let slot = RequestSlot::new();
        let mut shown: Vec<&str> = Vec::new();

        let chicken = slot.issue();
        let beef = slot.issue();

        // "beef" answers first, "chicken" last
        slot.apply_if_current(beef, || shown = vec!["beef stew"]);
        let applied = slot.apply_if_current(chicken, || shown = vec!["chicken curry"]);

        assert!(!applied);
        assert_eq!(shown, vec!["beef stew"]);
    }

    #[test]
    fn test_invalidate_drops_pending_result() {
        let slot = RequestSlot::new();
        let ticket = slot.issue();
        // Query cleared while the request was running
        slot.invalidate();
        assert!(!slot.is_current(ticket));
    }

    #[test]
    fn test_clones_share_generation() {
        let slot = RequestSlot::new();
        let handle = slot.clone();
        let first = slot.issue();
        assert!(handle.is_current(first));
        let second = handle.issue();
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
    }

    #[tokio::test]
    async fn test_settle_shows_only_latest_search() {
        let slot = RequestSlot::new();
        let shown = RefCell::new(Vec::new());
        let (chicken_tx, chicken_rx) = oneshot::channel::<&str>();
        let (beef_tx, beef_rx) = oneshot::channel::<&str>();

        let chicken = slot.settle(
            slot.issue(),
            async {},
            || async { chicken_rx.await.unwrap() },
            |r| shown.borrow_mut().push(r),
        );
        let beef = slot.settle(
            slot.issue(),
            async {},
            || async { beef_rx.await.unwrap() },
            |r| shown.borrow_mut().push(r),
        );
        let backend = async {
            beef_tx.send("beef stew").unwrap();
            tokio::task::yield_now().await;
            chicken_tx.send("chicken curry").unwrap();
        };

        let (chicken_applied, beef_applied, ()) = tokio::join!(chicken, beef, backend);

        assert!(!chicken_applied);
        assert!(beef_applied);
        assert_eq!(*shown.borrow(), vec!["beef stew"]);
    }

    #[tokio::test]
    async fn test_settle_skips_request_superseded_during_debounce() {
        let slot = RequestSlot::new();
        let sent = Cell::new(0);
        let (gate_tx, gate_rx) = oneshot::channel::<()>();

        let first = slot.issue();
        let debounced = slot.settle(
            first,
            async {
                gate_rx.await.ok();
            },
            || {
                sent.set(sent.get() + 1);
                async { "chi" }
            },
            |_| {},
        );
        // Next keystroke lands before the debounce elapses
        let typing = async {
            slot.issue();
            gate_tx.send(()).unwrap();
        };

        let (applied, ()) = tokio::join!(debounced, typing);

        assert!(!applied);
        assert_eq!(sent.get(), 0);
    }

    #[tokio::test]
    async fn test_random_pick_supersedes_pending_search() {
        let slot = RequestSlot::new();
        let shown = RefCell::new(Vec::new());
        let (search_tx, search_rx) = oneshot::channel::<&str>();

        let search = slot.settle(
            slot.issue(),
            async {},
            || async { search_rx.await.unwrap() },
            |r| shown.borrow_mut().push(r),
        );
        let surprise = async {
            let applied = slot
                .settle(slot.issue(), async {}, || async { "random negroni" }, |r| {
                    shown.borrow_mut().push(r)
                })
                .await;
            search_tx.send("gin fizz").unwrap();
            applied
        };

        let (search_applied, surprise_applied) = tokio::join!(search, surprise);

        assert!(!search_applied);
        assert!(surprise_applied);
        assert_eq!(*shown.borrow(), vec!["random negroni"]);
    }

    #[tokio::test]
    async fn test_cleared_query_drops_late_result() {
        let slot = RequestSlot::new();
        let shown = RefCell::new(Vec::new());
        let (tx, rx) = oneshot::channel::<&str>();

        let search = slot.settle(
            slot.issue(),
            async {},
            || async { rx.await.unwrap() },
            |r| shown.borrow_mut().push(r),
        );
        let clear = async {
            slot.invalidate();
            tx.send("chicken curry").unwrap();
        };

        let (applied, ()) = tokio::join!(search, clear);

        assert!(!applied);
        assert!(shown.borrow().is_empty());
    }
}
