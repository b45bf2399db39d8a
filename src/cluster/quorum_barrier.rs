//! One-shot quorum-wait barrier.
//!
//! Blocks the calling task until cluster membership reaches a target size,
//! driven by join notifications from the membership service rather than
//! polling. The classic lost-wakeup race (quorum reached between the
//! initial count check and listener registration) is closed two ways:
//! the count is checked before subscribing, and re-checked both right
//! after the subscription lands and inside every notification callback.
//! The callback never trusts a notification's implied delta, since the
//! service may coalesce or reorder join events.
//!
//! The wait is unbounded. A benchmark run that never reaches quorum is an
//! operator-visible hang for the external supervisor to act on; callers
//! needing bounded waits wrap the future themselves.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tracing::debug;
use tracing::info;

use super::ClusterView;
use super::JoinListener;
use crate::ClusterError;
use crate::Result;

/// A single-fire signal: the first `fire` releases the waiter, every later
/// one is a no-op. Safe to fire from any thread.
pub(crate) struct OneshotGate {
    tx: Mutex<Option<oneshot::Sender<()>>>,
}

impl OneshotGate {
    pub(crate) fn new() -> (Self, oneshot::Receiver<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                tx: Mutex::new(Some(tx)),
            },
            rx,
        )
    }

    pub(crate) fn fire(&self) {
        if let Some(tx) = self.tx.lock().take() {
            // The receiver side only disappears once the waiter has
            // returned, at which point the signal is moot anyway.
            let _ = tx.send(());
        }
    }
}

/// Blocks until the membership view reports at least `target` members.
///
/// The barrier is one-shot: [`wait`](Self::wait) consumes it, and once
/// satisfied it never reverts, regardless of members leaving afterwards.
/// Create it immediately before the wait; the join subscription it
/// registers lives only for the duration of that single call.
pub struct QuorumBarrier {
    view: Arc<dyn ClusterView>,
    target: usize,
}

impl QuorumBarrier {
    /// `target` must be at least 1 (the local member itself).
    pub fn new(
        view: Arc<dyn ClusterView>,
        target: usize,
    ) -> Self {
        debug_assert!(target >= 1, "quorum target must be at least 1");
        Self { view, target }
    }

    /// Returns once the member count has been observed at or above the
    /// target.
    ///
    /// Fast path: if quorum is already satisfied, returns immediately and
    /// no listener is ever registered. Otherwise registers exactly one
    /// join listener, blocks on a single-fire gate and unregisters the
    /// listener after release. Listener registration failure propagates
    /// immediately without blocking.
    pub async fn wait(self) -> Result<()> {
        // Fast path: quorum may have been reached before the wait began.
        let current = self.view.member_count();
        if current >= self.target {
            debug!("quorum already satisfied: {} of {} members", current, self.target);
            return Ok(());
        }

        info!(
            "Waiting for {} more member(s) to join the cluster...",
            self.target.saturating_sub(current)
        );

        let (gate, released) = OneshotGate::new();
        let gate = Arc::new(gate);

        let view = Arc::clone(&self.view);
        let target = self.target;
        let listener_gate = Arc::clone(&gate);
        let listener: JoinListener = Arc::new(move || {
            // Re-read the live count on every notification; several joins
            // may hide behind one event.
            if view.member_count() >= target {
                listener_gate.fire();
            }
        });

        let subscription_id = self.view.subscribe_member_joined(listener)?;

        // A join that landed between the fast-path check and the
        // subscription would otherwise be lost; re-check now that the
        // listener is in place.
        if self.view.member_count() >= self.target {
            gate.fire();
        }

        // The listener now holds the only gate reference: a membership
        // service that discards it without firing must fail the wait,
        // not hang it.
        drop(gate);

        let released = released.await;
        self.view.unsubscribe(subscription_id);

        released.map_err(|_| ClusterError::MembershipChannelClosed)?;

        debug!("quorum satisfied: {} members online", self.view.member_count());
        Ok(())
    }
}
