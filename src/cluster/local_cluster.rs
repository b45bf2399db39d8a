//! In-process cluster membership registry.
//!
//! Backs embedded and mixed-mode benchmark runs where every participant
//! lives in the same process, and serves as the membership substrate for
//! integration tests. Member metadata is tracked in a lock-free map;
//! join listeners are invoked synchronously on the joining caller's
//! execution context, which plays the role of the service-owned
//! notification-delivery context.

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;
use tracing::trace;

use super::ClusterConnector;
use super::ClusterView;
use super::JoinListener;
use super::MemberMeta;
use super::SubscriptionId;
use crate::Result;

pub struct LocalCluster {
    members: DashMap<u32, MemberMeta>,
    listeners: DashMap<SubscriptionId, JoinListener>,
    next_subscription_id: AtomicU64,
}

impl LocalCluster {
    pub fn new() -> Self {
        Self {
            members: DashMap::new(),
            listeners: DashMap::new(),
            next_subscription_id: AtomicU64::new(1),
        }
    }

    /// Adds `member` to the cluster and delivers a join event to all
    /// registered listeners.
    ///
    /// Re-joining an already known id refreshes its metadata without a
    /// join event, so coalesced reconnects cannot inflate the count.
    pub fn member_join(
        &self,
        member: MemberMeta,
    ) {
        let id = member.id;
        let already_known = self.members.insert(id, member).is_some();
        if already_known {
            trace!("member {} re-joined, metadata refreshed", id);
            return;
        }

        debug!("member {} joined, cluster size: {}", id, self.members.len());
        self.notify_member_joined();
    }

    /// Removes a member. Leaves are not join events: listeners are not
    /// notified.
    pub fn member_leave(
        &self,
        member_id: u32,
    ) -> bool {
        let removed = self.members.remove(&member_id).is_some();
        if removed {
            debug!("member {} left, cluster size: {}", member_id, self.members.len());
        }
        removed
    }

    fn notify_member_joined(&self) {
        // Snapshot first: a listener may be unregistered concurrently
        // while we iterate.
        let listeners: Vec<JoinListener> =
            self.listeners.iter().map(|entry| Arc::clone(entry.value())).collect();

        for listener in listeners {
            listener();
        }
    }
}

impl Default for LocalCluster {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterView for LocalCluster {
    fn member_count(&self) -> usize {
        self.members.len()
    }

    fn members(&self) -> Vec<MemberMeta> {
        self.members.iter().map(|entry| entry.value().clone()).collect()
    }

    fn subscribe_member_joined(
        &self,
        listener: JoinListener,
    ) -> Result<SubscriptionId> {
        let subscription_id = self.next_subscription_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.insert(subscription_id, listener);

        trace!("registered join listener {}", subscription_id);
        Ok(subscription_id)
    }

    fn unsubscribe(
        &self,
        subscription_id: SubscriptionId,
    ) {
        if self.listeners.remove(&subscription_id).is_some() {
            trace!("unregistered join listener {}", subscription_id);
        }
    }
}

/// [`ClusterConnector`] over a shared in-process [`LocalCluster`].
///
/// Mixed-mode runs hand the same `LocalCluster` to several driver nodes so
/// they observe each other's joins.
pub struct LocalConnector {
    cluster: Arc<LocalCluster>,
}

impl LocalConnector {
    pub fn new(cluster: Arc<LocalCluster>) -> Self {
        Self { cluster }
    }
}

#[async_trait]
impl ClusterConnector for LocalConnector {
    async fn connect(
        &self,
        member: MemberMeta,
    ) -> Result<Arc<dyn ClusterView>> {
        self.cluster.member_join(member);
        Ok(Arc::clone(&self.cluster) as Arc<dyn ClusterView>)
    }

    async fn disconnect(
        &self,
        member_id: u32,
    ) -> Result<()> {
        self.cluster.member_leave(member_id);
        Ok(())
    }
}
