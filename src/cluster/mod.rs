//! Cluster membership view consumed by the benchmark driver.
//!
//! This module defines the read-only capability surface the driver needs
//! from a cluster-membership service:
//! - the live member count and a snapshot of member metadata
//! - join-event subscription with explicit unregistration
//!
//! The membership service owns the notification-delivery context; listeners
//! registered here run concurrently with the subscribing task. Delivery
//! order and de-duplication of join events are the service's responsibility,
//! not the consumer's.

mod local_cluster;
mod quorum_barrier;
pub use local_cluster::*;
pub use quorum_barrier::*;


use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;

/// Identifies one join-event listener registration.
pub type SubscriptionId = u64;

/// Callback invoked on each member-join event. Takes no arguments: the
/// subscriber re-reads the cluster state itself, since multiple joins may
/// be coalesced or reordered in flight.
pub type JoinListener = Arc<dyn Fn() + Send + Sync>;

/// How a process participates in the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    /// Join as a pure client; the process holds no data
    ClientOnly,
    /// Participate as a full data node
    #[default]
    DataNode,
}

impl fmt::Display for DistributionMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            DistributionMode::ClientOnly => write!(f, "client_only"),
            DistributionMode::DataNode => write!(f, "data_node"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberMeta {
    pub id: u32,
    pub address: String,
    #[serde(default)]
    pub mode: DistributionMode,
}

/// Read-only view of live cluster membership, owned by the membership
/// service and shared with its consumers.
#[cfg_attr(test, automock)]
pub trait ClusterView: Send + Sync + 'static {
    /// Latest known member count, including the local process.
    /// Synchronous and non-blocking.
    fn member_count(&self) -> usize;

    /// Snapshot of all known members.
    fn members(&self) -> Vec<MemberMeta>;

    /// Registers `listener` to be invoked on every member-join event.
    /// Registration failure is a fatal setup error for the caller.
    fn subscribe_member_joined(
        &self,
        listener: JoinListener,
    ) -> Result<SubscriptionId>;

    /// Removes a previously registered listener. Idempotent.
    fn unsubscribe(
        &self,
        subscription_id: SubscriptionId,
    );
}

impl fmt::Debug for dyn ClusterView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("ClusterView")
            .field("member_count", &self.member_count())
            .finish_non_exhaustive()
    }
}

/// Establishes and releases a process's membership in the cluster.
///
/// This is the seam between the harness and whatever transport actually
/// forms the cluster. Embedded runs use [`LocalConnector`]; deployments
/// provide their own implementation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ClusterConnector: Send + Sync + 'static {
    /// Joins `member` to the cluster and returns the membership view.
    async fn connect(
        &self,
        member: MemberMeta,
    ) -> Result<Arc<dyn ClusterView>>;

    /// Releases the membership previously established for `member_id`.
    async fn disconnect(
        &self,
        member_id: u32,
    ) -> Result<()>;
}

impl fmt::Debug for dyn ClusterConnector {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("ClusterConnector").finish_non_exhaustive()
    }
}
