//! The benchmark process's attachment to the compute cluster.
//!
//! ## Key Responsibilities
//! - Establishes (or adopts) the cluster connection during driver setup
//! - Hands the shared membership view to the quorum barrier and drivers
//! - Releases the membership on teardown, but only when it owns it
//!
//! The attach-or-create choice is passed in explicitly instead of being
//! read from process-wide state, so mixed-mode runs (driver embedded next
//! to an already-running participant) stay race-free.

use std::sync::Arc;

use tracing::debug;
use tracing::info;

use crate::ClusterConnector;
use crate::ClusterView;
use crate::MemberMeta;
use crate::Result;

/// How the driver node obtains its cluster connection.
#[derive(Clone)]
pub enum Attachment {
    /// Bootstrap a fresh connection through the connector; the node owns
    /// it and tears it down on stop.
    Connect(Arc<dyn ClusterConnector>),

    /// Reuse a connection owned by the embedding process (mixed-mode
    /// runs); the node leaves it untouched on stop.
    Existing(Arc<dyn ClusterView>),
}

#[derive(Debug)]
pub struct DriverNode {
    member: MemberMeta,
    view: Arc<dyn ClusterView>,
    // Present only when this node established the connection itself
    connector: Option<Arc<dyn ClusterConnector>>,
}

impl DriverNode {
    pub async fn start(
        attachment: Attachment,
        member: MemberMeta,
    ) -> Result<Self> {
        match attachment {
            Attachment::Connect(connector) => {
                info!(
                    "joining cluster as member {} ({}), mode: {}",
                    member.id, member.address, member.mode
                );
                let view = connector.connect(member.clone()).await?;
                Ok(Self {
                    member,
                    view,
                    connector: Some(connector),
                })
            }
            Attachment::Existing(view) => {
                debug!("adopting existing cluster connection as member {}", member.id);
                Ok(Self {
                    member,
                    view,
                    connector: None,
                })
            }
        }
    }

    /// Shared membership view of the joined cluster.
    pub fn cluster(&self) -> Arc<dyn ClusterView> {
        Arc::clone(&self.view)
    }

    pub fn member(&self) -> &MemberMeta {
        &self.member
    }

    /// Releases the membership if this node owns the connection.
    pub async fn stop(self) -> Result<()> {
        if let Some(connector) = self.connector {
            info!("leaving cluster as member {}", self.member.id);
            connector.disconnect(self.member.id).await?;
        }
        Ok(())
    }
}
