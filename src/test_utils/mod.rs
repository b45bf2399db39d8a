use std::sync::Arc;

use crate::DistributionMode;
use crate::LocalCluster;
use crate::MemberMeta;

pub fn member(id: u32) -> MemberMeta {
    MemberMeta {
        id,
        address: format!("node-{id}.test:8080"),
        mode: DistributionMode::DataNode,
    }
}

pub fn client_member(id: u32) -> MemberMeta {
    MemberMeta {
        id,
        address: format!("client-{id}.test:8080"),
        mode: DistributionMode::ClientOnly,
    }
}

/// Cluster pre-populated with data-node members `1..=size`.
pub fn populated_cluster(size: u32) -> Arc<LocalCluster> {
    let cluster = Arc::new(LocalCluster::new());
    for id in 1..=size {
        cluster.member_join(member(id));
    }
    cluster
}
