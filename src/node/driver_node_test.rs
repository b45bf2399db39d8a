use std::sync::Arc;

use tracing_test::traced_test;

use super::*;
use crate::test_utils;
use crate::ClusterError;
use crate::ClusterView;
use crate::Error;
use crate::LocalCluster;
use crate::LocalConnector;
use crate::MockClusterConnector;

#[tokio::test]
#[traced_test]
async fn connect_joins_and_stop_leaves() {
    let cluster = Arc::new(LocalCluster::new());
    let connector = Arc::new(LocalConnector::new(Arc::clone(&cluster)));

    let node = DriverNode::start(Attachment::Connect(connector), test_utils::member(1))
        .await
        .expect("start should succeed");

    assert_eq!(node.member().id, 1);
    assert_eq!(node.cluster().member_count(), 1);

    node.stop().await.expect("stop should succeed");
    assert_eq!(cluster.member_count(), 0);
}

#[tokio::test]
#[traced_test]
async fn existing_attachment_is_left_untouched() {
    let cluster = test_utils::populated_cluster(2);

    let node = DriverNode::start(Attachment::Existing(cluster.clone()), test_utils::member(1))
        .await
        .expect("start should succeed");

    // Adopting a connection never joins a new member.
    assert_eq!(node.cluster().member_count(), 2);

    node.stop().await.expect("stop should succeed");
    // Nor does stopping release the borrowed connection.
    assert_eq!(cluster.member_count(), 2);
}

#[tokio::test]
#[traced_test]
async fn connector_failure_propagates() {
    let mut connector = MockClusterConnector::new();
    connector
        .expect_connect()
        .returning(|_| Err(ClusterError::Unreachable("connection refused".into()).into()));

    let result =
        DriverNode::start(Attachment::Connect(Arc::new(connector)), test_utils::member(1)).await;

    assert!(matches!(
        result.unwrap_err(),
        Error::Cluster(ClusterError::Unreachable(_))
    ));
}
