//! Benchmark driver adapter for cluster benchmarks.
//!
//! Concrete benchmarks wrap [`ClusterBenchmark`] instead of re-implementing
//! the join-and-wait choreography: setup parses the driver arguments, joins
//! (or attaches to) the cluster and blocks until the configured quorum of
//! members is present; teardown releases the membership. In between, the
//! joined cluster view and the key-range random helpers are available to
//! the wrapped benchmark.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::utils::random;
use crate::Attachment;
use crate::BenchmarkConfig;
use crate::BenchmarkDriver;
use crate::ClusterConfig;
use crate::ClusterError;
use crate::ClusterView;
use crate::DriverArgs;
use crate::DriverNode;
use crate::Error;
use crate::MemberMeta;
use crate::QuorumBarrier;
use crate::Result;
use crate::Settings;

pub struct ClusterBenchmark {
    name: String,
    cluster_config: ClusterConfig,
    attachment: Attachment,
    args: DriverArgs,
    node: Option<DriverNode>,
}

impl ClusterBenchmark {
    pub fn new(
        cluster_config: ClusterConfig,
        attachment: Attachment,
    ) -> Self {
        Self {
            name: "ClusterBenchmark".to_string(),
            cluster_config,
            attachment,
            args: DriverArgs::default(),
            node: None,
        }
    }

    /// Overrides the name used in auto-generated descriptions.
    pub fn named(
        mut self,
        name: &str,
    ) -> Self {
        self.name = name.to_string();
        self
    }

    /// Arguments parsed during setup; defaults before that.
    pub fn args(&self) -> &DriverArgs {
        &self.args
    }

    /// Membership view of the joined cluster.
    ///
    /// # Errors
    /// Fails with [`ClusterError::NodeNotStarted`] before `set_up` has
    /// completed.
    pub fn cluster(&self) -> Result<Arc<dyn ClusterView>> {
        self.node
            .as_ref()
            .map(|node| node.cluster())
            .ok_or_else(|| ClusterError::NodeNotStarted.into())
    }

    /// Next random key in `[0, max)`.
    pub fn next_random(
        &self,
        max: u64,
    ) -> u64 {
        random::next_random(max)
    }

    /// Next random key in `[min, max)`.
    pub fn next_random_between(
        &self,
        min: u64,
        max: u64,
    ) -> u64 {
        random::next_random_between(min, max)
    }
}

#[async_trait]
impl BenchmarkDriver for ClusterBenchmark {
    async fn set_up(
        &mut self,
        cfg: &BenchmarkConfig,
    ) -> Result<()> {
        self.args = DriverArgs::try_parse_from_config(cfg)?;

        if let Some(path) = self.args.config.clone() {
            info!("overriding cluster config from: {}", &path);
            self.cluster_config = Settings::load(Some(&path))?.cluster;
        }
        self.cluster_config.validate()?;

        if self.args.nodes == 0 {
            return Err(Error::InvalidConfig(
                "nodes must be at least 1 (the driver itself)".into(),
            ));
        }

        let member = MemberMeta {
            id: self.cluster_config.node_id,
            address: self.cluster_config.listen_address.to_string(),
            mode: self.args.distribution_mode(),
        };

        // 1. Join the cluster, or adopt the embedding process's connection
        let node = DriverNode::start(self.attachment.clone(), member).await?;

        // 2. Block until the configured quorum of members is present
        QuorumBarrier::new(node.cluster(), self.args.nodes).wait().await?;

        self.node = Some(node);
        Ok(())
    }

    async fn tear_down(&mut self) -> Result<()> {
        if let Some(node) = self.node.take() {
            node.stop().await?;
        }
        Ok(())
    }

    fn description(
        &self,
        cfg: &BenchmarkConfig,
    ) -> String {
        if !cfg.description.is_empty() {
            return cfg.description.clone();
        }

        format!("{}{}{}", self.name, self.args.description(), cfg.default_description)
    }

    fn usage(&self) -> String {
        DriverArgs::usage()
    }
}
