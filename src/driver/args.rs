use clap::command;
use clap::CommandFactory;
use clap::Parser;

use crate::BenchmarkConfig;
use crate::DistributionMode;
use crate::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "grid-bench")]
#[command(version = "0.1.0")]
#[command(about = "Cluster benchmark driver for grid-bench", long_about = None)]
pub struct DriverArgs {
    /// Minimum cluster size before the run may proceed
    #[arg(long, default_value_t = 1)]
    pub nodes: usize,

    /// Join the cluster as a pure client instead of a data node
    #[arg(long, default_value_t = false)]
    pub client_only: bool,

    /// Upper bound for generated benchmark keys
    #[arg(long, default_value_t = 1_000_000)]
    pub range: u64,

    /// Path to a node-specific config file overriding the defaults
    #[arg(long)]
    pub config: Option<String>,
}

impl Default for DriverArgs {
    fn default() -> Self {
        Self {
            nodes: 1,
            client_only: false,
            range: 1_000_000,
            config: None,
        }
    }
}

impl DriverArgs {
    /// Parses the raw driver command line carried by the run config.
    pub fn try_parse_from_config(cfg: &BenchmarkConfig) -> Result<Self> {
        // clap expects the binary name in argv[0]
        let argv = std::iter::once("grid-bench".to_string()).chain(cfg.command_line.iter().cloned());
        Ok(Self::try_parse_from(argv)?)
    }

    pub fn distribution_mode(&self) -> DistributionMode {
        if self.client_only {
            DistributionMode::ClientOnly
        } else {
            DistributionMode::DataNode
        }
    }

    /// Compact suffix appended to auto-generated benchmark descriptions.
    pub fn description(&self) -> String {
        format!(
            "-nodes={}-{}-range={}",
            self.nodes,
            self.distribution_mode(),
            self.range
        )
    }

    pub fn usage() -> String {
        Self::command().render_long_help().to_string()
    }
}
