mod adapter;
mod args;
pub use adapter::*;
pub use args::*;


use async_trait::async_trait;

use crate::BenchmarkConfig;
use crate::Result;

/// The seam an external benchmark runner drives.
///
/// The runner owns warmup, measurement and reporting; drivers own cluster
/// attachment and the operation under test.
#[async_trait]
pub trait BenchmarkDriver: Send + Sync {
    /// Prepares the driver for a run. Called exactly once, before any
    /// measurement. Failures are fatal for the run.
    async fn set_up(
        &mut self,
        cfg: &BenchmarkConfig,
    ) -> Result<()>;

    /// Releases run resources. Called exactly once, after the run.
    async fn tear_down(&mut self) -> Result<()>;

    /// Human-readable description shown in run reports.
    fn description(
        &self,
        cfg: &BenchmarkConfig,
    ) -> String;

    /// Command-line usage help for the driver's arguments.
    fn usage(&self) -> String;
}
