//! Configuration management for the benchmark driver.
//!
//! Provides hierarchical configuration loading with priority:
//! 1. Default values (hardcoded)
//! 2. Optional config file
//! 3. `CONFIG_PATH` file overlay
//! 4. Environment variables (highest priority)

mod benchmark;
mod cluster;
pub use benchmark::*;
pub use cluster::*;

#[cfg(test)]
mod config_test;

use std::env;

use config::Config;
use config::Environment;
use config::File;
use serde::Deserialize;

use crate::Error;
use crate::Result;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
    /// Cluster identity of the local process
    pub cluster: ClusterConfig,
    /// Benchmark run parameters handed to drivers
    pub benchmark: BenchmarkConfig,
}

impl Settings {
    /// Load configuration from multiple sources with priority:
    /// 1. Hardcoded defaults
    /// 2. `config_path` file (required when given)
    /// 3. `CONFIG_PATH` environment file overlay
    /// 4. `BENCH`-prefixed environment variables
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Config::builder();

        if let Some(path) = config_path {
            config = config.add_source(File::with_name(path).required(true));
        }

        if let Ok(path) = env::var("CONFIG_PATH") {
            config = config.add_source(File::with_name(&path));
        }

        // Environment variables (highest priority), e.g.
        // BENCH_CLUSTER__NODE_ID=2
        config = config.add_source(
            Environment::with_prefix("BENCH")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        config.build()?.try_deserialize().map_err(Error::Config)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<()> {
        self.cluster.validate()?;
        self.benchmark.validate()?;
        Ok(())
    }
}
