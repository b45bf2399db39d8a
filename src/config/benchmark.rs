use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Run parameters handed to a benchmark driver by the enclosing runner.
///
/// `command_line` carries the raw driver arguments; the adapter parses
/// them itself so runner and driver stay decoupled.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub command_line: Vec<String>,

    /// Overrides the auto-generated benchmark description when non-empty
    #[serde(default)]
    pub description: String,

    /// Suffix appended to auto-generated descriptions
    #[serde(default)]
    pub default_description: String,

    #[serde(default = "default_warmup_in_secs")]
    pub warmup_in_secs: u64,

    #[serde(default = "default_duration_in_secs")]
    pub duration_in_secs: u64,

    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            command_line: vec![],
            description: String::new(),
            default_description: String::new(),
            warmup_in_secs: default_warmup_in_secs(),
            duration_in_secs: default_duration_in_secs(),
            threads: default_threads(),
        }
    }
}

impl BenchmarkConfig {
    /// # Errors
    /// Returns `Error::InvalidConfig` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidConfig("threads must be at least 1".into()));
        }

        if self.duration_in_secs == 0 {
            return Err(Error::InvalidConfig(
                "duration_in_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }
}

fn default_warmup_in_secs() -> u64 {
    30
}
fn default_duration_in_secs() -> u64 {
    60
}
fn default_threads() -> usize {
    1
}
