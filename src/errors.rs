//! Benchmark Harness Error Hierarchy
//!
//! Defines error types for the cluster benchmark driver, categorized by
//! operational concern. Setup failures are fatal: a broken membership
//! channel before any wait has started indicates a misconfigured or
//! unreachable cluster, and retries would not self-heal.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Cluster membership and subscription failures
    #[error(transparent)]
    Cluster(#[from] ClusterError),

    /// Configuration loading failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Driver command-line parsing failures
    #[error("Invalid driver arguments: {0}")]
    InvalidArguments(#[from] clap::Error),

    /// Unrecoverable failures requiring process termination
    #[error("Fatal error: {0}")]
    Fatal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    /// Membership listener registration failures
    #[error("Failed to register membership listener: {0}")]
    SubscriptionFailed(String),

    /// The membership service discarded the listener before quorum was
    /// reached
    #[error("Membership notification channel closed")]
    MembershipChannelClosed,

    /// Cluster handle requested before the driver joined the cluster
    #[error("Driver node has not been started yet")]
    NodeNotStarted,

    /// Cluster endpoint unreachable during setup
    #[error("Cluster unreachable: {0}")]
    Unreachable(String),
}
