use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClusterConfig {
    #[serde(default = "default_node_id")]
    pub node_id: u32,

    #[serde(default = "default_listen_addr")]
    pub listen_address: SocketAddr,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            listen_address: default_listen_addr(),
            log_dir: default_log_dir(),
        }
    }
}

impl ClusterConfig {
    /// Validates cluster configuration consistency
    /// # Errors
    /// Returns `Error::InvalidConfig` if any configuration rules are violated
    pub fn validate(&self) -> Result<()> {
        // Validate node identity
        if self.node_id == 0 {
            return Err(Error::InvalidConfig(
                "node_id cannot be 0 (reserved for invalid nodes)".into(),
            ));
        }

        // Validate network configuration
        if self.listen_address.port() == 0 {
            return Err(Error::InvalidConfig(
                "listen_address must specify a non-zero port".into(),
            ));
        }

        self.validate_directory(&self.log_dir, "log_dir")?;

        Ok(())
    }

    /// Ensures directory path is valid and writable
    fn validate_directory(
        &self,
        path: &PathBuf,
        name: &str,
    ) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(format!("{} path cannot be empty", name)));
        }

        #[cfg(not(test))]
        {
            use std::fs;
            // Check directory existence or create ability
            if !path.exists() {
                fs::create_dir_all(path).map_err(|e| {
                    Error::InvalidConfig(format!(
                        "Failed to create {} directory at {}: {}",
                        name,
                        path.display(),
                        e
                    ))
                })?;
            }

            // Check write permissions
            let test_file = path.join(".permission_test");
            fs::write(&test_file, b"test").map_err(|e| {
                Error::InvalidConfig(format!(
                    "No write permission in {} directory {}: {}",
                    name,
                    path.display(),
                    e
                ))
            })?;
            fs::remove_file(&test_file).ok();
        }

        Ok(())
    }
}

fn default_node_id() -> u32 {
    1
}
fn default_listen_addr() -> SocketAddr {
    "127.0.0.1:9081".parse().unwrap()
}
fn default_log_dir() -> PathBuf {
    PathBuf::from("/tmp/logs")
}
