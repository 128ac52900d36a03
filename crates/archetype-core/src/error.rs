//! Typed errors for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`RunConfiguration`](crate::config::RunConfiguration).
///
/// All of these are fatal: they are reported before any prerequisite check runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse configuration file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration field '{0}' cannot be empty")]
    MissingField(&'static str),
}
