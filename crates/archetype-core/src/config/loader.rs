//! Configuration file loading
//!
//! The file is read with `serde_yaml`, so both the historical `config.json`
//! layout and an equivalent YAML document are accepted.

use super::types::RunConfiguration;
use crate::error::ConfigError;
use std::path::Path;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Read, parse and validate a configuration file
pub fn load_config(path: &Path) -> Result<RunConfiguration, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(path, &content)
}

/// Parse and validate configuration text; `path` is only used in error messages
pub fn parse_config(path: &Path, content: &str) -> Result<RunConfiguration, ConfigError> {
    let config: RunConfiguration =
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate()?;
    Ok(config)
}
