//! Run configuration
//!
//! A [`RunConfiguration`] is built once at startup, either from a configuration
//! file or from the built-in defaults, and is passed by reference to every step.

pub mod loader;
pub mod types;

pub use loader::{load_config, parse_config, DEFAULT_CONFIG_FILE};
pub use types::{ArchetypeCoordinates, ProjectSection, RunConfiguration, ScaffoldDefaults};
