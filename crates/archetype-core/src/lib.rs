//! Archetype Core - Shared library for the archetype tooling CLI
//!
//! This library checks a local Maven toolchain, installs a packaged archetype
//! JAR into the local repository and generates projects from it.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Configuration loading, command execution, prerequisite checks, prompts
//! - **Layer 2: Workflow Orchestration** - `Toolchain` trait plus the install and scaffold steps
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based session (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based session module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use archetype_core::{config, runtime, workflow, LinePrompter, Maven, SystemRunner};
//!
//! let config = config::load_config("config.json".as_ref())?;
//! let tools = runtime::check_prerequisites(&SystemRunner, &Maven::default());
//! runtime::ensure_available(&tools)?;
//!
//! let mut prompter = LinePrompter::stdio();
//! workflow::install_archetype(&config, &Maven::default(), &SystemRunner, &mut prompter)?;
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod runtime;
pub mod toolchain;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::{load_config, RunConfiguration};
pub use error::ConfigError;
pub use prompt::{LinePrompter, Prompter};
pub use runtime::{CommandRunner, CommandSpec, SystemRunner, ToolInfo};
pub use toolchain::{Maven, Toolchain};

#[cfg(feature = "tui")]
pub use tui::run;
