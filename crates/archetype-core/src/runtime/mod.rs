//! Runtime detection and command execution
//!
//! This module provides:
//! - Command specifications and a runner abstraction over child processes
//! - Prerequisite detection for the artifact, Java and the build tool

pub mod check;
pub mod command;

pub use check::{
    check_prerequisites, check_tool, ensure_available, first_line, path_exists, ToolInfo,
};
pub use command::{Captured, CommandRunner, CommandSpec, CommandStatus, SystemRunner};
