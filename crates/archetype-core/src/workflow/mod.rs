//! Install and scaffold orchestration
//!
//! Steps echo the command they run and return an outcome. Everything else is
//! reported by the caller, which lets the session print progress between phases.

pub mod install;
pub mod scaffold;

use crate::runtime::command::{CommandRunner, CommandSpec};
use anyhow::{Context, Result};
use colored::Colorize;

pub use install::{install_archetype, InstallOutcome};
pub use scaffold::{
    clear_conflict, generate_project, resolve_params, ConflictResolution, ScaffoldMode,
    ScaffoldOutcome, ScaffoldParams,
};

/// Stream a command and turn a spawn error or non-zero exit into an error
fn run_streamed<R: CommandRunner>(runner: &R, spec: &CommandSpec, action: &str) -> Result<()> {
    println!();
    println!("{} {}", "Running:".dimmed(), spec.to_string().yellow());
    println!();

    let status = runner
        .stream(spec)
        .with_context(|| format!("Failed to start '{}'", spec.program))?;

    if !status.success {
        match status.code {
            Some(code) => anyhow::bail!("{} failed with exit code: {}", action, code),
            None => anyhow::bail!("{} was terminated by a signal", action),
        }
    }

    Ok(())
}
