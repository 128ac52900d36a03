//! Charm-style session driving the whole pipeline

use crate::config::RunConfiguration;
use crate::prompt::Prompter;
use crate::runtime::check;
use crate::runtime::command::CommandRunner;
use crate::toolchain::Toolchain;
use crate::workflow::{
    clear_conflict, generate_project, install_archetype, resolve_params, ConflictResolution,
    InstallOutcome, ScaffoldMode, ScaffoldOutcome,
};
use anyhow::Result;
use std::path::PathBuf;

/// Actions requested on the command line
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Install the archetype JAR locally
    pub install: bool,

    /// Generate a project with the configured defaults
    pub generate: bool,

    /// Generate a project, prompting for each value
    pub custom: bool,

    /// Directory the project is generated in
    pub workdir: PathBuf,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            install: false,
            generate: false,
            custom: false,
            workdir: PathBuf::from("."),
        }
    }
}

impl RunArgs {
    pub fn any_action(&self) -> bool {
        self.install || self.generate || self.custom
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every requested step ran or was declined by the user
    Completed,
    /// No action flag was given
    NothingRequested,
    /// The artifact or a required tool is missing; no step ran
    PrerequisitesMissing,
    /// An install or generate command failed
    StepFailed,
}

/// Run the checks and the requested steps, reporting progress as it goes
pub fn run<T, R, P>(
    config: &RunConfiguration,
    args: &RunArgs,
    toolchain: &T,
    runner: &R,
    prompter: &mut P,
) -> Result<RunStatus>
where
    T: Toolchain,
    R: CommandRunner,
    P: Prompter,
{
    cliclack::intro(format!("{} archetype tools", toolchain.display_name()))?;
    if !config.project.copyright.is_empty() {
        cliclack::log::info(format!("Copyright: {}", config.project.copyright))?;
    }

    // Step 1: Check the archetype JAR
    let jar_path = &config.project.jar_path;
    if !check::path_exists(jar_path) {
        cliclack::log::error(format!("Archetype JAR not found: {}", jar_path.display()))?;
        cliclack::outro_cancel("Missing prerequisites")?;
        return Ok(RunStatus::PrerequisitesMissing);
    }
    cliclack::log::success(format!("Archetype JAR found: {}", jar_path.display()))?;

    // Step 2: Check Java and the build tool
    if !check_tools(toolchain, runner)? {
        cliclack::outro_cancel("Missing prerequisites")?;
        return Ok(RunStatus::PrerequisitesMissing);
    }

    let mut status = RunStatus::Completed;

    // Step 3: Install the archetype
    if args.install && !install_step(config, toolchain, runner, prompter)? {
        status = RunStatus::StepFailed;
    }

    // Step 4: Generate a project (skipped when the install just failed)
    if (args.generate || args.custom) && status != RunStatus::StepFailed {
        let outcome = scaffold_step(config, args, toolchain, runner, prompter)?;
        if let ScaffoldOutcome::AbortedByError { .. } = outcome {
            status = RunStatus::StepFailed;
        }
    }

    if !args.any_action() {
        cliclack::log::info(
            "No action requested. Use --install, --test or --custom (see --help).",
        )?;
        status = RunStatus::NothingRequested;
    }

    if status == RunStatus::StepFailed {
        cliclack::outro_cancel("Finished with errors")?;
    } else {
        cliclack::outro("Done")?;
    }

    Ok(status)
}

/// Report every tool; false when any of them is missing
fn check_tools<T: Toolchain, R: CommandRunner>(toolchain: &T, runner: &R) -> Result<bool> {
    let tools = check::check_prerequisites(runner, toolchain);

    for tool in &tools {
        if tool.available {
            cliclack::log::success(format!("{} OK ({})", tool.name, tool.version_label()))?;
        } else {
            cliclack::log::warning(format!("{} not found", tool.name))?;
        }
    }

    match check::ensure_available(&tools) {
        Ok(()) => Ok(true),
        Err(e) => {
            cliclack::log::error(format!("{}", e))?;
            Ok(false)
        }
    }
}

/// Message shown once the archetype is installed
fn next_step_message<T: Toolchain>(toolchain: &T) -> String {
    format!("Next step: run '{}'", toolchain.next_step_hint())
}

/// False when the install command failed
fn install_step<T, R, P>(
    config: &RunConfiguration,
    toolchain: &T,
    runner: &R,
    prompter: &mut P,
) -> Result<bool>
where
    T: Toolchain,
    R: CommandRunner,
    P: Prompter,
{
    match install_archetype(config, toolchain, runner, prompter) {
        Ok(InstallOutcome::Installed) => {
            cliclack::log::success("Archetype installed")?;
            cliclack::log::info(next_step_message(toolchain))?;
            Ok(true)
        }
        Ok(InstallOutcome::Declined) => {
            cliclack::log::warning("Installation cancelled")?;
            Ok(true)
        }
        Err(e) => {
            cliclack::log::error(format!("Installing the JAR failed: {:#}", e))?;
            Ok(false)
        }
    }
}

fn scaffold_step<T, R, P>(
    config: &RunConfiguration,
    args: &RunArgs,
    toolchain: &T,
    runner: &R,
    prompter: &mut P,
) -> Result<ScaffoldOutcome>
where
    T: Toolchain,
    R: CommandRunner,
    P: Prompter,
{
    let mode = if args.custom {
        cliclack::log::info("Customize the project values (leave blank to keep the default)")?;
        ScaffoldMode::Custom
    } else {
        ScaffoldMode::Defaults
    };

    let params = resolve_params(&config.defaults, mode, prompter)?;
    let dir = match params.output_dir(&args.workdir) {
        Ok(dir) => dir,
        Err(e) => {
            let reason = format!("{:#}", e);
            cliclack::log::error(format!("Cannot generate the project: {}", reason))?;
            return Ok(ScaffoldOutcome::AbortedByError { reason });
        }
    };

    match clear_conflict(&dir, prompter) {
        Ok(ConflictResolution::Absent) => {}
        Ok(ConflictResolution::Removed) => {
            cliclack::log::success(format!("Deleted {}", dir.display()))?;
        }
        Ok(ConflictResolution::Kept) => {
            cliclack::log::warning("Generation cancelled, the existing project was kept")?;
            return Ok(ScaffoldOutcome::AbortedByUser { dir });
        }
        Err(e) => {
            let reason = format!("{:#}", e);
            cliclack::log::error(format!("Cannot delete the existing project: {}", reason))?;
            return Ok(ScaffoldOutcome::AbortedByError { reason });
        }
    }

    cliclack::log::info("Generating the project from the archetype...")?;
    if let Err(e) = generate_project(config, toolchain, runner, &params, &args.workdir) {
        let reason = format!("{:#}", e);
        cliclack::log::error(format!("Generating the project failed: {}", reason))?;
        return Ok(ScaffoldOutcome::AbortedByError { reason });
    }

    cliclack::log::success("Project generated")?;
    cliclack::log::info(format!("You can now open '{}'", dir.display()))?;

    Ok(ScaffoldOutcome::Generated { params })
}
