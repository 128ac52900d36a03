//! Local installation of the archetype JAR

use super::run_streamed;
use crate::config::RunConfiguration;
use crate::prompt::Prompter;
use crate::runtime::command::CommandRunner;
use crate::toolchain::Toolchain;
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    Declined,
}

/// Ask for confirmation, then install the configured JAR under the archetype coordinates
pub fn install_archetype<T, R, P>(
    config: &RunConfiguration,
    toolchain: &T,
    runner: &R,
    prompter: &mut P,
) -> Result<InstallOutcome>
where
    T: Toolchain,
    R: CommandRunner,
    P: Prompter,
{
    if !prompter.confirm("Install the archetype JAR into the local repository?")? {
        return Ok(InstallOutcome::Declined);
    }

    let spec = toolchain.install_command(&config.project.jar_path, &config.archetype);
    run_streamed(runner, &spec, "Installation")?;

    Ok(InstallOutcome::Installed)
}
