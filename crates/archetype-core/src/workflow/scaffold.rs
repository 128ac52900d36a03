//! Project generation from the installed archetype
//!
//! Generation runs in three phases: parameter resolution, conflict check
//! against an existing output directory, then the generate command itself.

use super::run_streamed;
use crate::config::{RunConfiguration, ScaffoldDefaults};
use crate::prompt::Prompter;
use crate::runtime::check::path_exists;
use crate::runtime::command::CommandRunner;
use crate::toolchain::Toolchain;
use anyhow::{Context, Result};
use std::io;
use std::path::{Component, Path, PathBuf};

/// How the scaffold parameters are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldMode {
    /// Use the configured defaults as-is
    Defaults,
    /// Prompt for every value, keeping the default on a blank answer
    Custom,
}

/// Values identifying the generated project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldParams {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub package_name: String,
}

impl From<&ScaffoldDefaults> for ScaffoldParams {
    fn from(defaults: &ScaffoldDefaults) -> Self {
        Self {
            group_id: defaults.group_id.clone(),
            artifact_id: defaults.artifact_id.clone(),
            version: defaults.version.clone(),
            package_name: defaults.package_name.clone(),
        }
    }
}

impl ScaffoldParams {
    /// Directory the build tool generates into, relative to `workdir`.
    ///
    /// The artifact id must be a single plain path segment, otherwise the
    /// conflict check could target `workdir` itself or a path outside it.
    pub fn output_dir(&self, workdir: &Path) -> Result<PathBuf> {
        let id = self.artifact_id.as_str();
        let mut components = Path::new(id).components();
        let single_segment = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_segment || id.trim().is_empty() || id.contains(['/', '\\']) {
            anyhow::bail!(
                "Invalid artifactId '{}': it must be a plain directory name",
                id
            );
        }

        Ok(workdir.join(id))
    }
}

/// State of the output directory once the conflict check is done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Nothing was there
    Absent,
    /// An existing directory was deleted
    Removed,
    /// The user chose to keep the existing directory
    Kept,
}

/// Terminal state of a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    Generated { params: ScaffoldParams },
    AbortedByUser { dir: PathBuf },
    AbortedByError { reason: String },
}

pub fn resolve_params<P: Prompter>(
    defaults: &ScaffoldDefaults,
    mode: ScaffoldMode,
    prompter: &mut P,
) -> io::Result<ScaffoldParams> {
    let mut params = ScaffoldParams::from(defaults);

    if mode == ScaffoldMode::Custom {
        params.group_id = prompter.input("GroupId", &params.group_id)?;
        params.artifact_id = prompter.input("ArtifactId", &params.artifact_id)?;
        params.version = prompter.input("Version", &params.version)?;
        params.package_name = prompter.input("Package", &params.package_name)?;
    }

    Ok(params)
}

/// Offer to delete `dir` if it already exists.
///
/// Nothing is touched unless the user confirms.
pub fn clear_conflict<P: Prompter>(dir: &Path, prompter: &mut P) -> Result<ConflictResolution> {
    if !path_exists(dir) {
        return Ok(ConflictResolution::Absent);
    }

    let question = format!(
        "'{}' already exists. Delete it and generate the project again?",
        dir.display()
    );
    if !prompter.confirm(&question)? {
        return Ok(ConflictResolution::Kept);
    }

    let removed = if dir.is_dir() {
        std::fs::remove_dir_all(dir)
    } else {
        std::fs::remove_file(dir)
    };
    removed.with_context(|| format!("Failed to delete {}", dir.display()))?;

    Ok(ConflictResolution::Removed)
}

/// Run the generate command in `workdir`
pub fn generate_project<T: Toolchain, R: CommandRunner>(
    config: &RunConfiguration,
    toolchain: &T,
    runner: &R,
    params: &ScaffoldParams,
    workdir: &Path,
) -> Result<()> {
    let spec = toolchain
        .generate_command(&config.archetype, params)
        .current_dir(workdir);
    run_streamed(runner, &spec, "Project generation")
}
