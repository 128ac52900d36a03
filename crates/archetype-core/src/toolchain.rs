//! Build toolchain trait
//!
//! The toolchain decides every build-tool specific detail: which executables
//! are probed, and how the install and generate command lines are spelled.
//! No other module assembles arguments for an external tool.

use crate::config::ArchetypeCoordinates;
use crate::runtime::command::CommandSpec;
use crate::workflow::scaffold::ScaffoldParams;
use std::path::Path;

/// A tool that must be invocable before anything else runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prerequisite {
    /// Human-readable name used in reports
    pub name: &'static str,
    /// Version probe, e.g. `java -version`
    pub probe: CommandSpec,
    /// Where to get the tool when it is missing
    pub install_hint: &'static str,
}

/// Configuration trait for the build tool driving install and generation
///
/// Implementations define:
/// - The runtime and build tool probes
/// - The artifact install command
/// - The project generation command
/// - The hint printed once the archetype is installed
pub trait Toolchain {
    /// Human-readable name of the build tool
    fn display_name(&self) -> &'static str;

    /// Probe for the runtime the build tool runs on
    fn runtime(&self) -> Prerequisite;

    /// Probe for the build tool itself
    fn build_tool(&self) -> Prerequisite;

    /// Install the packaged archetype into the local repository
    fn install_command(&self, jar_path: &Path, archetype: &ArchetypeCoordinates) -> CommandSpec;

    /// Generate a project from the installed archetype
    fn generate_command(
        &self,
        archetype: &ArchetypeCoordinates,
        params: &ScaffoldParams,
    ) -> CommandSpec;

    /// Next manual command suggested after a successful install
    fn next_step_hint(&self) -> String;
}

/// Apache Maven running on a Java runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maven {
    executable: String,
}

impl Maven {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl Default for Maven {
    fn default() -> Self {
        // The Windows distribution only ships a batch wrapper
        if cfg!(windows) {
            Self::new("mvn.cmd")
        } else {
            Self::new("mvn")
        }
    }
}

impl Toolchain for Maven {
    fn display_name(&self) -> &'static str {
        "Maven"
    }

    fn runtime(&self) -> Prerequisite {
        Prerequisite {
            name: "Java",
            probe: CommandSpec::new("java").arg("-version"),
            install_hint: "install a JDK from https://adoptium.net",
        }
    }

    fn build_tool(&self) -> Prerequisite {
        Prerequisite {
            name: "Maven",
            probe: CommandSpec::new(&self.executable).arg("-v"),
            install_hint: "install from https://maven.apache.org",
        }
    }

    fn install_command(&self, jar_path: &Path, archetype: &ArchetypeCoordinates) -> CommandSpec {
        CommandSpec::new(&self.executable)
            .arg("install:install-file")
            .property("file", jar_path.display())
            .property("groupId", &archetype.group_id)
            .property("artifactId", &archetype.artifact_id)
            .property("version", &archetype.version)
            .property("packaging", "jar")
    }

    fn generate_command(
        &self,
        archetype: &ArchetypeCoordinates,
        params: &ScaffoldParams,
    ) -> CommandSpec {
        CommandSpec::new(&self.executable)
            .arg("archetype:generate")
            .property("archetypeCatalog", "local")
            .property("archetypeGroupId", &archetype.group_id)
            .property("archetypeArtifactId", &archetype.artifact_id)
            .property("archetypeVersion", &archetype.version)
            .property("groupId", &params.group_id)
            .property("artifactId", &params.artifact_id)
            .property("version", &params.version)
            .property("package", &params.package_name)
            .property("interactiveMode", "false")
    }

    fn next_step_hint(&self) -> String {
        format!("{} archetype:generate -DarchetypeCatalog=local", self.executable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinates() -> ArchetypeCoordinates {
        ArchetypeCoordinates {
            group_id: "com.acme".to_string(),
            artifact_id: "acme-archetype".to_string(),
            version: "1.2.0".to_string(),
        }
    }

    #[test]
    fn test_install_command_arguments() {
        let spec = Maven::new("mvn").install_command(Path::new("build/a.jar"), &coordinates());

        assert_eq!(spec.program, "mvn");
        assert_eq!(
            spec.args,
            vec![
                "install:install-file",
                "-Dfile=build/a.jar",
                "-DgroupId=com.acme",
                "-DartifactId=acme-archetype",
                "-Dversion=1.2.0",
                "-Dpackaging=jar",
            ]
        );
    }

    #[test]
    fn test_generate_command_arguments() {
        let params = ScaffoldParams {
            group_id: "org.demo".to_string(),
            artifact_id: "demo".to_string(),
            version: "0.1".to_string(),
            package_name: "org.demo.app".to_string(),
        };
        let spec = Maven::new("mvn").generate_command(&coordinates(), &params);

        assert_eq!(
            spec.args,
            vec![
                "archetype:generate",
                "-DarchetypeCatalog=local",
                "-DarchetypeGroupId=com.acme",
                "-DarchetypeArtifactId=acme-archetype",
                "-DarchetypeVersion=1.2.0",
                "-DgroupId=org.demo",
                "-DartifactId=demo",
                "-Dversion=0.1",
                "-Dpackage=org.demo.app",
                "-DinteractiveMode=false",
            ]
        );
    }

    #[test]
    fn test_probes() {
        let maven = Maven::new("mvn");

        assert_eq!(maven.runtime().probe.to_string(), "java -version");
        assert_eq!(maven.build_tool().probe.to_string(), "mvn -v");
        assert_eq!(
            maven.next_step_hint(),
            "mvn archetype:generate -DarchetypeCatalog=local"
        );
    }
}
