//! Configuration record types

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;

/// Everything a run needs to know, read-only after construction
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfiguration {
    pub project: ProjectSection,
    pub archetype: ArchetypeCoordinates,
    #[serde(default)]
    pub defaults: ScaffoldDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectSection {
    /// Path to the packaged archetype JAR
    pub jar_path: PathBuf,
    /// Shown in the session banner and the help footer
    #[serde(default)]
    pub copyright: String,
}

/// The (group id, artifact id, version) triple of the installed archetype
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArchetypeCoordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

/// Values used to seed the scaffold parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScaffoldDefaults {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub package_name: String,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            group_id: "com.example".to_string(),
            artifact_id: "demo-app".to_string(),
            version: "1.0-SNAPSHOT".to_string(),
            package_name: "com.example.demo".to_string(),
        }
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            project: ProjectSection {
                jar_path: PathBuf::from("target/archetype.jar"),
                copyright: String::new(),
            },
            archetype: ArchetypeCoordinates {
                group_id: "com.example".to_string(),
                artifact_id: "example-archetype".to_string(),
                version: "1.0.0".to_string(),
            },
            defaults: ScaffoldDefaults::default(),
        }
    }
}

impl RunConfiguration {
    /// Reject configurations whose required fields are blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project.jar_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("project.jar_path"));
        }

        let required = [
            ("archetype.group_id", &self.archetype.group_id),
            ("archetype.artifact_id", &self.archetype.artifact_id),
            ("archetype.version", &self.archetype.version),
            ("defaults.group_id", &self.defaults.group_id),
            ("defaults.artifact_id", &self.defaults.artifact_id),
            ("defaults.version", &self.defaults.version),
            ("defaults.package_name", &self.defaults.package_name),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField(field));
            }
        }

        Ok(())
    }
}
