//! Prerequisite detection for the artifact, the Java runtime and the build tool

use super::command::CommandRunner;
use crate::toolchain::{Prerequisite, Toolchain};
use anyhow::Result;
use std::path::Path;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: &'static str,
    /// First line of the probe output; empty when the tool printed nothing
    pub version: String,
    pub available: bool,
    pub install_hint: &'static str,
}

impl ToolInfo {
    /// Version for display, with a placeholder for silent tools
    pub fn version_label(&self) -> &str {
        if self.version.is_empty() {
            "version unknown"
        } else {
            &self.version
        }
    }
}

/// Whether something exists at `path`; files and directories both count
pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// First line of the trimmed output, or an empty string
pub fn first_line(output: &str) -> String {
    output
        .trim()
        .lines()
        .next()
        .map(|line| line.trim_end().to_string())
        .unwrap_or_default()
}

/// Probe a single tool.
///
/// A spawn failure or a non-zero exit means the tool is unavailable. A
/// successful probe that prints nothing still counts as available.
pub fn check_tool<R: CommandRunner>(runner: &R, prerequisite: &Prerequisite) -> ToolInfo {
    match runner.capture(&prerequisite.probe) {
        Ok(out) if out.success => ToolInfo {
            name: prerequisite.name,
            version: first_line(&out.output),
            available: true,
            install_hint: prerequisite.install_hint,
        },
        _ => ToolInfo {
            name: prerequisite.name,
            version: String::new(),
            available: false,
            install_hint: prerequisite.install_hint,
        },
    }
}

/// Probe the runtime, then the build tool
pub fn check_prerequisites<R: CommandRunner, T: Toolchain>(
    runner: &R,
    toolchain: &T,
) -> Vec<ToolInfo> {
    vec![
        check_tool(runner, &toolchain.runtime()),
        check_tool(runner, &toolchain.build_tool()),
    ]
}

/// Fail with one line per missing tool
pub fn ensure_available(tools: &[ToolInfo]) -> Result<()> {
    let missing: Vec<String> = tools
        .iter()
        .filter(|t| !t.available)
        .map(|t| format!("  - {} ({})", t.name, t.install_hint))
        .collect();

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools (they must be installed and on your PATH):\n{}",
            missing.join("\n")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRunner;
    use crate::toolchain::Maven;

    #[test]
    fn test_first_line_of_multiline_output() {
        let out = "\nopenjdk version \"21.0.2\" 2024-01-16\nOpenJDK Runtime Environment\n";
        assert_eq!(first_line(out), "openjdk version \"21.0.2\" 2024-01-16");
    }

    #[test]
    fn test_first_line_handles_crlf() {
        assert_eq!(first_line("Apache Maven 3.9.6\r\nMaven home: /opt\r\n"), "Apache Maven 3.9.6");
    }

    #[test]
    fn test_available_tool_reports_first_line() {
        let runner = FakeRunner::new().probe_ok("java", "openjdk 21\nmore");
        let info = check_tool(&runner, &Maven::new("mvn").runtime());

        assert!(info.available);
        assert_eq!(info.version, "openjdk 21");
    }

    #[test]
    fn test_silent_tool_is_still_available() {
        let runner = FakeRunner::new().probe_ok("mvn", "   \n");
        let info = check_tool(&runner, &Maven::new("mvn").build_tool());

        assert!(info.available);
        assert_eq!(info.version, "");
        assert_eq!(info.version_label(), "version unknown");
    }

    #[test]
    fn test_failing_probe_is_unavailable() {
        let runner = FakeRunner::new().probe_failed("mvn");
        let info = check_tool(&runner, &Maven::new("mvn").build_tool());

        assert!(!info.available);
        assert_eq!(info.version, "");
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        // FakeRunner returns NotFound for programs it was not told about
        let runner = FakeRunner::new();
        let info = check_tool(&runner, &Maven::new("mvn").runtime());

        assert!(!info.available);
    }

    #[test]
    fn test_check_prerequisites_order_and_ensure() {
        let runner = FakeRunner::new().probe_ok("java", "openjdk 21");
        let tools = check_prerequisites(&runner, &Maven::new("mvn"));

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "Java");
        assert!(tools[0].available);
        assert_eq!(tools[1].name, "Maven");
        assert!(!tools[1].available);

        let err = ensure_available(&tools).unwrap_err().to_string();
        assert!(err.contains("Maven"));
        assert!(!err.contains("Java"));
    }

    #[test]
    fn test_path_exists_for_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.jar");
        std::fs::write(&file, b"jar").unwrap();

        assert!(path_exists(dir.path()));
        assert!(path_exists(&file));
        assert!(!path_exists(&dir.path().join("missing.jar")));
    }
}
