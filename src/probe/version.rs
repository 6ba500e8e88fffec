//! Primary capability probe: ask the tool itself for its version.
//!
//! This is the one probe whose outcome feeds the final verdict. The other
//! probes are independent diagnostic signals and never change the verdict.

use std::time::Duration;

use crate::probe::exec::{run_with_deadline, Execution};

/// Bounded wait for the version query.
pub const VERSION_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of the version-query probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionProbe {
    /// Tool ran and exited zero; `version` is its trimmed stdout.
    Available { version: String },
    /// Tool ran but exited nonzero.
    CommandFailed { stderr: String },
    /// Tool binary could not be found to spawn.
    NotFound,
    /// Tool did not exit within the deadline.
    TimedOut,
    /// Any other spawn or wait failure.
    Error { message: String },
}

impl VersionProbe {
    /// Whether this outcome counts the capability as present.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Run `<tool> --version` with a bounded wait and classify the outcome.
pub fn probe_version(tool: &str, timeout: Duration) -> VersionProbe {
    match run_with_deadline(tool, &["--version"], timeout) {
        Ok(Execution::Completed {
            success: true,
            stdout,
            ..
        }) => VersionProbe::Available {
            version: stdout.trim().to_string(),
        },
        Ok(Execution::Completed { stderr, .. }) => VersionProbe::CommandFailed {
            stderr: stderr.trim_end().to_string(),
        },
        Ok(Execution::TimedOut) => VersionProbe::TimedOut,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => VersionProbe::NotFound,
        Err(e) => VersionProbe::Error {
            message: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Create an executable script at a path (creates parent dirs as needed).
    #[cfg(unix)]
    fn create_script(path: &Path, body: &str) {
        use std::os::unix::fs::PermissionsExt;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn missing_tool_reports_not_found() {
        let result = probe_version("definitely-not-a-real-tool-xyz", Duration::from_secs(1));
        assert_eq!(result, VersionProbe::NotFound);
        assert!(!result.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn zero_exit_reports_trimmed_stdout_as_version() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("fake-asdf");
        create_script(&tool, "echo 'asdf v0.99.0-fake'");

        let result = probe_version(tool.to_str().unwrap(), Duration::from_secs(5));
        assert_eq!(
            result,
            VersionProbe::Available {
                version: "asdf v0.99.0-fake".to_string()
            }
        );
        assert!(result.is_available());
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_reports_command_failed_with_stderr() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("broken-asdf");
        create_script(&tool, "echo 'version query unsupported' >&2; exit 2");

        let result = probe_version(tool.to_str().unwrap(), Duration::from_secs(5));
        match result {
            VersionProbe::CommandFailed { stderr } => {
                assert!(stderr.contains("version query unsupported"));
            }
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn slow_tool_reports_timed_out() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("hung-asdf");
        create_script(&tool, "sleep 5");

        let result = probe_version(tool.to_str().unwrap(), Duration::from_millis(200));
        assert_eq!(result, VersionProbe::TimedOut);
        assert!(!result.is_available());
    }
}
