//! Blocking subprocess invocation for the external build and deploy tools.
//!
//! Both tools are opaque commands: stdout and stderr flow straight through
//! to the terminal, the caller blocks until exit, and there is no timeout
//! and no retry. The orchestrator never mutates its own environment —
//! variant selection travels via the child's environment map only.

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{PortalError, Result};

/// Look up `program` on PATH before spawning, so a missing tool reads as
/// "not installed" rather than a raw spawn error.
pub fn resolve_program(program: &str) -> Result<std::path::PathBuf> {
    which::which(program).map_err(|_| PortalError::ProgramNotFound(program.to_string()))
}

/// Run `program` with `args` from `cwd`, with `envs` set on the child.
/// Returns the exit status; spawn failures are errors, non-zero exits are
/// the caller's to interpret.
pub fn run(
    program: &str,
    args: &[String],
    cwd: &Path,
    envs: &[(&str, &str)],
) -> Result<ExitStatus> {
    let resolved = resolve_program(program)?;

    let mut cmd = Command::new(resolved);
    cmd.args(args);
    cmd.current_dir(cwd);
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let status = cmd.status().map_err(|e| PortalError::SpawnFailed {
        program: program.to_string(),
        detail: e.to_string(),
    })?;

    Ok(status)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_program_is_not_found() {
        let err = resolve_program("portals-no-such-program-xyz").unwrap_err();
        assert!(matches!(err, PortalError::ProgramNotFound(_)));
    }

    #[test]
    fn run_reports_exit_status() {
        let dir = TempDir::new().unwrap();
        let status = run(
            "sh",
            &["-c".to_string(), "exit 3".to_string()],
            dir.path(),
            &[],
        )
        .unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn run_passes_env_to_child_only() {
        let dir = TempDir::new().unwrap();
        let marker = dir.path().join("seen");
        let before = std::env::var("APP_VARIANT").ok();
        let script = format!("test \"$APP_VARIANT\" = tenant && touch {}", marker.display());
        let status = run(
            "sh",
            &["-c".to_string(), script],
            dir.path(),
            &[("APP_VARIANT", "tenant")],
        )
        .unwrap();
        assert!(status.success());
        assert!(marker.exists());
        // The parent environment stays untouched.
        assert_eq!(std::env::var("APP_VARIANT").ok(), before);
    }

    #[test]
    fn run_uses_cwd() {
        let dir = TempDir::new().unwrap();
        let status = run(
            "sh",
            &["-c".to_string(), "touch here".to_string()],
            dir.path(),
            &[],
        )
        .unwrap();
        assert!(status.success());
        assert!(dir.path().join("here").exists());
    }
}
