//! Process runner backed by `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use czinit_core::{
    application::{ProcessFailure, ports::ProcessRunner},
    domain::Invocation,
};
use tracing::{debug, instrument};

/// Production runner: spawns real programs and waits for them.
#[derive(Debug, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    /// Create a new system process runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip_all, fields(command = %invocation, cwd = %cwd.display()))]
    fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<(), ProcessFailure> {
        // Inherited streams let the tools' own prompts reach the user.
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(spawn_failure)?;

        debug!(code = ?status.code(), "command finished");
        if status.success() {
            Ok(())
        } else {
            Err(ProcessFailure::Exit {
                code: status.code(),
            })
        }
    }

    fn probe(&self, invocation: &Invocation) -> Result<bool, ProcessFailure> {
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(spawn_failure)?;
        Ok(status.success())
    }
}

fn spawn_failure(err: std::io::Error) -> ProcessFailure {
    ProcessFailure::Spawn {
        reason: err.to_string(),
    }
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Invocation {
        Invocation::new("sh", ["-c", script])
    }

    #[test]
    fn successful_command() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SystemProcessRunner::new().run(&sh("exit 0"), dir.path()).is_ok());
    }

    #[test]
    fn non_zero_exit_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            SystemProcessRunner::new().run(&sh("exit 3"), dir.path()),
            Err(ProcessFailure::Exit { code: Some(3) })
        );
    }

    #[test]
    fn missing_program_is_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let result = SystemProcessRunner::new().run(
            &Invocation::new("this-program-does-not-exist-12345", ["init"]),
            dir.path(),
        );
        assert!(matches!(result, Err(ProcessFailure::Spawn { .. })));
    }

    #[test]
    fn command_runs_inside_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        SystemProcessRunner::new()
            .run(&sh("echo hi > marker.txt"), dir.path())
            .unwrap();
        assert!(dir.path().join("marker.txt").exists());
    }

    #[test]
    fn probe_reports_exit_status() {
        let runner = SystemProcessRunner::new();
        assert_eq!(runner.probe(&sh("exit 0")), Ok(true));
        assert_eq!(runner.probe(&sh("exit 1")), Ok(false));
    }

    #[test]
    fn probe_of_missing_program_is_error() {
        let runner = SystemProcessRunner::new();
        assert!(
            runner
                .probe(&Invocation::new("this-program-does-not-exist-12345", ["--version"]))
                .is_err()
        );
    }
}
