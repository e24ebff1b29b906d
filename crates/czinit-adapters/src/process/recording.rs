//! Scripted process runner for testing.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock},
};

use czinit_core::{
    application::{ProcessFailure, ports::ProcessRunner},
    domain::Invocation,
};

/// Runner that records invocations instead of spawning anything.
///
/// Probes succeed for programs registered with [`Self::with_installed`];
/// everything else looks like a program that is not on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<RwLock<RecordingRunnerInner>>,
}

#[derive(Debug, Default)]
struct RecordingRunnerInner {
    installed: HashSet<String>,
    failures: Vec<(String, i32)>,
    runs: Vec<(Invocation, PathBuf)>,
    probes: Vec<Invocation>,
}

impl RecordingRunner {
    /// Create a runner with no installed programs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark programs as installed (their probes exit 0).
    pub fn with_installed<I, S>(self, programs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        {
            let mut inner = self
                .inner
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            inner.installed.extend(programs.into_iter().map(Into::into));
        }
        self
    }

    /// Make every run whose command line starts with `prefix` exit with `code`.
    ///
    /// When prefixes overlap, the one registered first wins.
    pub fn failing(self, prefix: impl Into<String>, code: i32) -> Self {
        {
            let mut inner = self
                .inner
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            inner.failures.push((prefix.into(), code));
        }
        self
    }

    /// Command lines run so far, in order (testing helper).
    pub fn commands(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.runs.iter().map(|(inv, _)| inv.to_string()).collect()
    }

    /// Working directories of the runs so far.
    pub fn working_dirs(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.runs.iter().map(|(_, cwd)| cwd.clone()).collect()
    }

    /// Programs probed so far, in order.
    pub fn probed(&self) -> Vec<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.probes.iter().map(|inv| inv.program.clone()).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation, cwd: &Path) -> Result<(), ProcessFailure> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ProcessFailure::Spawn {
                reason: "recording runner lock poisoned".into(),
            })?;

        inner.runs.push((invocation.clone(), cwd.to_path_buf()));

        let line = invocation.to_string();
        let failure = inner
            .failures
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix.as_str()))
            .map(|(_, code)| *code);

        match failure {
            Some(code) => Err(ProcessFailure::Exit { code: Some(code) }),
            None => Ok(()),
        }
    }

    fn probe(&self, invocation: &Invocation) -> Result<bool, ProcessFailure> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ProcessFailure::Spawn {
                reason: "recording runner lock poisoned".into(),
            })?;
        inner.probes.push(invocation.clone());

        if inner.installed.contains(&invocation.program) {
            Ok(true)
        } else {
            Err(ProcessFailure::Spawn {
                reason: format!("{}: not found", invocation.program),
            })
        }
    }
}
