//! Environment Prober - which external tools are installed.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{
        EnvironmentReport, HostPlatform, Invocation, PackageManagerKind,
        settings::{ignore_generator_probe, version_control_probe},
    },
};

/// Answers "is this tool installed?" by running it with a no-op argument.
///
/// Probe failures are never fatal: they become `false` plus a log line.
pub struct EnvironmentProber {
    runner: Box<dyn ProcessRunner>,
    platform: Option<HostPlatform>,
}

impl EnvironmentProber {
    pub fn new(runner: Box<dyn ProcessRunner>) -> Self {
        Self {
            runner,
            platform: HostPlatform::current(),
        }
    }

    /// Override the detected host platform.
    pub fn with_platform(mut self, platform: Option<HostPlatform>) -> Self {
        self.platform = platform;
        self
    }

    /// Probe every tool the pipeline may use.
    #[instrument(skip_all)]
    pub fn probe(&self) -> EnvironmentReport {
        let report = EnvironmentReport {
            package_manager: self.package_manager(),
            version_control: self.is_available(&version_control_probe()),
            ignore_generator: self.is_available(&ignore_generator_probe()),
            platform: self.platform,
        };

        info!(
            package_manager = report
                .package_manager
                .map(|pm| pm.to_string())
                .as_deref()
                .unwrap_or("none"),
            git = report.version_control,
            gitignore_generator = report.ignore_generator,
            "Environment probed"
        );
        report
    }

    /// First available package manager in priority order.
    pub fn package_manager(&self) -> Option<PackageManagerKind> {
        PackageManagerKind::PRIORITY
            .into_iter()
            .find(|kind| self.is_available(&kind.probe()))
    }

    /// `true` if the probe ran and exited 0.
    pub fn is_available(&self, probe: &Invocation) -> bool {
        match self.runner.probe(probe) {
            Ok(true) => {
                debug!(command = %probe, "tool detected");
                true
            }
            Ok(false) => {
                debug!(command = %probe, "tool exited non-zero, treating as not installed");
                false
            }
            Err(failure) => {
                let err = ApplicationError::ProbeFailed {
                    program: probe.program.clone(),
                    failure,
                };
                warn!("{err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ProcessFailure, ports::MockProcessRunner};

    fn prober_with(available: &'static [&'static str]) -> EnvironmentProber {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_probe()
            .returning(move |inv| Ok(available.contains(&inv.program.as_str())));
        EnvironmentProber::new(Box::new(runner)).with_platform(Some(HostPlatform::Linux))
    }

    #[test]
    #[cfg(not(windows))]
    fn yarn_wins_when_both_managers_exist() {
        let prober = prober_with(&["yarnpkg", "npm", "git"]);
        for _ in 0..3 {
            assert_eq!(prober.package_manager(), Some(PackageManagerKind::Yarn));
        }
    }

    #[test]
    #[cfg(not(windows))]
    fn npm_is_the_fallback() {
        let prober = prober_with(&["npm", "git"]);
        assert_eq!(prober.package_manager(), Some(PackageManagerKind::Npm));
    }

    #[test]
    fn no_manager_detected() {
        let prober = prober_with(&["git"]);
        assert_eq!(prober.package_manager(), None);
    }

    #[test]
    #[cfg(not(windows))]
    fn report_collects_every_tool() {
        let report = prober_with(&["npm", "git", "gitignore-dot-io"]).probe();
        assert_eq!(
            report,
            EnvironmentReport {
                version_control: true,
                package_manager: Some(PackageManagerKind::Npm),
                ignore_generator: true,
                platform: Some(HostPlatform::Linux),
            }
        );
    }

    #[test]
    fn yarn_found_skips_npm_probe() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_probe()
            .times(1)
            .returning(|_| Ok(true));
        let prober = EnvironmentProber::new(Box::new(runner));
        assert_eq!(prober.package_manager(), Some(PackageManagerKind::Yarn));
    }

    #[test]
    fn spawn_failure_counts_as_missing() {
        let mut runner = MockProcessRunner::new();
        runner.expect_probe().returning(|_| {
            Err(ProcessFailure::Spawn {
                reason: "No such file or directory".into(),
            })
        });
        let prober = EnvironmentProber::new(Box::new(runner));
        assert!(!prober.is_available(&Invocation::new("git", ["--version"])));
    }
}
