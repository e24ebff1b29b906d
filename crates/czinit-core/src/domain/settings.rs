//! Run settings: the one configuration record of a setup run.
//!
//! [`RunSettings`] is built exactly once from the parsed arguments
//! ([`SetupRequest`]) and the probe results ([`EnvironmentReport`]) and is
//! read-only afterwards. Construction enforces the preconditions of the
//! pipeline, so holding a `RunSettings` means the run may start.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{error::DomainError, platform::HostPlatform};

/// Development dependencies installed into every project, before the
/// lint-config package.
pub const DEV_DEPENDENCIES: [&str; 5] = [
    "@commitlint/cli",
    "commitizen",
    "cz-conventional-changelog",
    "husky",
    "standard-version",
];

/// Lint-config package used when none is given.
pub const DEFAULT_LINT_CONFIG: &str = "@commitlint/config-angular";

/// Ecosystem tag passed to the `.gitignore` generator.
pub const GITIGNORE_ECOSYSTEM: &str = "node";

const GIT: &str = "git";
const GITIGNORE_GENERATOR: &str = "gitignore-dot-io";

// ── Invocation ───────────────────────────────────────────────────────────────

/// One external command: a program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Tools ────────────────────────────────────────────────────────────────────

/// Supported node package managers, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    Yarn,
    Npm,
}

impl PackageManagerKind {
    /// Detection order: the first available manager wins.
    pub const PRIORITY: [PackageManagerKind; 2] = [Self::Yarn, Self::Npm];

    /// Executable name on this host.
    pub fn executable(self) -> String {
        let base = match self {
            Self::Yarn => "yarnpkg",
            Self::Npm => "npm",
        };
        node_shim(base)
    }

    /// Arguments that check the manager is installed.
    pub fn probe(self) -> Invocation {
        Invocation::new(self.executable(), ["--version"])
    }

    fn install_prefix(self) -> [&'static str; 2] {
        match self {
            Self::Yarn => ["add", "--dev"],
            Self::Npm => ["install", "--save-dev"],
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yarn => write!(f, "yarn"),
            Self::Npm => write!(f, "npm"),
        }
    }
}

/// The chosen package manager with its resolved commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub kind: PackageManagerKind,
    pub init: Invocation,
    pub install: Invocation,
}

impl PackageManager {
    pub fn new(kind: PackageManagerKind, non_interactive: bool, lint_config: &str) -> Self {
        let mut init_args = vec!["init".to_string()];
        if non_interactive {
            init_args.push("--yes".into());
        }

        let mut install_args: Vec<String> =
            kind.install_prefix().iter().map(|s| s.to_string()).collect();
        install_args.extend(DEV_DEPENDENCIES.iter().map(|s| s.to_string()));
        install_args.push(lint_config.to_string());

        Self {
            kind,
            init: Invocation::new(kind.executable(), init_args),
            install: Invocation::new(kind.executable(), install_args),
        }
    }
}

/// Probe used for the version-control tool.
pub fn version_control_probe() -> Invocation {
    Invocation::new(GIT, ["--version"])
}

/// Probe used for the `.gitignore` generator.
pub fn ignore_generator_probe() -> Invocation {
    Invocation::new(node_shim(GITIGNORE_GENERATOR), ["--help"])
}

/// Node tools installed through npm are `.cmd` shims on Windows.
fn node_shim(base: &str) -> String {
    if cfg!(windows) {
        format!("{base}.cmd")
    } else {
        base.to_string()
    }
}

// ── Inputs ───────────────────────────────────────────────────────────────────

/// Which external tools are present on this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentReport {
    pub version_control: bool,
    pub package_manager: Option<PackageManagerKind>,
    pub ignore_generator: bool,
    pub platform: Option<HostPlatform>,
}

/// What the user asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRequest {
    pub project_directory: PathBuf,
    pub non_interactive: bool,
    pub lint_config_package: Option<String>,
}

// ── RunSettings ──────────────────────────────────────────────────────────────

/// Immutable configuration of one setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    project_directory: PathBuf,
    project_name: String,
    non_interactive: bool,
    lint_config_package: String,
    package_manager: PackageManager,
    version_control: Invocation,
    ignore_generator: Option<IgnoreGenerator>,
}

/// The `.gitignore` generator together with the platform it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreGenerator {
    pub invocation: Invocation,
    pub platform: HostPlatform,
}

impl RunSettings {
    /// Build the settings, enforcing every precondition of the pipeline.
    ///
    /// Checks run in the order the user should fix them: package manager
    /// first, then version control.
    pub fn from_parts(
        request: SetupRequest,
        environment: EnvironmentReport,
    ) -> Result<Self, DomainError> {
        let SetupRequest {
            project_directory,
            non_interactive,
            lint_config_package,
        } = request;

        if !project_directory.is_absolute() {
            return Err(DomainError::RelativeProjectDirectory {
                path: project_directory,
            });
        }

        let project_name = project_directory
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| DomainError::InvalidProjectName {
                path: project_directory.clone(),
            })?;

        let lint_config_package =
            lint_config_package.unwrap_or_else(|| DEFAULT_LINT_CONFIG.to_string());

        let kind = environment
            .package_manager
            .ok_or(DomainError::NoPackageManager)?;
        let package_manager = PackageManager::new(kind, non_interactive, &lint_config_package);

        if !environment.version_control {
            return Err(DomainError::NoVersionControl);
        }
        let version_control = Invocation::new(GIT, ["init"]);

        let ignore_generator = match (environment.ignore_generator, environment.platform) {
            (true, Some(platform)) => Some(IgnoreGenerator {
                invocation: Invocation::new(
                    node_shim(GITIGNORE_GENERATOR),
                    [GITIGNORE_ECOSYSTEM, platform.gitignore_tag()],
                ),
                platform,
            }),
            (true, None) => {
                warn!(
                    os = std::env::consts::OS,
                    "gitignore generator found but this platform has no template, skipping it"
                );
                None
            }
            (false, _) => None,
        };

        Ok(Self {
            project_directory,
            project_name,
            non_interactive,
            lint_config_package,
            package_manager,
            version_control,
            ignore_generator,
        })
    }

    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    pub fn lint_config_package(&self) -> &str {
        &self.lint_config_package
    }

    pub fn package_manager(&self) -> &PackageManager {
        &self.package_manager
    }

    pub fn version_control(&self) -> &Invocation {
        &self.version_control
    }

    pub fn ignore_generator(&self) -> Option<&IgnoreGenerator> {
        self.ignore_generator.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs(name: &str) -> PathBuf {
        std::env::temp_dir().join(name)
    }

    fn request(non_interactive: bool, lint: Option<&str>) -> SetupRequest {
        SetupRequest {
            project_directory: abs("myapp"),
            non_interactive,
            lint_config_package: lint.map(str::to_string),
        }
    }

    fn environment(pm: Option<PackageManagerKind>, git: bool) -> EnvironmentReport {
        EnvironmentReport {
            version_control: git,
            package_manager: pm,
            ignore_generator: false,
            platform: Some(HostPlatform::Linux),
        }
    }

    #[test]
    fn invocation_displays_as_command_line() {
        let inv = Invocation::new("git", ["init"]);
        assert_eq!(inv.to_string(), "git init");
    }

    #[test]
    fn settings_derive_project_name_from_directory() {
        let settings =
            RunSettings::from_parts(request(false, None), environment(Some(PackageManagerKind::Npm), true))
                .unwrap();
        assert_eq!(settings.project_name(), "myapp");
        assert_eq!(settings.lint_config_package(), DEFAULT_LINT_CONFIG);
        assert_eq!(settings.version_control().to_string(), "git init");
    }

    #[test]
    fn relative_directory_is_rejected() {
        let mut req = request(false, None);
        req.project_directory = PathBuf::from("myapp");
        let err = RunSettings::from_parts(req, environment(Some(PackageManagerKind::Npm), true))
            .unwrap_err();
        assert!(matches!(err, DomainError::RelativeProjectDirectory { .. }));
    }

    #[test]
    fn missing_package_manager_is_fatal() {
        let err = RunSettings::from_parts(request(false, None), environment(None, true)).unwrap_err();
        assert_eq!(err, DomainError::NoPackageManager);
    }

    #[test]
    fn missing_git_is_fatal() {
        let err = RunSettings::from_parts(
            request(false, None),
            environment(Some(PackageManagerKind::Yarn), false),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::NoVersionControl);
    }

    #[test]
    fn package_manager_is_reported_before_git() {
        let err = RunSettings::from_parts(request(false, None), environment(None, false)).unwrap_err();
        assert_eq!(err, DomainError::NoPackageManager);
    }

    #[test]
    #[cfg(not(windows))]
    fn npm_uses_save_dev_install() {
        let pm = PackageManager::new(PackageManagerKind::Npm, false, "@commitlint/config-conventional");
        assert_eq!(
            pm.install.to_string(),
            "npm install --save-dev @commitlint/cli commitizen cz-conventional-changelog husky \
             standard-version @commitlint/config-conventional"
        );
        assert_eq!(pm.init.to_string(), "npm init");
    }

    #[test]
    #[cfg(not(windows))]
    fn yarn_uses_add_dev_install_and_yes_flag() {
        let pm = PackageManager::new(PackageManagerKind::Yarn, true, DEFAULT_LINT_CONFIG);
        assert_eq!(pm.init.to_string(), "yarnpkg init --yes");
        assert_eq!(&pm.install.args[..2], &["add", "--dev"]);
        assert_eq!(pm.install.args.last().map(String::as_str), Some(DEFAULT_LINT_CONFIG));
    }

    #[test]
    fn custom_lint_config_is_installed() {
        let settings = RunSettings::from_parts(
            request(false, Some("@commitlint/config-conventional")),
            environment(Some(PackageManagerKind::Npm), true),
        )
        .unwrap();
        assert!(
            settings
                .package_manager()
                .install
                .args
                .contains(&"@commitlint/config-conventional".to_string())
        );
        assert!(
            !settings
                .package_manager()
                .install
                .args
                .contains(&DEFAULT_LINT_CONFIG.to_string())
        );
    }

    #[test]
    fn ignore_generator_needs_tool_and_platform() {
        let mut env = environment(Some(PackageManagerKind::Npm), true);
        env.ignore_generator = true;
        let settings = RunSettings::from_parts(request(false, None), env).unwrap();
        let generator = settings.ignore_generator().unwrap();
        assert_eq!(generator.invocation.args, vec!["node", "linux"]);

        env.platform = None;
        let settings = RunSettings::from_parts(request(false, None), env).unwrap();
        assert!(settings.ignore_generator().is_none());
    }
}
