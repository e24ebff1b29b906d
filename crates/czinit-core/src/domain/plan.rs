//! The ordered list of steps a setup run performs.

use std::fmt;
use std::path::PathBuf;

use crate::domain::{
    manifest::{COMMITLINT_CONFIG_FILE, MANIFEST_FILE},
    platform::HostPlatform,
    settings::{Invocation, RunSettings},
};

/// One step of the setup pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStep {
    /// `git init`
    InitVersionControl(Invocation),
    /// `<pm> init [--yes]`
    InitManifest(Invocation),
    /// `<pm> add --dev …` / `<pm> install --save-dev …`
    InstallDependencies(Invocation),
    /// Copy the bundled commitlint template.
    WriteCommitlintConfig { path: PathBuf },
    /// Shallow-merge the commit tooling block into the manifest.
    PatchManifest { path: PathBuf, lint_config: String },
    /// `gitignore-dot-io node <platform>`
    GenerateGitignore {
        invocation: Invocation,
        platform: HostPlatform,
    },
}

impl SetupStep {
    /// The external command this step spawns, if any.
    pub fn invocation(&self) -> Option<&Invocation> {
        match self {
            Self::InitVersionControl(inv)
            | Self::InitManifest(inv)
            | Self::InstallDependencies(inv) => Some(inv),
            Self::GenerateGitignore { invocation, .. } => Some(invocation),
            Self::WriteCommitlintConfig { .. } | Self::PatchManifest { .. } => None,
        }
    }

    /// Short label used in logs and failure messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitVersionControl(_) => "init version control",
            Self::InitManifest(_) => "init manifest",
            Self::InstallDependencies(_) => "install dependencies",
            Self::WriteCommitlintConfig { .. } => "write commitlint config",
            Self::PatchManifest { .. } => "patch manifest",
            Self::GenerateGitignore { .. } => "generate gitignore",
        }
    }
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteCommitlintConfig { path } => write!(f, "write {}", path.display()),
            Self::PatchManifest { path, .. } => write!(f, "patch {}", path.display()),
            other => match other.invocation() {
                Some(inv) => write!(f, "{inv}"),
                None => f.write_str(other.name()),
            },
        }
    }
}

/// Ordered steps for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPlan {
    steps: Vec<SetupStep>,
}

impl SetupPlan {
    pub fn from_settings(settings: &RunSettings) -> Self {
        let dir = settings.project_directory();
        let pm = settings.package_manager();

        let mut steps = vec![
            SetupStep::InitVersionControl(settings.version_control().clone()),
            SetupStep::InitManifest(pm.init.clone()),
            SetupStep::InstallDependencies(pm.install.clone()),
            SetupStep::WriteCommitlintConfig {
                path: dir.join(COMMITLINT_CONFIG_FILE),
            },
            SetupStep::PatchManifest {
                path: dir.join(MANIFEST_FILE),
                lint_config: settings.lint_config_package().to_string(),
            },
        ];

        if let Some(generator) = settings.ignore_generator() {
            steps.push(SetupStep::GenerateGitignore {
                invocation: generator.invocation.clone(),
                platform: generator.platform,
            });
        }

        Self { steps }
    }

    pub fn steps(&self) -> &[SetupStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<'a> IntoIterator for &'a SetupPlan {
    type Item = &'a SetupStep;
    type IntoIter = std::slice::Iter<'a, SetupStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
