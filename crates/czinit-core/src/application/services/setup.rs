//! Setup Service - main application orchestrator.
//!
//! This service runs the setup pipeline against the project directory:
//! 1. Initialise version control
//! 2. Initialise the manifest with the package manager
//! 3. Install the commit tooling
//! 4. Copy the commitlint config
//! 5. Patch the manifest
//! 6. Generate a `.gitignore` (only when the generator was detected)
//!
//! Steps run strictly one after another. The first failure stops the run;
//! nothing is retried and nothing is rolled back.

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError, ManifestPatcher,
        ports::{Filesystem, ProcessRunner, TemplateProvider},
    },
    domain::{RunSettings, SetupPlan, SetupStep, manifest::commit_tooling_patch},
    error::CzinitResult,
};

/// Main setup orchestrator.
pub struct SetupService {
    runner: Box<dyn ProcessRunner>,
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateProvider>,
}

impl SetupService {
    /// Create a new setup service with the given adapters.
    pub fn new(
        runner: Box<dyn ProcessRunner>,
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateProvider>,
    ) -> Self {
        Self {
            runner,
            filesystem,
            templates,
        }
    }

    /// The steps [`Self::run`] would perform, without performing them.
    pub fn plan(&self, settings: &RunSettings) -> SetupPlan {
        SetupPlan::from_settings(settings)
    }

    /// Run every step of the plan, calling `on_step` after each one succeeds.
    #[instrument(
        skip_all,
        fields(
            project = %settings.project_name(),
            package_manager = %settings.package_manager().kind
        )
    )]
    pub fn run<F>(&self, settings: &RunSettings, mut on_step: F) -> CzinitResult<()>
    where
        F: FnMut(&SetupStep),
    {
        let plan = self.plan(settings);
        info!(steps = plan.len(), "Setup started");

        for step in &plan {
            info!(step = step.name(), "running step");
            self.execute(step, settings)?;
            on_step(step);
        }

        info!("Setup completed successfully");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn execute(&self, step: &SetupStep, settings: &RunSettings) -> CzinitResult<()> {
        match step {
            SetupStep::WriteCommitlintConfig { path } => {
                let content = self
                    .templates
                    .commitlint_config()
                    .map_err(|e| step_failed(step, e.to_string()))?;
                self.filesystem
                    .write_file(path, &content)
                    .map_err(|e| step_failed(step, e.to_string()))
            }
            SetupStep::PatchManifest { path, lint_config } => {
                ManifestPatcher::new(self.filesystem.as_ref())
                    .patch(path, &commit_tooling_patch(lint_config))
            }
            SetupStep::InitVersionControl(invocation)
            | SetupStep::InitManifest(invocation)
            | SetupStep::InstallDependencies(invocation)
            | SetupStep::GenerateGitignore { invocation, .. } => self
                .runner
                .run(invocation, settings.project_directory())
                .map_err(|failure| step_failed(step, failure.to_string())),
        }
    }
}

fn step_failed(step: &SetupStep, reason: String) -> crate::error::CzinitError {
    ApplicationError::StepFailed {
        step: step.name(),
        command: step.to_string(),
        reason,
    }
    .into()
}
