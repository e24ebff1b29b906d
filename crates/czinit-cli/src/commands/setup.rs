//! The `czinit <project-directory>` command.
//!
//! Responsibility: translate CLI arguments into `RunSettings`, wire the
//! adapters into the core services, and display progress. No setup rules
//! live here.

use std::path::{Component, Path, PathBuf};

use tracing::{debug, info, instrument};

use czinit_adapters::{BundledTemplates, LocalFilesystem, SystemProcessRunner};
use czinit_core::{
    application::{DirectoryValidator, EnvironmentProber, SetupService},
    domain::{DirectoryCheck, DomainError, RunSettings, SetupRequest, SetupStep},
    error::CzinitError,
};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute a setup run.
///
/// Dispatch sequence:
/// 1. Resolve the project directory to an absolute path
/// 2. Probe the environment and build `RunSettings`
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Create the directory and check it for conflicts
/// 5. Run the pipeline via `SetupService`, printing progress
#[instrument(skip_all, fields(project = cli.project_directory.as_deref().unwrap_or("")))]
pub fn execute(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Resolve project path
    let raw = cli
        .project_directory
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(DomainError::MissingProjectDirectory)?;
    let cwd = std::env::current_dir().with_cli_context(|| "resolving the current directory")?;
    let project_directory = resolve_project_path(&cwd, raw);

    // 2. Probe + settings
    let environment = EnvironmentProber::new(Box::new(SystemProcessRunner::new())).probe();
    let request = SetupRequest {
        project_directory,
        non_interactive: cli.yes,
        lint_config_package: Some(
            cli.commitlint_config
                .unwrap_or_else(|| config.setup.lint_config.clone()),
        ),
    };
    let settings = RunSettings::from_parts(request, environment).map_err(CzinitError::from)?;

    debug!(
        directory = %settings.project_directory().display(),
        package_manager = %settings.package_manager().kind,
        lint_config = settings.lint_config_package(),
        gitignore = settings.ignore_generator().is_some(),
        "Settings resolved"
    );

    let templates = BundledTemplates::new()
        .with_commitlint_override(config.setup.commitlint_template.clone());
    let service = SetupService::new(
        Box::new(SystemProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(templates),
    );

    // 3. Dry run: describe but do not touch anything.
    if cli.dry_run {
        return show_plan(&service, &settings, &output);
    }

    // 4. Directory
    let validator = DirectoryValidator::new(Box::new(LocalFilesystem::new()));
    validator.prepare(settings.project_directory())?;
    validator.ensure_safe(settings.project_directory(), settings.project_name())?;

    // 5. Pipeline
    info!(project = settings.project_name(), "Setup started");
    let mut write_error = None;
    service.run(&settings, |step| {
        if let Some(message) = progress_message(step) {
            if let Err(e) = output.info(&message) {
                write_error.get_or_insert(e);
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e.into());
    }

    output.success("Completed successfully")?;
    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Absolute, lexically normalised form of `raw` relative to `cwd`.
///
/// `.` segments are dropped and `..` pops the previous segment; symlinks
/// are not resolved because the directory may not exist yet.
pub fn resolve_project_path(cwd: &Path, raw: &str) -> PathBuf {
    let joined = cwd.join(raw);

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// Line printed after a step completes, if that step announces itself.
fn progress_message(step: &SetupStep) -> Option<String> {
    match step {
        SetupStep::WriteCommitlintConfig { .. } => Some("created commitlint config".into()),
        SetupStep::PatchManifest { .. } => {
            Some("updated package.json with commitizen path".into())
        }
        SetupStep::GenerateGitignore { platform, .. } => Some(format!(
            "created generic gitignore for platform {}",
            platform.gitignore_tag()
        )),
        SetupStep::InitVersionControl(_)
        | SetupStep::InitManifest(_)
        | SetupStep::InstallDependencies(_) => None,
    }
}

fn show_plan(service: &SetupService, settings: &RunSettings, out: &OutputManager) -> CliResult<()> {
    let dir = settings.project_directory();
    out.header(&format!(
        "Dry run: would set up '{}' at {}",
        settings.project_name(),
        dir.display()
    ))?;
    out.print(&format!("  Package manager: {}", settings.package_manager().kind))?;
    out.print(&format!("  Lint config:     {}", settings.lint_config_package()))?;
    out.print("")?;

    for (index, step) in service.plan(settings).steps().iter().enumerate() {
        out.print(&format!("  {}. {step}", index + 1))?;
    }

    if settings.ignore_generator().is_none() {
        out.print("")?;
        out.print("  No .gitignore will be generated (gitignore-dot-io not available)")?;
    }

    // Only inspect an existing directory; a dry run never creates one.
    if dir.is_dir() {
        let validator = DirectoryValidator::new(Box::new(LocalFilesystem::new()));
        if let DirectoryCheck::Unsafe(conflicts) = validator.check(dir)? {
            out.print("")?;
            out.warning(&format!(
                "The directory {} contains files that could conflict: {}",
                settings.project_name(),
                conflicts.join(", ")
            ))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use czinit_core::domain::{HostPlatform, Invocation};

    fn root() -> PathBuf {
        std::env::temp_dir().join("work")
    }

    // ── resolve_project_path ──────────────────────────────────────────────────

    #[test]
    fn simple_name_resolves_under_cwd() {
        assert_eq!(resolve_project_path(&root(), "my-app"), root().join("my-app"));
    }

    #[test]
    fn dot_segments_are_normalised() {
        assert_eq!(
            resolve_project_path(&root(), "./a/../my-app/."),
            root().join("my-app")
        );
    }

    #[test]
    fn parent_directory_climbs() {
        let cwd = root().join("nested");
        assert_eq!(resolve_project_path(&cwd, "../my-app"), root().join("my-app"));
    }

    #[test]
    fn absolute_argument_ignores_cwd() {
        let target = std::env::temp_dir().join("elsewhere").join("my-app");
        let raw = target.to_string_lossy().into_owned();
        assert_eq!(resolve_project_path(&root(), &raw), target);
    }

    #[test]
    fn nested_path_works_on_all_platforms() {
        let sep = std::path::MAIN_SEPARATOR;
        let raw = format!("foo{sep}bar{sep}my-app");
        assert_eq!(
            resolve_project_path(&root(), &raw),
            root().join("foo").join("bar").join("my-app")
        );
    }

    #[test]
    fn resolved_path_is_absolute() {
        assert!(resolve_project_path(&root(), "x").is_absolute());
    }

    // ── progress_message ──────────────────────────────────────────────────────

    #[test]
    fn file_steps_announce_themselves() {
        assert_eq!(
            progress_message(&SetupStep::WriteCommitlintConfig {
                path: root().join("commitlint.config.js")
            })
            .as_deref(),
            Some("created commitlint config")
        );
        assert_eq!(
            progress_message(&SetupStep::PatchManifest {
                path: root().join("package.json"),
                lint_config: "@commitlint/config-angular".into(),
            })
            .as_deref(),
            Some("updated package.json with commitizen path")
        );
    }

    #[test]
    fn gitignore_message_names_platform() {
        let step = SetupStep::GenerateGitignore {
            invocation: Invocation::new("gitignore-dot-io", ["node", "osx"]),
            platform: HostPlatform::Osx,
        };
        assert_eq!(
            progress_message(&step).as_deref(),
            Some("created generic gitignore for platform osx")
        );
    }

    #[test]
    fn process_steps_are_silent() {
        let step = SetupStep::InitVersionControl(Invocation::new("git", ["init"]));
        assert_eq!(progress_message(&step), None);
    }
}
