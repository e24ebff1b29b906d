//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "czinit",
    bin_name = "czinit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Set up a project for conventional commits",
    long_about = "czinit prepares a directory for conventional commits: it runs \
                  git init and the package manager's init, installs commitizen, \
                  commitlint and standard-version, writes commitlint.config.js \
                  and wires the commit scripts into package.json.",
    override_usage = "czinit <project-directory> [options]",
    after_help = "EXAMPLES:\n\
        \x20 czinit my-app\n\
        \x20 czinit my-app --yes\n\
        \x20 czinit my-app -c @commitlint/config-conventional\n\
        \x20 czinit my-app --dry-run",
)]
pub struct Cli {
    /// Flags that tune logging, colour and configuration.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Directory to set up; created if it does not exist.
    ///
    /// Optional at the parser level so that a missing directory is reported
    /// with the same message and exit code as other precondition failures.
    #[arg(value_name = "project-directory")]
    pub project_directory: Option<String>,

    /// Accept the package manager's defaults.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Pass --yes to the package manager's init"
    )]
    pub yes: bool,

    /// Lint-config package to install and extend.
    #[arg(
        short = 'c',
        long = "commitlint-config",
        value_name = "NAME",
        help = "commitlint config package (default: @commitlint/config-angular)"
    )]
    pub commitlint_config: Option<String>,

    /// Resolve and print the steps without running them.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

// ── tests ─────────────────────────────────────────────────────────────────────
