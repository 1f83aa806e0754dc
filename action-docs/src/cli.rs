//! Command-line interface definitions for `action-docs`.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;

/// Parsed command line.
#[derive(Debug, Parser)]
#[command(name = "action-docs")]
#[command(about = "Create documentation for GitHub Actions and workflows")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default is `$HOME/.action-docs.yaml`).
    #[arg(long, value_name = "path", global = true)]
    pub config: Option<Utf8PathBuf>,
    /// Log debug output, including every discovered file.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// What to document.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate documentation for GitHub Actions.
    Actions(ActionsArgs),
    /// Generate documentation for GitHub workflows.
    Workflows(WorkflowsArgs),
    /// Show the current version.
    Version,
}

/// Flags of the `actions` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ActionsArgs {
    /// Directory searched recursively for `action.yml` files.
    #[arg(short, long, value_name = "path")]
    pub path: Option<Utf8PathBuf>,
}

/// Flags of the `workflows` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct WorkflowsArgs {
    /// Directory holding the workflow files.
    #[arg(long, value_name = "path")]
    pub path: Option<Utf8PathBuf>,
    /// Directory the workflow documentation is written to.
    #[arg(short, long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
}

impl Command {
    /// Flags that override configured values. Absent flags override nothing.
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Self::Actions(args) => ConfigOverrides {
                actions_path: args.path.clone(),
                ..ConfigOverrides::default()
            },
            Self::Workflows(args) => ConfigOverrides {
                workflows_path: args.path.clone(),
                workflows_output: args.output.clone(),
                ..ConfigOverrides::default()
            },
            Self::Version => ConfigOverrides::default(),
        }
    }
}

/// Text printed by the `version` command.
#[must_use]
pub fn version_line() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}
