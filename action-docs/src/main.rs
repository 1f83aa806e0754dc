//! CLI entrypoint for `action-docs`.

use std::io::Write;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use action_docs::cli::{Cli, Command, version_line};
use action_docs::config::load_config;
use action_docs::diagnostics::TracingSink;
use action_docs::generate::{document_actions, document_workflows};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn run(cli: Cli) -> color_eyre::Result<()> {
    if cli.command == Command::Version {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", version_line())?;
        return Ok(());
    }

    let config = load_config(cli.config.as_deref(), &cli.command.overrides())?;
    let sink = TracingSink;
    match cli.command {
        Command::Actions(_) => {
            document_actions(&config.actions_path, &config.readme_name, &sink)?;
        }
        Command::Workflows(_) => {
            document_workflows(
                &config.workflows_path,
                &config.workflows_output,
                &config.readme_name,
                &sink,
            )?;
        }
        Command::Version => {}
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
