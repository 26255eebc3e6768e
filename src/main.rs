#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use diarlies_agent::agents::AgentRegistry;
use diarlies_agent::cli::{Cli, Commands};
use diarlies_agent::commands::{self, run::Banner};
use diarlies_agent::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?.with_cli_overrides(&cli);
    let registry = AgentRegistry::load()?;

    let mut stdout = std::io::stdout().lock();

    // The agent is resolved before anything is written, so a bad
    // definition leaves stdout empty.
    match &cli.command {
        Some(Commands::List) => {
            commands::list::execute(&registry, &config.defaults.agent, &mut stdout)?;
        }
        None | Some(Commands::Run) => {
            let selected = commands::select_agent(&registry, &config, cli.agent_file.as_deref())?;
            let banner = Banner::new(&config.runner, &selected.definition_file);
            commands::run::execute(&selected.definition, &banner, &mut stdout)?;
        }
        Some(Commands::Info { json }) => {
            let selected = commands::select_agent(&registry, &config, cli.agent_file.as_deref())?;
            commands::info::execute(
                &selected.definition,
                &selected.definition_file,
                *json,
                &mut stdout,
            )?;
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries only command output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
