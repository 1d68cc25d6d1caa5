//! Island limits CLI entry point.
//!
//! Binary name: `islimits`
//!
//! Parses CLI arguments, loads configuration, then dispatches to the
//! appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use islimits_observe::tracing_setup::{
    LogFormat, TracingOptions, init_tracing, shutdown_tracing, verbosity_filter,
};
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = TracingOptions {
        filter: verbosity_filter(cli.verbose, cli.quiet).to_string(),
        format: if cli.json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
        enable_otel: cli.otel,
    };
    if let Err(e) = init_tracing(&options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli);
    shutdown_tracing();
    result
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "islimits", &mut std::io::stdout());
        return Ok(());
    }

    // Show reads the store directly; no configuration involved
    if let Commands::Show { island, store } = &cli.command {
        return cli::show::show_record(island, store, cli.json);
    }

    let state = AppState::init(cli.data_dir.clone(), cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            capability,
            prefix,
            game_mode,
        } => {
            cli::parse::parse_one(&state, &capability, prefix, game_mode, cli.json)?;
        }

        Commands::Replay { scenario, store } => {
            cli::replay::replay(&state, &scenario, store.as_deref(), cli.json)?;
        }

        Commands::Show { .. } | Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
