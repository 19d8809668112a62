mod cli;
mod commands;
mod error;
mod output;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rosgen_config::{Config, Defaults};
use rosgen_core::RouterState;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

fn main() {
    let mut cli = Cli::parse();

    init_tracing(cli.global.verbose);

    let cfg = rosgen_config::load_config_or_default();
    apply_config_defaults(&mut cli.global, &cfg.defaults);

    if let Err(err) = run(cli, &cfg) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries generated commands; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Fill `--output` / `--color` from `[defaults]` when neither flag nor env set them.
fn apply_config_defaults(global: &mut GlobalOpts, defaults: &Defaults) {
    if global.output.is_none() {
        global.output = parse_default("output", &defaults.output);
    }
    if global.color.is_none() {
        global.color = parse_default("color", &defaults.color);
    }
}

fn parse_default<T: ValueEnum>(key: &str, raw: &str) -> Option<T> {
    match <T as ValueEnum>::from_str(raw, true) {
        Ok(value) => Some(value),
        Err(reason) => {
            tracing::warn!(key, value = raw, %reason, "ignoring invalid config default");
            None
        }
    }
}

fn run(cli: Cli, cfg: &Config) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need router state
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "rosgen", &mut std::io::stdout());
            Ok(())
        }

        // Everything else works on a router state snapshot
        cmd => {
            let state = load_router_state(&cli.global, cfg)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &state, &cli.global)
        }
    }
}

/// Locate and read the router state from `--state` or the active profile.
fn load_router_state(global: &GlobalOpts, cfg: &Config) -> Result<RouterState, CliError> {
    let profile_name = rosgen_config::active_profile_name(global.profile.as_deref(), cfg);
    let path = rosgen_config::resolve_state_path(global.state.as_deref(), &profile_name, cfg)?;

    tracing::info!(profile = %profile_name, path = %path.display(), "reading router state");
    Ok(rosgen_config::load_router_state(&path)?)
}
