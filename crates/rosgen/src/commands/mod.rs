//! Command dispatch: bridges CLI args -> core generators -> output formatting.

pub mod config_cmd;
pub mod dns;
pub mod networks;
pub mod port_forwards;
pub mod util;

use rosgen_core::RouterState;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a state-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, state: &RouterState, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Networks => networks::handle(state, global),
        Command::Dns(args) => dns::handle(state, args, global),
        Command::PortForwards => port_forwards::handle(state, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
