//! DNS generation handlers.

use rosgen_core::{RouterState, dns_forwarders, dns_mdns_repeater, dns_sections};

use crate::cli::{DnsArgs, DnsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(state: &RouterState, args: DnsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let networks = state.networks();
    let base = Some(networks.base_networks.as_slice());

    let set = match args.command {
        DnsCommand::Forwarders => dns_forwarders(&state.dns, base),
        DnsCommand::Mdns => dns_mdns_repeater(base),
        DnsCommand::All => dns_sections(&state.dns, &networks),
    };

    tracing::info!(
        sections = set.len(),
        commands = set.command_count(),
        "generated DNS commands"
    );

    let out = output::render_commands(global.output_format(), &set, global.color_enabled());
    output::print_output(&out, global.quiet);
    Ok(())
}
