//! Port-forwarding rule listing.
//!
//! Rules are finalized before anything is shown: a single incomplete draft
//! fails the whole command rather than being silently dropped.

use rosgen_core::{PortForwardRule, RouterState, finalize_rules};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Remote")]
    remote: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&PortForwardRule> for RuleRow {
    fn from(r: &PortForwardRule) -> Self {
        Self {
            protocol: r.protocol.to_string(),
            remote: format!("{}:{}", r.remote_ip, r.remote_port),
            target: format!("{}:{}", r.target_ip, r.target_port),
            description: r.description.clone(),
        }
    }
}

fn line(rule: &PortForwardRule) -> String {
    format!(
        "{} {}:{} -> {}:{}",
        rule.protocol, rule.remote_ip, rule.remote_port, rule.target_ip, rule.target_port
    )
}

pub fn handle(state: &RouterState, global: &GlobalOpts) -> Result<(), CliError> {
    let rules = finalize_rules(&state.port_forwards)?;

    if rules.is_empty() {
        if !global.quiet {
            eprintln!("No port-forwarding rules configured");
        }
        return Ok(());
    }

    let out = output::render_list(global.output_format(), &rules, |r| RuleRow::from(r), line);
    output::print_output(&out, global.quiet);
    Ok(())
}
