//! Network classification view.

use rosgen_core::{Network, NetworksConfig, RouterState};
use tabled::Tabled;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct NetworkRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Keyword")]
    keyword: &'static str,
    #[tabled(rename = "Bridge")]
    bridge: &'static str,
}

impl From<Network> for NetworkRow {
    fn from(n: Network) -> Self {
        Self {
            kind: "segment",
            name: n.to_string(),
            keyword: n.keyword(),
            bridge: n.bridge_interface(),
        }
    }
}

fn derived_rows(
    kind: &'static str,
    names: Option<&[String]>,
) -> impl Iterator<Item = NetworkRow> {
    names.into_iter().flatten().map(move |name| NetworkRow {
        kind,
        name: name.clone(),
        keyword: "-",
        bridge: "-",
    })
}

fn detail(cfg: &NetworksConfig) -> String {
    let rows: Vec<NetworkRow> = cfg
        .base_networks
        .iter()
        .copied()
        .map(NetworkRow::from)
        .chain(derived_rows("foreign uplink", cfg.foreign_networks.as_deref()))
        .chain(derived_rows("domestic uplink", cfg.domestic_networks.as_deref()))
        .chain(derived_rows("vpn tunnel", cfg.vpn_networks.as_deref()))
        .collect();
    output::render_table(&rows)
}

fn plain(cfg: &NetworksConfig) -> String {
    cfg.base_networks
        .iter()
        .map(ToString::to_string)
        .chain(
            [&cfg.foreign_networks, &cfg.domestic_networks, &cfg.vpn_networks]
                .into_iter()
                .flatten()
                .flatten()
                .cloned(),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(state: &RouterState, global: &GlobalOpts) -> Result<(), CliError> {
    let networks = state.networks();
    let out = output::render_single(global.output_format(), &networks, detail, plain);
    output::print_output(&out, global.quiet);
    Ok(())
}
