// ── DNS generators ──
//
// `/ip dns forwarders`: one named forwarder per configured network.
// `/ip dns`: the mDNS repeater interface list.
//
// DoH fields are only ever attached to the DOMESTIC forwarder.

use tracing::{debug, trace};

use crate::command_set::{CommandSet, section};
use crate::model::{DnsConfig, Network, NetworksConfig};

/// Forwarder entries for `networks`, in the order given.
///
/// Networks without a (non-blank) resolver are skipped silently. With no
/// networks at all the section is still present, just empty.
pub fn dns_forwarders(dns: &DnsConfig, networks: Option<&[Network]>) -> CommandSet {
    let mut set = CommandSet::new();
    let commands = set.section(section::DNS_FORWARDERS);

    for &network in networks.unwrap_or_default() {
        let Some(server) = dns.server_for(network) else {
            trace!(%network, "no resolver configured; skipping forwarder");
            continue;
        };

        let mut command = format!("add name={} dns-servers={server}", network.keyword());
        if network == Network::Domestic {
            if let Some(domain) = dns.doh_domain() {
                debug!(%domain, "attaching DoH to domestic forwarder");
                command.push_str(&format!(
                    " doh-servers=https://{domain}/dns-query verify-doh-cert=yes"
                ));
            }
        }
        commands.push(command);
    }

    set
}

/// `set mdns-repeat-ifaces=...` across the bridges of `networks`.
///
/// Emits nothing (but keeps the section) when there are no networks.
pub fn dns_mdns_repeater(networks: Option<&[Network]>) -> CommandSet {
    let mut set = CommandSet::new();
    let commands = set.section(section::DNS);

    let networks = networks.unwrap_or_default();
    if !networks.is_empty() {
        let ifaces: Vec<&str> = networks.iter().map(|n| n.bridge_interface()).collect();
        commands.push(format!("set mdns-repeat-ifaces={}", ifaces.join(",")));
    }

    set
}

/// Both DNS sections for a classified topology, forwarders first.
pub fn dns_sections(dns: &DnsConfig, networks: &NetworksConfig) -> CommandSet {
    let base = Some(networks.base_networks.as_slice());
    let mut set = dns_forwarders(dns, base);
    set.merge(dns_mdns_repeater(base));
    debug!(commands = set.command_count(), "generated DNS sections");
    set
}
