// ── Network classification ──
//
// Derives the full set of logical networks for a topology: the base
// segments, one name per uplink, and one name per VPN client tunnel.
// Pure: same inputs, structurally equal output, every time.

use std::collections::HashSet;

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::model::{
    Network, NetworksConfig, VpnClient, VpnProtocol, WanDirection, WanLinkType, WanLinks,
};

/// Classify a topology into its logical networks.
///
/// `Domestic` and `Split` are only produced when `wan_link_type` has a
/// domestic link, and domestic uplink names are dropped otherwise even if
/// stale domestic data is still present. Empty derived lists come back as
/// `None`.
pub fn classify(
    wan_link_type: WanLinkType,
    wan_links: Option<&WanLinks>,
    vpn_client: Option<&VpnClient>,
) -> NetworksConfig {
    let has_domestic = wan_link_type.has_domestic_link();

    let mut base_networks = vec![Network::Foreign, Network::Vpn];
    if has_domestic {
        base_networks.extend([Network::Domestic, Network::Split]);
    }

    let foreign_networks =
        wan_links.and_then(|links| present(uplink_names(links, WanDirection::Foreign)));
    let domestic_networks = if has_domestic {
        wan_links.and_then(|links| present(uplink_names(links, WanDirection::Domestic)))
    } else {
        None
    };
    let vpn_networks = vpn_client.and_then(|client| present(tunnel_names(client)));

    debug!(
        %wan_link_type,
        base = base_networks.len(),
        foreign = foreign_networks.as_ref().map_or(0, Vec::len),
        domestic = domestic_networks.as_ref().map_or(0, Vec::len),
        vpn = vpn_networks.as_ref().map_or(0, Vec::len),
        "classified networks"
    );

    NetworksConfig {
        base_networks,
        foreign_networks,
        domestic_networks,
        vpn_networks,
    }
}

/// Uplink names in input order; unnamed uplinks get `<Dir>-Link-<n>`.
fn uplink_names(links: &WanLinks, direction: WanDirection) -> Vec<String> {
    let names: Vec<String> = links
        .configs(direction)
        .iter()
        .enumerate()
        .map(|(i, cfg)| match cfg.assigned_name() {
            Some(name) => name.to_owned(),
            None => format!("{}-{}", direction.fallback_prefix(), i + 1),
        })
        .collect();
    warn_on_duplicates(direction, &names);
    names
}

/// `<Protocol>-<n>` per tunnel, protocol-major, index local to the protocol.
fn tunnel_names(client: &VpnClient) -> Vec<String> {
    VpnProtocol::iter()
        .flat_map(|protocol| {
            (1..=client.tunnels(protocol).len()).map(move |i| format!("{protocol}-{i}"))
        })
        .collect()
}

// Duplicate user-assigned names pass through untouched; they are only reported.
fn warn_on_duplicates(direction: WanDirection, names: &[String]) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            warn!(%direction, name = %name, "duplicate uplink name");
        }
    }
}

fn present(names: Vec<String>) -> Option<Vec<String>> {
    (!names.is_empty()).then_some(names)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::{WanConfig, WanLink};

    fn links(foreign: Vec<WanConfig>, domestic: Vec<WanConfig>) -> WanLinks {
        WanLinks {
            foreign: Some(WanLink {
                wan_configs: foreign,
            }),
            domestic: Some(WanLink {
                wan_configs: domestic,
            }),
        }
    }

    #[test]
    fn foreign_only_has_no_domestic_segments() {
        let stale = links(vec![], vec![WanConfig::named("ISP-Local")]);
        let cfg = classify(WanLinkType::Foreign, Some(&stale), None);
        assert_eq!(cfg.base_networks, vec![Network::Foreign, Network::Vpn]);
        assert!(!cfg.contains(Network::Domestic));
        assert!(!cfg.contains(Network::Split));
        assert_eq!(cfg.domestic_networks, None);
    }

    #[test]
    fn domestic_and_split_follow_in_order() {
        for link_type in [WanLinkType::Domestic, WanLinkType::Both] {
            let cfg = classify(link_type, None, None);
            assert_eq!(
                cfg.base_networks,
                vec![
                    Network::Foreign,
                    Network::Vpn,
                    Network::Domestic,
                    Network::Split
                ]
            );
        }
    }

    #[test]
    fn unnamed_uplinks_fall_back_to_position() {
        let wan = links(
            vec![
                WanConfig::default(),
                WanConfig::named("X"),
                WanConfig::default(),
            ],
            vec![WanConfig::named(""), WanConfig::named("Local")],
        );
        let cfg = classify(WanLinkType::Both, Some(&wan), None);
        assert_eq!(
            cfg.foreign_networks,
            Some(vec![
                "Foreign-Link-1".to_owned(),
                "X".to_owned(),
                "Foreign-Link-3".to_owned()
            ])
        );
        assert_eq!(
            cfg.domestic_networks,
            Some(vec!["Domestic-Link-1".to_owned(), "Local".to_owned()])
        );
    }

    #[test]
    fn missing_inputs_leave_lists_absent() {
        let cfg = classify(WanLinkType::Foreign, None, None);
        assert_eq!(cfg.foreign_networks, None);
        assert_eq!(cfg.domestic_networks, None);
        assert_eq!(cfg.vpn_networks, None);
    }

    #[test]
    fn empty_inputs_leave_lists_absent() {
        let wan = links(vec![], vec![]);
        let cfg = classify(WanLinkType::Both, Some(&wan), Some(&VpnClient::default()));
        assert_eq!(cfg.foreign_networks, None);
        assert_eq!(cfg.domestic_networks, None);
        assert_eq!(cfg.vpn_networks, None);
    }

    #[test]
    fn vpn_names_are_protocol_major() {
        // Key order in the input must not matter.
        let client: VpnClient = serde_json::from_value(json!({
            "OpenVPN": [{}],
            "Wireguard": [{}, {}],
        }))
        .expect("valid client");
        let cfg = classify(WanLinkType::Foreign, None, Some(&client));
        assert_eq!(
            cfg.vpn_networks,
            Some(vec![
                "Wireguard-1".to_owned(),
                "Wireguard-2".to_owned(),
                "OpenVPN-1".to_owned()
            ])
        );
    }

    #[test]
    fn every_protocol_gets_its_own_index() {
        let mut client = VpnClient::default();
        for protocol in VpnProtocol::iter() {
            client.tunnels_mut(protocol).push(json!({}));
        }
        client.tunnels_mut(VpnProtocol::IkeV2).push(json!({}));
        let names = classify(WanLinkType::Foreign, None, Some(&client))
            .vpn_networks
            .expect("tunnels configured");
        assert_eq!(
            names,
            [
                "Wireguard-1",
                "OpenVPN-1",
                "PPTP-1",
                "L2TP-1",
                "SSTP-1",
                "IKeV2-1",
                "IKeV2-2"
            ]
        );
    }

    #[test]
    fn duplicate_names_pass_through() {
        let wan = links(vec![WanConfig::named("ISP"), WanConfig::named("ISP")], vec![]);
        let cfg = classify(WanLinkType::Foreign, Some(&wan), None);
        assert_eq!(
            cfg.foreign_networks,
            Some(vec!["ISP".to_owned(), "ISP".to_owned()])
        );
    }

    #[test]
    fn classification_is_idempotent() {
        let wan = links(vec![WanConfig::default()], vec![WanConfig::default()]);
        let client: VpnClient =
            serde_json::from_value(json!({ "L2TP": [{}] })).expect("valid client");
        let first = classify(WanLinkType::Both, Some(&wan), Some(&client));
        let second = classify(WanLinkType::Both, Some(&wan), Some(&client));
        assert_eq!(first, second);
    }
}
