// ── Logical network segments ──
//
// The closed set of top-level segments a topology is carved into, and the
// naming table that spells each one out in generated commands. Generators
// must go through `keyword()` / `bridge_interface()` so that a forwarder
// name and an mDNS bridge list always agree on which segment they mean.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A top-level logical network segment.
///
/// `Domestic` and `Split` only exist for topologies with a domestic uplink;
/// the classifier enforces that, not callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Network {
    Foreign,
    #[serde(rename = "VPN")]
    #[strum(serialize = "VPN")]
    Vpn,
    Domestic,
    Split,
}

impl Network {
    /// Uppercase keyword used as the forwarder / list name in commands.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Foreign => "FOREIGN",
            Self::Vpn => "VPN",
            Self::Domestic => "DOMESTIC",
            Self::Split => "SPLIT",
        }
    }

    /// LAN bridge interface serving this segment.
    pub const fn bridge_interface(self) -> &'static str {
        match self {
            Self::Foreign => "LANBridgeFRN",
            Self::Vpn => "LANBridgeVPN",
            Self::Domestic => "LANBridgeDOM",
            Self::Split => "LANBridgeSplit",
        }
    }
}

/// Result of classifying a topology.
///
/// The derived name lists are `None` when nothing was derived -- never an
/// empty `Vec`. Consumers branch on presence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworksConfig {
    pub base_networks: Vec<Network>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_networks: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domestic_networks: Option<Vec<String>>,

    #[serde(
        rename = "VPNNetworks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub vpn_networks: Option<Vec<String>>,
}

impl NetworksConfig {
    pub fn contains(&self, network: Network) -> bool {
        self.base_networks.contains(&network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn naming_table_is_distinct_per_network() {
        let keywords: Vec<_> = Network::iter().map(Network::keyword).collect();
        let bridges: Vec<_> = Network::iter().map(Network::bridge_interface).collect();
        for (i, k) in keywords.iter().enumerate() {
            assert!(!keywords[i + 1..].contains(k), "duplicate keyword {k}");
        }
        for (i, b) in bridges.iter().enumerate() {
            assert!(!bridges[i + 1..].contains(b), "duplicate bridge {b}");
        }
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(Network::Vpn.to_string(), "VPN");
        assert_eq!(Network::Domestic.to_string(), "Domestic");
        assert_eq!("vpn".parse::<Network>().ok(), Some(Network::Vpn));
        assert_eq!("split".parse::<Network>().ok(), Some(Network::Split));
    }

    #[test]
    fn absent_lists_are_omitted_when_serialized() {
        let cfg = NetworksConfig {
            base_networks: vec![Network::Foreign, Network::Vpn],
            foreign_networks: None,
            domestic_networks: None,
            vpn_networks: Some(vec!["Wireguard-1".into()]),
        };
        let json = serde_json::to_value(&cfg).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "BaseNetworks": ["Foreign", "VPN"],
                "VPNNetworks": ["Wireguard-1"],
            })
        );
    }
}
