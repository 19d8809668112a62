// ── Aggregate router state ──
//
// Snapshot of everything the settings UI has collected for one router.
// The core only ever reads it; every generation pass recomputes from a
// fresh snapshot.

use serde::{Deserialize, Serialize};

use super::dns::DnsConfig;
use super::network::NetworksConfig;
use super::port_forward::PortForwardDraft;
use super::vpn::VpnClient;
use super::wan::{WanLinkType, WanLinks};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterState {
    #[serde(rename = "WANLinkType")]
    pub wan_link_type: WanLinkType,

    #[serde(rename = "WANLinks", default, skip_serializing_if = "Option::is_none")]
    pub wan_links: Option<WanLinks>,

    #[serde(rename = "VPNClient", default, skip_serializing_if = "Option::is_none")]
    pub vpn_client: Option<VpnClient>,

    #[serde(rename = "DNSConfig", default)]
    pub dns: DnsConfig,

    #[serde(rename = "PortForwarding", default, skip_serializing_if = "Vec::is_empty")]
    pub port_forwards: Vec<PortForwardDraft>,
}

impl RouterState {
    pub fn new(wan_link_type: WanLinkType) -> Self {
        Self {
            wan_link_type,
            wan_links: None,
            vpn_client: None,
            dns: DnsConfig::default(),
            port_forwards: Vec::new(),
        }
    }

    /// Classify this snapshot's topology.
    pub fn networks(&self) -> NetworksConfig {
        crate::classify::classify(
            self.wan_link_type,
            self.wan_links.as_ref(),
            self.vpn_client.as_ref(),
        )
    }
}
