// ── VPN client types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Opaque tunnel configuration. Other generators read its contents; the
/// classifier only counts entries.
pub type TunnelConfig = serde_json::Value;

/// VPN client protocol bucket.
///
/// Declaration order is the order tunnels are enumerated in, regardless of
/// how the input object happened to order its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum VpnProtocol {
    Wireguard,
    #[strum(serialize = "OpenVPN")]
    OpenVpn,
    #[strum(serialize = "PPTP")]
    Pptp,
    #[strum(serialize = "L2TP")]
    L2tp,
    #[strum(serialize = "SSTP")]
    Sstp,
    #[strum(serialize = "IKeV2")]
    IkeV2,
}

/// Configured VPN client tunnels, bucketed by protocol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VpnClient {
    #[serde(rename = "Wireguard", default, skip_serializing_if = "Option::is_none")]
    pub wireguard: Option<Vec<TunnelConfig>>,

    #[serde(rename = "OpenVPN", default, skip_serializing_if = "Option::is_none")]
    pub open_vpn: Option<Vec<TunnelConfig>>,

    #[serde(rename = "PPTP", default, skip_serializing_if = "Option::is_none")]
    pub pptp: Option<Vec<TunnelConfig>>,

    #[serde(rename = "L2TP", default, skip_serializing_if = "Option::is_none")]
    pub l2tp: Option<Vec<TunnelConfig>>,

    #[serde(rename = "SSTP", default, skip_serializing_if = "Option::is_none")]
    pub sstp: Option<Vec<TunnelConfig>>,

    #[serde(rename = "IKeV2", default, skip_serializing_if = "Option::is_none")]
    pub ike_v2: Option<Vec<TunnelConfig>>,
}

impl VpnClient {
    pub fn tunnels(&self, protocol: VpnProtocol) -> &[TunnelConfig] {
        let bucket = match protocol {
            VpnProtocol::Wireguard => &self.wireguard,
            VpnProtocol::OpenVpn => &self.open_vpn,
            VpnProtocol::Pptp => &self.pptp,
            VpnProtocol::L2tp => &self.l2tp,
            VpnProtocol::Sstp => &self.sstp,
            VpnProtocol::IkeV2 => &self.ike_v2,
        };
        bucket.as_deref().unwrap_or_default()
    }

    pub fn tunnels_mut(&mut self, protocol: VpnProtocol) -> &mut Vec<TunnelConfig> {
        let bucket = match protocol {
            VpnProtocol::Wireguard => &mut self.wireguard,
            VpnProtocol::OpenVpn => &mut self.open_vpn,
            VpnProtocol::Pptp => &mut self.pptp,
            VpnProtocol::L2tp => &mut self.l2tp,
            VpnProtocol::Sstp => &mut self.sstp,
            VpnProtocol::IkeV2 => &mut self.ike_v2,
        };
        bucket.get_or_insert_with(Vec::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn protocol_order_and_labels() {
        let labels: Vec<String> = VpnProtocol::iter().map(|p| p.to_string()).collect();
        assert_eq!(
            labels,
            ["Wireguard", "OpenVPN", "PPTP", "L2TP", "SSTP", "IKeV2"]
        );
    }

    #[test]
    fn missing_bucket_has_no_tunnels() {
        let client: VpnClient =
            serde_json::from_str(r#"{"SSTP":[{"server":"vpn.example.net"}]}"#).expect("valid");
        assert!(client.tunnels(VpnProtocol::Wireguard).is_empty());
        assert_eq!(client.tunnels(VpnProtocol::Sstp).len(), 1);
    }
}
