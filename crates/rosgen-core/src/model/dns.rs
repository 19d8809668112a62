// ── DNS policy types ──

use serde::{Deserialize, Serialize};

use super::network::Network;

/// DNS-over-HTTPS resolver identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(rename = "bindingIP", default, skip_serializing_if = "Option::is_none")]
    pub binding_ip: Option<String>,
}

/// Upstream resolver per logical network, plus the optional DoH identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsConfig {
    #[serde(rename = "ForeignDNS", default, skip_serializing_if = "Option::is_none")]
    pub foreign_dns: Option<String>,

    #[serde(rename = "VPNDNS", default, skip_serializing_if = "Option::is_none")]
    pub vpn_dns: Option<String>,

    #[serde(rename = "DomesticDNS", default, skip_serializing_if = "Option::is_none")]
    pub domestic_dns: Option<String>,

    #[serde(rename = "SplitDNS", default, skip_serializing_if = "Option::is_none")]
    pub split_dns: Option<String>,

    #[serde(rename = "DOH", default, skip_serializing_if = "Option::is_none")]
    pub doh: Option<DohConfig>,
}

impl DnsConfig {
    /// Configured resolver for `network`, trimmed. Blank values count as unset.
    pub fn server_for(&self, network: Network) -> Option<&str> {
        let raw = match network {
            Network::Foreign => self.foreign_dns.as_deref(),
            Network::Vpn => self.vpn_dns.as_deref(),
            Network::Domestic => self.domestic_dns.as_deref(),
            Network::Split => self.split_dns.as_deref(),
        };
        non_blank(raw)
    }

    /// DoH domain, if one is configured.
    pub fn doh_domain(&self) -> Option<&str> {
        non_blank(self.doh.as_ref()?.domain.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
