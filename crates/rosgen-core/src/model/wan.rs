// ── WAN uplink types ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which kinds of uplink the router has. Selected once per topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum WanLinkType {
    Foreign,
    Domestic,
    Both,
}

impl WanLinkType {
    /// Whether domestic segments (and domestic uplink names) exist at all.
    pub const fn has_domestic_link(self) -> bool {
        matches!(self, Self::Domestic | Self::Both)
    }
}

/// Uplink direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WanDirection {
    Foreign,
    Domestic,
}

impl WanDirection {
    /// Prefix for synthesized names of unnamed uplinks (`Foreign-Link-1`, ...).
    pub const fn fallback_prefix(self) -> &'static str {
        match self {
            Self::Foreign => "Foreign-Link",
            Self::Domestic => "Domestic-Link",
        }
    }
}

/// A single uplink configuration. Only the optional user-assigned name
/// is read here; everything else belongs to other generators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WanConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WanConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// The user-assigned name, if one was actually entered.
    pub fn assigned_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Uplinks in one direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WanLink {
    #[serde(rename = "WANConfigs", default)]
    pub wan_configs: Vec<WanConfig>,
}

/// Per-direction uplink lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WanLinks {
    #[serde(rename = "Foreign", default, skip_serializing_if = "Option::is_none")]
    pub foreign: Option<WanLink>,

    #[serde(rename = "Domestic", default, skip_serializing_if = "Option::is_none")]
    pub domestic: Option<WanLink>,
}

impl WanLinks {
    pub fn configs(&self, direction: WanDirection) -> &[WanConfig] {
        let link = match direction {
            WanDirection::Foreign => self.foreign.as_ref(),
            WanDirection::Domestic => self.domestic.as_ref(),
        };
        link.map(|l| l.wan_configs.as_slice()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domestic_link_presence() {
        assert!(!WanLinkType::Foreign.has_domestic_link());
        assert!(WanLinkType::Domestic.has_domestic_link());
        assert!(WanLinkType::Both.has_domestic_link());
    }

    #[test]
    fn empty_name_is_not_assigned() {
        assert_eq!(WanConfig::default().assigned_name(), None);
        assert_eq!(WanConfig::named("").assigned_name(), None);
        assert_eq!(WanConfig::named("ISP-A").assigned_name(), Some("ISP-A"));
    }

    #[test]
    fn deserializes_state_container_keys() {
        let links: WanLinks = serde_json::from_str(
            r#"{"Foreign":{"WANConfigs":[{"name":"A"},{}]},"Domestic":{}}"#,
        )
        .expect("valid links");
        assert_eq!(links.configs(WanDirection::Foreign).len(), 2);
        assert!(links.configs(WanDirection::Domestic).is_empty());
        assert_eq!("both".parse::<WanLinkType>().ok(), Some(WanLinkType::Both));
    }
}
