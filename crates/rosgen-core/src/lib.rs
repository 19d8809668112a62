// rosgen-core: Pure synthesis layer between router state and device command sets.

pub mod classify;
pub mod command_set;
pub mod error;
pub mod generate;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use classify::classify;
pub use command_set::{CommandSet, section};
pub use error::CoreError;
pub use generate::{dns_forwarders, dns_mdns_repeater, dns_sections};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    // Topology
    Network, NetworksConfig, WanConfig, WanDirection, WanLink, WanLinkType, WanLinks,
    // VPN
    TunnelConfig, VpnClient, VpnProtocol,
    // DNS
    DnsConfig, DohConfig,
    // Port forwarding
    MissingFields, PortForwardDraft, PortForwardProtocol, PortForwardRule, finalize_rules,
    // Aggregate input
    RouterState,
};
