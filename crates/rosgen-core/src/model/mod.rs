// ── Router topology model ──
//
// Every type in this module mirrors a slice of the aggregating router state
// as the settings UI hands it over. Field names on the wire follow that
// state container (`WANLinkType`, `DNSConfig`, ...); the Rust side uses
// ordinary snake_case.

pub mod dns;
pub mod network;
pub mod port_forward;
pub mod state;
pub mod vpn;
pub mod wan;

// ── Re-exports ──────────────────────────────────────────────────────
// Flat access: `use rosgen_core::model::*` gives you everything.

// Logical segments
pub use network::{Network, NetworksConfig};

// Uplinks
pub use wan::{WanConfig, WanDirection, WanLink, WanLinkType, WanLinks};

// VPN clients
pub use vpn::{TunnelConfig, VpnClient, VpnProtocol};

// DNS
pub use dns::{DnsConfig, DohConfig};

// Port forwarding
pub use port_forward::{
    MissingFields, PortForwardDraft, PortForwardProtocol, PortForwardRule, finalize_rules,
};

// Aggregate
pub use state::RouterState;
