// ── Command generators ──
//
// Each generator is a pure function from already-classified input to a
// `CommandSet` covering the sections it owns.

pub mod dns;

pub use dns::{dns_forwarders, dns_mdns_repeater, dns_sections};
