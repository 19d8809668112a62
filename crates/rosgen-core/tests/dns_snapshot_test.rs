//! Snapshot tests for complete DNS generation passes.
//!
//! Each test starts from a router state as the settings UI serializes it
//! and pins the exact command text that would reach the device.

use rosgen_core::{RouterState, dns_sections};

fn state(json: &str) -> RouterState {
    serde_json::from_str(json).expect("valid router state")
}

#[test]
fn dual_uplink_router_with_doh() {
    let state = state(
        r#"{
            "WANLinkType": "both",
            "WANLinks": {
                "Foreign": { "WANConfigs": [{ "name": "Hetzner" }, {}] },
                "Domestic": { "WANConfigs": [{}] }
            },
            "VPNClient": { "Wireguard": [{}], "SSTP": [{}, {}] },
            "DNSConfig": {
                "ForeignDNS": "1.1.1.1",
                "VPNDNS": "10.8.0.1",
                "DomesticDNS": "178.22.122.100",
                "SplitDNS": "  ",
                "DOH": { "domain": "dns.google", "bindingIP": "8.8.8.8" }
            }
        }"#,
    );

    let networks = state.networks();
    insta::assert_json_snapshot!(networks, @r#"
    {
      "BaseNetworks": [
        "Foreign",
        "VPN",
        "Domestic",
        "Split"
      ],
      "ForeignNetworks": [
        "Hetzner",
        "Foreign-Link-2"
      ],
      "DomesticNetworks": [
        "Domestic-Link-1"
      ],
      "VPNNetworks": [
        "Wireguard-1",
        "SSTP-1",
        "SSTP-2"
      ]
    }
    "#);

    let set = dns_sections(&state.dns, &networks);
    insta::assert_json_snapshot!(set, @r#"
    {
      "/ip dns forwarders": [
        "add name=FOREIGN dns-servers=1.1.1.1",
        "add name=VPN dns-servers=10.8.0.1",
        "add name=DOMESTIC dns-servers=178.22.122.100 doh-servers=https://dns.google/dns-query verify-doh-cert=yes"
      ],
      "/ip dns": [
        "set mdns-repeat-ifaces=LANBridgeFRN,LANBridgeVPN,LANBridgeDOM,LANBridgeSplit"
      ]
    }
    "#);
}

#[test]
fn foreign_only_router_ignores_stale_domestic_data() {
    let state = state(
        r#"{
            "WANLinkType": "foreign",
            "WANLinks": {
                "Domestic": { "WANConfigs": [{ "name": "Old-ISP" }] }
            },
            "DNSConfig": {
                "ForeignDNS": "9.9.9.9",
                "DomesticDNS": "178.22.122.100",
                "DOH": { "domain": "dns.google" }
            }
        }"#,
    );

    let networks = state.networks();
    insta::assert_json_snapshot!(networks, @r#"
    {
      "BaseNetworks": [
        "Foreign",
        "VPN"
      ]
    }
    "#);

    let set = dns_sections(&state.dns, &networks);
    insta::assert_json_snapshot!(set, @r#"
    {
      "/ip dns forwarders": [
        "add name=FOREIGN dns-servers=9.9.9.9"
      ],
      "/ip dns": [
        "set mdns-repeat-ifaces=LANBridgeFRN,LANBridgeVPN"
      ]
    }
    "#);
}
