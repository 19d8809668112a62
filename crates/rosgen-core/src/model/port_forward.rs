// ── Port-forwarding rule records ──
//
// The settings UI edits rules as drafts with every field optional. Only a
// draft with all required fields filled in may be promoted to a
// `PortForwardRule`; downstream NAT generation only ever sees those.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum PortForwardProtocol {
    Tcp,
    Udp,
    Both,
}

/// Required fields absent from a draft, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing {}", .0.join(", "))]
pub struct MissingFields(pub Vec<&'static str>);

/// A rule as the UI holds it while the user is still typing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortForwardDraft {
    #[serde(default)]
    pub protocol: Option<PortForwardProtocol>,

    #[serde(rename = "remoteIP", default)]
    pub remote_ip: Option<String>,

    #[serde(rename = "remotePort", default, deserialize_with = "text_or_number")]
    pub remote_port: Option<String>,

    #[serde(rename = "targetIP", default)]
    pub target_ip: Option<String>,

    #[serde(rename = "targetPort", default, deserialize_with = "text_or_number")]
    pub target_port: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

impl PortForwardDraft {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.protocol.is_none() {
            missing.push("protocol");
        }
        for (field, value) in [
            ("remoteIP", &self.remote_ip),
            ("remotePort", &self.remote_port),
            ("targetIP", &self.target_ip),
            ("targetPort", &self.target_port),
        ] {
            if filled(value.as_deref()).is_none() {
                missing.push(field);
            }
        }
        missing
    }

    /// Whether the UI would let this rule be submitted.
    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// A fully populated rule, ready for NAT generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortForwardRule {
    pub protocol: PortForwardProtocol,
    #[serde(rename = "remoteIP")]
    pub remote_ip: String,
    #[serde(rename = "remotePort")]
    pub remote_port: String,
    #[serde(rename = "targetIP")]
    pub target_ip: String,
    #[serde(rename = "targetPort")]
    pub target_port: String,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<PortForwardDraft> for PortForwardRule {
    type Error = MissingFields;

    fn try_from(draft: PortForwardDraft) -> Result<Self, Self::Error> {
        let (
            Some(protocol),
            Some(remote_ip),
            Some(remote_port),
            Some(target_ip),
            Some(target_port),
        ) = (
            draft.protocol,
            filled(draft.remote_ip.as_deref()),
            filled(draft.remote_port.as_deref()),
            filled(draft.target_ip.as_deref()),
            filled(draft.target_port.as_deref()),
        )
        else {
            return Err(MissingFields(draft.missing_fields()));
        };

        Ok(Self {
            protocol,
            remote_ip: remote_ip.to_owned(),
            remote_port: remote_port.to_owned(),
            target_ip: target_ip.to_owned(),
            target_port: target_port.to_owned(),
            description: draft.description.unwrap_or_default(),
        })
    }
}

/// Promote every draft, failing on the first incomplete one.
pub fn finalize_rules(drafts: &[PortForwardDraft]) -> Result<Vec<PortForwardRule>, CoreError> {
    drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| {
            PortForwardRule::try_from(draft.clone()).map_err(|source| CoreError::IncompleteRule {
                position: i + 1,
                source,
            })
        })
        .collect()
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Ports arrive as strings from form inputs but as numbers from hand-written
/// state files.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}
