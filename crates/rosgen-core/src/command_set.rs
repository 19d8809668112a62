// ── Generated command sets ──
//
// A command set maps a configuration-section path to the ordered commands
// destined for it. Both section order and command order are significant:
// they become literal script order once assembled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Section paths understood by the generators.
pub mod section {
    /// DNS forwarder entries.
    pub const DNS_FORWARDERS: &str = "/ip dns forwarders";
    /// DNS service options.
    pub const DNS: &str = "/ip dns";
}

/// Ordered section → commands mapping.
///
/// A section a generator is responsible for is always present, even when it
/// has no commands, so assembly can rely on key presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandSet {
    sections: IndexMap<String, Vec<String>>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutable command list for `key`, creating the section if needed.
    pub fn section(&mut self, key: &str) -> &mut Vec<String> {
        self.sections.entry(key.to_owned()).or_default()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    pub fn contains_section(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Number of sections (including empty ones).
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total commands across all sections.
    pub fn command_count(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Append `other` after `self`. Shared sections keep their position and
    /// receive `other`'s commands at the end; new sections are appended.
    pub fn merge(&mut self, other: CommandSet) {
        for (key, commands) in other.sections {
            self.sections.entry(key).or_default().extend(commands);
        }
    }
}
