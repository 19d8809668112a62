// ── Core error types ──
//
// Generation itself never fails: missing or partial configuration simply
// omits the affected commands. The only fallible step in this crate is
// promoting UI-held port-forward drafts into finalized rule records.

use thiserror::Error;

use crate::model::MissingFields;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input records ────────────────────────────────────────────────
    #[error("Port-forward rule #{position} is incomplete")]
    IncompleteRule {
        /// 1-based position of the rule in its input list.
        position: usize,
        #[source]
        source: MissingFields,
    },
}

impl CoreError {
    /// Field names that made a rule incomplete, if this is a rule error.
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            Self::IncompleteRule { source, .. } => &source.0,
        }
    }
}
