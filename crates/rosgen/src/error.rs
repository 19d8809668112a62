//! CLI error types with miette diagnostics.
//!
//! Maps `ConfigError` / `CoreError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use rosgen_config::ConfigError;
use rosgen_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Router state ─────────────────────────────────────────────────

    #[error("Router state file not found: {path}")]
    #[diagnostic(
        code(rosgen::state_not_found),
        help("Check the `state` path of the active profile, or pass --state <file>.")
    )]
    StateNotFound { path: String },

    #[error("Could not read router state from {path}")]
    #[diagnostic(
        code(rosgen::invalid_state),
        help(
            "{reason}\n\
             The file must be a router state snapshot: JSON, or TOML with a .toml extension."
        )
    )]
    InvalidState { path: String, reason: String },

    #[error("Port-forward rule #{position} is incomplete")]
    #[diagnostic(
        code(rosgen::incomplete_rule),
        help(
            "Missing: {missing}\n\
             Every rule needs protocol, remoteIP, remotePort, targetIP and targetPort."
        )
    )]
    IncompleteRule { position: usize, missing: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(rosgen::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: rosgen config add-profile <name> --state-file <file>\n\
             Or point at a file directly with --state <file>."
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(rosgen::config))]
    Config { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(rosgen::validation))]
    Validation { field: String, reason: String },

    // ── Interactive ──────────────────────────────────────────────────

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(rosgen::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::StateNotFound { .. } | Self::ProfileNotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidState { .. } | Self::IncompleteRule { .. } => exit_code::INVALID_INPUT,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Config { .. } | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ProfileNotFound { name, available } => CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            },

            ConfigError::StateNotFound { path } => CliError::StateNotFound {
                path: path.display().to_string(),
            },

            ConfigError::InvalidState { path, source } => CliError::InvalidState {
                path: path.display().to_string(),
                reason: source.to_string(),
            },

            ConfigError::Io(e) => CliError::Io(e),

            other @ (ConfigError::Serialization(_) | ConfigError::Figment(_)) => {
                CliError::Config {
                    message: other.to_string(),
                }
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        let missing = err.missing_fields().join(", ");
        match err {
            CoreError::IncompleteRule { position, .. } => {
                CliError::IncompleteRule { position, missing }
            }
        }
    }
}
