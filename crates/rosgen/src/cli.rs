//! Clap derive structures for the `rosgen` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap + clap_complete so `build.rs` can include it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// rosgen -- RouterOS configuration synthesis from router state
#[derive(Debug, Parser)]
#[command(
    name = "rosgen",
    version,
    about = "Generate RouterOS configuration commands from router state",
    long_about = "Classifies a router's topology (WAN uplinks, VPN clients, DNS policy)\n\
        into logical networks and emits the device commands for each\n\
        configuration section, ready to paste into a RouterOS script.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Router profile to use
    #[arg(long, short = 'p', env = "ROSGEN_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Router state file (overrides profile)
    #[arg(long, short = 'f', env = "ROSGEN_STATE", global = true)]
    pub state: Option<PathBuf>,

    /// Output format [default: `defaults.output` from config, else table]
    #[arg(long, short = 'o', env = "ROSGEN_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: `defaults.color` from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text (section headers and raw commands for scripts)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the logical networks derived from the router topology
    #[command(alias = "net", alias = "n")]
    Networks,

    /// Generate DNS configuration commands
    Dns(DnsArgs),

    /// Validate and list port-forwarding rules
    #[command(alias = "pf")]
    PortForwards,

    /// Manage CLI configuration and router profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── DNS ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DnsArgs {
    #[command(subcommand)]
    pub command: DnsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DnsCommand {
    /// Forwarder entries (/ip dns forwarders)
    #[command(alias = "fwd")]
    Forwarders,

    /// mDNS repeater interface list (/ip dns)
    Mdns,

    /// Every DNS section, forwarders first
    All,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init {
        /// Profile name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Router state file for the profile (prompted when omitted)
        #[arg(long = "state-file")]
        state_file: Option<PathBuf>,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Add or replace a router profile
    AddProfile {
        /// Profile name
        name: String,

        /// Router state file (.json or .toml)
        #[arg(long = "state-file")]
        state_file: PathBuf,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,

        /// Also make this the default profile
        #[arg(long)]
        default: bool,
    },

    /// Remove a router profile
    RemoveProfile {
        /// Profile name
        name: String,
    },

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
