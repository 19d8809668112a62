//! Shared configuration for the rosgen CLI.
//!
//! TOML profiles naming router-state snapshots, figment layering
//! (defaults, file, environment), and loading of the state files
//! themselves into `rosgen_core::RouterState`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rosgen_core::RouterState;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String, available: Vec<String> },

    #[error("router state file not found: {}", path.display())]
    StateNotFound { path: PathBuf },

    #[error("invalid router state in {}", path.display())]
    InvalidState {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name; unset means the profile called "default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named router profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// Fallbacks for `--output` and `--color` when neither flag nor env is set.
#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named router: where its state snapshot lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Path to the router state file (`.json` or `.toml`).
    pub state: PathBuf,

    /// Free-form note shown by `config profiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "rosgen", "rosgen").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("rosgen");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config layered from `path` instead of the canonical location.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("ROSGEN_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "falling back to default config");
        Config::default()
    })
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Active profile name: explicit flag, then `default_profile`, then "default".
pub fn active_profile_name(flag: Option<&str>, config: &Config) -> String {
    flag.map(str::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Resolve which router state file to read.
///
/// An explicit `--state` path always wins; otherwise the named profile
/// must exist and supplies its `state` path.
pub fn resolve_state_path(
    flag: Option<&Path>,
    profile_name: &str,
    config: &Config,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    config
        .profiles
        .get(profile_name)
        .map(|p| p.state.clone())
        .ok_or_else(|| ConfigError::ProfileNotFound {
            name: profile_name.into(),
            available: config.profiles.keys().cloned().collect(),
        })
}

// ── Router state loading ────────────────────────────────────────────

/// Read a router state snapshot. `.toml` files are parsed as TOML,
/// anything else as JSON.
pub fn load_router_state(path: &Path) -> Result<RouterState, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::StateNotFound {
            path: path.to_path_buf(),
        });
    }

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let figment = if is_toml {
        Figment::from(Toml::file(path))
    } else {
        Figment::from(Json::file(path))
    };

    let state: RouterState = figment
        .extract()
        .map_err(|err| ConfigError::InvalidState {
            path: path.to_path_buf(),
            source: Box::new(err),
        })?;

    tracing::debug!(path = %path.display(), wan_link_type = %state.wan_link_type, "loaded router state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rosgen_core::{Network, WanLinkType};

    use super::*;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn config_with(profile: &str, state: &str) -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            profile.into(),
            Profile {
                state: PathBuf::from(state),
                description: None,
            },
        );
        cfg
    }

    #[test]
    fn active_profile_prefers_flag() {
        let mut cfg = Config::default();
        assert_eq!(active_profile_name(None, &cfg), "default");
        cfg.default_profile = Some("home".into());
        assert_eq!(active_profile_name(None, &cfg), "home");
        assert_eq!(active_profile_name(Some("office"), &cfg), "office");
        cfg.default_profile = None;
        assert_eq!(active_profile_name(None, &cfg), "default");
    }

    #[test]
    fn state_flag_overrides_profile() {
        let cfg = config_with("home", "/srv/home.json");
        let flag = PathBuf::from("/tmp/other.json");
        assert_eq!(
            resolve_state_path(Some(&flag), "home", &cfg).expect("flag wins"),
            flag
        );
        assert_eq!(
            resolve_state_path(None, "home", &cfg).expect("profile state"),
            PathBuf::from("/srv/home.json")
        );
    }

    #[test]
    fn unknown_profile_lists_available() {
        let cfg = config_with("home", "/srv/home.json");
        let err = resolve_state_path(None, "office", &cfg).expect_err("no such profile");
        match err {
            ConfigError::ProfileNotFound { name, available } => {
                assert_eq!(name, "office");
                assert_eq!(available, vec!["home".to_owned()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_json_state() {
        let file = write_temp(
            ".json",
            r#"{"WANLinkType":"domestic","DNSConfig":{"DomesticDNS":"178.22.122.100"}}"#,
        );
        let state = load_router_state(file.path()).expect("valid state");
        assert_eq!(state.wan_link_type, WanLinkType::Domestic);
        assert_eq!(
            state.dns.server_for(Network::Domestic),
            Some("178.22.122.100")
        );
    }

    #[test]
    fn loads_toml_state() {
        let file = write_temp(
            ".toml",
            r#"
WANLinkType = "foreign"

[[WANLinks.Foreign.WANConfigs]]
name = "Uplink-A"

[[WANLinks.Foreign.WANConfigs]]

[VPNClient]
OpenVPN = [{ remote = "vpn.example.net" }]

[DNSConfig]
ForeignDNS = "1.1.1.1"

[[PortForwarding]]
protocol = "TCP"
remoteIP = "0.0.0.0"
remotePort = 8080
targetIP = "192.168.88.10"
targetPort = 80
"#,
        );
        let state = load_router_state(file.path()).expect("valid state");
        let networks = state.networks();
        assert_eq!(
            networks.foreign_networks,
            Some(vec!["Uplink-A".to_owned(), "Foreign-Link-2".to_owned()])
        );
        assert_eq!(networks.vpn_networks, Some(vec!["OpenVPN-1".to_owned()]));
        assert_eq!(state.port_forwards.len(), 1);
        assert!(state.port_forwards.iter().all(|d| d.is_submittable()));
    }

    #[test]
    fn missing_state_file() {
        let err = load_router_state(Path::new("/nonexistent/rosgen/state.json"))
            .expect_err("file does not exist");
        assert!(matches!(err, ConfigError::StateNotFound { .. }));
    }

    #[test]
    fn malformed_state_is_rejected() {
        let file = write_temp(".json", r#"{"WANLinkType":"satellite"}"#);
        let err = load_router_state(file.path()).expect_err("unknown link type");
        assert!(matches!(err, ConfigError::InvalidState { .. }));
    }

    #[test]
    fn config_round_trips_through_toml_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = config_with("home", "/srv/home.json");
        cfg.default_profile = Some("home".into());
        save_config_to(&cfg, &path).expect("saved");

        let loaded = load_config_from(&path).expect("loaded");
        assert_eq!(loaded.default_profile.as_deref(), Some("home"));
        assert_eq!(
            loaded.profiles.get("home").map(|p| p.state.clone()),
            Some(PathBuf::from("/srv/home.json"))
        );
        assert_eq!(loaded.defaults.output, "table");
    }

    #[test]
    fn cleared_default_profile_stays_cleared() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut cfg = config_with("home", "/srv/home.json");
        cfg.defaults.output = "json".into();
        save_config_to(&cfg, &path).expect("saved");

        let loaded = load_config_from(&path).expect("loaded");
        assert_eq!(loaded.default_profile, None);
        assert_eq!(active_profile_name(None, &loaded), "default");
        assert_eq!(loaded.defaults.output, "json");
        assert_eq!(loaded.defaults.color, "auto");
    }
}
