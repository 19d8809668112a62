//! Config subcommand handlers.

use std::path::PathBuf;

use dialoguer::Input;
use serde::Serialize;
use tabled::Tabled;

use rosgen_config::{self as config, Config, ConfigError, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Profiles table ──────────────────────────────────────────────────

#[derive(Serialize)]
struct ProfileEntry {
    name: String,
    default: bool,
    state: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ProfileEntry> for ProfileRow {
    fn from(p: &ProfileEntry) -> Self {
        Self {
            marker: if p.default { "*" } else { "" },
            name: p.name.clone(),
            state: p.state.display().to_string(),
            description: p.description.clone().unwrap_or_default(),
        }
    }
}

fn profile_entries(cfg: &Config) -> Vec<ProfileEntry> {
    cfg.profiles
        .iter()
        .map(|(name, p)| ProfileEntry {
            name: name.clone(),
            default: cfg.default_profile.as_deref() == Some(name.as_str()),
            state: p.state.clone(),
            description: p.description.clone(),
        })
        .collect()
}

fn require_profile(cfg: &Config, name: &str) -> Result<(), CliError> {
    if cfg.profiles.contains_key(name) {
        return Ok(());
    }
    Err(ConfigError::ProfileNotFound {
        name: name.into(),
        available: cfg.profiles.keys().cloned().collect(),
    }
    .into())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: guided setup ──────────────────────────────────────
        ConfigCommand::Init { name, state_file } => {
            let config_path = config::config_path();
            if config_path.exists()
                && !util::confirm(
                    &format!("Overwrite existing config at {}?", config_path.display()),
                    "config init",
                    global.yes,
                )?
            {
                return Ok(());
            }

            let name = match name {
                Some(n) => n,
                None => Input::new()
                    .with_prompt("Profile name")
                    .default("default".into())
                    .interact_text()
                    .map_err(util::prompt_err)?,
            };
            let state = match state_file {
                Some(p) => p,
                None => {
                    let raw: String = Input::new()
                        .with_prompt("Router state file")
                        .interact_text()
                        .map_err(util::prompt_err)?;
                    PathBuf::from(raw)
                }
            };

            let mut cfg = Config {
                default_profile: Some(name.clone()),
                ..Config::default()
            };
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    state,
                    description: None,
                },
            );
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Configuration written to {}", config_path.display());
                eprintln!("  Active profile: {name}");
            }
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                global.output_format(),
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n({e})")),
                |_| config::config_path().display().to_string(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            let entries = profile_entries(&cfg);
            if entries.is_empty() && !global.quiet {
                eprintln!("No profiles configured. Add one with: rosgen config add-profile");
                return Ok(());
            }
            let out = output::render_list(
                global.output_format(),
                &entries,
                |p| ProfileRow::from(p),
                |p| p.name.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Add / replace ───────────────────────────────────────────
        ConfigCommand::AddProfile {
            name,
            state_file,
            description,
            default,
        } => {
            let mut cfg = config::load_config()?;
            let make_default = default || cfg.profiles.is_empty();
            let replaced = cfg
                .profiles
                .insert(
                    name.clone(),
                    Profile {
                        state: state_file,
                        description,
                    },
                )
                .is_some();
            if make_default {
                cfg.default_profile = Some(name.clone());
            }
            config::save_config(&cfg)?;

            if !global.quiet {
                let verb = if replaced { "updated" } else { "added" };
                eprintln!("Profile '{name}' {verb}");
            }
            Ok(())
        }

        // ── Remove ──────────────────────────────────────────────────
        ConfigCommand::RemoveProfile { name } => {
            let mut cfg = config::load_config()?;
            require_profile(&cfg, &name)?;
            if !util::confirm(
                &format!("Remove profile '{name}'?"),
                "config remove-profile",
                global.yes,
            )? {
                return Ok(());
            }

            cfg.profiles.remove(&name);
            if cfg.default_profile.as_deref() == Some(name.as_str()) {
                cfg.default_profile = None;
            }
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Profile '{name}' removed");
            }
            Ok(())
        }

        // ── Use ─────────────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            require_profile(&cfg, &name)?;
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!("Default profile set to '{name}'");
            }
            Ok(())
        }
    }
}
