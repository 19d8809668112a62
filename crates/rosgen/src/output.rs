//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits raw lines for scripting.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use rosgen_core::CommandSet;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};

// ── Color helpers ────────────────────────────────────────────────────

/// Determine whether color output should be enabled.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

impl GlobalOpts {
    /// `--output` after config defaults were applied; table when still unset.
    pub fn output_format(&self) -> &OutputFormat {
        self.output.as_ref().unwrap_or(&OutputFormat::Table)
    }

    pub fn color_enabled(&self) -> bool {
        should_color(self.color.as_ref().unwrap_or(&ColorMode::Auto))
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `line_fn` on each item to emit one line per item
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    line_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            render_table(&rows)
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => data.iter().map(&line_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses a custom `detail_fn` that returns a pre-formatted
/// string; plain rendering uses `plain_fn`.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    plain_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => plain_fn(data),
    }
}

// ── Command sets ─────────────────────────────────────────────────────

#[derive(Tabled)]
struct CommandRow {
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Command")]
    command: String,
}

/// Render a generated command set.
///
/// Structured formats serialize the set as-is, so empty sections stay
/// visible as empty lists. `plain` prints each non-empty section path
/// followed by its commands, ready to paste into a script.
pub fn render_commands(format: &OutputFormat, set: &CommandSet, color: bool) -> String {
    render_single(
        format,
        set,
        |s| {
            let rows: Vec<CommandRow> = s
                .iter()
                .flat_map(|(section, commands)| {
                    let placeholder = commands.is_empty().then(|| CommandRow {
                        section: section.to_owned(),
                        index: "-".into(),
                        command: "(none)".into(),
                    });
                    commands
                        .iter()
                        .enumerate()
                        .map(move |(i, command)| CommandRow {
                            section: section.to_owned(),
                            index: (i + 1).to_string(),
                            command: command.clone(),
                        })
                        .chain(placeholder)
                })
                .collect();
            render_table(&rows)
        },
        |s| render_script(s, color),
    )
}

fn render_script(set: &CommandSet, color: bool) -> String {
    set.iter()
        .filter(|(_, commands)| !commands.is_empty())
        .map(|(section, commands)| {
            let header = if color {
                section.bold().cyan().to_string()
            } else {
                section.to_owned()
            };
            std::iter::once(header)
                .chain(commands.iter().cloned())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub(crate) fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Pretty-printed JSON.
fn render_json_pretty<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string_pretty(data).expect("serialization should not fail")
}

/// Compact single-line JSON.
fn render_json_compact<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_json::to_string(data).expect("serialization should not fail")
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    if compact {
        render_json_compact(data)
    } else {
        render_json_pretty(data)
    }
}

/// YAML output.
fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("serialization should not fail")
}
