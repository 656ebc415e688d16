pub mod cli;
pub mod config;
pub mod display;
pub mod events;
pub mod filter;
pub mod records;
pub mod scaffold;
pub mod templates;

use crate::config::KitConfig;
use crate::filter::{EventFilter, pattern_warnings};
use anyhow::Context;
pub use cli::{Cli, ColorMode, Commands, OutputFormat, TemplateAction, cli_parse};
pub use filter::{EventPattern, matches_any};
use std::io::{self, Write as _};
use std::path::Path;
use std::process::ExitCode;
pub use templates::{
    Template, TemplateError, builtin_template_names, builtin_templates, load_builtin_template,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .try_init();
}

fn apply_color_mode(color_mode: ColorMode) {
    match color_mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }
}

/// Patterns from the command line, or `logging.events` from the config
fn effective_patterns(cli_patterns: &[String], config: &KitConfig) -> Vec<String> {
    if cli_patterns.is_empty() {
        config.logging.events.clone()
    } else {
        cli_patterns.to_vec()
    }
}

fn build_filter(patterns: &[String]) -> EventFilter {
    for warning in pattern_warnings(patterns) {
        warn!("{}", warning);
    }
    EventFilter::new(patterns)
}

fn write_output_file(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

/// Print to stdout and mirror to `--output` when given
fn emit(output: Option<&Path>, content: &str) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    if let Some(path) = output {
        write_output_file(path, content)?;
    }
    Ok(())
}

fn ensure_newline(mut s: String) -> String {
    if !s.ends_with('\n') {
        s.push('\n');
    }
    s
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = cli_parse();
    init_tracing(cli.verbose, cli.quiet);
    apply_color_mode(cli.color);

    let config = config::load_config(cli.config.as_deref()).context("Failed to load config")?;
    debug!(profile = %config.profile_name, format = ?cli.format, "starting");
    let output = cli.output.as_deref();

    match &cli.command {
        Commands::Templates { action } => match action {
            TemplateAction::List => {
                let text = match cli.format {
                    OutputFormat::Text => display::format_templates_text(builtin_templates()),
                    OutputFormat::Json => ensure_newline(
                        display::format_templates_json(builtin_templates())
                            .context("Failed to serialize output")?,
                    ),
                };
                emit(output, &text)?;
            }
            TemplateAction::Show { name } => {
                let template = templates::find_template(name)?;
                let text = match cli.format {
                    OutputFormat::Text => ensure_newline(template.source.to_string()),
                    OutputFormat::Json => ensure_newline(
                        display::format_template_source_json(template)
                            .context("Failed to serialize output")?,
                    ),
                };
                emit(output, &text)?;
            }
        },
        Commands::New {
            name,
            template,
            dir,
            force,
        } => {
            let template_name = template
                .as_deref()
                .unwrap_or(&config.scaffold.default_template);
            let template = templates::find_template(template_name)?;
            let dir = dir.as_deref().unwrap_or(&config.scaffold.plugin_dir);

            let path = scaffold::scaffold_plugin(&scaffold::ScaffoldRequest {
                plugin_name: name,
                template,
                dir,
                force: *force,
            })?;

            let text = match cli.format {
                OutputFormat::Text => format!(
                    "Created {} from template '{}'\n",
                    path.display(),
                    template.name
                ),
                OutputFormat::Json => ensure_newline(
                    serde_json::to_string_pretty(&serde_json::json!({
                        "path": path,
                        "template": template.name,
                    }))
                    .context("Failed to serialize output")?,
                ),
            };
            emit(output, &text)?;
        }
        Commands::Match { event, patterns } => {
            let patterns = effective_patterns(patterns, &config);
            let selected = build_filter(&patterns).matches(event);

            let text = match cli.format {
                OutputFormat::Text => display::format_match_text(event, selected),
                OutputFormat::Json => ensure_newline(
                    display::format_match_json(event, &patterns, selected)
                        .context("Failed to serialize output")?,
                ),
            };
            emit(output, &text)?;

            if !selected {
                return Ok(ExitCode::from(1));
            }
        }
        Commands::Filter { file, patterns } => {
            let patterns = effective_patterns(patterns, &config);
            let filter = build_filter(&patterns);

            let records = match file {
                Some(path) => records::select_records_from_file(path, &filter).with_context(
                    || format!("Failed to read event records from '{}'", path.display()),
                )?,
                None => records::select_records(io::stdin().lock(), &filter)
                    .context("Failed to read event records from stdin")?,
            };
            debug!(selected = records.len(), "filtered event records");

            let text = match cli.format {
                OutputFormat::Text => display::format_records_text(&records),
                OutputFormat::Json => ensure_newline(
                    display::format_records_json(&records)
                        .context("Failed to serialize output")?,
                ),
            };
            emit(output, &text)?;
        }
        Commands::Events { patterns } => {
            let patterns = effective_patterns(patterns, &config);
            let filter = build_filter(&patterns);
            let selected: Vec<_> = events::known_events()
                .iter()
                .filter(|e| filter.matches(e.name))
                .collect();

            let text = match cli.format {
                OutputFormat::Text => display::format_events_text(&selected, &patterns),
                OutputFormat::Json => ensure_newline(
                    display::format_events_json(&selected).context("Failed to serialize output")?,
                ),
            };
            emit(output, &text)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
