use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Scaffold and inspect OpenCode plugins
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML config file with default event patterns and scaffold settings
    #[arg(short, long, global = true, env = "OPENCODE_KIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also write the rendered output to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List or print the built-in plugin templates
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },
    /// Create a new plugin file from a template
    New {
        /// Plugin name (lowercase, digits and dashes)
        name: String,

        /// Template to start from [default: config scaffold.default_template]
        #[arg(short, long)]
        template: Option<String>,

        /// Target directory [default: config scaffold.plugin_dir]
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Overwrite an existing plugin file
        #[arg(long)]
        force: bool,
    },
    /// Check whether an event name is selected by the patterns (exit 1 if not)
    Match {
        /// Event name, e.g. "tool.execute.before"
        event: String,

        /// Filter pattern ("*", "ns.*" or an exact name); repeatable
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,
    },
    /// Print the event records from a file (or stdin) selected by the patterns
    Filter {
        /// File with one event name or JSON object with a "type" field per line
        file: Option<PathBuf>,

        /// Filter pattern ("*", "ns.*" or an exact name); repeatable
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,
    },
    /// List known host events
    Events {
        /// Only list events selected by these patterns; repeatable
        #[arg(short, long = "pattern")]
        patterns: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum TemplateAction {
    /// List template names and descriptions
    List,
    /// Print the source of a template
    Show {
        /// Template name
        name: String,
    },
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
