//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::render::RunStyle;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  docsnip highlight \"the <hi>quick</hi> fox\"          Render one snippet
  docsnip highlight --input doc.json --format json    Runs for a document's highlights
  docsnip documents results.json --agentic            Show results with agent comments
  docsnip assistants list.json --owned                Order assistants, owned ones only
  docsnip prefs set 3 1 7                             Store preferred assistant order
  docsnip config                                      Show config paths and values
  docsnip completions bash                            Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Render search highlight snippets and order assistants by preference",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Output of commands that print highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Ansi,
    Markdown,
    Plain,
    Json,
}

impl OutputFormat {
    /// Text style for runs; `None` for JSON output.
    pub fn run_style(self) -> Option<RunStyle> {
        match self {
            OutputFormat::Ansi => Some(RunStyle::Ansi),
            OutputFormat::Markdown => Some(RunStyle::Markdown),
            OutputFormat::Plain => Some(RunStyle::Plain),
            OutputFormat::Json => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render highlight snippets (<hi>...</hi> markup) as bold/plain runs
    Highlight {
        /// Highlight snippets, in order
        #[arg(conflicts_with = "input")]
        snippets: Vec<String>,
        /// Text shown when no snippet has content
        #[arg(long, default_value = "", conflicts_with = "input")]
        blurb: String,
        /// JSON file with `match_highlights` and `blurb` ('-' for stdin)
        #[arg(short, long)]
        input: Option<String>,
        /// Output format (defaults to ansi on a terminal, plain otherwise)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Show search result documents with badges, relevance, and highlighted summary
    Documents {
        /// JSON file with `documents`, optional `relevance` and `comments` ('-' for stdin)
        input: String,
        /// Include agent comments for each document
        #[arg(long)]
        agentic: bool,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Order assistants by the user's preferred order
    Assistants {
        /// JSON file with `assistants` and optional `user` ('-' for stdin)
        input: String,
        /// Keep only assistants owned by the user
        #[arg(long)]
        owned: bool,
        #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Manage the local user's preferred assistant order
    Prefs {
        #[command(subcommand)]
        subcommand: PrefsSubcommand,
    },
    /// Show config paths and values
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum PrefsSubcommand {
    /// Print the stored assistant order
    Show,
    /// Replace the stored assistant order
    Set {
        /// Assistant ids, most preferred first
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        ids: Vec<i64>,
    },
    /// Remove the stored assistant order
    Clear,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
