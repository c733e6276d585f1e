//! Application run: logger init and subcommand dispatch.

use std::io;

use clap::CommandFactory;

use crate::cli::{self, Args, Commands, PrefsSubcommand};
use crate::core;
use crate::core::error::AppError;

/// Initialize env_logger on stderr so stdout stays clean for piping.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Run the selected subcommand.
pub fn dispatch(args: Args) -> Result<(), AppError> {
    match args.command {
        Commands::Highlight {
            snippets,
            blurb,
            input,
            format,
        } => core::cli::run_highlight(&snippets, &blurb, input.as_deref(), format),
        Commands::Documents {
            input,
            agentic,
            format,
        } => {
            let config = core::config::load()?;
            core::cli::run_documents(&config, &input, agentic, format)
        }
        Commands::Assistants {
            input,
            owned,
            format,
        } => {
            let config = core::config::load()?;
            core::cli::run_assistants(&config, &input, owned, format)
        }
        Commands::Prefs { subcommand } => match subcommand {
            PrefsSubcommand::Show => core::cli::run_prefs_show(),
            PrefsSubcommand::Set { ids } => core::cli::run_prefs_set(&ids),
            PrefsSubcommand::Clear => core::cli::run_prefs_clear(),
        },
        Commands::Config => {
            let config = core::config::load()?;
            core::cli::run_config(&config);
            Ok(())
        }
        Commands::Completions { shell } => {
            cli::generate(
                shell,
                &mut Args::command(),
                core::app::NAME,
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
