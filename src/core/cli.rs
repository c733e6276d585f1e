//! CLI commands: highlight, documents, assistants, prefs, config.
//!
//! Each command reads its input, runs the pure transformation, and prints plain text or JSON.

use std::io::IsTerminal;

use serde::{Deserialize, Serialize};

use crate::cli::{ListFormat, OutputFormat};
use crate::core::assistants::{Assistant, User, UserPreferences, order_assistants_for_user};
use crate::core::config::{self, Config};
use crate::core::document::{
    CommentMap, DisplayContext, DisplayMode, DocumentView, RelevanceMap, SearchDocument,
};
use crate::core::error::AppError;
use crate::core::highlight::{self, Run};
use crate::core::paths;
use crate::core::persistence;
use crate::core::util;
use crate::render;

#[derive(Debug, Deserialize)]
struct HighlightInput {
    #[serde(default)]
    match_highlights: Vec<String>,
    #[serde(default)]
    blurb: String,
}

#[derive(Debug, Deserialize)]
struct DocumentsInput {
    documents: Vec<SearchDocument>,
    #[serde(default)]
    relevance: Option<RelevanceMap>,
    #[serde(default)]
    comments: Option<CommentMap>,
}

#[derive(Debug, Deserialize)]
struct AssistantsInput {
    assistants: Vec<Assistant>,
    #[serde(default)]
    user: Option<User>,
}

/// Ansi on a terminal, plain text when piped.
fn default_format() -> OutputFormat {
    if std::io::stdout().is_terminal() {
        OutputFormat::Ansi
    } else {
        OutputFormat::Plain
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| AppError::Json {
        origin: "output".to_string(),
        source,
    })?;
    println!("{}", json);
    Ok(())
}

fn print_runs(runs: &[Run], format: OutputFormat) -> Result<(), AppError> {
    match format.run_style() {
        Some(style) => {
            println!("{}", render::render_runs(runs, style));
            Ok(())
        }
        None => print_json(runs),
    }
}

/// Run the `highlight` command: snippets from arguments or a JSON input.
pub fn run_highlight(
    snippets: &[String],
    blurb: &str,
    input: Option<&str>,
    format: Option<OutputFormat>,
) -> Result<(), AppError> {
    let format = format.unwrap_or_else(default_format);
    let runs = match input {
        Some(source) => {
            let parsed: HighlightInput = util::load_json(source)?;
            highlight::segment(&parsed.match_highlights, &parsed.blurb)
        }
        None => highlight::segment(snippets, blurb),
    };
    print_runs(&runs, format)
}

/// Run the `documents` command: one display block (or JSON view) per document.
pub fn run_documents(
    config: &Config,
    input: &str,
    agentic: bool,
    format: Option<OutputFormat>,
) -> Result<(), AppError> {
    let format = format.unwrap_or_else(default_format);
    let parsed: DocumentsInput = util::load_json(input)?;
    let ctx = DisplayContext {
        mode: if agentic {
            DisplayMode::Agentic
        } else {
            DisplayMode::Standard
        },
        relevance: parsed.relevance.as_ref(),
        comments: parsed.comments.as_ref(),
        max_tag_length: config.max_tag_length,
    };
    let views: Vec<DocumentView> = parsed
        .documents
        .iter()
        .map(|doc| DocumentView::build(doc, &ctx))
        .collect();
    log::info!("Rendering {} document(s)", views.len());

    let Some(style) = format.run_style() else {
        return print_json(&views);
    };
    let now = chrono::Utc::now();
    let blocks: Vec<String> = views
        .iter()
        .map(|view| render::render_document(view, style, now))
        .collect();
    if !blocks.is_empty() {
        println!("{}", blocks.join("\n\n"));
    }
    Ok(())
}

/// The local user: configured id plus stored preferences. None when neither exists.
fn local_user(config: &Config, prefs: UserPreferences) -> Option<User> {
    if config.user_id.is_none() && prefs.chosen_assistants.is_none() {
        return None;
    }
    Some(User {
        id: config.user_id.clone().unwrap_or_default(),
        email: None,
        preferences: Some(prefs),
    })
}

/// Run the `assistants` command: order the input list for its user (or the local user).
pub fn run_assistants(
    config: &Config,
    input: &str,
    owned: bool,
    format: ListFormat,
) -> Result<(), AppError> {
    let parsed: AssistantsInput = util::load_json(input)?;
    let user = match parsed.user {
        Some(user) => Some(user),
        None => {
            log::debug!("No user in input, using local preferences");
            local_user(config, persistence::load_preferences()?)
        }
    };
    let ordered = order_assistants_for_user(&parsed.assistants, user.as_ref(), owned);
    match format {
        ListFormat::Json => print_json(&ordered),
        ListFormat::Text => {
            if !ordered.is_empty() {
                println!("{}", render::render_assistants(&ordered));
            }
            Ok(())
        }
    }
}

fn format_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run the `prefs show` command.
pub fn run_prefs_show() -> Result<(), AppError> {
    let prefs = persistence::load_preferences()?;
    match prefs.chosen_assistants.as_deref() {
        Some(ids) if !ids.is_empty() => println!("{}", format_ids(ids)),
        _ => println!("No preferred assistants."),
    }
    Ok(())
}

/// Run the `prefs set` command.
pub fn run_prefs_set(ids: &[i64]) -> Result<(), AppError> {
    persistence::save_chosen_assistants(ids)?;
    println!("Preferred assistants: {}", format_ids(ids));
    Ok(())
}

/// Run the `prefs clear` command.
pub fn run_prefs_clear() -> Result<(), AppError> {
    persistence::clear_chosen_assistants()?;
    println!("Preferred assistants cleared.");
    Ok(())
}

/// Run the `config` command: display paths and effective values.
pub fn run_config(config: &Config) {
    let config_dir = match (&config.config_dir, paths::config_dir()) {
        (Some(dir), _) => format!("{} ({})", dir.display(), config::env_name("CONFIG_DIR")),
        (None, Some(dir)) => dir.display().to_string(),
        (None, None) => "—".to_string(),
    };
    let prefs_path = paths::preferences_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "—".to_string());
    let chosen = match persistence::load_preferences() {
        Ok(prefs) => match prefs.chosen_assistants {
            Some(ids) if !ids.is_empty() => format!("{} chosen", ids.len()),
            _ => "none".to_string(),
        },
        Err(e) => format!("unreadable ({})", e),
    };

    println!("Config:       {}", config_dir);
    println!("Preferences:  {} ({})", prefs_path, chosen);
    println!(
        "Max tag:      {} ({})",
        config.max_tag_length,
        config::env_name("MAX_TAG_LENGTH")
    );
    println!("User id:      {}", config.user_id.as_deref().unwrap_or("—"));
}
