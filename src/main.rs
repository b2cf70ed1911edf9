//! Broadsheet - a terminal markdown editor with a newspaper front page.
//!
//! # Usage
//!
//! ```bash
//! broadsheet story.md
//! broadsheet --view preview --theme ion-sky story.md
//! cat story.md | broadsheet --print-html - > page.html
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use broadsheet::app::{App, Dates};
use broadsheet::config::{
    ConfigFlags, ViewMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use broadsheet::document::masthead::{date_label, issue_number};
use broadsheet::document::{Source, segment};
use broadsheet::render::render_page;
use broadsheet::theme::{ThemeRecord, ThemeSelection, daily_theme, find_theme, list_themes};

/// A terminal markdown editor with a newspaper-style preview
#[derive(Parser, Debug)]
#[command(name = "broadsheet", version, about, long_about = None)]
struct Cli {
    /// Markdown file to edit (`-` reads stdin; omitted opens a sample story)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Which panes to show
    #[arg(long, value_enum)]
    view: Option<ViewMode>,

    /// Lock the palette to a theme id for this session
    #[arg(long, value_name = "ID")]
    theme: Option<String>,

    /// Use this date for both the masthead and the daily palette (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Maximum preview text width
    #[arg(long, value_name = "N")]
    wrap_width: Option<u16>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the palette registry and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the front page as HTML and exit
    #[arg(long)]
    print_html: bool,

    /// Print the segmented document (or the registry) as JSON and exit
    #[arg(long)]
    json: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let default_level = if log_file.is_some() { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.with_ansi(false).with_writer(Mutex::new(file)).init();
    } else {
        builder.with_writer(std::io::stderr).init();
    }
    Ok(())
}

fn print_themes(palette_day: NaiveDate, as_json: bool) -> Result<()> {
    let daily = daily_theme(palette_day);
    if as_json {
        let json = serde_json::to_string_pretty(list_themes())
            .context("Failed to serialize palette registry")?;
        println!("{json}");
        return Ok(());
    }
    for theme in list_themes() {
        let marker = if theme.id == daily.id { "*" } else { " " };
        let [accent, highlight, background] = theme.swatches;
        println!(
            "{marker} {:<16} {:<14} {accent} {highlight} {background}",
            theme.id, theme.name
        );
    }
    Ok(())
}

fn print_document(
    text: &str,
    theme: &ThemeRecord,
    selection: &ThemeSelection,
    dates: Dates,
    as_json: bool,
) -> Result<()> {
    let doc = segment(text);
    let today = dates.local;
    if as_json {
        let payload = serde_json::json!({
            "date": today,
            "palette_day": dates.utc,
            "dateline": date_label(today),
            "issue": issue_number(today),
            "locked": selection.override_id().and_then(find_theme).is_some(),
            "theme": theme,
            "document": doc,
        });
        let json =
            serde_json::to_string_pretty(&payload).context("Failed to serialize document")?;
        println!("{json}");
    } else {
        print!("{}", render_page(&doc, theme, today));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        view: cli.view,
        wrap_width: cli.wrap_width.filter(|w| *w > 0),
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let log_file = effective
        .log_file
        .clone()
        .or_else(|| std::env::var_os("BROADSHEET_LOG").map(PathBuf::from));
    init_tracing(log_file.as_deref())?;

    let dates = cli.date.map_or_else(Dates::now, Dates::pinned);
    if let Some(id) = cli.theme.as_deref()
        && find_theme(id).is_none()
    {
        tracing::warn!(id, "unknown theme id, using the daily palette");
    }

    if cli.list_themes {
        return print_themes(dates.utc, cli.json);
    }

    let source = Source::from_arg(cli.file.as_deref());
    let text = source.load().context("Failed to load document")?;

    if cli.print_html || cli.json {
        let mut selection = ThemeSelection::default();
        if let Some(id) = &cli.theme {
            selection.pick(id.clone());
        }
        let theme = selection.resolve(daily_theme(dates.utc));
        return print_document(&text, theme, &selection, dates, cli.json);
    }

    // Run the application
    let mut app = App::new(text)
        .with_source_label(source.label())
        .with_view_mode(effective.view.unwrap_or_default())
        .with_theme_override(cli.theme)
        .with_date(cli.date)
        .with_wrap_width(effective.wrap_width)
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
