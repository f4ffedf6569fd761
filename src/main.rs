// Month Calendar
// Main entry point: prints a month grid with packed event lanes

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

use month_calendar::models::settings::Settings;
use month_calendar::services::calendar::CalendarView;
use month_calendar::services::drag::relocate;
use month_calendar::services::event::EventStore;
use month_calendar::services::id::UuidGenerator;
use month_calendar::services::seed;
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_text;
use month_calendar::utils::date::parse_month;
use month_calendar::EventId;

#[derive(Parser, Debug)]
#[command(name = "month-calendar", version, about = "Month calendar with multi-day event lanes")]
struct Cli {
    /// Month to show, as YYYY-MM (defaults to the current month)
    #[arg(long, value_parser = parse_month_arg)]
    month: Option<NaiveDate>,

    /// TOML file with events to load into the in-memory store
    #[arg(long)]
    events: Option<PathBuf>,

    /// Settings file (defaults to config.toml in the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drag an event onto another day before rendering: ID=YYYY-MM-DD (repeatable)
    #[arg(long = "move", value_parser = parse_move_arg)]
    moves: Vec<(EventId, NaiveDate)>,

    /// Also print the list of events starting this month
    #[arg(long)]
    agenda: bool,

    /// Print the layout as JSON instead of the text grid
    #[arg(long)]
    json: bool,
}

fn parse_month_arg(value: &str) -> Result<NaiveDate, String> {
    parse_month(value).ok_or_else(|| format!("expected YYYY-MM, got '{}'", value))
}

fn parse_move_arg(value: &str) -> Result<(EventId, NaiveDate), String> {
    let (id, date) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=YYYY-MM-DD, got '{}'", value))?;
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", date, e))?;
    Ok((EventId::new(id.trim()), date))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_service = match cli.config.clone() {
        Some(path) => Some(SettingsService::new(path)),
        None => SettingsService::from_default_location(),
    };
    let (settings, load_error) = match &settings_service {
        Some(service) => service.load_with_fallback(),
        None => (Settings::default(), None),
    };

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();

    log::info!("Starting Month Calendar");
    if let Some(e) = load_error {
        log::warn!("Failed to load settings: {:#}, using defaults", e);
    }

    let mut store = EventStore::new();
    store.subscribe(|change| log::debug!("Store change: {}", change.describe()));
    if let Some(path) = &cli.events {
        seed::load_into(&mut store, path, &UuidGenerator)
            .with_context(|| format!("Failed to load events from {}", path.display()))?;
    }

    for (id, target) in &cli.moves {
        if relocate(&mut store, id, *target).is_none() {
            log::warn!("No event with id {} to move", id);
        }
    }

    let today = Local::now().date_naive();
    let mut view = CalendarView::new(today, &settings);
    if let Some(month) = cli.month {
        view.show_month(month);
    }

    let layout = view.layout(&store);
    if cli.json {
        let json =
            serde_json::to_string_pretty(&layout).context("Failed to serialize layout")?;
        println!("{}", json);
    } else {
        print!("{}", ui_text::render_month(&layout, &store, &settings));
    }

    if cli.agenda {
        let agenda = store.month_agenda(view.current_month());
        print!(
            "{}",
            ui_text::render_agenda(view.current_month(), &agenda, &settings)
        );
    }

    Ok(())
}
