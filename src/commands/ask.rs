use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::date_range::YearMonth;
use calpad_core::intent::event_from_text;
use calpad_core::store::EventStore;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use tracing::warn;

use super::month::print_month;
use crate::render::Render;
use crate::utils::tui::create_spinner;

pub async fn run(calpad: &Calpad, text: &str, today: NaiveDate) -> Result<()> {
    calpad.ensure_writable()?;

    let mut store = calpad.store()?;
    let existing = store.list()?;
    let parser = calpad.intent_parser();

    let spinner = create_spinner(format!("  Thinking about \"{}\"", text.trim()));
    let result = event_from_text(&parser, text, today, &existing).await;
    spinner.finish_and_clear();

    let event = match result {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "intent parsing failed");
            eprintln!("  {}", "Failed to understand the event. Please try again.".red());
            return Err(e.into());
        }
    };

    store.upsert(event.clone())?;

    println!("{}", format!("  Created: {}", event.title).green());
    println!("{}", event.render());
    println!();

    // Jump to the month the new event starts in
    let events = store.list()?;
    print_month(YearMonth::containing(event.start_date), &events, today);

    Ok(())
}
