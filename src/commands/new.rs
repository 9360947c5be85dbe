use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::draft::{EventDraft, Submission, normalize};
use calpad_core::store::EventStore;
use chrono::NaiveDate;
use dialoguer::Input;
use owo_colors::OwoColorize;
use tracing::debug;

use super::EventFields;
use crate::render::Render;

pub fn run(calpad: &Calpad, title: Option<String>, fields: EventFields, today: NaiveDate) -> Result<()> {
    calpad.ensure_writable()?;

    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // New events default to a single day: the start date, or today
    let mut draft = EventDraft::for_date(today);
    draft.title = title;
    fields.apply(&mut draft, true)?;
    debug!(?draft, "submitting new event");

    let mut store = calpad.store()?;
    let existing = store.list()?;
    let event = normalize(&draft, Submission::Create { existing: &existing })?;
    store.upsert(event.clone())?;

    println!("{}", format!("  Created: {}", event.title).green());
    println!("{}", event.render());

    Ok(())
}
