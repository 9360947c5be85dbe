use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::draft::{EventDraft, Submission, normalize};
use calpad_core::store::EventStore;
use owo_colors::OwoColorize;
use tracing::debug;

use super::EventFields;
use crate::render::Render;

pub fn run(calpad: &Calpad, id: &str, title: Option<String>, fields: EventFields) -> Result<()> {
    calpad.ensure_writable()?;

    let mut store = calpad.store()?;
    let current = store.get(id)?;

    let mut draft = EventDraft::from_event(&current);
    if let Some(title) = title {
        draft.title = title;
    }
    fields.apply(&mut draft, false)?;
    debug!(?draft, "submitting edit");

    // Whole-record replacement under the same id
    let event = normalize(&draft, Submission::Edit { id: &current.id })?;
    if event == current {
        println!("{}", "  No changes".dimmed());
        return Ok(());
    }
    store.upsert(event.clone())?;

    println!("{}", format!("  Updated: {}", event.title).yellow());
    println!("{}", event.render());

    Ok(())
}
