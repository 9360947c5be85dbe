use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::store::EventStore;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(calpad: &Calpad, id: &str, yes: bool) -> Result<()> {
    calpad.ensure_writable()?;

    let mut store = calpad.store()?;
    let event = store.get(id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete '{}'?", event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Kept".dimmed());
            return Ok(());
        }
    }

    store.delete(&event.id)?;
    println!("{}", format!("  Deleted: {}", event.title).red());

    Ok(())
}
