use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(calpad: &Calpad, id: &str) -> Result<()> {
    let event = calpad.store()?.get(id)?;

    if calpad.is_read_only() {
        println!("{}", "[Read Only]".dimmed());
    }
    println!("{}", event.render());
    Ok(())
}
