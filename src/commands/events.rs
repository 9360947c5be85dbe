use anyhow::Result;
use calpad_core::calpad::Calpad;
use calpad_core::side_panel::group_by_month;
use calpad_core::store::EventStore;

use crate::render::render_side_panel;

pub fn run(calpad: &Calpad) -> Result<()> {
    let events = calpad.store()?.list()?;
    let groups = group_by_month(&events);
    println!("{}", render_side_panel(&groups, calpad.is_read_only()));
    Ok(())
}
