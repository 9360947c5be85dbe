use anyhow::Result;
use calpad_core::calpad::Calpad;
use clap::ValueEnum;
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccessMode {
    /// View only: creating, editing and deleting are refused
    ReadOnly,
    /// Full access
    Admin,
}

pub fn run(calpad: &mut Calpad, mode: Option<AccessMode>) -> Result<()> {
    if let Some(mode) = mode {
        calpad.set_read_only(mode == AccessMode::ReadOnly)?;
    }

    let label = if calpad.is_read_only() {
        "read-only".yellow().to_string()
    } else {
        "admin".green().to_string()
    };
    println!("Access: {}", label);
    println!("{}", format!("Events: {}", calpad.display_path().display()).dimmed());

    Ok(())
}
