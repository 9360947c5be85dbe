mod commands;
mod dates;
mod render;
mod utils;

use anyhow::Result;
use calpad_core::calpad::Calpad;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commands::EventFields;
use commands::access::AccessMode;
use commands::month::Step;

#[derive(Parser)]
#[command(name = "calpad")]
#[command(about = "Month-view calendar in your terminal, with free-text event entry")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events (default command)
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Show the month before
        #[arg(long, conflicts_with = "next")]
        prev: bool,

        /// Show the month after
        #[arg(long, conflicts_with = "prev")]
        next: bool,
    },
    /// List all events grouped by month
    Events,
    /// Show a single event
    Show { id: String },
    /// Create a new event
    New {
        /// Event title (prompted for when omitted)
        title: Option<String>,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Edit an existing event
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Create an event from a free-text description
    Ask {
        /// e.g. "lunch with Sam next friday at noon"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show or change the access mode
    Access {
        #[arg(value_enum)]
        mode: Option<AccessMode>,
    },
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let mut calpad = Calpad::load()?;
    let today = chrono::Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Month {
        month: None,
        prev: false,
        next: false,
    }) {
        Commands::Month { month, prev, next } => {
            let step = match (prev, next) {
                (true, _) => Step::Prev,
                (_, true) => Step::Next,
                _ => Step::Stay,
            };
            let month = commands::month::resolve_month(month.as_deref(), step, today)?;
            commands::month::run(&calpad, month, today)
        }
        Commands::Events => commands::events::run(&calpad),
        Commands::Show { id } => commands::show::run(&calpad, &id),
        Commands::New { title, fields } => commands::new::run(&calpad, title, fields, today),
        Commands::Edit { id, title, fields } => commands::edit::run(&calpad, &id, title, fields),
        Commands::Delete { id, yes } => commands::delete::run(&calpad, &id, yes),
        Commands::Ask { text } => commands::ask::run(&calpad, &text.join(" "), today).await,
        Commands::Access { mode } => commands::access::run(&mut calpad, mode),
    }
}
