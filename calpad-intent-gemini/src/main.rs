//! calpad-intent-gemini - Gemini intent provider for calpad
//!
//! This binary implements the calpad provider protocol, reading one JSON
//! request per line on stdin and answering on stdout.
//!
//! Configuration comes from the environment:
//!   GEMINI_API_KEY  (required)
//!   GEMINI_MODEL    (default: gemini-2.5-flash)

mod gemini;

use std::io::{self, BufRead, Write};

use calpad_core::intent::protocol::{Command, ParseIntent, Request, Response};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(request) => handle_request(request).await,
            Err(e) => Response::error(&format!("Failed to parse request: {}", e)),
        };

        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    Ok(())
}

async fn handle_request(request: Request) -> String {
    match request.command {
        Command::ParseIntent => handle_parse_intent(request.params).await,
    }
}

async fn handle_parse_intent(params: serde_json::Value) -> String {
    let params: ParseIntent = match serde_json::from_value(params) {
        Ok(p) => p,
        Err(e) => return Response::error(&format!("Invalid params: {}", e)),
    };

    let client = match gemini::Client::from_env() {
        Ok(c) => c,
        Err(e) => return Response::error(&format!("{:#}", e)),
    };
    info!(model = client.model(), "parsing intent");

    match client.parse_event(&params.text, params.today).await {
        Ok(draft) => Response::success(draft),
        Err(e) => Response::error(&format!("{:#}", e)),
    }
}
