//! Intent provider subprocess.
//!
//! A provider is any executable named `calpad-intent-<name>` on `PATH` that
//! reads one JSON request line from stdin and answers with one JSON response
//! line on stdout. Providers own their credentials; calpad only passes text.

use chrono::NaiveDate;
use serde::Serialize;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;
use tracing::debug;

use super::IntentParser;
use super::protocol::{Command, ParseIntent, ProviderCommand, Request, Response};
use crate::draft::EventDraft;
use crate::error::{CalpadError, CalpadResult};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct ProviderIntentParser {
    name: String,
    timeout: Duration,
}

impl ProviderIntentParser {
    pub fn from_name(name: &str) -> Self {
        ProviderIntentParser {
            name: name.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn binary_name(&self) -> String {
        format!("calpad-intent-{}", self.name)
    }

    fn binary_path(&self) -> CalpadResult<std::path::PathBuf> {
        let binary_name = self.binary_name();
        which::which(&binary_name).map_err(|_| {
            CalpadError::IntentProviderNotInstalled(format!(
                "{}. Install it with:\n  cargo install {}",
                binary_name, binary_name
            ))
        })
    }

    /// Call a typed provider command and return the result.
    pub async fn call<C: ProviderCommand>(&self, cmd: C) -> CalpadResult<C::Response> {
        timeout(self.timeout, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| CalpadError::IntentTimeout(self.timeout.as_secs()))?
    }

    /// Low-level call that sends a command with params and deserializes the response.
    async fn call_raw<P: Serialize, R: serde::de::DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> CalpadResult<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| CalpadError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| CalpadError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;
        debug!(provider = %binary_path.display(), ?command, "calling intent provider");

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                CalpadError::IntentParse(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| CalpadError::IntentParse("Provider stdin unavailable".into()))?;
        stdin.write_all(format!("{request_json}\n").as_bytes()).await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(CalpadError::IntentParse(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(CalpadError::IntentParse("Provider returned no response".into()));
        }

        parse_response(&response_str)
    }
}

fn parse_response<R: serde::de::DeserializeOwned>(raw: &str) -> CalpadResult<R> {
    let response: Response<R> = serde_json::from_str(raw.trim())
        .map_err(|e| CalpadError::IntentParse(format!("Failed to parse response: {}", e)))?;

    match response {
        Response::Success { data } => Ok(data),
        Response::Error { error } => Err(CalpadError::IntentParse(error)),
    }
}

impl IntentParser for ProviderIntentParser {
    async fn parse(&self, text: &str, today: NaiveDate) -> CalpadResult<EventDraft> {
        self.call(ParseIntent {
            text: text.to_string(),
            today,
        })
        .await
    }
}
