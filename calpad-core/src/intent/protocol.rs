//! Defines the JSON protocol used between calpad and intent provider
//! binaries over stdin/stdout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::draft::EventDraft;

pub trait ProviderCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ParseIntent,
}

/// Request sent from calpad to the provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the provider to calpad.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data })
            .unwrap_or_else(|e| Response::<()>::error(&format!("Failed to encode response: {e}")))
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        let response = Response::<()>::Error {
            error: msg.to_string(),
        };
        serde_json::to_string(&response)
            .unwrap_or_else(|_| r#"{"status":"error","error":"unencodable error"}"#.to_string())
    }
}

/// Turn free text into an event draft.
#[derive(Debug, Serialize, Deserialize)]
pub struct ParseIntent {
    pub text: String,
    /// Reference date for relative phrases ("next friday") and missing years
    pub today: NaiveDate,
}

impl ProviderCommand for ParseIntent {
    type Response = EventDraft;
    fn command() -> Command {
        Command::ParseIntent
    }
}
