use anyhow::{Context, Result};
use calpad_core::EventColor;
use calpad_core::draft::EventDraft;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const PROMPT_TEMPLATE: &str = "Extract event details from this text: \"{text}\".
Today is {today}. Resolve relative dates (\"tomorrow\", \"next friday\") against today.
If the year is not specified, assume the current year or the next occurrence.
If it's a single day event, startDate and endDate should be the same.
If no duration is specified, assume 1 hour.
Suggest a color based on the context (e.g., red for urgent/important, green for money/work, blue for general).
Return a JSON object.";

pub struct Client {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl Client {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .context("GEMINI_API_KEY environment variable not set")?;
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Client {
            http: reqwest::Client::new(),
            api_key,
            model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn parse_event(&self, text: &str, today: NaiveDate) -> Result<EventDraft> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(text, today))
            .send()
            .await
            .context("Failed to send request to Gemini")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini returned {}: {}", status, error_text);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        let text = body.text().context("Gemini returned no content")?;
        debug!(%text, "model output");

        serde_json::from_str(text).context("Gemini returned malformed event JSON")
    }
}

fn build_prompt(text: &str, today: NaiveDate) -> String {
    PROMPT_TEMPLATE
        .replace("{text}", text)
        .replace("{today}", &today.format("%Y-%m-%d").to_string())
}

/// generateContent body with a response schema mirroring [`EventDraft`].
fn request_body(text: &str, today: NaiveDate) -> Value {
    let colors: Vec<&str> = EventColor::ALL.iter().map(|c| c.as_str()).collect();

    json!({
        "contents": [{ "parts": [{ "text": build_prompt(text, today) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "startDate": { "type": "STRING", "description": "ISO 8601 date string (YYYY-MM-DD)" },
                    "endDate": { "type": "STRING", "description": "ISO 8601 date string (YYYY-MM-DD)" },
                    "startTime": { "type": "STRING", "description": "24-hour format HH:mm" },
                    "endTime": { "type": "STRING", "description": "24-hour format HH:mm" },
                    "color": { "type": "STRING", "enum": colors }
                },
                "required": ["title", "startDate", "endDate", "color"]
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|p| p.text.as_deref())
    }
}
