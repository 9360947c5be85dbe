//! Free-text event entry.
//!
//! The intent parser is an injected capability: anything that turns text
//! into an [`EventDraft`]. calpad ships a subprocess-backed implementation
//! ([`ProviderIntentParser`]); the draft it returns goes through the same
//! normalizer as a hand-filled form.

pub mod protocol;
mod provider;

pub use provider::{DEFAULT_TIMEOUT, ProviderIntentParser};

use chrono::NaiveDate;
use std::future::Future;

use crate::draft::{EventDraft, Submission, normalize};
use crate::error::{CalpadError, CalpadResult};
use crate::event::Event;

pub trait IntentParser {
    /// Produce a draft for `text`, resolving relative dates against `today`.
    fn parse(
        &self,
        text: &str,
        today: NaiveDate,
    ) -> impl Future<Output = CalpadResult<EventDraft>> + Send;
}

/// Parse `text` and normalize the result as a new event.
///
/// Nothing is stored; the caller upserts the returned event.
pub async fn event_from_text<P: IntentParser>(
    parser: &P,
    text: &str,
    today: NaiveDate,
    existing: &[Event],
) -> CalpadResult<Event> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CalpadError::IntentParse("Nothing to parse".into()));
    }

    let draft = parser.parse(text, today).await?;
    Ok(normalize(&draft, Submission::Create { existing })?)
}
