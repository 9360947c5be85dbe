//! Command-line date input: ISO dates, natural language, and day spans.

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    lowercase_words(input)
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| full.to_string())
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn lowercase_words(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_lowercase)
}

/// Resolve a date argument to YYYY-MM-DD.
///
/// ISO dates pass through untouched so the normalizer reports malformed
/// ones; anything else goes through fuzzydate ("tomorrow", "next fri").
pub fn resolve_date(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if looks_iso(trimmed) {
        return Ok(trimmed.to_string());
    }

    let expanded = expand_abbreviations(trimmed);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;
    Ok(dt.date().format("%Y-%m-%d").to_string())
}

fn looks_iso(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// Inclusive end date for an event covering `span` ("3days", "1week")
/// starting on `start`.
pub fn end_after_span(start: &str, span: &str) -> Result<String> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date '{}'", start))?;

    let std_dur = humantime::parse_duration(span)
        .with_context(|| format!("Could not parse duration: \"{}\"", span))?;
    let days = Duration::from_std(std_dur)
        .context("Duration too large")?
        .num_days();

    if days < 1 {
        anyhow::bail!("Duration must cover at least one day, got \"{}\"", span);
    }

    let end = start
        .checked_add_signed(Duration::days(days - 1))
        .context("Duration too large")?;
    Ok(end.format("%Y-%m-%d").to_string())
}
