use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::client::{Client, EventPayload};
use crate::{datetime, prompt};

/// Prompt for new title/date/time with the current values as defaults and
/// send a full replacement. Interrupting any prompt aborts before any
/// request is sent. The record's description and location are carried
/// over unchanged.
pub async fn run(client: &Client, id: &str) -> Result<()> {
    let existing = client.get_event(id).await?;

    // Defaults are shown in local time, matching how the input is parsed,
    // so accepting them keeps the stored instant unchanged.
    let current = existing.date.with_timezone(&Local);

    let title = prompt::text("  Title", Some(existing.title.clone()))?;
    let date = prompt::date(
        "  Date (YYYY-MM-DD)",
        Some(current.format("%Y-%m-%d").to_string()),
    )?;
    let time = prompt::time(
        "  Time (HH:MM)",
        Some(current.format("%H:%M").to_string()),
    )?;

    let payload = EventPayload {
        title,
        description: existing.description,
        date: datetime::to_utc(date, time),
        location: existing.location,
    };

    let event = client.update_event(id, &payload).await?;
    println!("{}", format!("  Updated: {}", event.title).green());

    Ok(())
}
