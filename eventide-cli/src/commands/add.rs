use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::{Client, EventPayload};
use crate::{datetime, prompt};

// The frontend does not collect these; they are fixed placeholders.
const DEFAULT_DESCRIPTION: &str = "Event created from eventide";
const DEFAULT_LOCATION: &str = "Default Location";

pub async fn run(
    client: &Client,
    title: Option<String>,
    date: Option<String>,
    time: Option<String>,
) -> Result<()> {
    let title = match title {
        Some(title) => title,
        None => prompt::text("  Title", None)?,
    };
    let date = match date {
        Some(raw) => datetime::parse_date(&raw)?,
        None => prompt::date("  Date (YYYY-MM-DD)", None)?,
    };
    let time = match time {
        Some(raw) => datetime::parse_time(&raw)?,
        None => prompt::time("  Time (HH:MM)", None)?,
    };

    let payload = EventPayload {
        title,
        description: DEFAULT_DESCRIPTION.to_string(),
        date: datetime::to_utc(date, time),
        location: DEFAULT_LOCATION.to_string(),
    };

    let event = client.create_event(&payload).await?;
    println!("{}", format!("  Created: {}", event.title).green());

    Ok(())
}
