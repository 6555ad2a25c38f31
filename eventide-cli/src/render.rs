//! Pure render functions for the list and calendar views.
//!
//! Both functions map (events, time inputs) to a `String` and touch no
//! terminal state, so they can be unit tested directly. Callers decide
//! what "now" and "this month" mean.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use owo_colors::OwoColorize;

use eventide_core::Event;

const CELL_WIDTH: usize = 16;
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// List view: one card per event, ascending by date. Events after `now`
/// carry an upcoming marker.
pub fn render_list(events: &[Event], now: DateTime<Utc>) -> String {
    if events.is_empty() {
        return "No events found".dimmed().to_string();
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| event.date);

    let mut lines = Vec::new();
    for event in sorted {
        let marker = if event.date > now {
            format!(" {}", "[upcoming]".green())
        } else {
            String::new()
        };
        lines.push(format!("{}{}", event.title.bold(), marker));
        lines.push(format!("   {}", format_event_date(event.date).dimmed()));
        if !event.location.is_empty() {
            lines.push(format!("   {}", event.location));
        }
        lines.push(format!("   {}", format!("id: {}", event.id).dimmed()));
        lines.push(String::new());
    }
    lines.push(
        "Edit or delete with: eventide edit <id> / eventide delete <id>"
            .dimmed()
            .to_string(),
    );
    lines.join("\n")
}

fn format_event_date(date: DateTime<Utc>) -> String {
    format!(
        "{} at {} UTC",
        date.format("%A, %B %-d, %Y"),
        date.format("%H:%M")
    )
}

/// Calendar view: a month grid with Sun..Sat headers, blank filler cells
/// before the month's first weekday, and each event's `Title (HH:MM)`
/// under the day matching its date.
pub fn render_calendar(events: &[Event], year: i32, month: u32) -> String {
    // year/month come from the clock, so this only fails on a bad caller
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date,
        None => return String::new(),
    };
    let leading = first.weekday().num_days_from_sunday() as usize;

    // One multi-line cell per grid slot, leading slots left blank
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); leading];
    for day in 1..=days_in_month(year, month) {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        let mut cell = vec![day.to_string()];
        for event in events {
            if event.date.date_naive() == date {
                cell.push(format!("{} ({})", event.title, event.date.format("%H:%M")));
            }
        }
        cells.push(cell);
    }
    while cells.len() % 7 != 0 {
        cells.push(Vec::new());
    }

    let mut out = String::new();
    out.push_str(&first.format("%B %Y").to_string());
    out.push_str("\n\n");

    let mut header = String::new();
    for name in DAY_NAMES {
        header.push_str(&format!("{name:<CELL_WIDTH$}"));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for week in cells.chunks(7) {
        let height = week.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for line in 0..height {
            let mut row = String::new();
            for cell in week {
                let text = cell.get(line).map(String::as_str).unwrap_or("");
                let text = truncate(text, CELL_WIDTH - 1);
                row.push_str(&format!("{text:<CELL_WIDTH$}"));
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
    }
    out
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .unwrap_or(28)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
