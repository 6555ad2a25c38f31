//! Blocking prompt helpers.
//!
//! These wrap dialoguer so every interactive flow has the same contract:
//! the returned `Result` is `Err` when the user interrupts, and callers
//! abort without sending a request. Parse failures re-prompt.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input};
use owo_colors::OwoColorize;

use crate::datetime;

pub fn text(prompt: &str, default: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value);
    }
    Ok(input.interact_text()?)
}

pub fn date(prompt: &str, default: Option<String>) -> Result<NaiveDate> {
    with_retry(prompt, default, datetime::parse_date)
}

pub fn time(prompt: &str, default: Option<String>) -> Result<NaiveTime> {
    with_retry(prompt, default, datetime::parse_time)
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

/// Prompt the user with retry on parse errors.
fn with_retry<T, F>(prompt: &str, default: Option<String>, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let mut input = Input::<String>::new().with_prompt(prompt);
        if let Some(value) = &default {
            input = input.default(value.clone());
        }
        let raw = input.interact_text()?;
        match parse(&raw) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => eprintln!("  {}", err.to_string().red()),
        }
    }
}
