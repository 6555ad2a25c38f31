//! Interactive mode: an in-memory session with switchable list/calendar
//! views. Switching views re-renders local state without re-fetching;
//! only Refresh (and the mutation flows) talk to the server.

use anyhow::Result;
use dialoguer::Select;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::commands::{add, delete, edit};
use crate::session::{Session, View};

const ACTIONS: [&str; 7] = [
    "List view",
    "Calendar view",
    "Refresh",
    "Add event",
    "Edit event",
    "Delete event",
    "Quit",
];

pub async fn run(client: &Client) -> Result<()> {
    let mut session = Session::new();
    refresh_or_warn(&mut session, client).await;

    loop {
        println!("\n{}", session.render());

        let choice = Select::new()
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match choice {
            0 => session.switch_view(View::List),
            1 => session.switch_view(View::Calendar),
            2 => refresh_or_warn(&mut session, client).await,
            3 => {
                if let Err(err) = add::run(client, None, None, None).await {
                    warn(&err);
                }
                refresh_or_warn(&mut session, client).await;
            }
            4 => {
                if let Some(id) = pick_event(&session)? {
                    if let Err(err) = edit::run(client, &id).await {
                        warn(&err);
                    }
                    refresh_or_warn(&mut session, client).await;
                }
            }
            5 => {
                if let Some(id) = pick_event(&session)? {
                    if let Err(err) = delete::run(client, &id, false).await {
                        warn(&err);
                    }
                    refresh_or_warn(&mut session, client).await;
                }
            }
            _ => break,
        }
    }

    Ok(())
}

/// A failed refresh leaves the session stale; the error is surfaced and
/// the loop goes on.
async fn refresh_or_warn(session: &mut Session, client: &Client) {
    if let Err(err) = session.refresh(client).await {
        warn(&err);
    }
}

fn warn(err: &anyhow::Error) {
    eprintln!("{}", format!("Error: {err}").red());
}

fn pick_event(session: &Session) -> Result<Option<String>> {
    if session.events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(None);
    }

    let labels: Vec<String> = session
        .events
        .iter()
        .map(|event| format!("{} ({})", event.title, event.date.format("%Y-%m-%d %H:%M")))
        .collect();

    let choice = Select::new()
        .with_prompt("Which event?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Some(session.events[choice].id.clone()))
}
