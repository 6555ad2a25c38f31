use anyhow::Result;
use owo_colors::OwoColorize;

use crate::client::Client;
use crate::prompt;

pub async fn run(client: &Client, id: &str, force: bool) -> Result<()> {
    if !force {
        let confirmed = prompt::confirm("Are you sure you want to delete this event?")?;
        if !confirmed {
            println!("{}", "Aborted; nothing deleted".dimmed());
            return Ok(());
        }
    }

    client.delete_event(id).await?;
    println!("{}", "Event deleted".green());

    Ok(())
}
