use anyhow::Result;

use crate::client::Client;
use crate::session::Session;

pub async fn run(client: &Client) -> Result<()> {
    let mut session = Session::new();
    session.refresh(client).await?;
    println!("{}", session.render());
    Ok(())
}
