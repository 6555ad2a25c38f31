use anyhow::Result;

use crate::client::Client;
use crate::session::{Session, View};

pub async fn run(client: &Client) -> Result<()> {
    let mut session = Session::new();
    session.refresh(client).await?;
    session.switch_view(View::Calendar);
    println!("{}", session.render());
    Ok(())
}
