mod client;
mod commands;
mod datetime;
mod prompt;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::Client;

#[derive(Parser)]
#[command(name = "eventide")]
#[command(about = "Browse and manage your events from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all events
    List,
    /// Show this month's calendar
    Calendar,
    /// Create a new event
    Add {
        title: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,

        /// Event time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,
    },
    /// Edit an event by id
    Edit { id: String },
    /// Delete an event by id
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Interactive mode with switchable list/calendar views
    Ui,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new();

    match cli.command {
        Commands::List => commands::list::run(&client).await,
        Commands::Calendar => commands::calendar::run(&client).await,
        Commands::Add { title, date, time } => commands::add::run(&client, title, date, time).await,
        Commands::Edit { id } => commands::edit::run(&client, &id).await,
        Commands::Delete { id, force } => commands::delete::run(&client, &id, force).await,
        Commands::Ui => commands::ui::run(&client).await,
    }
}
