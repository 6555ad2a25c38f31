//! Client-side session state.
//!
//! `Session` mirrors the event collection from the last successful fetch
//! and tracks which view is active. It is passed explicitly to the render
//! functions so there is no module-level mutable state.

use anyhow::Result;
use chrono::{Datelike, Local, Utc};

use eventide_core::Event;

use crate::client::Client;
use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Calendar,
}

pub struct Session {
    pub events: Vec<Event>,
    pub view: View,
}

impl Session {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            view: View::List,
        }
    }

    /// Replace local state with the server's collection.
    pub async fn refresh(&mut self, client: &Client) -> Result<()> {
        self.events = client.list_events().await?;
        Ok(())
    }

    /// Switching views never re-fetches; it re-renders local state.
    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    /// Render the active view. The calendar always shows the real-world
    /// current month.
    pub fn render(&self) -> String {
        match self.view {
            View::List => render::render_list(&self.events, Utc::now()),
            View::Calendar => {
                let today = Local::now().date_naive();
                render::render_calendar(&self.events, today.year(), today.month())
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
