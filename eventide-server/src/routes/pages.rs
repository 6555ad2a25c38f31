//! Server-rendered HTML listing of all events.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use eventide_core::Event;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// GET / - self-contained HTML page listing every event, ascending by date.
/// Failures come back as plain text with a 500.
async fn index(State(state): State<AppState>) -> Response {
    match state.store.list().await {
        Ok(events) => Html(render_index(&events)).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {err}")).into_response(),
    }
}

fn render_index(events: &[Event]) -> String {
    let mut body = String::new();

    if events.is_empty() {
        body.push_str("<p>No events found in database.</p>\n");
    }

    for event in events {
        body.push_str(&format!(
            r#"<div class="event">
  <h3>{title}</h3>
  <p><strong>Description:</strong> {description}</p>
  <p><strong>Date:</strong> {date}</p>
  <p><strong>Location:</strong> {location}</p>
  <p><strong>Created:</strong> {created}</p>
</div>
"#,
            title = escape_html(&event.title),
            description = escape_html(&event.description),
            date = format_datetime(event),
            location = escape_html(&event.location),
            created = event.created_at.format("%Y-%m-%d %H:%M UTC"),
        ));
    }

    format!(
        r#"<html>
<head>
  <title>Events in Database</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 20px; }}
    .event {{ border: 1px solid #ccc; padding: 10px; margin: 10px 0; border-radius: 5px; }}
    .event h3 {{ margin: 0 0 10px 0; }}
    .event p {{ margin: 5px 0; }}
  </style>
</head>
<body>
<h1>Events in Database</h1>
{body}</body>
</html>
"#
    )
}

fn format_datetime(event: &Event) -> String {
    event.date.format("%A, %B %-d, %Y at %H:%M UTC").to_string()
}

/// Minimal HTML escaping for user-supplied text.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
