//! HTTP client for communicating with eventide-server.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use eventide_core::Event;

const API_URL: &str = "http://127.0.0.1:5000";

/// HTTP client for the eventide API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

/// Full event payload sent on create and update.
#[derive(Debug, Clone, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

impl Client {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: API_URL.to_string(),
        }
    }

    /// GET /api/events
    pub async fn list_events(&self) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("Failed to connect to server")?;
        Self::parse(resp).await
    }

    /// GET /api/events/{id}
    pub async fn get_event(&self, id: &str) -> Result<Event> {
        let resp = self
            .http
            .get(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to server")?;
        Self::parse(resp).await
    }

    /// POST /api/events
    pub async fn create_event(&self, payload: &EventPayload) -> Result<Event> {
        let resp = self
            .http
            .post(format!("{}/api/events", self.base_url))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to server")?;
        Self::parse(resp).await
    }

    /// PUT /api/events/{id} - full replacement of the named fields
    pub async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<Event> {
        let resp = self
            .http
            .put(format!("{}/api/events/{}", self.base_url, id))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to server")?;
        Self::parse(resp).await
    }

    /// DELETE /api/events/{id}
    pub async fn delete_event(&self, id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(format!("{}/api/events/{}", self.base_url, id))
            .send()
            .await
            .context("Failed to connect to server")?;

        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }
        Ok(())
    }

    async fn parse<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let err: ErrorResponse = resp.json().await?;
            anyhow::bail!("{}", err.message);
        }
        Ok(resp.json().await?)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
