//! Server configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DATABASE: &str = "eventide";

#[derive(Clone, Debug)]
pub struct Config {
    /// MongoDB connection string (`MONGO_URI`, required)
    pub mongo_uri: String,
    /// Database name (`MONGO_DB`, defaults to "eventide")
    pub mongo_db: String,
    /// Listen port (`PORT`, defaults to 5000)
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongo_uri = env::var("MONGO_URI").context("MONGO_URI must be set")?;
        let mongo_db = env::var("MONGO_DB").unwrap_or_else(|_| DEFAULT_DATABASE.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            mongo_uri,
            mongo_db,
            port,
        })
    }
}
