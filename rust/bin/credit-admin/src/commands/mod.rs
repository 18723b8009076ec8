//! Subcommands. Each one drives the console through requests and renders
//! the resulting view state, or prints the loaded records as JSON.

pub mod business;
pub mod reports;
pub mod settings;
pub mod users;

use std::any::Any;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

use credit_admin::model::time;
use credit_admin::state::ErrorBanner;
use credit_admin::{register_handlers, CreditContext};
use credit_flux::Flux;

use crate::config::ClientConfig;

/// A wired console for one CLI run.
pub struct Console {
    flux: Flux,
    json: bool,
}

impl Console {
    pub fn connect(config: &ClientConfig, json: bool) -> Result<Self> {
        let client = config.client()?;
        tracing::debug!(server = %client.base_url(), page_size = config.page_size, "connecting");
        let flux = Flux::new();
        register_handlers(&flux, Arc::new(CreditContext::new(client, config.page_size)));
        Ok(Self { flux, json })
    }

    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.flux.emit(path, payload).await;
    }

    /// View state at `path`. Every request writes its view, so a miss means
    /// the request was never handled.
    pub fn state<T: Any + Clone>(&self, path: &str) -> Result<T> {
        self.flux
            .get_as::<T>(path)
            .ok_or_else(|| anyhow::anyhow!("no view state at {}", path))
    }

    /// Like [`Console::state`], failing with the view's banner text.
    pub fn loaded<T: Any + Clone + ErrorBanner>(&self, path: &str) -> Result<T> {
        let state = self.state::<T>(path)?;
        if let Some(error) = state.error() {
            anyhow::bail!("{}", error);
        }
        Ok(state)
    }

    pub fn json(&self) -> bool {
        self.json
    }

    /// Print `value` as JSON when `-o json` was given, else print `table()`.
    pub fn print<T, F>(&self, value: &T, table: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce() -> String,
    {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", table());
        }
        Ok(())
    }
}

/// Render-time clock, in the zone server timestamps are parsed into.
pub fn now() -> NaiveDateTime {
    time::now()
}
