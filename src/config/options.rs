//! Queue options: the capacity bound shared by every queue kind.

use std::env::{self, VarError};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable read by [`QueueOptions::from_env`].
pub const CAPACITY_ENV: &str = "PROMETHEUS_QUEUE_CAPACITY";

/// Options applied identically to blocking and priority queues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueOptions {
    /// Maximum number of live elements. `None` means unbounded.
    #[serde(default)]
    pub capacity: Option<usize>,
}

impl QueueOptions {
    /// Unbounded options.
    #[must_use]
    pub const fn new() -> Self {
        Self { capacity: None }
    }

    /// Bound the queue to `capacity` live elements.
    ///
    /// A capacity of zero is accepted here but makes every offer fail, and
    /// every `offer_wait` block forever; [`QueueOptions::validate`] rejects it.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Validate option values.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == Some(0) {
            return Err("capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse options from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let options: Self =
            serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from [`CAPACITY_ENV`], reading a `.env` file first if one
    /// exists.
    pub fn from_env() -> AppResult<Self> {
        Self::from_env_var(CAPACITY_ENV)
    }

    /// Load options from the capacity variable `name`. An unset variable means
    /// unbounded.
    pub fn from_env_var(name: &str) -> AppResult<Self> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let capacity = match env::var(name) {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<usize>()
                    .with_context(|| format!("{name} must be a non-negative integer, got `{raw}`"))?,
            ),
            Err(VarError::NotPresent) => None,
            Err(e) => return Err(e).with_context(|| format!("failed to read {name}")),
        };

        let options = Self { capacity };
        options
            .validate()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("invalid {name}"))?;
        Ok(options)
    }
}
