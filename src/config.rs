//! Runtime settings
//!
//! Settings are resolved from, in decreasing priority: command-line flags
//! (which clap already merges with process environment variables), the
//! `.env` file, and built-in defaults.

use std::path::Path;

use tracing::debug;

use crate::collections::DEFAULT_CAPACITY;
use crate::env::{EnvData, EnvValue, DEFAULT_ENV_FILE};
use crate::error::{Result, RollbufError};
use crate::output::OutputFormat;

pub const CAPACITY_KEY: &str = "ROLLBUF_CAPACITY";
pub const RETAIN_KEY: &str = "ROLLBUF_RETAIN";
pub const TRIM_KEY: &str = "ROLLBUF_TRIM";
pub const JSON_KEY: &str = "ROLLBUF_JSON";

/// Default number of entries a tagged stack keeps
pub const DEFAULT_RETAIN: u64 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Capacity of bounded queues
    pub capacity: usize,
    /// Highest push counter a tagged stack retains
    pub retain: u64,
    /// Offset passed to the sorted queue's trim
    pub trim: usize,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            retain: DEFAULT_RETAIN,
            trim: 0,
            output_format: OutputFormat::Human,
        }
    }
}

/// Values given explicitly on the command line or in the process environment
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub capacity: Option<usize>,
    pub retain: Option<u64>,
    pub trim: Option<usize>,
    pub json: bool,
}

impl Settings {
    /// Layer `.env` values and explicit overrides on top of the defaults
    pub fn resolve(env: Option<&EnvData>, overrides: &Overrides) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(env) = env {
            if let Some(capacity) = optional(env, CAPACITY_KEY)? {
                settings.capacity = capacity;
            }
            if let Some(retain) = optional(env, RETAIN_KEY)? {
                settings.retain = retain;
            }
            if let Some(trim) = optional(env, TRIM_KEY)? {
                settings.trim = trim;
            }
            if let Some(true) = optional::<bool>(env, JSON_KEY)? {
                settings.output_format = OutputFormat::Json;
            }
        }

        if let Some(capacity) = overrides.capacity {
            settings.capacity = capacity;
        }
        if let Some(retain) = overrides.retain {
            settings.retain = retain;
        }
        if let Some(trim) = overrides.trim {
            settings.trim = trim;
        }
        if overrides.json {
            settings.output_format = OutputFormat::Json;
        }

        if settings.capacity == 0 {
            return Err(RollbufError::InvalidCapacity(settings.capacity));
        }

        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}

/// Read a key that may be absent; a present but malformed value is an error
fn optional<T: EnvValue>(env: &EnvData, key: &str) -> Result<Option<T>> {
    if !env.config().contains_key(key) {
        return Ok(None);
    }
    env.get(key).map(Some)
}

/// Load the `.env` file to configure from
///
/// An explicitly named file must exist. Without one, `./.env` is used when
/// present and silently skipped otherwise.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<EnvData>> {
    match path {
        Some(path) => EnvData::load(path).map(Some),
        None if Path::new(DEFAULT_ENV_FILE).is_file() => EnvData::load_default().map(Some),
        None => {
            debug!("no {} file, using defaults", DEFAULT_ENV_FILE);
            Ok(None)
        }
    }
}
