//! `.env` file loading
//!
//! The format is line based:
//!
//! ```text
//! # full-line comment
//! // also a comment
//! /*
//! block comment, the markers must sit alone on their lines
//! */
//! KEY=value kept verbatim after the first '='
//! ```
//!
//! Keys are trimmed, values are not. Lines without `=` are ignored and a
//! later assignment to the same key wins.

mod value;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, RollbufError};

pub use value::EnvValue;

/// File read by [`EnvData::load_default`]
pub const DEFAULT_ENV_FILE: &str = "./.env";

/// Callback invoked with the error behind a defaulted lookup
pub type ErrorConsumer = Box<dyn Fn(&RollbufError)>;

/// Key/value pairs parsed from an `.env` file
pub struct EnvData {
    source: String,
    config: HashMap<String, String>,
    error_consumer: Option<ErrorConsumer>,
}

/// Staging area handed to [`EnvData::hook`]
#[derive(Debug, Default)]
pub struct EnvHookSet {
    staged: HashMap<String, String>,
}

impl EnvHookSet {
    /// Stage a value; it is only applied if the hook accepts its changes
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.staged.insert(name.into(), value.into());
    }
}

impl EnvData {
    /// Load and parse the file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| RollbufError::EnvLoad {
            path: source.clone(),
            reason: e.to_string(),
        })?;

        let env = Self::parse_named(&content, source)?;
        debug!(path = %env.source, keys = env.config.len(), "loaded env file");
        Ok(env)
    }

    /// Load `./.env`
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_ENV_FILE)
    }

    /// Parse `.env` content held in memory
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_named(content, "<inline>".to_string())
    }

    fn parse_named(content: &str, source: String) -> Result<Self> {
        let mut config = HashMap::new();
        let mut in_block_comment = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
                continue;
            }

            if in_block_comment {
                if trimmed == "*/" {
                    in_block_comment = false;
                }
                continue;
            } else if trimmed == "/*" {
                in_block_comment = true;
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                config.insert(key.trim().to_string(), value.to_string());
            }
        }

        if in_block_comment {
            return Err(RollbufError::UnterminatedComment(source));
        }

        Ok(Self {
            source,
            config,
            error_consumer: None,
        })
    }

    /// Where the data was loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn config(&self) -> &HashMap<String, String> {
        &self.config
    }

    /// Register a callback that sees every error swallowed by [`get_or`](Self::get_or)
    pub fn set_error_consumer<F>(&mut self, consumer: F)
    where
        F: Fn(&RollbufError) + 'static,
    {
        self.error_consumer = Some(Box::new(consumer));
    }

    /// Let `hook` stage extra values and merge them if it returns `true`
    ///
    /// Staged values override existing keys. When the hook returns `false`
    /// nothing is applied and [`RollbufError::HookRejected`] is returned.
    pub fn hook<F>(&mut self, hook: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut EnvHookSet) -> bool,
    {
        let mut set = EnvHookSet::default();
        if !hook(&mut set) {
            return Err(RollbufError::HookRejected);
        }

        self.config.extend(set.staged);
        Ok(self)
    }

    pub fn get_string(&self, name: &str) -> Result<String> {
        self.config
            .get(name)
            .cloned()
            .ok_or_else(|| RollbufError::MissingKey(name.to_string()))
    }

    /// Read and convert a value
    pub fn get<T: EnvValue>(&self, name: &str) -> Result<T> {
        let raw = self.get_string(name)?;
        T::parse_env(&raw).map_err(|reason| RollbufError::InvalidValue {
            key: name.to_string(),
            reason,
        })
    }

    /// Read and convert a value, falling back to `default` on any error
    pub fn get_or<T: EnvValue>(&self, name: &str, default: T) -> T {
        match self.get(name) {
            Ok(value) => value,
            Err(e) => {
                debug!(key = name, error = %e, "using default for env key");
                if let Some(consumer) = &self.error_consumer {
                    consumer(&e);
                }
                default
            }
        }
    }
}

impl fmt::Debug for EnvData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvData")
            .field("source", &self.source)
            .field("config", &self.config)
            .field("error_consumer", &self.error_consumer.is_some())
            .finish()
    }
}
