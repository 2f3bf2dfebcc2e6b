//! Command executor
//!
//! Runs a [`Command`] against freshly built containers and collects what
//! happened into a serializable report.

use serde::Serialize;
use tracing::debug;

use crate::collections::{BoundedQueue, LazySortedQueue, TaggedFilterStack};
use crate::config::Settings;
use crate::env::EnvData;
use crate::error::{Result, RollbufError};
use crate::util::{self, float_cmp};

/// A container exercise requested by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Push items through a bounded queue, then pop `pop` of them
    Queue { items: Vec<String>, pop: usize },
    /// Push items onto a counter-tagged stack, then pop `pop` of them
    Stack { items: Vec<String>, pop: usize },
    /// Push numbers into a sorted queue and look up positions in it
    Sorted {
        items: Vec<f64>,
        descending: bool,
        lookups: Vec<isize>,
        unclamped: bool,
    },
    /// Show the loaded `.env` entries, or only `keys` when given
    Env { keys: Vec<String> },
}

/// Settings and loaded configuration a command runs with
#[derive(Debug, Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub settings: &'a Settings,
    pub env: Option<&'a EnvData>,
}

/// Result of command execution
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub data: ResultData,
}

#[derive(Debug, Clone)]
pub enum ResultData {
    Queue(QueueReport),
    Stack(StackReport),
    Sorted(SortedReport),
    Env(EnvReport),
}

/// State of a bounded queue after a run
#[derive(Debug, Clone, Serialize)]
pub struct QueueReport {
    pub capacity: usize,
    pub size: usize,
    /// Remaining entries, oldest first
    pub items: Vec<String>,
    pub peek: Option<String>,
    /// Entries pushed out by later pushes, oldest first
    pub evicted: Vec<String>,
    pub popped: Vec<String>,
}

/// State of a tagged stack after a run
#[derive(Debug, Clone, Serialize)]
pub struct StackReport {
    pub retain: u64,
    pub size: usize,
    pub items: Vec<String>,
    /// Push counter stored with each remaining entry
    pub tags: Vec<u64>,
    /// Items filtered out at push time
    pub dropped: Vec<String>,
    pub popped: Vec<String>,
}

/// A single lookup into the sorted view
#[derive(Debug, Clone, Serialize)]
pub struct Lookup {
    pub index: isize,
    pub clamp: bool,
    pub value: f64,
}

/// Views over a sorted queue
#[derive(Debug, Clone, Serialize)]
pub struct SortedReport {
    pub descending: bool,
    pub raw: Vec<f64>,
    pub sorted: Vec<f64>,
    pub lookups: Vec<Lookup>,
    pub trim_offset: usize,
    pub trimmed: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvReport {
    pub source: Option<String>,
    pub entries: Vec<(String, String)>,
}

/// Execute a command with the given context
pub fn execute_command(cmd: &Command, ctx: ExecutionContext<'_>) -> Result<ExecutionResult> {
    let data = match cmd {
        Command::Queue { items, pop } => ResultData::Queue(run_queue(items, *pop, ctx.settings)?),
        Command::Stack { items, pop } => ResultData::Stack(run_stack(items, *pop, ctx.settings)),
        Command::Sorted {
            items,
            descending,
            lookups,
            unclamped,
        } => ResultData::Sorted(run_sorted(items, *descending, lookups, *unclamped, ctx.settings)?),
        Command::Env { keys } => ResultData::Env(run_env(keys, ctx.env)?),
    };

    Ok(ExecutionResult { data })
}

fn run_queue(items: &[String], pop: usize, settings: &Settings) -> Result<QueueReport> {
    let mut queue = BoundedQueue::with_capacity(settings.capacity)?;
    for item in items {
        queue.push(item.clone());
    }

    let evicted = items[..items.len() - queue.size()].to_vec();
    debug!(capacity = queue.capacity(), evicted = evicted.len(), "filled bounded queue");

    let popped: Vec<String> = (0..pop).map_while(|_| queue.pop()).collect();

    Ok(QueueReport {
        capacity: queue.capacity(),
        size: queue.size(),
        items: queue.to_vec(),
        peek: queue.peek().cloned(),
        evicted,
        popped,
    })
}

fn run_stack(items: &[String], pop: usize, settings: &Settings) -> StackReport {
    let retain = settings.retain;
    let mut counter = 0u64;
    let mut stack = TaggedFilterStack::new(
        move || {
            counter += 1;
            counter
        },
        move |tag: &u64| *tag <= retain,
    );

    let mut dropped = Vec::new();
    for item in items {
        let before = stack.size();
        if stack.push(item.clone()) <= before {
            dropped.push(item.clone());
        }
    }
    debug!(retain, dropped = dropped.len(), "filled tagged stack");

    let popped: Vec<String> = (0..pop).map_while(|_| stack.pop()).collect();

    StackReport {
        retain,
        size: stack.size(),
        items: stack.data(),
        tags: stack.entries().iter().map(|entry| entry.tag).collect(),
        dropped,
        popped,
    }
}

fn run_sorted(
    items: &[f64],
    descending: bool,
    lookups: &[isize],
    unclamped: bool,
    settings: &Settings,
) -> Result<SortedReport> {
    let mut queue = if descending {
        LazySortedQueue::new(|a: &f64, b: &f64| float_cmp(b, a))
    } else {
        LazySortedQueue::new(float_cmp)
    };
    for item in items {
        queue.push(*item);
    }

    let clamp = !unclamped;
    let lookups = lookups
        .iter()
        .map(|&index| -> Result<Lookup> {
            let value = queue.try_get_with(index, clamp).ok_or_else(|| {
                RollbufError::InvalidInput(format!(
                    "index {} is out of range for {} items",
                    index,
                    queue.len()
                ))
            })?;
            Ok(Lookup { index, clamp, value })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(items = queue.len(), lookups = lookups.len(), "queried sorted queue");

    Ok(SortedReport {
        descending,
        raw: queue.raw(),
        sorted: queue.sorted(),
        lookups,
        trim_offset: settings.trim,
        trimmed: queue.trim(settings.trim),
    })
}

fn run_env(keys: &[String], env: Option<&EnvData>) -> Result<EnvReport> {
    let Some(env) = env else {
        if let Some(key) = keys.first() {
            return Err(RollbufError::MissingKey(key.clone()));
        }
        return Ok(EnvReport {
            source: None,
            entries: Vec::new(),
        });
    };

    let entries = if keys.is_empty() {
        let mut entries: Vec<(String, String)> = env
            .config()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort();
        entries
    } else {
        let unique = util::merge_unique_slices(&[keys]);
        unique
            .into_iter()
            .map(|key| env.get_string(&key).map(|value| (key, value)))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(EnvReport {
        source: Some(env.source().to_string()),
        entries,
    })
}
