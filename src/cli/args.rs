//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Overrides;
use crate::engine::Command;

#[derive(Parser)]
#[command(name = "rollbuf")]
#[command(author, version, about = "Exercise bounded and lazily sorted containers", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read settings from this .env file instead of ./.env
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Push items through a capacity-bounded FIFO queue
    Queue {
        /// Maximum number of items kept
        #[arg(long, short, env = "ROLLBUF_CAPACITY")]
        capacity: Option<usize>,

        /// Number of items to pop after pushing
        #[arg(long, default_value = "0")]
        pop: usize,

        /// Items to push, oldest first
        items: Vec<String>,
    },

    /// Push items onto a stack that keeps the first N pushes
    Stack {
        /// Highest push counter that is retained
        #[arg(long, short, env = "ROLLBUF_RETAIN")]
        retain: Option<u64>,

        /// Number of items to pop after pushing
        #[arg(long, default_value = "0")]
        pop: usize,

        /// Items to push
        items: Vec<String>,
    },

    /// Push numbers into a lazily sorted queue and query it
    Sorted {
        /// Sort largest first
        #[arg(long)]
        desc: bool,

        /// Look up a position in the sorted view (negative counts from the end)
        #[arg(long = "index", short, allow_negative_numbers = true)]
        indices: Vec<isize>,

        /// Reject out-of-range lookups instead of clamping them
        #[arg(long)]
        unclamped: bool,

        /// Trim offset for the windowed view
        #[arg(long, env = "ROLLBUF_TRIM")]
        trim: Option<usize>,

        /// Numbers to push
        #[arg(allow_negative_numbers = true)]
        items: Vec<f64>,
    },

    /// Show entries from the loaded .env file
    Env {
        /// Only show these keys
        keys: Vec<String>,
    },
}

impl Args {
    /// Settings given on the command line or through process environment
    pub fn overrides(&self) -> Overrides {
        let mut overrides = Overrides {
            json: self.json,
            ..Overrides::default()
        };
        match &self.command {
            SubCommand::Queue { capacity, .. } => overrides.capacity = *capacity,
            SubCommand::Stack { retain, .. } => overrides.retain = *retain,
            SubCommand::Sorted { trim, .. } => overrides.trim = *trim,
            SubCommand::Env { .. } => {}
        }
        overrides
    }

    /// The engine command this invocation asks for
    pub fn to_command(&self) -> Command {
        match &self.command {
            SubCommand::Queue { items, pop, .. } => Command::Queue {
                items: items.clone(),
                pop: *pop,
            },
            SubCommand::Stack { items, pop, .. } => Command::Stack {
                items: items.clone(),
                pop: *pop,
            },
            SubCommand::Sorted {
                desc,
                indices,
                unclamped,
                items,
                ..
            } => Command::Sorted {
                items: items.clone(),
                descending: *desc,
                lookups: indices.clone(),
                unclamped: *unclamped,
            },
            SubCommand::Env { keys } => Command::Env { keys: keys.clone() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sorted_with_negative_values() {
        let args = Args::try_parse_from([
            "rollbuf", "sorted", "--index", "-1", "-i", "0", "--trim", "1", "3", "-2.5", "4",
        ])
        .unwrap();

        assert_eq!(args.overrides().trim, Some(1));
        assert_eq!(
            args.to_command(),
            Command::Sorted {
                items: vec![3.0, -2.5, 4.0],
                descending: false,
                lookups: vec![-1, 0],
                unclamped: false,
            }
        );
    }

    #[test]
    fn test_parse_queue_global_flags() {
        let args = Args::try_parse_from(["rollbuf", "queue", "-c", "2", "a", "b", "--json"]).unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.capacity, Some(2));
        assert!(overrides.json);
        assert_eq!(
            args.to_command(),
            Command::Queue {
                items: vec!["a".to_string(), "b".to_string()],
                pop: 0,
            }
        );
    }
}
