//! Execution engine for Rollbuf commands

pub mod executor;

pub use executor::{
    execute_command, Command, EnvReport, ExecutionContext, ExecutionResult, Lookup, QueueReport,
    ResultData, SortedReport, StackReport,
};
