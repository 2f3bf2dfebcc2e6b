//! JSON output formatting

use crate::engine::{ExecutionResult, ResultData};
use serde_json::{json, Value};

pub fn format_json(result: &ExecutionResult) -> String {
    let data: Value = match &result.data {
        ResultData::Queue(report) => serde_json::to_value(report).unwrap_or(json!(null)),
        ResultData::Stack(report) => serde_json::to_value(report).unwrap_or(json!(null)),
        ResultData::Sorted(report) => serde_json::to_value(report).unwrap_or(json!(null)),
        ResultData::Env(report) => serde_json::to_value(report).unwrap_or(json!(null)),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
