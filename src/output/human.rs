//! Human-readable output formatting

use std::fmt::Display;

use crate::engine::{ExecutionResult, ResultData};

pub fn format_human(result: &ExecutionResult) -> String {
    match &result.data {
        ResultData::Queue(report) => {
            let mut output = format!(
                "Bounded Queue\n\
                 -------------\n\
                 Capacity: {}\n\
                 Size:     {}\n\
                 Items:    {}\n\
                 Peek:     {}",
                report.capacity,
                report.size,
                join(&report.items),
                report.peek.as_deref().unwrap_or("(empty)")
            );
            if !report.evicted.is_empty() {
                output.push_str(&format!("\nEvicted:  {}", join(&report.evicted)));
            }
            if !report.popped.is_empty() {
                output.push_str(&format!("\nPopped:   {}", join(&report.popped)));
            }
            output
        }
        ResultData::Stack(report) => {
            let mut output = format!(
                "Tagged Stack (retain tags <= {})\n\
                 ------------\n\
                 Size:     {}\n",
                report.retain, report.size
            );
            if report.items.is_empty() {
                output.push_str("Items:    (empty)");
            } else {
                output.push_str(&format!("{:<8} {}\n", "TAG", "ITEM"));
                output.push_str(&"-".repeat(24));
                for (tag, item) in report.tags.iter().zip(&report.items) {
                    output.push_str(&format!("\n{:<8} {}", tag, item));
                }
            }
            if !report.dropped.is_empty() {
                output.push_str(&format!("\nDropped:  {}", join(&report.dropped)));
            }
            if !report.popped.is_empty() {
                output.push_str(&format!("\nPopped:   {}", join(&report.popped)));
            }
            output
        }
        ResultData::Sorted(report) => {
            let mut output = format!(
                "Sorted Queue ({})\n\
                 ------------\n\
                 Raw:      {}\n\
                 Sorted:   {}\n\
                 Trim({}):  {}",
                if report.descending { "descending" } else { "ascending" },
                join(&report.raw),
                join(&report.sorted),
                report.trim_offset,
                join(&report.trimmed)
            );
            for lookup in &report.lookups {
                output.push_str(&format!(
                    "\nGet({}{}) = {}",
                    lookup.index,
                    if lookup.clamp { "" } else { ", unclamped" },
                    lookup.value
                ));
            }
            output
        }
        ResultData::Env(report) => {
            let mut output = match &report.source {
                Some(source) => format!("Env ({})\n---\n", source),
                None => return "No env file loaded".to_string(),
            };
            if report.entries.is_empty() {
                output.push_str("(no entries)");
            } else {
                let lines: Vec<String> = report
                    .entries
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                output.push_str(&lines.join("\n"));
            }
            output
        }
    }
}

fn join<T: Display>(values: &[T]) -> String {
    if values.is_empty() {
        return "(empty)".to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EnvReport, SortedReport};

    #[test]
    fn test_join() {
        assert_eq!(join(&[1, 2, 3]), "1, 2, 3");
        assert_eq!(join::<i32>(&[]), "(empty)");
    }

    #[test]
    fn test_sorted_report() {
        let result = ExecutionResult {
            data: ResultData::Sorted(SortedReport {
                descending: false,
                raw: vec![3.0, 1.0, 2.0],
                sorted: vec![1.0, 2.0, 3.0],
                lookups: vec![],
                trim_offset: 0,
                trimmed: vec![2.0, 3.0],
            }),
        };

        let output = format_human(&result);
        assert!(output.contains("Raw:      3, 1, 2"));
        assert!(output.contains("Sorted:   1, 2, 3"));
        assert!(output.contains("Trim(0):  2, 3"));
    }

    #[test]
    fn test_env_report_has_no_trailing_newline() {
        let result = ExecutionResult {
            data: ResultData::Env(EnvReport {
                source: Some("./.env".to_string()),
                entries: vec![
                    ("A".to_string(), "1".to_string()),
                    ("B".to_string(), "2".to_string()),
                ],
            }),
        };

        let output = format_human(&result);
        assert!(output.ends_with("A=1\nB=2"));
    }
}
