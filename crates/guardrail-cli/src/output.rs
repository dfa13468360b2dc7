//! Rendering of command results.
//!
//! Results go to stdout in the selected format; status lines (`✓`, `⚠`, `✗`)
//! always go to stderr so `-f json` output stays machine-readable.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One `section.key = value` line of a settings listing.
#[derive(Debug, Serialize, Tabled)]
pub struct SettingRow {
    /// Dotted key path
    #[tabled(rename = "Key")]
    pub key: String,
    /// Rendered value
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Print result rows: a table, or a JSON array.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("No events."),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(&rows, "[]"),
    }
}

/// Print a nested settings object: a key/value table, or the JSON document.
pub fn print_settings<T: Serialize>(settings: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows = serde_json::to_value(settings)
                .map(|value| setting_rows(&value))
                .unwrap_or_default();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => print_json(settings, "{}"),
    }
}

fn print_json<T: Serialize + ?Sized>(item: &T, fallback: &str) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{json}"),
        Err(_) => println!("{fallback}"),
    }
}

/// Flatten a JSON object into dotted key/value rows, in document order.
pub fn setting_rows(value: &Value) -> Vec<SettingRow> {
    let mut rows = Vec::new();
    flatten_into(&mut rows, String::new(), value);
    rows
}

fn flatten_into(rows: &mut Vec<SettingRow>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(rows, path, child);
            }
        }
        Value::Null => rows.push(SettingRow {
            key: prefix,
            value: "(unset)".to_string(),
        }),
        Value::String(s) => rows.push(SettingRow {
            key: prefix,
            value: s.clone(),
        }),
        other => rows.push(SettingRow {
            key: prefix,
            value: other.to_string(),
        }),
    }
}

/// Print a success line
pub fn print_success(msg: &str) {
    eprintln!("✓ {msg}");
}

/// Print a warning line
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

/// Print an error line
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}
