//! Output formatting for the seam CLI (table, json)

use clap::ValueEnum;
use colored::Colorize;
use seam_client::{AccessCode, Device, Event};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ASCII table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Context for output rendering
pub struct OutputContext {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputContext {
    pub fn new(format: OutputFormat, no_color: bool, quiet: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { format, quiet }
    }

    /// Print a success message (unless in quiet mode)
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.green());
        }
    }

    /// Print a warning message
    pub fn warn(&self, msg: &str) {
        eprintln!("{}", msg.yellow());
    }

    /// Print an error message
    pub fn error(&self, msg: &str) {
        eprintln!("{}", msg.red());
    }

    /// Print rows in the configured format
    pub fn print<T: Tabled + Serialize>(&self, data: &[T]) {
        match self.format {
            OutputFormat::Table => {
                if data.is_empty() {
                    if !self.quiet {
                        println!("No data");
                    }
                } else {
                    println!("{}", Table::new(data));
                }
            }
            OutputFormat::Json => print_json(&data),
        }
    }

    /// Print a single row in the configured format
    pub fn print_one<T: Tabled + Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Table => println!("{}", Table::new([data])),
            OutputFormat::Json => print_json(data),
        }
    }

    /// Print key-value pairs; JSON mode prints `raw` instead
    pub fn print_kv<T: Serialize>(&self, pairs: &[(&str, String)], raw: &T) {
        match self.format {
            OutputFormat::Table => {
                for (key, value) in pairs {
                    println!("{}: {}", key.bold(), value);
                }
            }
            OutputFormat::Json => print_json(raw),
        }
    }
}

fn print_json<T: Serialize + ?Sized>(data: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(data).unwrap_or_else(|_| "null".to_string())
    );
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

// =============================================================================
// Display types for various commands
// =============================================================================

#[derive(Debug, Tabled, Serialize)]
pub struct DeviceRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Type")]
    pub device_type: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Online")]
    pub online: String,
    #[tabled(rename = "Locked")]
    pub locked: String,
}

impl From<&Device> for DeviceRow {
    fn from(device: &Device) -> Self {
        Self {
            id: device.device_id.clone(),
            device_type: device.device_type.clone(),
            name: or_dash(device.name()),
            online: or_dash(device.is_online()),
            locked: or_dash(device.is_locked()),
        }
    }
}

#[derive(Debug, Tabled, Serialize)]
pub struct AccessCodeRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Type")]
    pub code_type: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Starts")]
    pub starts_at: String,
    #[tabled(rename = "Ends")]
    pub ends_at: String,
}

impl From<&AccessCode> for AccessCodeRow {
    fn from(code: &AccessCode) -> Self {
        Self {
            id: code.access_code_id.clone(),
            name: or_dash(code.name.as_deref()),
            code: or_dash(code.code.as_deref()),
            code_type: or_dash(code.code_type.as_deref()),
            status: or_dash(code.status.as_deref()),
            starts_at: or_dash(code.starts_at.map(|t| t.to_rfc3339())),
            ends_at: or_dash(code.ends_at.map(|t| t.to_rfc3339())),
        }
    }
}

#[derive(Debug, Tabled, Serialize)]
pub struct EventRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Type")]
    pub event_type: String,
    #[tabled(rename = "Device")]
    pub device_id: String,
    #[tabled(rename = "Occurred")]
    pub occurred_at: String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.event_id.clone(),
            event_type: event.event_type.clone(),
            device_id: or_dash(event.device_id.as_deref()),
            occurred_at: or_dash(
                event
                    .occurred_at
                    .or(event.created_at)
                    .map(|t| t.to_rfc3339()),
            ),
        }
    }
}
