//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use skillbridge_entity::notification::NotificationRecord;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One feed entry flattened for table output.
#[derive(Debug, Tabled)]
pub struct ActivityRow {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "Kind")]
    pub kind: String,
    #[tabled(rename = "Status")]
    pub status: String,
    #[tabled(rename = "Icon")]
    pub icon: String,
    #[tabled(rename = "Actor")]
    pub actor: String,
    #[tabled(rename = "Opportunity")]
    pub opportunity: String,
    #[tabled(rename = "Read")]
    pub read: String,
    #[tabled(rename = "Created")]
    pub created: String,
}

impl From<&NotificationRecord> for ActivityRow {
    fn from(r: &NotificationRecord) -> Self {
        Self {
            id: r.id.to_string(),
            kind: r.event_kind.to_string(),
            status: r.status_label.to_string(),
            icon: r.icon_kind.to_string(),
            actor: r.actor_display_name.clone(),
            opportunity: r.related_opportunity_title.clone().unwrap_or_default(),
            read: if r.is_read { "yes" } else { "no" }.to_string(),
            created: r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Print activities in the selected format
pub fn print_activities(items: &[NotificationRecord], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No activities found.");
            } else {
                let rows: Vec<ActivityRow> = items.iter().map(ActivityRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => print_json(items),
    }
}

/// Print a single activity in the selected format
pub fn print_activity(item: &NotificationRecord, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new([ActivityRow::from(item)])),
        OutputFormat::Json => print_json(item),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    eprintln!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<16} {}", format!("{key}:"), value);
}
