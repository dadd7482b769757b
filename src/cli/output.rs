//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::domain::models::{RunMode, RunSummary, SeenRecord};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

#[derive(Debug, Serialize)]
pub struct SeenListOutput {
    pub records: Vec<SeenRecord>,
}

impl CommandOutput for SeenListOutput {
    fn to_human(&self) -> String {
        if self.records.is_empty() {
            return "No issues recorded yet.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("ID").add_attribute(Attribute::Bold),
                Cell::new("Number").add_attribute(Attribute::Bold),
                Cell::new("Recorded").add_attribute(Attribute::Bold),
            ]);

        for record in &self.records {
            let recorded = record
                .created_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string());
            table.add_row(vec![
                Cell::new(record.id),
                Cell::new(format!("#{}", record.number)),
                Cell::new(recorded),
            ]);
        }

        let noun = if self.records.len() == 1 { "issue" } else { "issues" };
        format!("{table}\n\n{} {noun} recorded", self.records.len())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "records": self.records, "count": self.records.len() })
    }
}

#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub mode: RunMode,
    pub summary: RunSummary,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let s = &self.summary;
        let verb = match self.mode {
            RunMode::Live => "announced",
            RunMode::Silent => "recorded without posting",
            RunMode::Dry => "would announce",
        };
        let done = if self.mode.posts() { s.announced } else { s.new };
        format!(
            "{} new of {} fetched, {done} {verb}, {} already seen, {} failed",
            s.new, s.fetched, s.already_seen, s.failed
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "mode": self.mode, "summary": self.summary })
    }
}
