use crate::events::KnownEvent;
use crate::records::EventRecord;
use crate::templates::Template;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde_json::json;
use std::fmt::Write as _;

/// Table with the shared header style
pub fn create_styled_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

pub fn format_templates_text(templates: &[Template]) -> String {
    let mut table = create_styled_table(&["Template", "Description"]);
    for t in templates {
        table.add_row(vec![
            Cell::new(t.name).fg(Color::Cyan),
            Cell::new(t.description),
        ]);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "\n{} built-in templates. Use `opencode-kit templates show <NAME>` to print one.",
        templates.len()
    );
    out
}

pub fn format_templates_json(templates: &[Template]) -> serde_json::Result<String> {
    let entries: Vec<_> = templates
        .iter()
        .map(|t| json!({ "name": t.name, "description": t.description }))
        .collect();
    serde_json::to_string_pretty(&entries)
}

pub fn format_template_source_json(template: &Template) -> serde_json::Result<String> {
    serde_json::to_string_pretty(template)
}

pub fn format_events_text(events: &[&KnownEvent], patterns: &[String]) -> String {
    let mut out = String::new();

    if events.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            "No known events match:".yellow(),
            patterns.join(" ")
        );
        return out;
    }

    let mut table = create_styled_table(&["Event", "Description"]);
    for e in events {
        table.add_row(vec![
            Cell::new(e.name).fg(Color::Green),
            Cell::new(e.description),
        ]);
    }
    let _ = writeln!(out, "{table}");
    let _ = writeln!(
        out,
        "\n{} events selected by: {}",
        events.len(),
        patterns.join(" ")
    );
    out
}

pub fn format_events_json(events: &[&KnownEvent]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}

/// Selected records, one input line per output line
pub fn format_records_text(records: &[EventRecord]) -> String {
    records.iter().map(|r| format!("{}\n", r.line)).collect()
}

pub fn format_records_json(records: &[EventRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

pub fn format_match_text(event: &str, selected: bool) -> String {
    if selected {
        format!("{} {}\n", "true".green().bold(), event)
    } else {
        format!("{} {}\n", "false".red().bold(), event)
    }
}

pub fn format_match_json(
    event: &str,
    patterns: &[String],
    selected: bool,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({
        "event": event,
        "patterns": patterns,
        "selected": selected,
    }))
}
