//! Pure text rendering helpers.
//!
//! Entry block:
//!   2023-10-21
//!   Had a good day
//!   Mood: glad
//!   Tags: happy, tired

use crate::entry::JournalEntry;
use std::fmt::Write;

/// Display layout used when none is configured.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Labelled metadata lines for an entry, in display order, skipping absent ones.
pub fn metadata_lines(entry: &JournalEntry) -> Vec<(&'static str, String)> {
    let mut lines = Vec::new();
    let labelled = [
        ("Location", &entry.location),
        ("Weather", &entry.weather),
        ("Mood", &entry.mood),
    ];
    for (label, value) in labelled {
        if let Some(v) = value {
            lines.push((label, v.clone()));
        }
    }
    if !entry.tags.is_empty() {
        lines.push(("Tags", entry.tags.join(", ")));
    }
    lines
}

/// Formats a date according to the user's configuration.
///
/// A layout chrono cannot render falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_date(entry: &JournalEntry, date_format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", entry.date.format(date_format)).is_err() {
        return entry.date.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

/// Render an entry block, newline terminated.
pub fn format_entry_block(entry: &JournalEntry, date_format: &str) -> String {
    let mut block = format!("{}\n{}\n", format_date(entry, date_format), entry.text);
    for (label, value) in metadata_lines(entry) {
        block.push_str(&format!("{label}: {value}\n"));
    }
    block
}

/// Renders every entry in the given order, blocks separated by a blank line.
pub fn format_entries<'a, I>(entries: I, date_format: &str) -> String
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    entries
        .into_iter()
        .map(|e| format_entry_block(e, date_format))
        .collect::<Vec<_>>()
        .join("\n")
}
