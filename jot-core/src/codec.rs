//! The flat line format used by journal files.
//!
//! One entry per line:
//!
//! ```text
//! date,text,location,weather,mood,tag1;tag2
//! ```
//!
//! Nothing is quoted or escaped. A comma inside `text` shifts every later
//! field one slot to the right when the line is read back.

use crate::dates::{STORED_DATE_FORMAT, parse_timestamp};
use crate::entry::{JournalEntry, non_blank};

pub const FIELD_DELIMITER: char = ',';
pub const TAG_DELIMITER: char = ';';

/// Serializes one entry. Absent fields become empty strings; the line has no
/// trailing newline.
pub fn format_line(entry: &JournalEntry) -> String {
    let date = entry.date.format(STORED_DATE_FORMAT);
    let location = entry.location.as_deref().unwrap_or_default();
    let weather = entry.weather.as_deref().unwrap_or_default();
    let mood = entry.mood.as_deref().unwrap_or_default();
    let tags = entry.tags.join(TAG_DELIMITER.to_string().as_str());
    format!(
        "{date}{d}{text}{d}{location}{d}{weather}{d}{mood}{d}{tags}",
        d = FIELD_DELIMITER,
        text = entry.text,
    )
}

/// Parses one line, or `None` when it has fewer than two fields or the first
/// one is not a date.
pub fn parse_line<S: AsRef<str>>(line: &str, date_formats: &[S]) -> Option<JournalEntry> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 2 {
        return None;
    }

    let date = parse_timestamp(fields[0], date_formats)?;
    let optional = |i: usize| fields.get(i).and_then(|f| non_blank(f));

    Some(JournalEntry {
        date,
        text: fields[1].to_string(),
        location: optional(2),
        weather: optional(3),
        mood: optional(4),
        tags: fields
            .get(5)
            .map(|joined| {
                joined
                    .split(TAG_DELIMITER)
                    .filter_map(non_blank)
                    .collect()
            })
            .unwrap_or_default(),
    })
}

/// True when `entry` holds a value that would not survive [`format_line`] then [`parse_line`].
pub fn has_delimiter_collision(entry: &JournalEntry) -> bool {
    let breaks_line = |s: &str| s.contains(FIELD_DELIMITER) || s.contains('\n') || s.contains('\r');
    breaks_line(entry.text.as_str())
        || [&entry.location, &entry.weather, &entry.mood]
            .into_iter()
            .flatten()
            .any(|s| breaks_line(s.as_str()))
        || entry
            .tags
            .iter()
            .any(|t| breaks_line(t.as_str()) || t.contains(TAG_DELIMITER))
}
