//! The core `Journal` store: an in-memory, insertion-ordered list of entries
//! that can be loaded from and saved to a flat journal file.

use crate::codec::{format_line, has_delimiter_collision, parse_line};
use crate::config::Config;
use crate::entry::JournalEntry;
use crate::error::JournalError;
use crate::render::format_entries;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Outcome of a successful [`Journal::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Entries appended to the store.
    pub loaded: usize,
    /// Non-blank lines that were not a valid entry.
    pub skipped: usize,
}

/// The central struct for all journal operations.
///
/// Entries stay in the order they were added or loaded. Nothing is ever
/// removed during a session.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    input_date_formats: Vec<String>,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    /// An empty journal that reads the default date layouts.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// An empty journal that reads the date layouts from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            entries: Vec::new(),
            input_date_formats: config.input_date_formats.clone(),
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `entry` after every existing one.
    pub fn add(&mut self, entry: JournalEntry) -> &JournalEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Appends every valid line of the file at `path`.
    ///
    /// The whole file is read before anything is appended, so a failed read
    /// leaves the journal untouched. Lines with fewer than two fields or an
    /// unreadable date are skipped and counted in the returned [`LoadReport`].
    ///
    /// # Errors
    ///
    /// [`JournalError::NotFound`] when `path` does not exist,
    /// [`JournalError::Io`] for any other read failure.
    pub fn load(&mut self, path: &Path) -> Result<LoadReport, JournalError> {
        let content = fs::read_to_string(path)
            .map_err(|e| JournalError::from_io(path.to_path_buf(), e))?;

        let mut report = LoadReport::default();
        for (n, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(line, &self.input_date_formats) {
                Some(entry) => {
                    self.entries.push(entry);
                    report.loaded += 1;
                }
                None => {
                    debug!(path = %path.display(), line = n + 1, "skipping malformed journal line");
                    report.skipped += 1;
                }
            }
        }

        debug!(
            path = %path.display(),
            loaded = report.loaded,
            skipped = report.skipped,
            "loaded journal file"
        );
        Ok(report)
    }

    /// Overwrites `path` with one line per entry and returns how many were written.
    ///
    /// Values containing the field delimiter are written as-is; they will not
    /// read back into the same fields.
    ///
    /// # Errors
    ///
    /// [`JournalError::Io`] if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> Result<usize, JournalError> {
        let io_err = |e| JournalError::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            if has_delimiter_collision(entry) {
                warn!(
                    path = %path.display(),
                    date = %entry.date,
                    "entry contains a delimiter and will not load back unchanged"
                );
            }
            writeln!(writer, "{}", format_line(entry)).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)?;

        debug!(path = %path.display(), written = self.entries.len(), "saved journal file");
        Ok(self.entries.len())
    }

    /// Every entry rendered in store order.
    pub fn display(&self, date_format: &str) -> String {
        format_entries(&self.entries, date_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::tempdir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn mk_journal_with_default() -> (Journal, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("journal.txt"));
        (Journal::with_config(&config), tmp)
    }

    #[test]
    fn display_follows_insertion_order() {
        let (mut j, _tmp) = mk_journal_with_default();
        j.add(JournalEntry::new(at(2024, 5, 3, 9), "third of may"));
        j.add(JournalEntry::new(at(2023, 1, 1, 9), "new year"));
        j.add(JournalEntry::new(at(2024, 1, 2, 9), "second of jan"));

        let shown = j.display("%Y-%m-%d");
        let a = shown.find("third of may").unwrap();
        let b = shown.find("new year").unwrap();
        let c = shown.find("second of jan").unwrap();
        assert!(a < b && b < c);
        assert_eq!(j.len(), 3);
    }

    #[test]
    fn example_entry_display() {
        let (mut j, _tmp) = mk_journal_with_default();
        let date = at(2023, 10, 21, 0);
        let added = j.add(
            JournalEntry::new(date, "Had a good day")
                .with_location("")
                .with_weather("")
                .with_mood("")
                .with_tags("happy,tired".split(',')),
        );
        assert_eq!(added.tags, vec!["happy", "tired"]);

        let shown = j.display("%Y-%m-%d");
        assert_eq!(shown, "2023-10-21\nHad a good day\nTags: happy, tired\n");
    }

    #[test]
    fn save_then_load_round_trips() {
        let (mut j, tmp) = mk_journal_with_default();
        j.add(
            JournalEntry::new(at(2023, 10, 21, 8), "Had a good day")
                .with_location("Porto")
                .with_weather("rain")
                .with_mood("content")
                .with_tags(["happy", "tired", "family"]),
        );
        j.add(JournalEntry::new(at(2023, 10, 22, 23), "Short one"));
        j.add(JournalEntry::new(at(2023, 10, 23, 12), "Only mood").with_mood("meh"));
        let typed = crate::dates::parse_user_date(
            "2023-10-24T10:00:00.250",
            &["%Y-%m-%d"],
            NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
        )
        .unwrap();
        j.add(JournalEntry::new(typed, "Sub-second"));

        let path = tmp.path().join("journal.txt");
        assert_eq!(j.save(&path).unwrap(), 4);
        assert!(fs::read_to_string(&path).unwrap().contains("2023-10-24T10:00:00.250,Sub-second"));

        let mut fresh = Journal::new();
        let report = fresh.load(&path).unwrap();
        assert_eq!(report, LoadReport { loaded: 4, skipped: 0 });
        assert_eq!(fresh.entries(), j.entries());
    }

    #[test]
    fn load_appends_to_existing_entries() {
        let (mut j, tmp) = mk_journal_with_default();
        let path = tmp.path().join("journal.txt");
        fs::write(&path, "2023-10-21T00:00:00,from file,,,,\n").unwrap();

        j.add(JournalEntry::new(at(2024, 1, 1, 0), "in memory"));
        j.load(&path).unwrap();

        assert_eq!(j.len(), 2);
        assert_eq!(j.entries()[0].text, "in memory");
        assert_eq!(j.entries()[1].text, "from file");
    }

    #[test]
    fn loading_missing_file_reports_not_found() {
        let (mut j, tmp) = mk_journal_with_default();
        j.add(JournalEntry::new(at(2024, 1, 1, 0), "keep me"));

        let err = j.load(&tmp.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, JournalError::NotFound { .. }));
        assert_eq!(j.len(), 1);
    }

    #[test]
    fn loading_a_directory_is_io_error() {
        let (mut j, tmp) = mk_journal_with_default();
        let err = j.load(tmp.path()).unwrap_err();
        assert!(matches!(err, JournalError::Io { .. }));
        assert!(j.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (mut j, tmp) = mk_journal_with_default();
        let path = tmp.path().join("journal.txt");
        let content = "\
2023-10-21T10:00:00,good line,,,,a;b
only-one-field
not a date,some text

21/10/2023,date-only european,Home
";
        fs::write(&path, content).unwrap();

        let report = j.load(&path).unwrap();
        assert_eq!(report, LoadReport { loaded: 2, skipped: 2 });
        assert_eq!(j.entries()[0].tags, vec!["a", "b"]);
        assert_eq!(j.entries()[1].location.as_deref(), Some("Home"));
    }

    #[test]
    fn empty_journal_round_trips_to_empty() {
        let (j, tmp) = mk_journal_with_default();
        let path = tmp.path().join("empty.txt");
        assert_eq!(j.save(&path).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");

        let mut fresh = Journal::new();
        assert_eq!(fresh.load(&path).unwrap().loaded, 0);
        assert!(fresh.is_empty());
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (mut j, tmp) = mk_journal_with_default();
        let path = tmp.path().join("journal.txt");
        fs::write(&path, "old,stuff\nmore,old\nlines,here\n").unwrap();

        j.add(JournalEntry::new(at(2023, 10, 21, 0), "new"));
        j.save(&path).unwrap();

        let s = fs::read_to_string(&path).unwrap();
        assert_eq!(s, "2023-10-21T00:00:00,new,,,,\n");
    }

    #[test]
    fn save_into_missing_directory_is_io_error() {
        let (j, tmp) = mk_journal_with_default();
        let err = j
            .save(&tmp.path().join("no").join("such").join("dir.txt"))
            .unwrap_err();
        assert!(matches!(err, JournalError::Io { .. }));
    }
}
