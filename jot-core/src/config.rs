use crate::render::DEFAULT_DATE_FORMAT;
use anyhow::{Context, Result, bail};
use chrono::format::{Item, StrftimeItems};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// File offered when the user leaves the load/save path blank.
    pub journal_file: PathBuf,
    /// How dates are shown when entries are displayed. Default is "%Y-%m-%d".
    pub display_date_format: String,
    /// Date-only layouts accepted at the date prompt and in journal files.
    pub input_date_formats: Vec<String>,
    /// Anchor for `today`, `yesterday` and `tomorrow`.
    pub reference_date: NaiveDate,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_file: Option<PathBuf>,
    display_date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            journal_file: Self::default_journal_file(),
            display_date_format: DEFAULT_DATE_FORMAT.to_string(),
            input_date_formats: Self::default_input_date_formats(),
            reference_date: Local::now().date_naive(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = Self::default();

        let display_date_format = file_config
            .display_date_format
            .unwrap_or(defaults.display_date_format);
        check_date_format("display_date_format", &display_date_format)?;

        let input_date_formats = file_config
            .input_date_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or(defaults.input_date_formats);
        for format in &input_date_formats {
            check_date_format("input_date_formats", format)?;
        }

        Ok(Self {
            journal_file: file_config.journal_file.unwrap_or(defaults.journal_file),
            display_date_format,
            input_date_formats,
            reference_date: defaults.reference_date,
        })
    }

    fn default_input_date_formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()]
    }

    /// Default journal file: `{data_dir}/jot/journal.txt`
    /// - macOS:   `~/Library/Application Support/jot/journal.txt`
    /// - Linux:   `$XDG_DATA_HOME/jot/journal.txt` or `~/.local/share/jot/journal.txt`
    /// - Windows: `%APPDATA%\jot\journal.txt`
    fn default_journal_file() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("jot").join("journal.txt")
        } else {
            PathBuf::from("./journal.txt")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("jot").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("jot").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

/// Rejects strftime strings chrono cannot format, such as `%Q`.
fn check_date_format(key: &str, format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        bail!("invalid {key} {format:?}: unknown or incomplete % specifier");
    }
    Ok(())
}
