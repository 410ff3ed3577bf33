use clap::Parser;
use std::path::PathBuf;

use crate::render::ColorMode;

/// jot — A prompted journal that lives in a plain text file
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Journal file offered when the load/save path is left blank.
    /// Overrides `journal_file` from the config file.
    #[arg(long, env = "JOT_FILE")]
    pub file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log debug details to stderr.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_is_a_plain_session() {
        let cli = Cli::try_parse_from(["jot"]).unwrap();
        assert!(matches!(cli.color, ColorMode::Auto));
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::try_parse_from(["jot", "--file", "/tmp/j.txt", "--color", "never", "-v"])
            .unwrap();
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("/tmp/j.txt")));
        assert!(matches!(cli.color, ColorMode::Never));
        assert!(cli.verbose);
    }
}
