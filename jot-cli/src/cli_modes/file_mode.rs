use super::CliModeResult;
use crate::shell::Shell;
use anyhow::Result;
use jot_core::JournalError;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    pub(crate) fn load_mode(&mut self) -> Result<CliModeResult> {
        let Some(path) = self.ask_path("Enter the file path to load journal entries from")? else {
            return Ok(CliModeResult::Exit);
        };

        match self.journal.load(&path) {
            Ok(report) => {
                let mut message =
                    format!("Loaded {} entries from {}.", report.loaded, path.display());
                if report.skipped > 0 {
                    message.push_str(&format!(" Skipped {} malformed lines.", report.skipped));
                }
                self.renderer.print_info(&mut self.out, &message)?;
            }
            Err(JournalError::NotFound { .. }) => {
                self.renderer.print_error(
                    &mut self.out,
                    &format!(
                        "File not found: {}. Journal entries were not loaded.",
                        path.display()
                    ),
                )?;
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.renderer.print_error(
                    &mut self.out,
                    &format!("An error occurred while loading journal entries: {e}"),
                )?;
            }
        }
        Ok(CliModeResult::Continue)
    }

    pub(crate) fn save_mode(&mut self) -> Result<CliModeResult> {
        let Some(path) = self.ask_path("Enter the file path to save journal entries")? else {
            return Ok(CliModeResult::Exit);
        };

        match self.journal.save(&path) {
            Ok(written) => {
                self.renderer.print_info(
                    &mut self.out,
                    &format!("Saved {written} entries to {}.", path.display()),
                )?;
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.renderer.print_error(
                    &mut self.out,
                    &format!("An error occurred while saving journal entries: {e}"),
                )?;
            }
        }
        Ok(CliModeResult::Continue)
    }

    /// Asks for a path; a blank answer means the configured journal file.
    fn ask_path(&mut self, question: &str) -> Result<Option<PathBuf>> {
        let question = format!(
            "{question} (leave blank for {}):",
            self.config.journal_file.display()
        );
        let answer = self.ask(&question)?;
        Ok(answer.map(|a| {
            let a = a.trim();
            if a.is_empty() {
                self.config.journal_file.clone()
            } else {
                PathBuf::from(a)
            }
        }))
    }
}
