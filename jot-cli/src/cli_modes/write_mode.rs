use super::CliModeResult;
use crate::shell::Shell;
use anyhow::Result;
use jot_core::{JournalEntry, dates::parse_user_date, random_prompt};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::debug;

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    /// Shows a prompt, then collects the date and fields of a new entry.
    /// A date that does not parse abandons the entry before anything else is asked.
    pub(crate) fn write_mode(&mut self) -> Result<CliModeResult> {
        let prompt = random_prompt(&mut self.rng);
        self.renderer.print_prompt(&mut self.out, prompt)?;

        let Some(date_input) = self.ask("Enter the date (e.g., 2023-10-21):")? else {
            return Ok(CliModeResult::Exit);
        };
        let date = match parse_user_date(
            &date_input,
            &self.config.input_date_formats,
            self.config.reference_date,
        ) {
            Ok(date) => date,
            Err(e) => {
                debug!(error = %e, "entry abandoned");
                self.renderer.print_error(
                    &mut self.out,
                    "Invalid date format. Please use YYYY-MM-DD.",
                )?;
                return Ok(CliModeResult::Continue);
            }
        };

        let Some(text) = self.ask("Enter your journal entry:")? else {
            return Ok(CliModeResult::Exit);
        };
        let Some(location) = self.ask("Location (optional):")? else {
            return Ok(CliModeResult::Exit);
        };
        let Some(weather) = self.ask("Weather (optional):")? else {
            return Ok(CliModeResult::Exit);
        };
        let Some(mood) = self.ask("Mood (optional):")? else {
            return Ok(CliModeResult::Exit);
        };
        let Some(tags) = self.ask("Tags, separated by commas (optional):")? else {
            return Ok(CliModeResult::Exit);
        };

        let entry = JournalEntry::new(date, text)
            .with_location(&location)
            .with_weather(&weather)
            .with_mood(&mood)
            .with_tags(tags.split(','));
        self.journal.add(entry);

        self.renderer
            .print_info(&mut self.out, "Journal entry added successfully.")?;
        Ok(CliModeResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{mk_shell, output};
    use chrono::NaiveDate;
    use jot_core::prompts::PROMPTS;
    use std::path::PathBuf;

    #[test]
    fn example_entry_is_added_and_displayed() {
        let script = "1\n2023-10-21\nHad a good day\n\n\n\nhappy,tired\n2\n5\n";
        let mut shell = mk_shell(script, PathBuf::from("unused.txt"));
        shell.run().unwrap();

        let journal = shell.journal();
        assert_eq!(journal.len(), 1);
        let entry = &journal.entries()[0];
        assert_eq!(entry.date.date(), NaiveDate::from_ymd_opt(2023, 10, 21).unwrap());
        assert_eq!(entry.location, None);
        assert_eq!(entry.weather, None);
        assert_eq!(entry.mood, None);

        let out = output(&shell);
        assert!(out.contains("Journal entry added successfully."));
        assert!(out.contains("Journal Entries:\n2023-10-21\nHad a good day\nTags: happy, tired\n"));
        assert!(!out.contains("Location:"));
        assert!(!out.contains("Weather:"));
        assert!(!out.contains("Mood:"));
    }

    #[test]
    fn a_prompt_is_shown_before_the_date_question() {
        let mut shell = mk_shell("1\n2023-10-21\nx\n\n\n\n\n5\n", PathBuf::from("unused.txt"));
        shell.run().unwrap();
        let out = output(&shell);

        let date_q = out.find("Enter the date").unwrap();
        let shown = PROMPTS
            .iter()
            .filter_map(|p| out.find(p))
            .collect::<Vec<_>>();
        assert_eq!(shown.len(), 1);
        assert!(shown[0] < date_q);
    }

    #[test]
    fn bad_date_abandons_the_entry() {
        let mut shell = mk_shell("1\n21st of October\n2\n5\n", PathBuf::from("unused.txt"));
        shell.run().unwrap();

        assert!(shell.journal().is_empty());
        let out = output(&shell);
        assert!(out.contains("Invalid date format. Please use YYYY-MM-DD."));
        assert!(!out.contains("Enter your journal entry:"));
        assert!(out.contains("No journal entries yet."));
    }

    #[test]
    fn keywords_and_metadata_are_recorded() {
        let script = "1\nyesterday\nLong walk\nRiverside\nwindy\ncalm\n outdoors , ,dog \n5\n";
        let mut shell = mk_shell(script, PathBuf::from("unused.txt"));
        shell.run().unwrap();

        let entry = &shell.journal().entries()[0];
        assert_eq!(entry.date.date(), NaiveDate::from_ymd_opt(2023, 10, 20).unwrap());
        assert_eq!(entry.text, "Long walk");
        assert_eq!(entry.location.as_deref(), Some("Riverside"));
        assert_eq!(entry.weather.as_deref(), Some("windy"));
        assert_eq!(entry.mood.as_deref(), Some("calm"));
        assert_eq!(entry.tags, vec!["outdoors", "dog"]);
    }

    #[test]
    fn questions_are_asked_in_order() {
        let mut shell = mk_shell("1\n2023-10-21\nx\n\n\n\n\n5\n", PathBuf::from("unused.txt"));
        shell.run().unwrap();
        let out = output(&shell);

        let positions = [
            "Enter your journal entry:",
            "Location (optional):",
            "Weather (optional):",
            "Mood (optional):",
            "Tags, separated by commas (optional):",
        ]
        .map(|q| out.find(q).unwrap());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn input_ending_mid_entry_adds_nothing() {
        let mut shell = mk_shell("1\n2023-10-21\nhalf written\n", PathBuf::from("unused.txt"));
        shell.run().unwrap();
        assert!(shell.journal().is_empty());
        assert!(output(&shell).ends_with("Exiting the program. Goodbye!\n"));
    }
}
