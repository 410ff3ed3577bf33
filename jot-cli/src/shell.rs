use crate::{cli_modes::CliModeResult, menu::MenuChoice, render::Renderer};
use anyhow::Result;
use jot_core::{Config, Journal};
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

/// The interactive read-menu-dispatch loop.
///
/// Generic over its input, output and random source so a whole session can be
/// scripted.
pub struct Shell<R, W, G> {
    pub(crate) input: R,
    pub(crate) out: W,
    pub(crate) rng: G,
    pub(crate) renderer: Renderer,
    pub(crate) config: Config,
    pub(crate) journal: Journal,
}

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    pub fn new(input: R, out: W, rng: G, renderer: Renderer, config: Config) -> Self {
        let journal = Journal::with_config(&config);
        Self {
            input,
            out,
            rng,
            renderer,
            config,
            journal,
        }
    }

    /// Runs until the user picks Exit or the input ends.
    pub fn run(&mut self) -> Result<()> {
        self.renderer
            .print_heading(&mut self.out, "Welcome to the Journal Program!")?;

        loop {
            self.renderer
                .print_menu(&mut self.out, &MenuChoice::items())?;

            let Some(choice) = self.read_line()? else {
                break;
            };
            let result = match MenuChoice::from_str(choice.trim()) {
                Ok(MenuChoice::Write) => self.write_mode()?,
                Ok(MenuChoice::Display) => self.display_mode()?,
                Ok(MenuChoice::Load) => self.load_mode()?,
                Ok(MenuChoice::Save) => self.save_mode()?,
                Ok(MenuChoice::Exit) => CliModeResult::Exit,
                Err(_) => {
                    debug!(input = %choice.trim(), "unrecognized menu choice");
                    self.renderer
                        .print_error(&mut self.out, "Invalid choice. Please try again.")?;
                    CliModeResult::Continue
                }
            };
            if let CliModeResult::Exit = result {
                break;
            }
        }

        self.renderer
            .print_info(&mut self.out, "Exiting the program. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Prints `question` and reads the answer. `None` once the input is exhausted.
    pub(crate) fn ask(&mut self, question: &str) -> Result<Option<String>> {
        self.renderer.print_question(&mut self.out, question)?;
        self.read_line()
    }

    /// One line without its line ending, or `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    #[cfg(test)]
    pub(crate) fn journal(&self) -> &Journal {
        &self.journal
    }
}
