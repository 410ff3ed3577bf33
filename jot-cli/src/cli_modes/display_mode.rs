use super::CliModeResult;
use crate::shell::Shell;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write, G: Rng> Shell<R, W, G> {
    pub(crate) fn display_mode(&mut self) -> Result<CliModeResult> {
        if self.journal.is_empty() {
            self.renderer
                .print_info(&mut self.out, "No journal entries yet.")?;
            return Ok(CliModeResult::Continue);
        }

        self.renderer.print_heading(&mut self.out, "Journal Entries:")?;
        self.renderer
            .print_entries(&mut self.out, self.journal.entries())?;
        Ok(CliModeResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::tests::{mk_shell, output};
    use std::path::PathBuf;

    #[test]
    fn empty_journal_says_so() {
        let mut shell = mk_shell("2\n5\n", PathBuf::from("unused.txt"));
        shell.run().unwrap();
        let out = output(&shell);
        assert!(out.contains("No journal entries yet.\n"));
        assert!(!out.contains("Journal Entries:"));
    }
}
