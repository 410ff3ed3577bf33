use super::theme::OneDark;
use jot_core::{JournalEntry, render};
use std::io::{self, Write};
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

/// Writes everything the shell shows. Without color the output is plain text,
/// which is what scripted sessions and tests see.
pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: render::DEFAULT_DATE_FORMAT.to_string(),
                    use_color: true,
                },
            },
        }
    }

    fn print_md<W: Write + ?Sized>(&self, out: &mut W, md: &str) -> io::Result<()> {
        write!(out, "{}", self.skin.term_text(md))
    }

    pub fn print_heading<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<()> {
        if self.opts.use_color {
            self.print_md(out, &format!("# {text}"))
        } else {
            writeln!(out, "{text}")
        }
    }

    pub fn print_info<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            self.print_md(out, &format!("|-|\n| {message} |\n|-|\n"))
        } else {
            writeln!(out, "{message}")
        }
    }

    pub fn print_error<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", message.with(OneDark::RED))
        } else {
            writeln!(out, "{message}")
        }
    }

    /// The reflective question shown before an entry is written.
    pub fn print_prompt<W: Write + ?Sized>(&self, out: &mut W, prompt: &str) -> io::Result<()> {
        if self.opts.use_color {
            self.print_md(out, &format!("*{prompt}*"))
        } else {
            writeln!(out, "{prompt}")
        }
    }

    pub fn print_question<W: Write + ?Sized>(&self, out: &mut W, question: &str) -> io::Result<()> {
        if self.opts.use_color {
            writeln!(out, "{}", question.with(OneDark::CYAN))?;
        } else {
            writeln!(out, "{question}")?;
        }
        out.flush()
    }

    /// `items` are `(key, label)` pairs, shown as `key. label`.
    pub fn print_menu<W: Write + ?Sized>(
        &self,
        out: &mut W,
        items: &[(&str, &str)],
    ) -> io::Result<()> {
        writeln!(out, "Please select one of the following choices:")?;
        for (key, label) in items {
            if self.opts.use_color {
                writeln!(out, "{}. {label}", (*key).with(OneDark::YELLOW))?;
            } else {
                writeln!(out, "{key}. {label}")?;
            }
        }
        self.print_question(out, "What would you like to do?")
    }

    pub fn print_entries<W: Write + ?Sized>(
        &self,
        out: &mut W,
        entries: &[JournalEntry],
    ) -> io::Result<()> {
        if !self.opts.use_color {
            return write!(out, "{}", render::format_entries(entries, &self.opts.date_format));
        }

        for (i, entry) in entries.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            let date = render::format_date(entry, &self.opts.date_format);
            writeln!(out, "{}", date.as_str().with(OneDark::CYAN).bold())?;
            writeln!(out, "{}", entry.text.as_str().with(OneDark::FG))?;
            for (label, value) in render::metadata_lines(entry) {
                writeln!(out, "{}: {value}", label.with(OneDark::GREEN))?;
            }
        }
        Ok(())
    }
}
