use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// The main menu. Each choice is selected by typing its digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, IntoStaticStr)]
pub enum MenuChoice {
    #[strum(serialize = "1")]
    Write,
    #[strum(serialize = "2")]
    Display,
    #[strum(serialize = "3")]
    Load,
    #[strum(serialize = "4")]
    Save,
    #[strum(serialize = "5")]
    Exit,
}

impl MenuChoice {
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Write => "Write",
            MenuChoice::Display => "Display",
            MenuChoice::Load => "Load",
            MenuChoice::Save => "Save",
            MenuChoice::Exit => "Exit",
        }
    }

    /// `(key, label)` pairs in menu order.
    pub fn items() -> Vec<(&'static str, &'static str)> {
        MenuChoice::iter()
            .map(|c| (c.into(), c.label()))
            .collect()
    }
}
