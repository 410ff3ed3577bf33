/// What the shell does after a menu action finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliModeResult {
    /// Show the menu again.
    Continue,
    /// Leave the loop, e.g. because the input ended mid-action.
    Exit,
}
