mod cli_mode;
mod display_mode;
mod file_mode;
mod write_mode;

pub use cli_mode::CliModeResult;
