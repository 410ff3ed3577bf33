mod cli;
mod cli_modes;
mod logging;
mod menu;
mod render;
mod shell;

use anyhow::Result;
use cli::Cli;
use jot_core::Config;
use render::{RenderOptions, Renderer};
use shell::Shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jot: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    logging::init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(file) = cli.file {
        config.journal_file = file;
    }
    tracing::debug!(journal_file = %config.journal_file.display(), "configuration loaded");

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.display_date_format.clone(),
        use_color: cli.color.enabled(),
    }));

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), rand::rng(), renderer, config);
    shell.run()
}
