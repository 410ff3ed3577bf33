use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("grade: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    print!("What is your grade percentage? ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let percentage: i32 = line
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a whole-number percentage", line.trim()))?;

    print!("{}", grade::report(percentage));
    Ok(())
}
