use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use studydash::cli::args::{Cli, Commands};
use studydash::cli::commands;
use studydash::config::Config;
use studydash::error::StudyError;
use studydash::records::SampleRecords;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), StudyError> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    studydash::logging::init(config.general.log_file.as_deref())?;
    config.general.color.apply();

    let store = SampleRecords;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command.unwrap_or(Commands::Study) {
        Commands::Study => {
            studydash::tui::run(&store, &config)?;
            String::new()
        }
        Commands::Tasks => commands::tasks(&store, format)?,
        Commands::Habits => commands::habits(&store, format)?,
        Commands::Week => commands::week(&store, format)?,
        Commands::Timer { mode } => commands::timer(mode, format)?,
        Commands::Completions { shell } => commands::completions(&shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
