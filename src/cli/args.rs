use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::features::focus::Mode;

#[derive(Parser)]
#[command(name = "studydash")]
#[command(about = "A terminal study dashboard with a focus timer")]
#[command(long_about = "studydash - A terminal study dashboard

Shows your study tasks, habits and weekly hours next to a
pomodoro-style focus timer (25 minute focus, 5 minute break).

QUICK START:
  studydash                 Open the interactive study screen
  studydash tasks           Print today's study tasks
  studydash week            Print this week's study hours

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file
    ///
    /// Defaults to ~/.studydash/config.yaml. A missing file means defaults.
    #[arg(short, long, global = true, env = "STUDYDASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive study screen
    ///
    /// Runs the focus timer alongside your task list, habits and weekly
    /// chart. This is the default when no command is given.
    ///
    /// # Keys
    ///
    ///   space      Start/pause the timer
    ///   r          Reset the current interval
    ///   m / tab    Switch between focus and break
    ///   f / b      Select focus / break
    ///   j / k      Move through tasks
    ///   enter / x  Toggle the selected task
    ///   ?          Show all keys
    ///   q          Quit
    #[command(alias = "tui")]
    Study,

    /// List study tasks
    ///
    /// Open tasks first, highest priority first.
    ///
    /// # Examples
    ///
    ///   studydash tasks
    ///   studydash tasks -o json
    Tasks,

    /// List habits with weekly progress
    Habits,

    /// Show this week's study hours
    ///
    /// Prints a bar per day with the total and daily average.
    Week,

    /// Show the initial timer state for a mode
    ///
    /// # Examples
    ///
    ///   studydash timer
    ///   studydash timer --mode break -o json
    Timer {
        /// Timer mode
        #[arg(long, short = 'm', value_enum, default_value = "focus")]
        mode: TimerModeArg,
    },

    /// Generate shell completions
    ///
    /// Example: studydash completions zsh > ~/.zsh/completions/_studydash
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

/// Timer mode on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerModeArg {
    /// 25 minute focus interval.
    Focus,
    /// 5 minute break.
    Break,
}

impl From<TimerModeArg> for Mode {
    fn from(arg: TimerModeArg) -> Self {
        match arg {
            TimerModeArg::Focus => Self::Focus,
            TimerModeArg::Break => Self::Break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["studydash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_tui_alias() {
        let cli = Cli::try_parse_from(["studydash", "tui"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Study)));
    }

    #[test]
    fn test_cli_global_output() {
        let cli = Cli::try_parse_from(["studydash", "tasks", "-o", "json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tasks)));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_timer_mode() {
        let cli = Cli::try_parse_from(["studydash", "timer", "--mode", "break"]).unwrap();
        match cli.command {
            Some(Commands::Timer { mode }) => assert_eq!(Mode::from(mode), Mode::Break),
            _ => panic!("expected timer command"),
        }
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::try_parse_from(["studydash", "--config", "/tmp/x.yaml", "week"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.yaml")));
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["studydash", "timer", "--mode", "nap"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
