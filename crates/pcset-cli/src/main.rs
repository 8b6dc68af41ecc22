//! pcset CLI - Command-line interface for pitch-class set analysis
//!
//! This binary provides commands for analyzing a single set, scanning the
//! subsets of a collection, and an interactive prompt loop.

use clap::Parser;
use std::process::ExitCode;

mod cli_args;

use cli_args::{Cli, Commands};
use pcset_cli::commands;
use pcset_cli::commands::json_output::{error_codes, CommandOutput, JsonError};
use pcset_cli::config::PcsetConfig;
use pcset_cli::logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::yellow("warning"), e);
    }

    let config = match PcsetConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return config_error(&cli.command, &e),
    };

    let result = match cli.command {
        Commands::Analyze { notes, flats, json } => {
            let config = config.with_overrides(flats, false);
            commands::analyze::run(&notes, config.spelling, json)
        }
        Commands::Combinations {
            notes,
            pick,
            flats,
            show_subsets,
            json,
        } => {
            let config = config.with_overrides(flats, show_subsets);
            commands::combinations::run(&notes, pick, config.spelling, config.show_subsets, json)
        }
        Commands::Interactive {
            flats,
            show_subsets,
        } => commands::interactive::run(&config.with_overrides(flats, show_subsets)),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

/// Report a config failure, as a JSON envelope when the command asked for
/// JSON.
fn config_error(command: &Commands, err: &anyhow::Error) -> ExitCode {
    if wants_json(command) {
        let error = JsonError::new(error_codes::CONFIG, format!("{:#}", err));
        let output: CommandOutput<()> = CommandOutput::failure(vec![error]);
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("{}: {}", colored::Colorize::red("error"), e),
        }
    } else {
        eprintln!("{}: {:#}", colored::Colorize::red("error"), err);
    }
    ExitCode::from(1)
}

fn wants_json(command: &Commands) -> bool {
    match command {
        Commands::Analyze { json, .. } | Commands::Combinations { json, .. } => *json,
        Commands::Interactive { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_analyze() {
        let cli = Cli::try_parse_from(["pcset", "analyze", "C", "E", "G", "--flats"]).unwrap();
        match cli.command {
            Commands::Analyze { notes, flats, json } => {
                assert_eq!(notes, vec!["C", "E", "G"]);
                assert!(flats);
                assert!(!json);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_cli_analyze_requires_notes() {
        assert!(Cli::try_parse_from(["pcset", "analyze"]).is_err());
    }

    #[test]
    fn test_cli_parses_combinations() {
        let cli = Cli::try_parse_from([
            "pcset",
            "combinations",
            "--notes",
            "C D E F",
            "--pick",
            "3",
            "--show-subsets",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Combinations {
                notes,
                pick,
                flats,
                show_subsets,
                json,
            } => {
                assert_eq!(notes, "C D E F");
                assert_eq!(pick, 3);
                assert!(!flats);
                assert!(show_subsets);
                assert!(json);
            }
            _ => panic!("expected combinations command"),
        }

        let cli =
            Cli::try_parse_from(["pcset", "combinations", "-n", "C", "-p", "1", "--json"]).unwrap();
        assert!(wants_json(&cli.command));
    }

    #[test]
    fn test_cli_rejects_negative_pick() {
        let result = Cli::try_parse_from(["pcset", "combinations", "-n", "C E G", "-p", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_interactive_with_globals() {
        let cli =
            Cli::try_parse_from(["pcset", "interactive", "-vv", "--config", "my.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config.as_deref(), Some("my.json"));
        match cli.command {
            Commands::Interactive {
                flats,
                show_subsets,
            } => {
                assert!(!flats);
                assert!(!show_subsets);
            }
            _ => panic!("expected interactive command"),
        }
        assert!(!wants_json(&cli.command));
    }
}
