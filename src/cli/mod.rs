// src/cli/mod.rs
// CLI module for LetterHammer commands

use clap::{Parser, Subcommand};
use tracing::Level;

mod generate;
mod list;
mod run;

pub use generate::{collect_answers, run_generate, run_prompt};
pub use list::{format_catalog, run_list};
pub use run::run_interactive;

#[derive(Parser)]
#[command(name = "letterhammer")]
#[command(about = "Write formal letters for everyday disputes with Gemini")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Gemini model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// API endpoint base, up to and including /models
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick a scenario, fill in the form and generate a letter (default)
    Run,

    /// List scenarios and their fields
    List,

    /// Print the prompt for a scenario without calling the API
    Prompt {
        /// Scenario name, e.g. "Parking Ticket Appeal"
        #[arg(index = 1)]
        scenario: String,

        /// Answer as id=value (repeatable)
        #[arg(short, long = "answer")]
        answers: Vec<String>,
    },

    /// Generate a letter non-interactively using GEMINI_API_KEY
    Generate {
        /// Scenario name, e.g. "Parking Ticket Appeal"
        #[arg(index = 1)]
        scenario: String,

        /// Answer as id=value (repeatable)
        #[arg(short, long = "answer")]
        answers: Vec<String>,

        /// Also copy the letter to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

impl Cli {
    /// Interactive use stays quiet so log lines do not interleave with prompts
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["letterhammer"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level(), Level::WARN);
    }

    #[test]
    fn test_verbose_levels() {
        let cli = Cli::try_parse_from(["letterhammer", "-v", "list"]).unwrap();
        assert_eq!(cli.log_level(), Level::INFO);
        let cli = Cli::try_parse_from(["letterhammer", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::try_parse_from([
            "letterhammer",
            "generate",
            "Medical Bill Dispute",
            "-a",
            "fullName=Ada",
            "--answer",
            "amount=$40",
            "--copy",
            "--model",
            "gemini-2.5-flash",
        ])
        .unwrap();

        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-flash"));
        match cli.command {
            Some(Commands::Generate {
                scenario,
                answers,
                copy,
            }) => {
                assert_eq!(scenario, "Medical Bill Dispute");
                assert_eq!(answers, vec!["fullName=Ada", "amount=$40"]);
                assert!(copy);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_prompt_requires_scenario() {
        assert!(Cli::try_parse_from(["letterhammer", "prompt"]).is_err());
    }
}
