// src/main.rs
// LetterHammer - scenario forms in, formal letters out

use anyhow::Result;
use clap::Parser;
use letterhammer::catalog::Catalog;
use letterhammer::cli::{Cli, Commands, run_generate, run_interactive, run_list, run_prompt};
use letterhammer::config::{EnvConfig, LetterConfig, Overrides, Settings};
use letterhammer::config::file::letterhammer_dir;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (project first, then global; earlier values win)
    let _ = dotenvy::dotenv();
    let _ = dotenvy::from_path(letterhammer_dir().join(".env"));

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let env = EnvConfig::load();
    let file = LetterConfig::load();
    let overrides = Overrides {
        model: cli.model.clone(),
        api_base: cli.api_base.clone(),
    };
    let settings = Settings::resolve(&overrides, &env, &file);
    let catalog = Catalog::builtin();

    match cli.command {
        None | Some(Commands::Run) => {
            run_interactive(catalog, &settings).await?;
        }
        Some(Commands::List) => {
            run_list(&catalog)?;
        }
        Some(Commands::Prompt { scenario, answers }) => {
            run_prompt(&catalog, &scenario, &answers)?;
        }
        Some(Commands::Generate {
            scenario,
            answers,
            copy,
        }) => {
            run_generate(&catalog, &settings, env.api_keys, &scenario, &answers, copy).await?;
        }
    }

    Ok(())
}
