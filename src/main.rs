// Entrypoint for the CLI application.
// - Keeps `main` small: set up logging, parse arguments and hand off to the
//   purger or to the translator with a client built once here.
// - Returns `anyhow::Result` so any unrecoverable error exits non-zero.
// - Loads a `.env` file first so `DEEPL_API_KEY` can live there.

use clap::Parser;
use env_logger::Env;
use purge_translate_cli::{
    api::{self, DeeplClient},
    cli::{Cli, Commands},
    purge::purge_images,
    ui::{self, SpinnerProvider},
};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
    api::load_dotenv();

    match cli.command {
        Commands::Purge { folder } => {
            // A folder that cannot be listed aborts before any deletion.
            let report = purge_images(&folder)?;
            ui::print_purge_report(&report);
        }
        Commands::Translate => {
            // The client is created once and reused for every prompt.
            let provider = SpinnerProvider::new(DeeplClient::from_env()?);
            let mut terminal = ui::stdin_terminal();
            ui::translation_session(terminal.as_mut(), &provider)?;
        }
        Commands::TranslateText { text, to } => {
            let provider = SpinnerProvider::new(DeeplClient::from_env()?);
            if !ui::translate_once(&provider, &text, &to) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
