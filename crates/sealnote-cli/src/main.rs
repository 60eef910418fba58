//! Sealnote CLI - single-file, password-encrypted notes
//!
//! Each note is one JSON envelope holding an age-encrypted body and a
//! plaintext password hint. The note logic lives in `sealnote-core`; this
//! binary supplies prompts, the editor and terminal output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod ui;

use clap::Parser;

use app::App;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = ?err, "command failed");
        if let Some(cli_err) = err.downcast_ref::<errors::CliError>() {
            cli_err.exit()
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(errors::exit_code_for(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        return commands::handle_completions(*shell);
    }

    let app = App::from_cli(cli)?;
    match &cli.command {
        Commands::New(args) => commands::handle_new(&app, args),
        Commands::Unlock(args) => commands::handle_unlock(&app, args),
        Commands::Write(args) => commands::handle_write(&app, args),
        Commands::Edit(args) => commands::handle_edit(&app, args),
        Commands::Passwd(args) => commands::handle_passwd(&app, args),
        Commands::Hint(args) => commands::handle_hint(&app, args),
        Commands::Info(args) => commands::handle_info(&app, args),
        Commands::Completions { .. } => Ok(()),
    }
}
