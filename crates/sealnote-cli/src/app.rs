//! Shared command plumbing: resolved settings, opening a note file and the
//! unlock retry loop.

use std::io::IsTerminal;
use std::path::Path;

use sealnote_core::crypto::EncryptionService;
use sealnote_core::note::{Intent, View};
use sealnote_core::storage::{format_hint, FileGateway};
use sealnote_core::Session;

use crate::cli::Cli;
use crate::config::{load_config, SealnoteConfig};
use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::{env_password, prompt_password};
use crate::ui::{render, Badge, Spinner, UiContext};

/// A note session backed by a file.
pub type NoteSession = Session<FileGateway>;

/// Settings resolved once per invocation.
pub struct App {
    pub config: SealnoteConfig,
    pub ui: UiContext,
    pub interactive: bool,
}

impl App {
    pub fn from_cli(cli: &Cli) -> anyhow::Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        let ui = UiContext::from_env(config.ui.ascii, cli.quiet);
        let interactive = std::io::stdin().is_terminal() && !cli.no_input;
        Ok(Self {
            config,
            ui,
            interactive,
        })
    }

    /// Print a status line to stderr unless quiet.
    pub fn status(&self, kind: Badge, message: &str) {
        if !self.ui.quiet {
            eprintln!("{}", render::badge(&self.ui, kind, message));
        }
    }

    pub fn show(&self, intents: &[Intent]) {
        render::print_intents(&self.ui, intents);
    }
}

pub fn missing_note_message(path: &str) -> String {
    format!("Note not found: {}", path)
}

pub fn missing_note_hint() -> &'static str {
    "Hint: Create it with `sealnote new <PATH>`."
}

/// Open the note at `path` and load it.
pub fn open_session(path: &str) -> anyhow::Result<(NoteSession, Vec<Intent>)> {
    let gateway = FileGateway::new(Path::new(path));
    let name = gateway.note_name();
    let mut session = Session::new(EncryptionService::new(), gateway, name);
    let intents = session.load().map_err(CliError::from)?;
    Ok((session, intents))
}

/// Open the note at `path`, failing if it does not exist yet.
pub fn open_existing(path: &str) -> anyhow::Result<NoteSession> {
    let (session, _) = open_session(path)?;
    if session.view() == View::NewNote {
        return Err(CliError::not_found(missing_note_message(path), missing_note_hint()).into());
    }
    Ok(session)
}

/// Open an existing note and unlock it.
pub fn open_unlocked(app: &App, path: &str) -> anyhow::Result<NoteSession> {
    let mut session = open_existing(path)?;
    unlock_with_retry(app, &mut session)?;
    Ok(session)
}

/// Unlock with `SEALNOTE_PASSWORD` (one attempt) or up to
/// `max_unlock_attempts` prompts.
pub fn unlock_with_retry(app: &App, session: &mut NoteSession) -> anyhow::Result<()> {
    if let Some(password) = env_password(PASSWORD_ENV) {
        Spinner::run(&app.ui, "Unlocking", || session.submit_unlock(password))?;
        if session.view() == View::EditNote {
            return Ok(());
        }
        return Err(CliError::auth_failed("Incorrect password.").into());
    }

    let max_attempts = if app.interactive {
        app.config.security.max_unlock_attempts.max(1)
    } else {
        1
    };
    let hint = format_hint(session.hint());
    if app.interactive && !hint.is_empty() {
        eprintln!("{}", hint);
    }

    let mut attempts: u32 = 0;
    loop {
        attempts += 1;
        let password = prompt_password(app.interactive, PASSWORD_ENV, "Password")?;
        let intents = Spinner::run(&app.ui, "Unlocking", || session.submit_unlock(password))?;
        if session.view() == View::EditNote {
            return Ok(());
        }
        app.show(&intents);

        let remaining = max_attempts.saturating_sub(attempts);
        if remaining == 0 {
            let hint = if hint.is_empty() {
                "Hint: A forgotten password cannot be recovered.".to_string()
            } else {
                hint
            };
            return Err(
                CliError::auth_failed_with_hint("Too many failed password attempts.", hint).into(),
            );
        }
        eprintln!(
            "Incorrect password. {} attempt{} remaining.",
            remaining,
            if remaining == 1 { "" } else { "s" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::exit_codes;

    #[test]
    fn test_open_missing_file_is_new_note() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Fresh.encrypted");
        let (session, intents) = open_session(path.to_str().unwrap()).unwrap();
        assert_eq!(session.view(), View::NewNote);
        assert_eq!(session.name(), "Fresh");
        assert!(intents.contains(&Intent::Show(View::NewNote)));
    }

    #[test]
    fn test_open_existing_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.encrypted");
        let Err(err) = open_existing(path.to_str().unwrap()) else {
            panic!("missing note should not open");
        };
        let cli = err.downcast_ref::<CliError>().expect("typed error");
        assert_eq!(cli.exit_code(), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_open_corrupt_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.encrypted");
        std::fs::write(&path, "not an envelope").unwrap();
        let Err(err) = open_session(path.to_str().unwrap()) else {
            panic!("corrupt note should not open");
        };
        let cli = err.downcast_ref::<CliError>().expect("typed error");
        assert_eq!(cli.exit_code(), exit_codes::FORMAT_ERROR);
    }
}
