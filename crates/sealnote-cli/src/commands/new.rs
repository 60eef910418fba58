use std::path::Path;

use sealnote_core::note::View;
use sealnote_core::storage::is_supported_extension;

use crate::app::{open_session, App};
use crate::cli::HintedNoteArgs;
use crate::constants::PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::{env_password, prompt_hint, prompt_new_password};
use crate::ui::{Badge, Spinner};

use super::field_errors;

pub fn handle_new(app: &App, args: &HintedNoteArgs) -> anyhow::Result<()> {
    let (mut session, intents) = open_session(&args.path)?;
    if session.view() != View::NewNote {
        return Err(CliError::invalid_input(format!("Note already exists: {}", args.path)).into());
    }

    let extension = Path::new(&args.path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default();
    if !is_supported_extension(&extension) {
        app.status(Badge::Warn, "Note files are expected to end in .encrypted");
    }
    app.show(&intents);

    let retry = app.interactive && env_password(PASSWORD_ENV).is_none();
    let mut hint: Option<String> = None;
    loop {
        let (password, confirm) = prompt_new_password(app.interactive, PASSWORD_ENV)?;
        if hint.is_none() {
            hint = Some(prompt_hint(app.interactive, args.hint.as_deref(), "")?);
        }
        let note_hint = hint.clone().unwrap_or_default();

        let intents = Spinner::run(&app.ui, "Encrypting", || {
            session.submit_new(password, confirm, note_hint)
        })?;
        if session.view() == View::EditNote {
            break;
        }
        app.show(&intents);
        if !retry {
            let message = field_errors(&intents)
                .map(|errors| errors.to_string())
                .unwrap_or_else(|| "Note was not created".to_string());
            return Err(CliError::invalid_input(message).into());
        }
    }

    tracing::info!(path = %args.path, "note created");
    app.status(Badge::Ok, &format!("Created encrypted note {}", args.path));
    session.close()?;
    Ok(())
}
