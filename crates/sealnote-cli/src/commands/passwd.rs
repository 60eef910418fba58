use sealnote_core::note::View;

use crate::app::{open_unlocked, App};
use crate::cli::HintedNoteArgs;
use crate::constants::NEW_PASSWORD_ENV;
use crate::errors::CliError;
use crate::helpers::{env_password, prompt_hint, prompt_new_password};
use crate::ui::Spinner;

use super::field_errors;

/// Re-seal the note under a new password and hint.
///
/// The new password comes from `SEALNOTE_NEW_PASSWORD` or a prompt with
/// confirmation. An invalid form leaves the note under its old password.
pub fn handle_passwd(app: &App, args: &HintedNoteArgs) -> anyhow::Result<()> {
    let mut session = open_unlocked(app, &args.path)?;
    let current_hint = session.hint().to_string();
    let intents = session.request_change_password()?;
    app.show(&intents);

    let retry = app.interactive && env_password(NEW_PASSWORD_ENV).is_none();
    let mut hint: Option<String> = None;
    loop {
        let (password, confirm) = prompt_new_password(app.interactive, NEW_PASSWORD_ENV)?;
        if hint.is_none() {
            hint = Some(prompt_hint(
                app.interactive,
                args.hint.as_deref(),
                &current_hint,
            )?);
        }
        let new_hint = hint.clone().unwrap_or_default();

        let intents = Spinner::run(&app.ui, "Encrypting", || {
            session.submit_change_password(password, confirm, new_hint)
        })?;
        app.show(&intents);
        if session.view() == View::EditNote {
            break;
        }
        if !retry {
            session.cancel_change_password()?;
            let message = field_errors(&intents)
                .map(|errors| errors.to_string())
                .unwrap_or_else(|| "Password was not changed".to_string());
            return Err(CliError::invalid_input(message).into());
        }
    }

    tracing::info!(path = %args.path, "note password changed");
    session.close()?;
    Ok(())
}
