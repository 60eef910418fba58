use crate::app::{open_unlocked, App};
use crate::cli::NoteArgs;
use crate::helpers::read_stdin_body;
use crate::ui::{Badge, Spinner};

/// Replace the note body with stdin as one edit.
pub fn handle_write(app: &App, args: &NoteArgs) -> anyhow::Result<()> {
    let body = read_stdin_body()?;
    let mut session = open_unlocked(app, &args.path)?;

    let intents = Spinner::run(&app.ui, "Encrypting", || session.edit(body.as_str()))?;
    app.show(&intents);
    app.status(
        Badge::Ok,
        &format!("Saved {} ({} bytes)", args.path, body.len()),
    );

    session.close()?;
    Ok(())
}
