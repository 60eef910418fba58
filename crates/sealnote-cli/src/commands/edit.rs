use zeroize::Zeroizing;

use crate::app::{open_unlocked, App};
use crate::cli::NoteArgs;
use crate::helpers::{edit_in_editor, resolve_editor};
use crate::ui::{Badge, Spinner};

pub fn handle_edit(app: &App, args: &NoteArgs) -> anyhow::Result<()> {
    let mut session = open_unlocked(app, &args.path)?;
    let current = Zeroizing::new(session.plaintext().unwrap_or_default().to_string());

    let editor = resolve_editor(app.config.ui.editor.as_deref());
    tracing::debug!(editor = %editor, "launching editor");
    let edited = edit_in_editor(&editor, &current)?;

    if *edited == *current {
        app.status(Badge::Info, "No changes");
    } else {
        let intents = Spinner::run(&app.ui, "Encrypting", || session.edit(edited.as_str()))?;
        app.show(&intents);
        app.status(Badge::Ok, &format!("Saved {}", args.path));
    }

    session.close()?;
    Ok(())
}
