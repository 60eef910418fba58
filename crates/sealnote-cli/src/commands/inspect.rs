use sealnote_core::crypto::{AgeCipher, EncryptionService};

use crate::app::{open_existing, open_session, App};
use crate::cli::NoteArgs;
use crate::ui::render::{info_table, NoteInfo};
use crate::ui::Badge;

/// Print the stored hint. No password is needed.
pub fn handle_hint(app: &App, args: &NoteArgs) -> anyhow::Result<()> {
    let session = open_existing(&args.path)?;
    if session.hint().is_empty() {
        app.status(Badge::Info, "No hint set");
    } else {
        println!("{}", session.hint());
    }
    Ok(())
}

pub fn handle_info(app: &App, args: &NoteArgs) -> anyhow::Result<()> {
    let (session, _) = open_session(&args.path)?;
    let envelope = session.envelope();
    let ciphertext = EncryptionService::<AgeCipher>::from_storage_text(&envelope.encoded_data)?;

    let info = NoteInfo {
        path: args.path.clone(),
        name: session.name().to_string(),
        view: session.view(),
        version: envelope.version.clone(),
        hint: envelope.hint.clone(),
        ciphertext_bytes: ciphertext.len(),
    };
    println!("{}", info_table(&app.ui, &info));
    Ok(())
}
