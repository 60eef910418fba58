use std::io::{IsTerminal, Write};

use crate::app::{open_unlocked, App};
use crate::cli::NoteArgs;

/// Print the decrypted body to stdout exactly as stored.
pub fn handle_unlock(app: &App, args: &NoteArgs) -> anyhow::Result<()> {
    let mut session = open_unlocked(app, &args.path)?;
    let body = session.plaintext().unwrap_or_default();

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(body.as_bytes())?;
    if stdout.is_terminal() && !body.is_empty() && !body.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    drop(stdout);

    session.close()?;
    Ok(())
}
