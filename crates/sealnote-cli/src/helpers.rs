use std::io::Read;
use std::process::Command;

use dialoguer::{Input, Password as PasswordPrompt};
use zeroize::Zeroizing;

use sealnote_core::crypto::Password;

use crate::errors::CliError;

/// Read a non-blank secret from an environment variable.
pub fn env_password(var: &str) -> Option<Password> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Password::new)
}

fn no_tty(what: &str, var: &str) -> anyhow::Error {
    CliError::invalid_input(format!(
        "No {} provided and no TTY available. Set {}.",
        what, var
    ))
    .into()
}

/// Prompt for a password, or read it from `var`.
///
/// Empty input is accepted so that the note's own validation reports it.
pub fn prompt_password(interactive: bool, var: &str, prompt: &str) -> anyhow::Result<Password> {
    if let Some(password) = env_password(var) {
        return Ok(password);
    }
    if !interactive {
        return Err(no_tty("password", var));
    }
    ask_password(prompt)
}

fn ask_password(prompt: &str) -> anyhow::Result<Password> {
    PasswordPrompt::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map(Password::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}

/// Prompt for a new password and its confirmation, or read both from `var`.
pub fn prompt_new_password(interactive: bool, var: &str) -> anyhow::Result<(Password, Password)> {
    if let Some(password) = env_password(var) {
        let confirm = password.clone();
        return Ok((password, confirm));
    }
    if !interactive {
        return Err(no_tty("password", var));
    }
    let password = ask_password("New password")?;
    let confirm = ask_password("Confirm password")?;
    Ok((password, confirm))
}

/// Resolve the password hint: the flag, then a prompt, then `default`.
pub fn prompt_hint(
    interactive: bool,
    flag: Option<&str>,
    default: &str,
) -> anyhow::Result<String> {
    if let Some(hint) = flag {
        return Ok(hint.to_string());
    }
    if !interactive {
        return Ok(default.to_string());
    }
    Input::<String>::new()
        .with_prompt("Password hint (stored unencrypted)")
        .allow_empty(true)
        .default(default.to_string())
        .show_default(!default.is_empty())
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read hint: {}", e))
}

/// Read a whole note body from stdin, byte for byte.
pub fn read_stdin_body() -> anyhow::Result<Zeroizing<String>> {
    let mut body = Zeroizing::new(String::new());
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(body)
}

/// Editor command: config, then `$VISUAL`, then `$EDITOR`, then `vi`.
pub fn resolve_editor(config_editor: Option<&str>) -> String {
    pick_editor(
        config_editor.map(str::to_string),
        std::env::var("VISUAL").ok(),
        std::env::var("EDITOR").ok(),
    )
}

/// First non-blank candidate, in order.
fn pick_editor(
    config: Option<String>,
    visual: Option<String>,
    editor: Option<String>,
) -> String {
    [config, visual, editor]
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Open `body` in `editor` and return the saved result.
///
/// The body is written to a file in a private temporary directory that is
/// removed, with the file, before this returns.
pub fn edit_in_editor(editor: &str, body: &str) -> anyhow::Result<Zeroizing<String>> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::invalid_input("Editor command is empty"))?;

    let dir = tempfile::Builder::new()
        .prefix("sealnote")
        .tempdir()
        .map_err(|e| anyhow::anyhow!("Failed to create temp directory: {}", e))?;
    let path = dir.path().join("note.txt");
    std::fs::write(&path, body).map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;

    let status = Command::new(program)
        .args(parts)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to launch editor {}: {}", program, e))?;
    if !status.success() {
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::read_to_string(&path)
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))?;
    dir.close()
        .map_err(|e| anyhow::anyhow!("Failed to remove temp directory: {}", e))?;

    Ok(contents)
}
