//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use sealnote_core::crypto::FieldErrors;
use sealnote_core::note::{Intent, Notice, View};

use super::context::UiContext;
use super::theme::{dim, Badge};

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = kind.paint(ctx.unicode, ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

fn notice_badge(notice: Notice) -> Badge {
    match notice {
        Notice::DecryptionFailed => Badge::Err,
        Notice::Locked => Badge::Info,
        Notice::PasswordChanged => Badge::Ok,
    }
}

fn field_error_lines(ctx: &UiContext, errors: &FieldErrors) -> Vec<String> {
    let password = errors
        .password
        .map(|e| badge(ctx, Badge::Err, &format!("Password: {}", e)));
    let confirm = errors
        .confirm
        .map(|e| badge(ctx, Badge::Err, &format!("Confirm: {}", e)));
    password.into_iter().chain(confirm).collect()
}

/// Lines to print for one intent. Focus has no terminal rendering.
pub fn intent_lines(ctx: &UiContext, intent: &Intent) -> Vec<String> {
    match intent {
        Intent::Show(view) if ctx.quiet || view.title().is_empty() => Vec::new(),
        Intent::Show(view) => vec![dim(view.title(), ctx.color)],
        Intent::FieldErrors(errors) => field_error_lines(ctx, errors),
        Intent::Notice(notice) if ctx.quiet && notice_badge(*notice) != Badge::Err => Vec::new(),
        Intent::Notice(notice) => vec![badge(ctx, notice_badge(*notice), &notice.to_string())],
        Intent::Focus(_) => Vec::new(),
    }
}

/// Print intents to stderr.
pub fn print_intents(ctx: &UiContext, intents: &[Intent]) {
    for intent in intents {
        for line in intent_lines(ctx, intent) {
            eprintln!("{}", line);
        }
    }
}

/// Note file details for `sealnote info`.
#[derive(Debug)]
pub struct NoteInfo {
    pub path: String,
    pub name: String,
    pub view: View,
    pub version: String,
    pub hint: String,
    pub ciphertext_bytes: usize,
}

impl NoteInfo {
    fn state_label(&self) -> &'static str {
        match self.view {
            View::NewNote => "new (not yet created)",
            _ => "locked",
        }
    }
}

/// Render note details as a two-column table.
pub fn info_table(ctx: &UiContext, info: &NoteInfo) -> String {
    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let hint = if info.hint.is_empty() {
        "(none)".to_string()
    } else {
        info.hint.clone()
    };
    let rows = [
        ("Path", info.path.clone()),
        ("Name", info.name.clone()),
        ("State", info.state_label().to_string()),
        ("Format", info.version.clone()),
        ("Hint", hint),
        ("Ciphertext", format!("{} bytes", info.ciphertext_bytes)),
    ];
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), Cell::new(value)]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealnote_core::crypto::ValidationError;
    use sealnote_core::note::Field;

    fn ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            quiet: false,
        }
    }

    #[test]
    fn test_badge_with_message() {
        assert_eq!(badge(&ctx(), Badge::Ok, "Saved"), "[OK] Saved");
        assert_eq!(badge(&ctx(), Badge::Info, ""), "[INFO]");
    }

    #[test]
    fn test_notice_lines() {
        let lines = intent_lines(&ctx(), &Intent::Notice(Notice::DecryptionFailed));
        assert_eq!(lines, vec!["[ERR] Decryption failed"]);
    }

    #[test]
    fn test_field_error_lines() {
        let errors = FieldErrors {
            password: Some(ValidationError::TooShort),
            confirm: Some(ValidationError::Mismatch),
        };
        let lines = intent_lines(&ctx(), &Intent::FieldErrors(errors));
        assert_eq!(
            lines,
            vec![
                "[ERR] Password: Password is too short",
                "[ERR] Confirm: Password doesn't match",
            ]
        );
    }

    #[test]
    fn test_show_and_focus() {
        assert_eq!(
            intent_lines(&ctx(), &Intent::Show(View::NewNote)),
            vec!["This note will be encrypted"]
        );
        assert!(intent_lines(&ctx(), &Intent::Show(View::Init)).is_empty());
        assert!(intent_lines(&ctx(), &Intent::Focus(Field::Password)).is_empty());

        let quiet = UiContext { quiet: true, ..ctx() };
        assert!(intent_lines(&quiet, &Intent::Show(View::NewNote)).is_empty());
        assert!(intent_lines(&quiet, &Intent::Notice(Notice::PasswordChanged)).is_empty());
        assert_eq!(
            intent_lines(&quiet, &Intent::Notice(Notice::DecryptionFailed)).len(),
            1
        );
    }

    #[test]
    fn test_info_table_contents() {
        let info = NoteInfo {
            path: "/tmp/Diary.encrypted".to_string(),
            name: "Diary".to_string(),
            view: View::DecryptNote,
            version: "1.0".to_string(),
            hint: String::new(),
            ciphertext_bytes: 321,
        };
        let out = info_table(&ctx(), &info);
        assert!(out.contains("Diary"));
        assert!(out.contains("locked"));
        assert!(out.contains("(none)"));
        assert!(out.contains("321 bytes"));
    }
}
