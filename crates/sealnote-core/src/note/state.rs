//! Note session states.

use std::fmt;

use crate::crypto::{Password, Plaintext};

/// Secrets of an unlocked note.
///
/// Password and plaintext are wiped when this value is dropped, which is
/// how Lock, Close and session teardown clear them.
#[derive(Debug, Clone)]
pub struct Unlocked {
    pub password: Password,
    pub hint: String,
    pub plaintext: Plaintext,
}

impl Unlocked {
    pub fn new(
        password: Password,
        hint: impl Into<String>,
        plaintext: impl Into<Plaintext>,
    ) -> Self {
        Self {
            password,
            hint: hint.into(),
            plaintext: plaintext.into(),
        }
    }
}

/// Where a note session is in its lifecycle.
///
/// Each variant holds exactly the data that is valid in that state.
#[derive(Debug, Clone, Default)]
pub enum NoteState {
    /// Before the persisted note has been loaded.
    #[default]
    Init,

    /// A note that has never been saved. `name` becomes its starter content.
    NewNote { name: String },

    /// A locked note. Only the hint is known.
    DecryptNote { hint: String },

    /// An unlocked note being edited.
    EditNote(Unlocked),

    /// An unlocked note whose password is being changed.
    ChangePassword(Unlocked),
}

impl NoteState {
    pub fn view(&self) -> View {
        match self {
            NoteState::Init => View::Init,
            NoteState::NewNote { .. } => View::NewNote,
            NoteState::DecryptNote { .. } => View::DecryptNote,
            NoteState::EditNote(_) => View::EditNote,
            NoteState::ChangePassword(_) => View::ChangePassword,
        }
    }

    /// Secrets held by the session, if the note is unlocked.
    pub fn unlocked(&self) -> Option<&Unlocked> {
        match self {
            NoteState::EditNote(unlocked) | NoteState::ChangePassword(unlocked) => Some(unlocked),
            _ => None,
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked().is_some()
    }
}

/// Secret-free tag of a [`NoteState`], used for rendering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Init,
    NewNote,
    DecryptNote,
    EditNote,
    ChangePassword,
}

impl View {
    /// Title shown above the view.
    pub fn title(&self) -> &'static str {
        match self {
            View::Init => "",
            View::NewNote => "This note will be encrypted",
            View::DecryptNote | View::EditNote => "This note is encrypted",
            View::ChangePassword => "Change encrypted note password",
        }
    }

    /// Input that receives focus when the view is shown.
    pub fn first_field(&self) -> Option<Field> {
        match self {
            View::Init => None,
            View::NewNote | View::DecryptNote | View::ChangePassword => Some(Field::Password),
            View::EditNote => Some(Field::Editor),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Init => "init",
            View::NewNote => "new-note",
            View::DecryptNote => "decrypt-note",
            View::EditNote => "edit-note",
            View::ChangePassword => "change-password",
        };
        write!(f, "{}", name)
    }
}

/// Inputs a host renders for the note views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Password,
    Confirm,
    Hint,
    Editor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_init() {
        assert_eq!(NoteState::default().view(), View::Init);
    }

    #[test]
    fn test_unlocked_only_when_editing() {
        let unlocked = Unlocked::new(Password::new("pw"), "", "body");
        assert!(NoteState::EditNote(unlocked.clone()).is_unlocked());
        assert!(NoteState::ChangePassword(unlocked).is_unlocked());
        assert!(!NoteState::DecryptNote { hint: String::new() }.is_unlocked());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let state = NoteState::EditNote(Unlocked::new(
            Password::new("abc123"),
            "fav",
            "my secret body",
        ));
        let debug_output = format!("{:?}", state);
        assert!(!debug_output.contains("abc123"));
        assert!(!debug_output.contains("my secret body"));
        assert!(debug_output.contains("fav"));
        assert!(debug_output.contains("[14 bytes]"));
    }

    #[test]
    fn test_first_field() {
        assert_eq!(View::EditNote.first_field(), Some(Field::Editor));
        assert_eq!(View::NewNote.first_field(), Some(Field::Password));
        assert_eq!(View::Init.first_field(), None);
    }
}
