//! Inputs and outputs of the note state machine.

use std::fmt;

use super::state::{Field, View};
use crate::crypto::{FieldErrors, Password, Plaintext};

/// Something that happened to a note session, as seen by [`reduce`].
///
/// `Loaded`, `Unlocked` and `UnlockFailed` only ever come from the session
/// driver after it has read the note or run the cipher. Hosts talk to a
/// [`Session`] with [`UserEvent`], which cannot express them.
///
/// [`reduce`]: super::reduce
/// [`Session`]: super::Session
#[derive(Debug)]
pub enum Event {
    /// The persisted note was read. `fresh` means the blob was empty and
    /// nothing has ever been sealed.
    Loaded {
        name: String,
        hint: String,
        fresh: bool,
    },

    /// New-note form submitted.
    SubmitNew {
        password: Password,
        confirm: Password,
        hint: String,
    },

    /// Unlock form submitted.
    SubmitUnlock { password: Password },

    /// The current envelope opened with `password`.
    Unlocked {
        password: Password,
        plaintext: Plaintext,
    },

    /// The current envelope did not open.
    UnlockFailed,

    /// The note body changed.
    Edit { plaintext: Plaintext },

    Lock,

    ChangePasswordRequested,

    /// Change-password form submitted.
    SubmitChangePassword {
        password: Password,
        confirm: Password,
        hint: String,
    },

    CancelChangePassword,

    /// The host is closing the note.
    Close,
}

impl Event {
    /// Event name without any payload, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Loaded { .. } => "loaded",
            Event::SubmitNew { .. } => "submit-new",
            Event::SubmitUnlock { .. } => "submit-unlock",
            Event::Unlocked { .. } => "unlocked",
            Event::UnlockFailed => "unlock-failed",
            Event::Edit { .. } => "edit",
            Event::Lock => "lock",
            Event::ChangePasswordRequested => "change-password-requested",
            Event::SubmitChangePassword { .. } => "submit-change-password",
            Event::CancelChangePassword => "cancel-change-password",
            Event::Close => "close",
        }
    }

    /// Convenience constructor for an edit.
    pub fn edit(plaintext: impl Into<String>) -> Self {
        Event::Edit {
            plaintext: Plaintext::new(plaintext),
        }
    }
}

/// An action a user can take on an open note.
#[derive(Debug)]
pub enum UserEvent {
    SubmitNew {
        password: Password,
        confirm: Password,
        hint: String,
    },
    SubmitUnlock {
        password: Password,
    },
    Edit {
        plaintext: Plaintext,
    },
    Lock,
    ChangePasswordRequested,
    SubmitChangePassword {
        password: Password,
        confirm: Password,
        hint: String,
    },
    CancelChangePassword,
    Close,
}

impl UserEvent {
    pub fn edit(plaintext: impl Into<String>) -> Self {
        UserEvent::Edit {
            plaintext: Plaintext::new(plaintext),
        }
    }
}

impl From<UserEvent> for Event {
    fn from(event: UserEvent) -> Self {
        match event {
            UserEvent::SubmitNew {
                password,
                confirm,
                hint,
            } => Event::SubmitNew {
                password,
                confirm,
                hint,
            },
            UserEvent::SubmitUnlock { password } => Event::SubmitUnlock { password },
            UserEvent::Edit { plaintext } => Event::Edit { plaintext },
            UserEvent::Lock => Event::Lock,
            UserEvent::ChangePasswordRequested => Event::ChangePasswordRequested,
            UserEvent::SubmitChangePassword {
                password,
                confirm,
                hint,
            } => Event::SubmitChangePassword {
                password,
                confirm,
                hint,
            },
            UserEvent::CancelChangePassword => Event::CancelChangePassword,
            UserEvent::Close => Event::Close,
        }
    }
}

/// A body to seal under `password` and persist with `hint`.
#[derive(Debug, Clone)]
pub struct SealRequest {
    pub password: Password,
    pub hint: String,
    pub plaintext: Plaintext,
}

/// Work the session driver performs after a transition.
#[derive(Debug)]
pub enum Effect {
    /// Try to open the current envelope.
    Open { password: Password },

    /// Seal a body, encode the envelope and persist it.
    Seal(SealRequest),

    /// Something for the host to show.
    Intent(Intent),
}

/// What a host should present to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Render a view.
    Show(View),

    /// Field-level validation messages for the current form.
    FieldErrors(FieldErrors),

    /// A transient notice.
    Notice(Notice),

    /// Move input focus.
    Focus(Field),
}

/// Transient user-visible notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DecryptionFailed,
    Locked,
    PasswordChanged,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Notice::DecryptionFailed => "Decryption failed",
            Notice::Locked => "Note locked",
            Notice::PasswordChanged => "Password changed",
        };
        write!(f, "{}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_debug_hides_password() {
        let event = Event::SubmitUnlock {
            password: Password::new("abc123"),
        };
        assert!(!format!("{:?}", event).contains("abc123"));
        assert_eq!(event.name(), "submit-unlock");
    }

    #[test]
    fn test_event_debug_hides_body() {
        let event = Event::edit("top secret body");
        assert!(!format!("{:?}", event).contains("top secret"));
    }

    #[test]
    fn test_user_event_maps_to_same_event() {
        let event: Event = UserEvent::SubmitUnlock {
            password: Password::new("pw"),
        }
        .into();
        assert_eq!(event.name(), "submit-unlock");
        assert_eq!(Event::from(UserEvent::Close).name(), "close");
        assert_eq!(Event::from(UserEvent::edit("x")).name(), "edit");
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::DecryptionFailed.to_string(), "Decryption failed");
    }
}
