//! The note state machine.
//!
//! `reduce` is pure: it never touches the cipher or storage. Work that
//! needs either comes back as [`Effect`]s for the session driver to run.
//!
//! ```text
//!            Loaded (fresh)                 Loaded
//!   Init ──────────────────> NewNote   Init ───────> DecryptNote
//!
//!   NewNote ──SubmitNew(valid)──> EditNote            [Seal]
//!   DecryptNote ──SubmitUnlock──> DecryptNote         [Open]
//!   DecryptNote ──Unlocked──────> EditNote
//!   DecryptNote ──UnlockFailed──> DecryptNote         [Notice]
//!   EditNote ──Edit─────────────> EditNote            [Seal]
//!   EditNote ──Lock─────────────> DecryptNote
//!   EditNote ──ChangePasswordRequested──> ChangePassword
//!   ChangePassword ──SubmitChangePassword(valid)──> EditNote  [Seal]
//!   ChangePassword ──CancelChangePassword──> EditNote
//! ```

use super::event::{Effect, Event, Intent, Notice, SealRequest};
use super::state::{NoteState, Unlocked};
use crate::crypto::{validate_fields, Password};

/// Result of applying one event.
#[derive(Debug)]
pub struct Transition {
    pub state: NoteState,
    pub effects: Vec<Effect>,
}

impl Transition {
    /// Keep the current state.
    fn stay(state: &NoteState) -> Self {
        Self {
            state: state.clone(),
            effects: Vec::new(),
        }
    }

    /// Move to `state` and ask the host to show it.
    fn enter(state: NoteState) -> Self {
        let view = state.view();
        let mut effects = vec![Effect::Intent(Intent::Show(view))];
        if let Some(field) = view.first_field() {
            effects.push(Effect::Intent(Intent::Focus(field)));
        }
        Self { state, effects }
    }

    /// Queue an effect ahead of the ones already present.
    fn after(mut self, effect: Effect) -> Self {
        self.effects.insert(0, effect);
        self
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl SealRequest {
    fn for_session(unlocked: &Unlocked) -> Self {
        Self {
            password: unlocked.password.clone(),
            hint: unlocked.hint.clone(),
            plaintext: unlocked.plaintext.clone(),
        }
    }
}

/// Apply `event` to `state`.
///
/// Events that make no sense in the current state are ignored.
pub fn reduce(state: &NoteState, event: Event) -> Transition {
    match (state, event) {
        (NoteState::Init, Event::Loaded { name, hint, fresh }) => {
            if fresh {
                Transition::enter(NoteState::NewNote { name })
            } else {
                Transition::enter(NoteState::DecryptNote { hint })
            }
        }

        (
            NoteState::NewNote { name },
            Event::SubmitNew {
                password,
                confirm,
                hint,
            },
        ) => match checked(password, &confirm) {
            Ok(password) => {
                // A new note starts out with its own name as the body.
                let unlocked = Unlocked::new(password, hint, name.as_str());
                let seal = SealRequest::for_session(&unlocked);
                Transition::enter(NoteState::EditNote(unlocked)).after(Effect::Seal(seal))
            }
            Err(rejected) => Transition::stay(state).with(rejected),
        },

        (NoteState::DecryptNote { .. }, Event::SubmitUnlock { password }) => {
            Transition::stay(state).with(Effect::Open { password })
        }

        (NoteState::DecryptNote { hint }, Event::Unlocked { password, plaintext }) => {
            Transition::enter(NoteState::EditNote(Unlocked {
                password,
                hint: hint.clone(),
                plaintext,
            }))
        }

        (NoteState::DecryptNote { .. }, Event::UnlockFailed) => {
            Transition::stay(state).with(Effect::Intent(Intent::Notice(Notice::DecryptionFailed)))
        }

        (NoteState::EditNote(unlocked), Event::Edit { plaintext }) => {
            let edited = Unlocked {
                password: unlocked.password.clone(),
                hint: unlocked.hint.clone(),
                plaintext,
            };
            let seal = SealRequest::for_session(&edited);
            Transition {
                state: NoteState::EditNote(edited),
                effects: vec![Effect::Seal(seal)],
            }
        }

        (NoteState::EditNote(unlocked), Event::Lock) => Transition::enter(NoteState::DecryptNote {
            hint: unlocked.hint.clone(),
        })
        .with(Effect::Intent(Intent::Notice(Notice::Locked))),

        (NoteState::EditNote(unlocked), Event::ChangePasswordRequested) => {
            Transition::enter(NoteState::ChangePassword(unlocked.clone()))
        }

        (
            NoteState::ChangePassword(unlocked),
            Event::SubmitChangePassword {
                password,
                confirm,
                hint,
            },
        ) => match checked(password, &confirm) {
            Ok(password) => {
                let rekeyed = Unlocked {
                    password,
                    hint,
                    plaintext: unlocked.plaintext.clone(),
                };
                let seal = SealRequest::for_session(&rekeyed);
                Transition::enter(NoteState::EditNote(rekeyed))
                    .after(Effect::Seal(seal))
                    .with(Effect::Intent(Intent::Notice(Notice::PasswordChanged)))
            }
            Err(rejected) => Transition::stay(state).with(rejected),
        },

        (NoteState::ChangePassword(unlocked), Event::CancelChangePassword) => {
            Transition::enter(NoteState::EditNote(unlocked.clone()))
        }

        (NoteState::EditNote(unlocked) | NoteState::ChangePassword(unlocked), Event::Close) => {
            Transition {
                state: NoteState::DecryptNote {
                    hint: unlocked.hint.clone(),
                },
                effects: Vec::new(),
            }
        }

        (state, event) => {
            tracing::debug!(
                event = event.name(),
                view = %state.view(),
                "event ignored in current state"
            );
            Transition::stay(state)
        }
    }
}

/// Validate a password form, handing back the password or the field errors
/// to show.
fn checked(password: Password, confirm: &Password) -> Result<Password, Effect> {
    let errors = validate_fields(password.expose(), confirm.expose());
    if errors.is_empty() {
        Ok(password)
    } else {
        Err(Effect::Intent(Intent::FieldErrors(errors)))
    }
}
