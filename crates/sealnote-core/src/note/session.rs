//! Session driver: runs the note state machine against a cipher and a
//! persistence gateway.
//!
//! ## Save policy
//!
//! Every accepted edit seals the whole body and persists it before
//! `dispatch` returns. Saves are therefore strictly ordered, the persisted
//! note always reflects the last accepted edit, and [`Session::revision`]
//! grows by exactly one per successful save. Nothing is coalesced.
//!
//! ## Failure
//!
//! The new state is committed only after every effect of a transition has
//! succeeded. If sealing or saving fails, the session keeps its previous
//! state and the previously persisted envelope.

use std::collections::VecDeque;

use super::event::{Effect, Event, Intent, SealRequest, UserEvent};
use super::reducer::reduce;
use super::state::{NoteState, View};
use crate::crypto::{AgeCipher, Cipher, EncryptionService, Password, Plaintext};
use crate::error::{Result, SealnoteError};
use crate::storage::envelope::{self, Envelope};
use crate::storage::traits::PersistenceGateway;

/// One open note.
///
/// Dropping the session wipes the password and plaintext it holds.
pub struct Session<G, C = AgeCipher> {
    service: EncryptionService<C>,
    gateway: G,
    name: String,
    state: NoteState,
    envelope: Envelope,
    revision: u64,
}

impl<G: PersistenceGateway, C: Cipher> Session<G, C> {
    /// Create a session in `Init`. Call [`Session::load`] next.
    ///
    /// `name` is the note's display name; a brand-new note starts out with
    /// it as its body.
    pub fn new(service: EncryptionService<C>, gateway: G, name: impl Into<String>) -> Self {
        Self {
            service,
            gateway,
            name: name.into(),
            state: NoteState::Init,
            envelope: Envelope::sentinel(),
            revision: 0,
        }
    }

    /// Read the persisted note and route to `NewNote` or `DecryptNote`.
    ///
    /// Any secrets from an earlier load are dropped first.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::Format` if the blob is not a readable envelope,
    /// or the gateway's error if it cannot be read. The session stays in
    /// `Init` in both cases.
    pub fn load(&mut self) -> Result<Vec<Intent>> {
        self.state = NoteState::Init;

        let raw = self.gateway.load()?;
        let envelope = envelope::decode(&raw)?;
        let fresh = raw.is_empty() && envelope.is_sentinel();
        tracing::info!(
            note = %self.name,
            fresh,
            version = %envelope.version,
            "note loaded"
        );

        let event = Event::Loaded {
            name: self.name.clone(),
            hint: envelope.hint.clone(),
            fresh,
        };
        self.envelope = envelope;
        self.apply(event)
    }

    /// Apply a user action and run its effects.
    ///
    /// Returns what the host should present. Validation problems and wrong
    /// passwords are reported as intents, not errors. Unlocking only happens
    /// through `SubmitUnlock` and a successful open of the stored envelope.
    ///
    /// # Errors
    ///
    /// Returns the error of a failed seal, save or (for a malformed envelope)
    /// open. The session state is left unchanged.
    pub fn dispatch(&mut self, event: UserEvent) -> Result<Vec<Intent>> {
        self.apply(event.into())
    }

    fn apply(&mut self, event: Event) -> Result<Vec<Intent>> {
        let from = self.state.view();
        let event_name = event.name();

        let transition = reduce(&self.state, event);
        let mut state = transition.state;
        let mut queue: VecDeque<Effect> = transition.effects.into();
        let mut intents = Vec::new();

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::Open { password } => {
                    let follow_up = self.open_current(password)?;
                    let next = reduce(&state, follow_up);
                    state = next.state;
                    queue.extend(next.effects);
                }
                Effect::Seal(request) => self.persist(&request)?,
                Effect::Intent(intent) => intents.push(intent),
            }
        }

        tracing::debug!(event = event_name, from = %from, to = %state.view(), "note transition");
        self.state = state;
        Ok(intents)
    }

    fn open_current(&self, password: Password) -> Result<Event> {
        match self.service.open_text(&self.envelope.encoded_data, &password) {
            Ok(plaintext) => Ok(Event::Unlocked {
                password,
                plaintext: Plaintext::new(plaintext),
            }),
            Err(SealnoteError::DecryptionFailed) => {
                tracing::info!(note = %self.name, "unlock attempt failed");
                Ok(Event::UnlockFailed)
            }
            Err(err) => Err(err),
        }
    }

    fn persist(&mut self, request: &SealRequest) -> Result<()> {
        let encoded = self
            .service
            .seal_to_text(request.plaintext.as_str(), &request.password)?;
        let envelope = Envelope::new(request.hint.clone(), encoded);
        let raw = envelope::encode(&envelope)?;

        self.gateway.save(&raw).map_err(|err| {
            tracing::warn!(note = %self.name, error = %err, "note save failed");
            err
        })?;

        self.envelope = envelope;
        self.revision += 1;
        tracing::info!(
            note = %self.name,
            revision = self.revision,
            bytes = raw.len(),
            "note sealed and saved"
        );
        Ok(())
    }

    // --- User surface ---

    /// Submit the new-note form.
    pub fn submit_new(
        &mut self,
        password: impl Into<Password>,
        confirm: impl Into<Password>,
        hint: impl Into<String>,
    ) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::SubmitNew {
            password: password.into(),
            confirm: confirm.into(),
            hint: hint.into(),
        })
    }

    /// Submit an unlock attempt.
    pub fn submit_unlock(&mut self, password: impl Into<Password>) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::SubmitUnlock {
            password: password.into(),
        })
    }

    /// Replace the note body.
    pub fn edit(&mut self, plaintext: impl Into<String>) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::edit(plaintext))
    }

    pub fn lock(&mut self) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::Lock)
    }

    pub fn request_change_password(&mut self) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::ChangePasswordRequested)
    }

    /// Submit the change-password form.
    pub fn submit_change_password(
        &mut self,
        password: impl Into<Password>,
        confirm: impl Into<Password>,
        hint: impl Into<String>,
    ) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::SubmitChangePassword {
            password: password.into(),
            confirm: confirm.into(),
            hint: hint.into(),
        })
    }

    pub fn cancel_change_password(&mut self) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::CancelChangePassword)
    }

    /// Lock the note ahead of the host closing it.
    pub fn close(&mut self) -> Result<Vec<Intent>> {
        self.dispatch(UserEvent::Close)
    }
}

impl<G, C> Session<G, C> {
    pub fn state(&self) -> &NoteState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view()
    }

    /// The last envelope loaded or saved.
    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Hint of the current note, as the session knows it.
    pub fn hint(&self) -> &str {
        match &self.state {
            NoteState::DecryptNote { hint } => hint,
            NoteState::EditNote(unlocked) | NoteState::ChangePassword(unlocked) => &unlocked.hint,
            NoteState::Init | NoteState::NewNote { .. } => &self.envelope.hint,
        }
    }

    /// The decrypted body, while the note is unlocked.
    pub fn plaintext(&self) -> Option<&str> {
        self.state.unlocked().map(|unlocked| unlocked.plaintext.as_str())
    }

    /// Number of successful saves in this session.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    /// End the session and hand back the gateway. Secrets are dropped.
    pub fn into_gateway(self) -> G {
        self.gateway
    }
}
