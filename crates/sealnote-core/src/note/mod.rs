//! The note lifecycle: states, events, the reducer and the session driver.
//!
//! A host creates a [`Session`] over a [`PersistenceGateway`], calls
//! [`Session::load`], and then feeds user actions in as [`UserEvent`]s (or via
//! the convenience methods on `Session`). Each call returns the
//! [`Intent`]s the host should present.
//!
//! [`PersistenceGateway`]: crate::storage::PersistenceGateway

pub mod event;
pub mod reducer;
pub mod session;
pub mod state;

pub use event::{Effect, Event, Intent, Notice, SealRequest, UserEvent};
pub use reducer::{reduce, Transition};
pub use session::Session;
pub use state::{Field, NoteState, Unlocked, View};
