//! Session holder: the signed-in display name.
//!
//! Independent of the task collection: signing in or out never touches the
//! task slot.

use crate::domain::{DisplayName, Session};
use crate::store::{PersistentStore, StorageBackend};

/// Holds the current [`Session`] and mirrors it to the user slot.
///
/// # Examples
///
/// ```
/// use arcadia_tasks::domain::DisplayName;
/// use arcadia_tasks::session::SessionHolder;
/// use arcadia_tasks::store::memory::InMemoryBackend;
/// use arcadia_tasks::store::PersistentStore;
///
/// let mut holder = SessionHolder::load(PersistentStore::new(InMemoryBackend::new()));
/// assert!(holder.current().is_none());
///
/// holder.sign_in(DisplayName::parse("Ada").unwrap());
/// assert_eq!(holder.current().unwrap().name.as_str(), "Ada");
///
/// holder.sign_out();
/// assert!(holder.current().is_none());
/// ```
pub struct SessionHolder<B> {
    current: Option<Session>,
    store: PersistentStore<B>,
}

impl<B: StorageBackend> SessionHolder<B> {
    /// Loads any persisted session.
    pub fn load(store: PersistentStore<B>) -> Self {
        let current = store.load_user();
        tracing::debug!(signed_in = current.is_some(), "loaded session");
        Self { current, store }
    }

    /// Stores a session for `name`, replacing any prior one.
    pub fn sign_in(&mut self, name: DisplayName) {
        let session = Session::new(name);
        self.store.save_user(&session);
        tracing::debug!(name = session.name.as_str(), "signed in");
        self.current = Some(session);
    }

    /// Clears the session.
    pub fn sign_out(&mut self) {
        self.store.clear_user();
        tracing::debug!("signed out");
        self.current = None;
    }

    /// Returns the current session, if signed in.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Returns `true` if a session is present.
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }
}
