//! Thread-safe handle to a session store.
//!
//! Hosts that dispatch reviewer actions from more than one thread share one
//! `SharedSessionStore`. Every operation, including reads, goes through a
//! single lock around the whole store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use br_model::{FeatureId, FileId, Result, Session};

use crate::store::SessionStore;

/// Cloneable handle serializing all access to one [`SessionStore`].
#[derive(Debug, Clone, Default)]
pub struct SharedSessionStore {
    inner: Arc<Mutex<SessionStore>>,
}

impl SharedSessionStore {
    pub fn new(store: SessionStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Operations validate before writing; a poisoned store is still consistent.
    fn lock(&self) -> MutexGuard<'_, SessionStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current session while holding the lock.
    pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(self.lock().session())
    }

    pub fn revision(&self) -> u64 {
        self.lock().revision()
    }

    pub fn is_loaded(&self) -> bool {
        self.lock().is_loaded()
    }

    pub fn load_session(&self, session: Session) {
        self.lock().load_session(session);
    }

    pub fn toggle_feature_dismissed(&self, id: FeatureId) -> Result<bool> {
        self.lock().toggle_feature_dismissed(id)
    }

    pub fn set_features_dismissed(&self, ids: &[FeatureId], value: bool) -> Result<usize> {
        self.lock().set_features_dismissed(ids, value)
    }

    pub fn toggle_file_verified(&self, id: FileId) -> Result<bool> {
        self.lock().toggle_file_verified(id)
    }

    pub fn edit_feature_note(&self, id: FeatureId, note: impl Into<String>) -> Result<()> {
        self.lock().edit_feature_note(id, note)
    }

    pub fn delete_feature_note(&self, id: FeatureId) -> Result<()> {
        self.lock().delete_feature_note(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use br_model::Feature;
    use std::thread;

    #[test]
    fn concurrent_toggles_are_serialized() {
        let features = (1..=4).map(Feature::new).collect();
        let session = Session::new(features, vec![]).unwrap();
        let shared = SharedSessionStore::new(SessionStore::with_session(session));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for id in 1..=4 {
                        shared.toggle_feature_dismissed(FeatureId::new(id)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // An even number of toggles per feature lands back on the start value.
        shared.read(|session| {
            assert!(session.features().iter().all(|f| !f.is_dismissed()));
        });
        assert_eq!(shared.revision(), 1 + 8 * 4);
    }

    #[test]
    fn load_replaces_through_handle() {
        let shared = SharedSessionStore::default();
        assert!(!shared.is_loaded());
        shared.load_session(Session::new(vec![Feature::new(1)], vec![]).unwrap());
        assert!(shared.is_loaded());
        assert_eq!(shared.read(|s| s.features().len()), 1);
    }
}
