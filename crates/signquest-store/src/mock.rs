//! Mock store for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use signquest_core::error::StoreError;
use signquest_core::model::{Identity, Outcome, Profile};
use signquest_core::traits::ProfileStore;

/// An in-memory profile store for exercising the play loop without a
/// backend. Records every notification it receives.
pub struct MockStore {
    /// Stored profiles keyed by identity.
    profiles: HashMap<String, Profile>,
    /// Fail every call with a network error.
    unreachable: bool,
    /// Number of fetches made.
    fetch_count: AtomicU32,
    /// Notifications received, in arrival order.
    notifications: Mutex<Vec<(Outcome, Identity)>>,
}

impl MockStore {
    /// Create a mock holding the given profiles.
    pub fn new(profiles: HashMap<String, Profile>) -> Self {
        Self {
            profiles,
            unreachable: false,
            fetch_count: AtomicU32::new(0),
            notifications: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock with a single stored profile.
    pub fn with_profile(email: &str, profile: Profile) -> Self {
        Self::new(HashMap::from([(email.to_string(), profile)]))
    }

    /// Create a mock whose every call fails.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new(HashMap::new())
        }
    }

    /// Number of profile fetches made.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Notifications received so far, including ones that were failed.
    pub fn notifications(&self) -> Vec<(Outcome, Identity)> {
        self.notifications.lock().unwrap().clone()
    }

    /// Count of received notifications for one outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|(o, _)| *o == outcome)
            .count()
    }
}

#[async_trait]
impl ProfileStore for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile, StoreError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        if self.unreachable {
            return Err(StoreError::Network("mock store unreachable".into()));
        }
        self.profiles
            .get(identity.as_str())
            .copied()
            .ok_or_else(|| StoreError::ProfileNotFound(identity.to_string()))
    }

    async fn notify(&self, outcome: Outcome, identity: &Identity) -> Result<(), StoreError> {
        self.notifications
            .lock()
            .unwrap()
            .push((outcome, identity.clone()));
        if self.unreachable {
            return Err(StoreError::Network("mock store unreachable".into()));
        }
        Ok(())
    }
}
