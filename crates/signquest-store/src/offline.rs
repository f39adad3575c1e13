//! Store used when no remote profile service is configured.

use async_trait::async_trait;

use signquest_core::error::StoreError;
use signquest_core::model::{Identity, Outcome, Profile};
use signquest_core::traits::ProfileStore;

/// Keeps nothing. Every fetch finds no profile and notifications vanish,
/// so signed-in play progresses only in the local mirror.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineStore;

#[async_trait]
impl ProfileStore for OfflineStore {
    fn name(&self) -> &str {
        "offline"
    }

    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile, StoreError> {
        Err(StoreError::ProfileNotFound(identity.to_string()))
    }

    async fn notify(&self, outcome: Outcome, identity: &Identity) -> Result<(), StoreError> {
        tracing::trace!(%outcome, %identity, "offline, notification not sent");
        Ok(())
    }
}
