//! Error types for the play loop.
//!
//! Store errors are defined here rather than in `signquest-store` so the
//! controller can classify failures without string matching.

use thiserror::Error;

/// Errors that halt a round.
#[derive(Debug, Error)]
pub enum GameError {
    /// The asset catalog cannot produce an image.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Errors that can occur when talking to the remote profile store.
///
/// None of these are ever shown to the player: a failed fetch leaves the
/// session without a profile and a failed notification is dropped.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The store returned an error response.
    #[error("store error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// No profile exists for the identity.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Returns `true` if the store answered but had nothing for us, as
    /// opposed to the request never completing.
    pub fn is_missing_profile(&self) -> bool {
        matches!(self, StoreError::ProfileNotFound(_))
    }
}
