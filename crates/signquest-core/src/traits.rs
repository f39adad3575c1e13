//! Core trait definitions for the play screen's collaborators.
//!
//! The profile store is implemented by the `signquest-store` crate; the
//! session provider and renderer live with whatever hosts the screen.

use async_trait::async_trait;

use crate::error::{GameError, StoreError};
use crate::model::{AssetId, Identity, Outcome, Profile, RoundView, Session};

// ---------------------------------------------------------------------------
// Profile store
// ---------------------------------------------------------------------------

/// The remote system of record for player profiles.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Human-readable store name (e.g. "http").
    fn name(&self) -> &str;

    /// Fetch the stored profile for an identity.
    async fn fetch_profile(&self, identity: &Identity) -> Result<Profile, StoreError>;

    /// One-way outcome notification. Callers do not wait on or retry it.
    async fn notify(&self, outcome: Outcome, identity: &Identity) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// Session provider
// ---------------------------------------------------------------------------

/// Source of the current authentication state. Read-only to the core.
pub trait SessionProvider: Send + Sync {
    fn current_session(&self) -> Option<Session>;
}

/// A session provider that never changes.
#[derive(Debug, Clone, Default)]
pub struct FixedSession(pub Option<Session>);

impl SessionProvider for FixedSession {
    fn current_session(&self) -> Option<Session> {
        self.0.clone()
    }
}

// ---------------------------------------------------------------------------
// Round selection
// ---------------------------------------------------------------------------

/// Chooses the image for the next round.
pub trait RoundSelector: Send {
    fn next_asset(&mut self) -> Result<AssetId, GameError>;
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draws the play screen from a snapshot the controller exposes.
pub trait AssetRenderer {
    fn render(&mut self, view: &RoundView);
}
