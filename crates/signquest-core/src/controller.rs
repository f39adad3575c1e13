//! Round controller.
//!
//! Judges guesses, drives the progression reducer, arms the feedback
//! timer and fires outcome notifications at the profile store. All state
//! changes happen synchronously inside the call that triggers them; only
//! the notifications run in the background, and nothing waits on them.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, instrument, warn, Instrument};
use uuid::Uuid;

use crate::answer;
use crate::error::{GameError, StoreError};
use crate::feedback::{FeedbackScheduler, FEEDBACK_WINDOW};
use crate::model::{
    AssetId, Feedback, FeedbackStyle, Identity, Outcome, Player, Profile, Round, RoundView, Session,
};
use crate::progression;
use crate::traits::{ProfileStore, RoundSelector, SessionProvider};

/// Message shown after a correct guess.
pub const CORRECT_MESSAGE: &str = "correct!";
/// Message shown after an incorrect guess.
pub const INCORRECT_MESSAGE: &str = "wrong, try again!";

/// Configuration for the round controller.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// How long feedback stays on screen.
    pub feedback_window: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            feedback_window: FEEDBACK_WINDOW,
        }
    }
}

/// The play screen's state and the operations the player can trigger.
pub struct RoundController {
    selector: Box<dyn RoundSelector>,
    store: Arc<dyn ProfileStore>,
    round: Round,
    // Set once the answer has been revealed in the current round.
    forfeited: bool,
    guess: String,
    player: Player,
    feedback: FeedbackScheduler,
    in_flight: JoinSet<()>,
    session_id: Uuid,
}

impl RoundController {
    pub fn new(
        selector: Box<dyn RoundSelector>,
        store: Arc<dyn ProfileStore>,
        config: ControllerConfig,
    ) -> Self {
        Self {
            selector,
            store,
            round: Round::default(),
            forfeited: false,
            guess: String::new(),
            player: Player::Anonymous,
            feedback: FeedbackScheduler::new(config.feedback_window),
            in_flight: JoinSet::new(),
            session_id: Uuid::new_v4(),
        }
    }

    /// Put the first image on screen.
    pub fn start(&mut self) -> Result<(), GameError> {
        let asset = self.selector.next_asset()?;
        debug!(session = %self.session_id, %asset, "round started");
        self.begin_round(asset);
        Ok(())
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.player.profile()
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback.current()
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> RoundView {
        RoundView {
            asset: self.round.current_asset.clone(),
            revealed_answer: self.round.revealed_answer(),
            feedback: self.feedback.current(),
            identity: self.player.identity().cloned(),
            profile: self.player.profile().copied(),
        }
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// React to a session change. Returns `true` if the identity changed,
    /// in which case the caller should refresh the profile.
    pub fn set_session(&mut self, session: Option<Session>) -> bool {
        match session {
            None => {
                let changed = self.player.is_authenticated();
                if changed {
                    debug!(session = %self.session_id, "signed out");
                }
                self.player = Player::Anonymous;
                changed
            }
            Some(session) => {
                if self.player.identity() == Some(&session.identity) {
                    return false;
                }
                debug!(session = %self.session_id, identity = %session.identity, "signed in");
                self.player = Player::Authenticated {
                    identity: session.identity,
                    profile: None,
                };
                true
            }
        }
    }

    /// Read the session provider and apply any change.
    pub fn sync_session(&mut self, provider: &dyn SessionProvider) -> bool {
        self.set_session(provider.current_session())
    }

    /// Fetch the signed-in player's profile and replace the local mirror.
    #[instrument(skip(self), fields(session = %self.session_id))]
    pub async fn refresh_profile(&mut self) {
        let Some(identity) = self.player.identity().cloned() else {
            return;
        };
        let result = self.store.fetch_profile(&identity).await;
        self.apply_fetched_profile(&identity, result);
    }

    /// Install the result of a profile fetch made for `identity`.
    ///
    /// Results for an identity that is no longer signed in are dropped.
    /// A failed fetch leaves the mirror as it is.
    pub fn apply_fetched_profile(
        &mut self,
        identity: &Identity,
        result: Result<Profile, StoreError>,
    ) {
        let Player::Authenticated {
            identity: current,
            profile,
        } = &mut self.player
        else {
            debug!("profile fetched after sign-out, discarding");
            return;
        };
        if *current != *identity {
            debug!(%identity, "profile fetched for a previous session, discarding");
            return;
        }
        match result {
            Ok(fetched) => {
                debug!(
                    points = fetched.points(),
                    streak = fetched.streak(),
                    "profile loaded"
                );
                *profile = Some(fetched);
            }
            Err(e) if e.is_missing_profile() => {
                debug!(%identity, "no stored profile");
            }
            Err(e) => {
                warn!(%identity, error = %e, "profile fetch failed");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Guessing
    // -----------------------------------------------------------------------

    /// Replace the contents of the guess buffer.
    pub fn update_guess(&mut self, text: impl Into<String>) {
        self.guess = text.into();
    }

    /// Judge the guess buffer against the image on screen.
    ///
    /// Returns `Ok(None)` without touching any state when the buffer is
    /// blank. Fails only if a correct guess needs a new image and the
    /// catalog cannot supply one; nothing changes in that case either.
    pub fn submit(&mut self) -> Result<Option<Outcome>, GameError> {
        if self.guess.trim().is_empty() {
            return Ok(None);
        }

        let correct = self
            .round
            .current_asset
            .as_ref()
            .is_some_and(|asset| answer::is_match(asset.as_str(), &self.guess));

        let outcome = if correct {
            let next = self.selector.next_asset()?;
            debug!(session = %self.session_id, guess = %self.guess, %next, "correct guess");
            self.begin_round(next);
            self.guess.clear();
            self.record(Outcome::Correct);
            self.feedback.show(CORRECT_MESSAGE, FeedbackStyle::Success);
            Outcome::Correct
        } else {
            debug!(session = %self.session_id, guess = %self.guess, "incorrect guess");
            self.guess.clear();
            self.record(Outcome::Incorrect);
            self.feedback.show(INCORRECT_MESSAGE, FeedbackStyle::Failure);
            Outcome::Incorrect
        };

        Ok(Some(outcome))
    }

    /// Fill the guess buffer and submit it.
    pub fn submit_guess(&mut self, text: &str) -> Result<Option<Outcome>, GameError> {
        self.update_guess(text);
        self.submit()
    }

    /// Show or hide the answer. Returns the new `revealed` state.
    ///
    /// The first reveal in a round forfeits it: a signed-in player takes an
    /// incorrect outcome. Hiding and revealing again costs nothing more.
    pub fn toggle_reveal(&mut self) -> bool {
        let revealing = !self.round.revealed;
        self.round.revealed = revealing;

        if revealing && !self.forfeited {
            self.forfeited = true;
            debug!(session = %self.session_id, "answer revealed, round forfeited");
            self.record(Outcome::Incorrect);
        }

        revealing
    }

    // -----------------------------------------------------------------------
    // Teardown
    // -----------------------------------------------------------------------

    /// Wait for outstanding notifications. Game logic never needs this;
    /// hosts call it before exiting so deliveries are not cut short.
    pub async fn drain_notifications(&mut self) {
        while self.in_flight.join_next().await.is_some() {}
    }

    /// Stop the feedback timer. The controller may be dropped afterwards.
    pub fn shutdown(&mut self) {
        self.feedback.cancel();
        debug!(session = %self.session_id, "play screen torn down");
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn begin_round(&mut self, asset: AssetId) {
        self.round = Round {
            current_asset: Some(asset),
            revealed: false,
        };
        self.forfeited = false;
    }

    /// Apply an outcome to a signed-in player's profile and tell the store.
    /// Anonymous play has no progression.
    fn record(&mut self, outcome: Outcome) {
        let Player::Authenticated { profile, .. } = &mut self.player else {
            return;
        };
        let next = progression::apply(profile.take().unwrap_or_default(), outcome);
        debug!(
            %outcome,
            points = next.points(),
            streak = next.streak(),
            tier = %next.evolution_tier(),
            "progression"
        );
        *profile = Some(next);
        self.dispatch(outcome);
    }

    fn dispatch(&mut self, outcome: Outcome) {
        let Some(identity) = self.player.identity().cloned() else {
            return;
        };

        // Reap finished deliveries so the set does not grow without bound.
        while self.in_flight.try_join_next().is_some() {}

        let store = Arc::clone(&self.store);
        let span = tracing::debug_span!("notify", session = %self.session_id, %outcome);
        self.in_flight.spawn(
            async move {
                match store.notify(outcome, &identity).await {
                    Ok(()) => debug!(store = store.name(), "notification delivered"),
                    Err(e) => warn!(store = store.name(), error = %e, "notification dropped"),
                }
            }
            .instrument(span),
        );
    }
}

impl Drop for RoundController {
    fn drop(&mut self) {
        self.feedback.cancel();
    }
}
