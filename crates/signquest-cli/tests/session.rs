//! End-to-end play sessions against the mock profile store.
//!
//! These drive the round controller the way the terminal screen does and
//! check what reaches the store.

use std::sync::Arc;
use std::time::Duration;

use signquest_core::catalog::{AssetCatalog, RandomSelector};
use signquest_core::controller::{ControllerConfig, RoundController, CORRECT_MESSAGE};
use signquest_core::model::{EvolutionTier, Outcome, Profile, Session};
use signquest_core::traits::FixedSession;
use signquest_store::mock::MockStore;

const EMAIL: &str = "sam@example.com";

fn single_image_controller(store: Arc<MockStore>) -> RoundController {
    let selector = RandomSelector::with_seed(AssetCatalog::new(["ILoveYou.png"]), 3);
    let mut controller =
        RoundController::new(Box::new(selector), store, ControllerConfig::default());
    controller.start().unwrap();
    controller
}

#[tokio::test]
async fn returning_player_evolves() {
    let store = Arc::new(MockStore::with_profile(EMAIL, Profile::new(18, 0)));
    let mut c = single_image_controller(store.clone());

    assert!(c.sync_session(&FixedSession(Some(Session::new(EMAIL)))));
    c.refresh_profile().await;
    assert_eq!(store.fetch_count(), 1);
    assert_eq!(c.profile(), Some(&Profile::new(18, 0)));

    c.submit_guess("i love you").unwrap();
    c.submit_guess("I Love You").unwrap();
    let profile = c.profile().copied().unwrap();
    assert_eq!(profile.points(), 20);
    assert_eq!(profile.evolution_tier(), EvolutionTier::T2);
    assert_eq!(c.view().evolution_tier(), Some(EvolutionTier::T2));

    c.toggle_reveal();
    c.submit_guess("love").unwrap();
    assert_eq!(c.profile(), Some(&Profile::new(20, 0)));

    c.drain_notifications().await;
    assert_eq!(store.count(Outcome::Correct), 2);
    assert_eq!(store.count(Outcome::Incorrect), 2);
    assert!(store
        .notifications()
        .iter()
        .all(|(_, identity)| identity.as_str() == EMAIL));
}

#[tokio::test]
async fn unreachable_store_plays_the_same() {
    let guesses = ["iloveyou", "nope", "iloveyou", "iloveyou", "iloveyou", "iloveyou"];

    let up = Arc::new(MockStore::with_profile(EMAIL, Profile::new(0, 0)));
    let down = Arc::new(MockStore::unreachable());
    let mut a = single_image_controller(up.clone());
    let mut b = single_image_controller(down.clone());

    for c in [&mut a, &mut b] {
        c.set_session(Some(Session::new(EMAIL)));
        c.refresh_profile().await;
        for guess in guesses {
            c.submit_guess(guess).unwrap();
        }
        c.drain_notifications().await;
    }

    // 1, reset, then 1 + 1 + 1 + 2.
    assert_eq!(a.profile(), Some(&Profile::new(6, 4)));
    assert_eq!(a.profile(), b.profile());
    assert_eq!(a.round(), b.round());
    assert_eq!(up.notifications(), down.notifications());
}

#[tokio::test]
async fn late_fetch_replaces_local_progress() {
    let store = Arc::new(MockStore::with_profile(EMAIL, Profile::new(33, 2)));
    let mut c = single_image_controller(store);
    c.set_session(Some(Session::new(EMAIL)));

    // Guess lands before the profile fetch resolves.
    c.submit_guess("iloveyou").unwrap();
    assert_eq!(c.profile(), Some(&Profile::new(1, 1)));

    c.refresh_profile().await;
    assert_eq!(c.profile(), Some(&Profile::new(33, 2)));
}

#[tokio::test]
async fn sign_out_stops_progression() {
    let store = Arc::new(MockStore::new(Default::default()));
    let mut c = single_image_controller(store.clone());
    c.set_session(Some(Session::new(EMAIL)));
    c.submit_guess("iloveyou").unwrap();

    assert!(c.set_session(None));
    c.submit_guess("iloveyou").unwrap();
    c.toggle_reveal();
    assert!(c.profile().is_none());

    c.drain_notifications().await;
    assert_eq!(store.notifications().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn feedback_window_comes_from_config() {
    let store = Arc::new(MockStore::new(Default::default()));
    let selector = RandomSelector::new(AssetCatalog::new(["Yes.png"]));
    let config = ControllerConfig {
        feedback_window: Duration::from_millis(500),
    };
    let mut c = RoundController::new(Box::new(selector), store, config);
    c.start().unwrap();

    c.submit_guess("yes").unwrap();
    assert_eq!(c.feedback().message.as_deref(), Some(CORRECT_MESSAGE));

    tokio::time::sleep(Duration::from_millis(499)).await;
    assert!(!c.feedback().is_empty());
    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(c.feedback().is_empty());
}
