//! The `signquest play` command.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use signquest_core::catalog::RandomSelector;
use signquest_core::controller::RoundController;
use signquest_core::model::{FeedbackStyle, RoundView};
use signquest_core::traits::{AssetRenderer, RoundSelector};
use signquest_store::config::load_config_from;
use signquest_store::create_store;

/// Prints the play screen as a few lines of text after every action.
struct TerminalRenderer;

impl AssetRenderer for TerminalRenderer {
    fn render(&mut self, view: &RoundView) {
        for line in describe(view) {
            println!("{line}");
        }
        println!();
    }
}

fn describe(view: &RoundView) -> Vec<String> {
    let mut lines = Vec::new();

    match &view.asset {
        Some(asset) => lines.push(format!("[image] {asset}")),
        None => lines.push("[image] (none)".to_string()),
    }
    if let Some(answer) = &view.revealed_answer {
        lines.push(format!("answer: {answer}"));
    }
    if let Some(message) = &view.feedback.message {
        let marker = match view.feedback.style {
            FeedbackStyle::Success => "+",
            FeedbackStyle::Failure => "x",
            FeedbackStyle::Neutral => "-",
        };
        lines.push(format!("{marker} {message}"));
    }

    match (&view.identity, &view.profile) {
        (Some(_), Some(profile)) => {
            let mood = if profile.on_fire() { "on fire" } else { "warming up" };
            lines.push(format!(
                "points: {}  streak: {} ({mood})  evolution: {} ({})",
                profile.points(),
                profile.streak(),
                profile.evolution_tier(),
                profile.evolution_tier().artwork(),
            ));
        }
        (Some(identity), None) => {
            lines.push(format!("signed in as {identity}, no progress yet"));
        }
        (None, _) => {
            lines.push("playing as guest, pass --email to track your progress".to_string());
        }
    }

    lines
}

pub async fn execute(
    email: Option<String>,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if email.is_some() {
        config.identity = email;
    }

    let store = create_store(&config.store)?;
    let catalog = config.asset_catalog();
    let selector: Box<dyn RoundSelector> = match seed {
        Some(seed) => Box::new(RandomSelector::with_seed(catalog, seed)),
        None => Box::new(RandomSelector::new(catalog)),
    };

    let mut controller = RoundController::new(selector, store, config.controller_config());
    controller.start()?;

    if controller.sync_session(&config.session_provider()) {
        controller.refresh_profile().await;
    }

    println!("Type your guess and press enter (:reveal shows the answer, :quit leaves).");
    println!();

    let mut renderer = TerminalRenderer;
    renderer.render(&controller.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":reveal" | ":r" => {
                controller.toggle_reveal();
            }
            _ => {
                if controller.submit_guess(&line)?.is_none() {
                    continue;
                }
            }
        }
        renderer.render(&controller.view());
    }

    controller.shutdown();
    controller.drain_notifications().await;

    if let Some(profile) = controller.profile() {
        println!(
            "Session over: {} points, evolution {}.",
            profile.points(),
            profile.evolution_tier().artwork()
        );
    }

    Ok(())
}
