//! Core data model types for signquest.
//!
//! These are the values the round controller owns and hands out to its
//! collaborators: asset identifiers, player profiles, the current round,
//! and the transient feedback slot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio::time::Instant;

use crate::answer::{normalize_answer, strip_extension};
use crate::progression::tier_of;

/// Identifier of a displayable image, e.g. `"ThankYou.png"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The human-readable part of the identifier, without the 4-character
    /// extension suffix.
    pub fn stem(&self) -> &str {
        strip_extension(&self.0)
    }

    /// The normalized answer token for this asset.
    pub fn answer(&self) -> String {
        normalize_answer(&self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Three-level display category derived purely from accumulated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EvolutionTier {
    T1,
    T2,
    T3,
}

impl EvolutionTier {
    /// Artwork shown for this tier.
    pub fn artwork(&self) -> &'static str {
        match self {
            EvolutionTier::T1 => "Biff.png",
            EvolutionTier::T2 => "Buuf.png",
            EvolutionTier::T3 => "Boof.png",
        }
    }
}

impl fmt::Display for EvolutionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvolutionTier::T1 => write!(f, "T1"),
            EvolutionTier::T2 => write!(f, "T2"),
            EvolutionTier::T3 => write!(f, "T3"),
        }
    }
}

impl FromStr for EvolutionTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t1" | "biff" | "biff.png" => Ok(EvolutionTier::T1),
            "t2" | "buuf" | "buuf.png" => Ok(EvolutionTier::T2),
            "t3" | "boof" | "boof.png" => Ok(EvolutionTier::T3),
            other => Err(format!("unknown evolution tier: {other}")),
        }
    }
}

/// A player's progression record.
///
/// The tier is always derived from points; there is no way to build a
/// profile whose tier disagrees with its points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileRecord")]
pub struct Profile {
    points: u32,
    streak: u32,
    evolution_tier: EvolutionTier,
}

impl Profile {
    pub fn new(points: u32, streak: u32) -> Self {
        Self {
            points,
            streak,
            evolution_tier: tier_of(points),
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn evolution_tier(&self) -> EvolutionTier {
        self.evolution_tier
    }

    /// More than two correct answers in a row.
    pub fn on_fire(&self) -> bool {
        self.streak > 2
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Wire shape of a profile. Any stored tier is ignored.
#[derive(Deserialize)]
struct ProfileRecord {
    #[serde(default)]
    points: u32,
    #[serde(default)]
    streak: u32,
}

impl From<ProfileRecord> for Profile {
    fn from(record: ProfileRecord) -> Self {
        Profile::new(record.points, record.streak)
    }
}

/// Opaque, stable identity of an authenticated user (their email).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An authenticated session as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(email),
        }
    }
}

/// Who is playing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Player {
    #[default]
    Anonymous,
    Authenticated {
        identity: Identity,
        /// Local mirror of the remote record. `None` until a fetch succeeds
        /// or the first outcome materializes a default profile.
        profile: Option<Profile>,
    },
}

impl Player {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Player::Anonymous => None,
            Player::Authenticated { identity, .. } => Some(identity),
        }
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Player::Anonymous => None,
            Player::Authenticated { profile, .. } => profile.as_ref(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Player::Authenticated { .. })
    }
}

/// Result of judging a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
        }
    }
}

/// The image currently on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pub current_asset: Option<AssetId>,
    pub revealed: bool,
}

impl Round {
    /// The answer token, but only while the player has asked to see it.
    pub fn revealed_answer(&self) -> Option<String> {
        if !self.revealed {
            return None;
        }
        self.current_asset.as_ref().map(AssetId::answer)
    }
}

/// Styling applied to the feedback message and the image border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStyle {
    #[default]
    Neutral,
    Success,
    Failure,
}

/// The transient message shown after an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub message: Option<String>,
    pub style: FeedbackStyle,
    pub expires_at: Option<Instant>,
}

impl Feedback {
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}

/// Snapshot of everything a renderer needs to draw the play screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub asset: Option<AssetId>,
    pub revealed_answer: Option<String>,
    pub feedback: Feedback,
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
}

impl RoundView {
    pub fn evolution_tier(&self) -> Option<EvolutionTier> {
        self.profile.map(|p| p.evolution_tier())
    }
}
