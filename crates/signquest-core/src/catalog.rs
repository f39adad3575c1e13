//! Asset catalog and round selection.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::GameError;
use crate::model::AssetId;
use crate::traits::RoundSelector;

/// Images shipped with the game.
pub const DEFAULT_ASSETS: &[&str] = &[
    "Goodbye.png",
    "Hello.png",
    "ILoveYou.png",
    "No.png",
    "Please.png",
    "Sorry.png",
    "ThankYou.png",
    "Yes.png",
    "YoureWelcome.png",
];

/// Fixed, ordered set of displayable images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCatalog {
    assets: Vec<AssetId>,
}

impl AssetCatalog {
    pub fn new<I, S>(assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: assets.into_iter().map(AssetId::new).collect(),
        }
    }

    pub fn assets(&self) -> &[AssetId] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ASSETS.iter().copied())
    }
}

/// Picks a uniformly random catalog entry on every call.
///
/// Consecutive rounds may show the same image.
pub struct RandomSelector {
    catalog: AssetCatalog,
    rng: StdRng,
}

impl RandomSelector {
    pub fn new(catalog: AssetCatalog) -> Self {
        Self {
            catalog,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selection sequence, for demos and tests.
    pub fn with_seed(catalog: AssetCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }
}

impl RoundSelector for RandomSelector {
    fn next_asset(&mut self) -> Result<AssetId, GameError> {
        self.catalog
            .assets
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| GameError::Configuration("asset catalog is empty".into()))
    }
}
