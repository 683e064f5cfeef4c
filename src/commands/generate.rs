//! Layout generation command
//!
//! Runs the layout engine once over a word list.

use crate::core::WordEntry;
use crate::layout::{LayoutConfig, LayoutEngine, LayoutResult};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for one generation run
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateConfig {
    /// Seed for the random fallback; `None` draws from system entropy
    pub seed: Option<u64>,
    pub layout: LayoutConfig,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>, layout: LayoutConfig) -> Self {
        Self { seed, layout }
    }
}

/// Generate a layout for `words`
#[must_use]
pub fn generate(words: &[WordEntry], config: &GenerateConfig) -> LayoutResult {
    let engine = LayoutEngine::new(config.layout);
    match config.seed {
        Some(seed) => engine.generate(words, &mut StdRng::seed_from_u64(seed)),
        None => engine.generate(words, &mut rand::rng()),
    }
}
