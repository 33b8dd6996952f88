//! # chartmatch
//!
//! Finds the historical figures whose natal charts most resemble a given
//! chart, and estimates how rare that chart's configuration is.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! chartmatch --chart chart.json --corpus corpus.json --top 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use chartmatch::prelude::*;
//!
//! // Load and validate the reference corpus once
//! let corpus = Corpus::from_path("corpus.json").unwrap();
//!
//! // A chart from the chart computation service
//! let chart = Chart::new(DayMaster::from_stem(Stem::Jia))
//!     .with_analysis("Balanced", "Direct Officer")
//!     .with_percentages(ElementPercentages::new(60.0, 10.0, 10.0, 10.0, 10.0));
//!
//! // Top matches, best first
//! let matches = Ranker::new(&corpus).rank(&chart, 5);
//!
//! // Rarity estimate
//! let rarity = RarityEstimator::new().estimate(&chart);
//! println!("{} - 1 in {}", rarity.label, rarity.ratio);
//! ```
//!
//! ## Crate Structure
//!
//! - [`chartmatch-core`](https://docs.rs/chartmatch-core) - Chart model, feature extraction, reference corpus
//! - [`chartmatch-similarity`](https://docs.rs/chartmatch-similarity) - Factor scorers and the ranking engine
//! - [`chartmatch-rarity`](https://docs.rs/chartmatch-rarity) - Rarity heuristic and ratio mapping

// Re-export core types
pub use chartmatch_core::{
    Chart, ChartFeatures, Corpus, CorpusEntry, DayMaster, Element, ElementPercentages, Pillar,
    PillarPosition, Polarity, ReferencePerson, Stem,
    Error, Result,
};

// Re-export similarity
pub use chartmatch_similarity::{
    FactorBreakdown, FactorKind, FactorWeights, MatchResult, MatchStats, MatchStrength, Ranker,
};

// Re-export rarity
pub use chartmatch_rarity::{RarityEstimator, RarityFactor, RarityLabel, RarityResult};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Chart, ChartFeatures, Corpus, DayMaster, Element, ElementPercentages, Pillar,
        PillarPosition, Polarity, ReferencePerson, Stem,
        Error, Result,
        FactorBreakdown, FactorKind, FactorWeights, MatchResult, MatchStats, MatchStrength, Ranker,
        RarityEstimator, RarityLabel, RarityResult,
    };
}
