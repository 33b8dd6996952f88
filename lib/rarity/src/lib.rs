//! # chartmatch Rarity
//!
//! Estimates how unusual a natal chart's configuration is, as a "1 in N"
//! ratio with a qualitative label.
//!
//! The estimate is an additive heuristic over five chart features (strength,
//! structure, element balance, star count, pillar stem diversity). The day
//! master is reported but never contributes. The total is mapped through a
//! piecewise, non-decreasing function to the ratio.
//!
//! ```rust
//! use chartmatch_core::{Chart, DayMaster, ElementPercentages, Stem};
//! use chartmatch_rarity::{RarityEstimator, RarityLabel};
//!
//! let chart = Chart::new(DayMaster::from_stem(Stem::Geng))
//!     .with_analysis("Strong", "Follow Wealth")
//!     .with_percentages(ElementPercentages::new(20.0, 10.0, 25.0, 45.0, 0.0));
//!
//! let rarity = RarityEstimator::new().estimate(&chart);
//! assert_eq!(rarity.score, 60);
//! assert_eq!(rarity.label, RarityLabel::Uncommon);
//! ```

pub mod estimator;
pub mod ratio;

pub use estimator::{RarityEstimator, RarityFactor, RarityFactorKind, RarityResult};
pub use ratio::{display_ratio, score_to_ratio, RarityLabel, BASE_RATIO};
