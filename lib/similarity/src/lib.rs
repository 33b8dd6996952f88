//! # chartmatch Similarity
//!
//! Ranks a reference corpus of historical figures by similarity to a natal
//! chart, with a per-factor breakdown and short commonality notes.
//!
//! ## Features
//!
//! - **Six factors**: day master, strength, element balance, structure,
//!   day pillar and symbolic stars, each scored in [0, 1]
//! - **Weighted aggregation**: fixed default weights, optionally overridden
//! - **Stable ranking**: ties keep corpus order
//! - **Explainability**: integer sub-scores and up to three commonalities
//!
//! ## Example
//!
//! ```rust
//! use chartmatch_core::{Chart, Corpus, DayMaster, Stem};
//! use chartmatch_similarity::Ranker;
//!
//! let corpus = Corpus::from_json_str(r#"[{
//!     "id": "p1",
//!     "name": "Example Person",
//!     "day_master": {"stem": "甲", "element": "Wood", "polarity": "Yang"},
//!     "strength": "Balanced",
//!     "structure": "Direct Officer",
//!     "dominant_elements": ["Wood", "Fire"]
//! }]"#).unwrap();
//!
//! let chart = Chart::new(DayMaster::from_stem(Stem::Jia));
//! let matches = Ranker::new(&corpus).rank(&chart, 5);
//! assert_eq!(matches[0].breakdown.day_master, 100);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Chart    │────>│  Features   │────>│   Factors   │
//! │   (input)   │     │ (extractor) │     │ (6 scorers) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!       ┌─────────────┐                          │
//!       │   Corpus    │─────────────────────────>│
//!       │ (read-only) │                          │
//!       └─────────────┘               ┌─────────────┐
//!                                     │   Ranker    │
//!                                     │ (weighted)  │
//!                                     └─────────────┘
//!                                            │
//!                                     ┌─────────────┐
//!                                     │  Explain    │
//!                                     │  (labels)   │
//!                                     └─────────────┘
//! ```

pub mod factors;
pub mod weights;
pub mod rank;
pub mod explain;

// Re-export main types for convenience
pub use factors::{FactorKind, FactorScore};
pub use weights::{FactorWeights, WeightsError};
pub use rank::{FactorBreakdown, MatchResult, Ranker, MAX_COMMONALITIES};
pub use explain::{MatchStats, MatchStrength};
