//! # chartmatch Core
//!
//! Core library for chartmatch.
//!
//! This crate provides the data model shared by the similarity and rarity
//! engines:
//!
//! - [`Chart`] - A natal chart as produced by the chart computation service
//! - [`ChartFeatures`] - The comparable attributes extracted from a chart
//! - [`Corpus`] - The validated, read-only table of reference people
//! - [`StrengthLabel`] / [`StructureLabel`] - Free-text labels classified once
//! - [`ElementVector`] - Five-element vectors with cosine similarity
//!
//! ## Example
//!
//! ```rust
//! use chartmatch_core::{Chart, ChartFeatures, DayMaster, ElementPercentages, Stem};
//!
//! let chart = Chart::new(DayMaster::from_stem(Stem::Jia))
//!     .with_analysis("Balanced", "Direct Officer")
//!     .with_percentages(ElementPercentages::new(60.0, 10.0, 10.0, 10.0, 10.0));
//!
//! let features = ChartFeatures::extract(&chart);
//! assert_eq!(features.star_count, 0);
//! ```

pub mod chart;
pub mod corpus;
pub mod element;
pub mod error;
pub mod features;
pub mod labels;
pub mod vector;

pub use chart::{Chart, DayMaster, ElementPercentages, Pillar, PillarPosition, ProfessionalAnalysis};
pub use corpus::{Biography, Corpus, CorpusEntry, ReferencePerson};
pub use element::{Element, Polarity, Stem};
pub use error::{Error, Result};
pub use features::ChartFeatures;
pub use labels::{FamilySet, StrengthClass, StrengthLabel, StructureFamily, StructureLabel, StructureRarity};
pub use vector::ElementVector;
