//! Presentation helpers for ranked matches
//!
//! Qualitative labels for match scores and summary statistics over a ranking.

use crate::factors::FactorKind;
use crate::rank::MatchResult;
use crate::weights::FactorWeights;
use serde::Serialize;
use std::fmt;

pub const STRONG_THRESHOLD: u8 = 70;
pub const NOTABLE_THRESHOLD: u8 = 50;
pub const MODERATE_THRESHOLD: u8 = 35;

/// Qualitative strength of a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MatchStrength {
    Light,
    Moderate,
    Notable,
    Strong,
}

impl MatchStrength {
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            MatchStrength::Strong
        } else if score >= NOTABLE_THRESHOLD {
            MatchStrength::Notable
        } else if score >= MODERATE_THRESHOLD {
            MatchStrength::Moderate
        } else {
            MatchStrength::Light
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchStrength::Strong => "Strong",
            MatchStrength::Notable => "Notable",
            MatchStrength::Moderate => "Moderate",
            MatchStrength::Light => "Light",
        }
    }
}

impl fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Summary statistics for a ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchStats {
    /// Number of corpus entries scored
    pub corpus_size: usize,
    /// Number of results returned
    pub results_count: usize,
    pub average_score: f64,
    pub best_score: u8,
    /// Factor with the largest weighted contribution to the best match
    pub top_contributing_factor: Option<FactorKind>,
}

impl MatchStats {
    /// Compute stats from ranked results (assumed sorted best first)
    pub fn compute(results: &[MatchResult<'_>], corpus_size: usize, weights: &FactorWeights) -> Self {
        let Some(best) = results.first() else {
            return Self {
                corpus_size,
                results_count: 0,
                average_score: 0.0,
                best_score: 0,
                top_contributing_factor: None,
            };
        };

        let total: u32 = results.iter().map(|r| u32::from(r.score)).sum();
        let average_score = f64::from(total) / results.len() as f64;

        // Reverse scan replacing on ties, so the earliest factor wins
        let top_contributing_factor = FactorKind::ALL
            .into_iter()
            .rev()
            .map(|kind| (kind, f64::from(best.breakdown.get(kind)) * weights.get(kind)))
            .filter(|(_, contribution)| *contribution > 0.0)
            .fold(None, |acc: Option<(FactorKind, f64)>, (kind, contribution)| match acc {
                Some((_, best_so_far)) if best_so_far > contribution => acc,
                _ => Some((kind, contribution)),
            })
            .map(|(kind, _)| kind);

        Self {
            corpus_size,
            results_count: results.len(),
            average_score,
            best_score: best.score,
            top_contributing_factor,
        }
    }
}
