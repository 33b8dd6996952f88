//! Similarity ranking engine
//!
//! Scores every corpus entry against a chart, aggregates the six factors
//! with the weight table and returns the best matches.

use crate::explain::MatchStrength;
use crate::factors::FactorKind;
use crate::weights::{FactorWeights, WeightsError};
use chartmatch_core::{Chart, ChartFeatures, Corpus, CorpusEntry, ReferencePerson};
use serde::Serialize;
use tracing::debug;

/// Maximum number of commonality notes on a match
pub const MAX_COMMONALITIES: usize = 3;

/// Per-factor sub-scores, each an integer in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FactorBreakdown {
    pub day_master: u8,
    pub strength: u8,
    pub elements: u8,
    pub structure: u8,
    pub day_pillar: u8,
    pub stars: u8,
}

impl FactorBreakdown {
    pub fn get(&self, kind: FactorKind) -> u8 {
        match kind {
            FactorKind::DayMaster => self.day_master,
            FactorKind::Strength => self.strength,
            FactorKind::Elements => self.elements,
            FactorKind::Structure => self.structure,
            FactorKind::DayPillar => self.day_pillar,
            FactorKind::Stars => self.stars,
        }
    }

    fn set(&mut self, kind: FactorKind, value: u8) {
        let slot = match kind {
            FactorKind::DayMaster => &mut self.day_master,
            FactorKind::Strength => &mut self.strength,
            FactorKind::Elements => &mut self.elements,
            FactorKind::Structure => &mut self.structure,
            FactorKind::DayPillar => &mut self.day_pillar,
            FactorKind::Stars => &mut self.stars,
        };
        *slot = value;
    }
}

/// One scored reference person
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'c> {
    pub person: &'c ReferencePerson,
    /// Weighted similarity in [0, 100]
    pub score: u8,
    pub strength: MatchStrength,
    pub breakdown: FactorBreakdown,
    pub commonalities: Vec<String>,
}

/// Ranks a borrowed corpus against charts
#[derive(Debug, Clone)]
pub struct Ranker<'c> {
    corpus: &'c Corpus,
    weights: FactorWeights,
}

impl<'c> Ranker<'c> {
    /// Create a ranker using the default weight table
    pub fn new(corpus: &'c Corpus) -> Self {
        Self {
            corpus,
            weights: FactorWeights::default(),
        }
    }

    /// Create a ranker with a custom weight table, validated and normalized
    pub fn with_weights(corpus: &'c Corpus, mut weights: FactorWeights) -> Result<Self, WeightsError> {
        weights.validate_and_normalize()?;
        Ok(Self { corpus, weights })
    }

    pub fn corpus(&self) -> &'c Corpus {
        self.corpus
    }

    pub fn weights(&self) -> &FactorWeights {
        &self.weights
    }

    /// Return the `top_n` most similar reference people, best first.
    /// Equal scores keep corpus order.
    pub fn rank(&self, chart: &Chart, top_n: usize) -> Vec<MatchResult<'c>> {
        let features = ChartFeatures::extract(chart);
        self.rank_features(&features, top_n)
    }

    pub fn rank_features(&self, features: &ChartFeatures, top_n: usize) -> Vec<MatchResult<'c>> {
        let mut results: Vec<MatchResult<'c>> = self
            .corpus
            .iter()
            .map(|entry| self.score_entry(features, entry))
            .collect();

        // sort_by is stable, so ties stay in corpus order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(top_n);

        debug!(
            corpus = self.corpus.len(),
            requested = top_n,
            returned = results.len(),
            best = results.first().map(|r| r.score),
            "ranked reference corpus"
        );

        results
    }

    /// Score a single corpus entry
    pub fn score_entry(&self, features: &ChartFeatures, entry: &'c CorpusEntry) -> MatchResult<'c> {
        let mut breakdown = FactorBreakdown::default();
        let mut commonalities = Vec::with_capacity(MAX_COMMONALITIES);
        let mut weighted_sum = 0.0;

        for kind in FactorKind::ALL {
            let factor = kind.score(features, entry);
            weighted_sum += factor.value * self.weights.get(kind);
            breakdown.set(kind, to_percent(factor.value));

            if kind.emits_commonality() {
                if let Some(note) = factor.commonality {
                    commonalities.push(note);
                }
            }
        }
        commonalities.truncate(MAX_COMMONALITIES);

        let score = to_percent(weighted_sum);
        MatchResult {
            person: entry.person(),
            score,
            strength: MatchStrength::from_score(score),
            breakdown,
            commonalities,
        }
    }
}

fn to_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}
