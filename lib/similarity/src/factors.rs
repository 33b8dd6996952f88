//! Per-factor similarity functions
//!
//! Each factor compares one extracted chart feature with the matching
//! attribute of a corpus entry. All functions return a score in [0.0, 1.0]
//! where 1.0 means identical, plus an optional commonality note.

use chartmatch_core::{
    ChartFeatures, CorpusEntry, DayMaster, ElementVector, Stem, StrengthClass, StrengthLabel,
    StructureLabel,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosine similarity above which the element factor notes a similar balance
pub const ELEMENT_COMMONALITY_THRESHOLD: f64 = 0.7;
/// Star count at which the star factor saturates
pub const STAR_SATURATION: usize = 10;
/// Ceiling of the star factor
pub const STAR_CAP: f64 = 0.5;

/// The six factors of the similarity model, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    DayMaster,
    Strength,
    Elements,
    Structure,
    DayPillar,
    Stars,
}

impl FactorKind {
    pub const ALL: [FactorKind; 6] = [
        FactorKind::DayMaster,
        FactorKind::Strength,
        FactorKind::Elements,
        FactorKind::Structure,
        FactorKind::DayPillar,
        FactorKind::Stars,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FactorKind::DayMaster => "Day Master",
            FactorKind::Strength => "Strength",
            FactorKind::Elements => "Element Balance",
            FactorKind::Structure => "Structure",
            FactorKind::DayPillar => "Day Pillar",
            FactorKind::Stars => "Symbolic Stars",
        }
    }

    /// Day pillar and stars stay silent so they do not repeat the day master note
    pub fn emits_commonality(self) -> bool {
        match self {
            FactorKind::DayMaster
            | FactorKind::Strength
            | FactorKind::Elements
            | FactorKind::Structure => true,
            FactorKind::DayPillar | FactorKind::Stars => false,
        }
    }

    /// Score this factor for a chart against one corpus entry
    pub fn score(self, chart: &ChartFeatures, entry: &CorpusEntry) -> FactorScore {
        let person = entry.person();
        match self {
            FactorKind::DayMaster => day_master_similarity(&chart.day_master, &person.day_master),
            FactorKind::Strength => strength_similarity(&chart.strength, entry.strength()),
            FactorKind::Elements => {
                element_similarity(&chart.elements, entry.dominant_vector())
            }
            FactorKind::Structure => structure_similarity(&chart.structure, entry.structure()),
            FactorKind::DayPillar => {
                FactorScore::silent(day_pillar_similarity(chart.day_pillar_stem, person.day_master.stem))
            }
            FactorKind::Stars => FactorScore::silent(star_similarity(chart.star_count)),
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one factor comparison
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    /// Similarity in [0.0, 1.0]
    pub value: f64,
    pub commonality: Option<String>,
}

impl FactorScore {
    pub fn silent(value: f64) -> Self {
        Self { value, commonality: None }
    }

    pub fn noted(value: f64, commonality: String) -> Self {
        Self {
            value,
            commonality: Some(commonality),
        }
    }
}

/// Tiered day master similarity
///
/// Only the highest tier applies: same stem 1.0, same element 0.5,
/// same polarity 0.2, otherwise 0.0.
pub fn day_master_similarity(chart: &DayMaster, reference: &DayMaster) -> FactorScore {
    if chart.stem == reference.stem {
        FactorScore::noted(
            1.0,
            format!(
                "Same Day Master ({} {} {})",
                reference.stem, reference.polarity, reference.element
            ),
        )
    } else if chart.element == reference.element {
        FactorScore::noted(0.5, format!("Same Day Master element ({})", reference.element))
    } else if chart.polarity == reference.polarity {
        FactorScore::silent(0.2)
    } else {
        FactorScore::silent(0.0)
    }
}

/// Strength similarity: exact label 1.0, same weak/strong lean 0.8
pub fn strength_similarity(chart: &StrengthLabel, reference: &StrengthLabel) -> FactorScore {
    if chart.matches_exactly(reference) {
        return FactorScore::noted(
            1.0,
            format!("Both have a {} Day Master", reference.text()),
        );
    }

    match (chart.class(), reference.class()) {
        (StrengthClass::Weak, StrengthClass::Weak)
        | (StrengthClass::Strong, StrengthClass::Strong) => FactorScore::silent(0.8),
        _ => FactorScore::silent(0.0),
    }
}

/// Cosine similarity between a sum-normalized chart distribution and a
/// reference dominant-element vector
pub fn element_similarity(chart: &ElementVector, reference: &ElementVector) -> FactorScore {
    let similarity = chart
        .sum_normalized()
        .cosine_similarity(reference)
        .clamp(0.0, 1.0);

    if similarity > ELEMENT_COMMONALITY_THRESHOLD {
        FactorScore::noted(similarity, "Similar elemental balance".to_string())
    } else {
        FactorScore::silent(similarity)
    }
}

/// Structure similarity
///
/// Exact label or containment either way scores 1.0. Labels that mention a
/// common family (both "officer", both "wealth") score 0.6.
pub fn structure_similarity(chart: &StructureLabel, reference: &StructureLabel) -> FactorScore {
    if chart.is_empty() || reference.is_empty() {
        return FactorScore::silent(0.0);
    }

    let a = chart.normalized();
    let b = reference.normalized();

    if a == b || a.contains(b) || b.contains(a) {
        return FactorScore::noted(1.0, format!("Same structure ({})", reference.text()));
    }

    if chart.shares_family(reference) {
        FactorScore::silent(0.6)
    } else {
        FactorScore::silent(0.0)
    }
}

/// 1.0 when the chart's day pillar stem equals the reference day master stem
pub fn day_pillar_similarity(chart_day_stem: Option<Stem>, reference_stem: Stem) -> f64 {
    match chart_day_stem {
        Some(stem) if stem == reference_stem => 1.0,
        _ => 0.0,
    }
}

/// Star count similarity, capped at [`STAR_CAP`]
pub fn star_similarity(star_count: usize) -> f64 {
    if star_count == 0 {
        return 0.0;
    }
    let saturation = (star_count as f64 / STAR_SATURATION as f64).min(1.0);
    saturation * STAR_CAP
}
