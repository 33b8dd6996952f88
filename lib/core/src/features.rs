//! Feature extraction
//!
//! Reduces a [`Chart`] to the six attributes the similarity factors compare.
//! Missing optional data degrades to neutral values: no percentages become a
//! zero vector, no stars a zero count, no day pillar `None`.

use crate::chart::{Chart, DayMaster};
use crate::element::Stem;
use crate::labels::{StrengthLabel, StructureLabel};
use crate::vector::ElementVector;
use tracing::warn;

/// Comparable attributes of one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFeatures {
    pub day_master: DayMaster,
    pub strength: StrengthLabel,
    /// Percentages divided by their sum (zero sum treated as 1)
    pub elements: ElementVector,
    pub structure: StructureLabel,
    pub day_pillar_stem: Option<Stem>,
    pub star_count: usize,
}

impl ChartFeatures {
    /// Extract features from a chart. Pure and infallible.
    pub fn extract(chart: &Chart) -> Self {
        if chart.element_percentages.is_none() {
            warn!("chart has no element percentages, element factor will score 0");
        }
        if chart.stars.is_none() {
            warn!("chart has no star list, star factor will score 0");
        }
        if !chart.has_complete_pillars() {
            warn!(pillars = chart.pillars.len(), "chart pillars incomplete");
        }

        let elements = chart
            .element_percentages
            .map(|p| p.to_vector().sum_normalized())
            .unwrap_or_default();

        Self {
            day_master: chart.day_master,
            strength: StrengthLabel::new(chart.strength()),
            elements,
            structure: StructureLabel::new(chart.structure()),
            day_pillar_stem: chart.day_pillar_stem(),
            star_count: chart.star_count(),
        }
    }
}

impl From<&Chart> for ChartFeatures {
    fn from(chart: &Chart) -> Self {
        Self::extract(chart)
    }
}
