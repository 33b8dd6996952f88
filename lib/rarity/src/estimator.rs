//! Additive rarity heuristic
//!
//! Inspects one chart, adds points for each unusual feature, and maps the
//! total to a "1 in N" ratio. No corpus is involved.

use crate::ratio::{display_ratio, score_to_ratio, RarityLabel};
use ahash::AHashSet;
use chartmatch_core::{Chart, ElementPercentages, StrengthLabel, StructureLabel, StructureRarity};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

pub const BALANCED_STRENGTH_POINTS: u32 = 15;
pub const VERY_RARE_STRUCTURE_POINTS: u32 = 40;
pub const UNCOMMON_STRUCTURE_POINTS: u32 = 10;
pub const MISSING_ELEMENT_POINTS: u32 = 20;
pub const DOMINANT_ELEMENT_POINTS: u32 = 25;
pub const EVEN_SPREAD_POINTS: u32 = 30;
pub const MANY_STARS_POINTS: u32 = 15;
pub const FEW_STARS_POINTS: u32 = 10;
pub const LOW_PILLAR_DIVERSITY_POINTS: u32 = 20;

/// Share at or above which one element counts as dominant
pub const DOMINANT_ELEMENT_THRESHOLD: f64 = 60.0;
/// Largest max-min spread that counts as exceptionally even
pub const EVEN_SPREAD_THRESHOLD: f64 = 8.0;
pub const MANY_STARS_THRESHOLD: usize = 10;
pub const FEW_STARS_THRESHOLD: usize = 1;
pub const LOW_PILLAR_DIVERSITY_THRESHOLD: usize = 2;

/// The chart features the heuristic inspects, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RarityFactorKind {
    DayMaster,
    Strength,
    Structure,
    ElementBalance,
    StarCount,
    PillarDiversity,
}

impl RarityFactorKind {
    pub const ALL: [RarityFactorKind; 6] = [
        RarityFactorKind::DayMaster,
        RarityFactorKind::Strength,
        RarityFactorKind::Structure,
        RarityFactorKind::ElementBalance,
        RarityFactorKind::StarCount,
        RarityFactorKind::PillarDiversity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RarityFactorKind::DayMaster => "Day Master",
            RarityFactorKind::Strength => "Strength",
            RarityFactorKind::Structure => "Structure",
            RarityFactorKind::ElementBalance => "Element Balance",
            RarityFactorKind::StarCount => "Symbolic Stars",
            RarityFactorKind::PillarDiversity => "Pillar Diversity",
        }
    }

    fn evaluate(self, chart: &Chart) -> RarityFactor {
        match self {
            RarityFactorKind::DayMaster => RarityFactor::ordinary(
                self,
                format!(
                    "Day Master {} is evenly distributed and not a rarity factor",
                    chart.day_master.stem
                ),
            ),
            RarityFactorKind::Strength => strength_factor(&StrengthLabel::new(chart.strength())),
            RarityFactorKind::Structure => structure_factor(&StructureLabel::new(chart.structure())),
            RarityFactorKind::ElementBalance => match &chart.element_percentages {
                Some(percentages) => element_balance_factor(percentages),
                None => RarityFactor::ordinary(self, "No element distribution reported".to_string()),
            },
            RarityFactorKind::StarCount => match &chart.stars {
                Some(stars) => star_count_factor(stars.len()),
                None => RarityFactor::ordinary(self, "No symbolic stars reported".to_string()),
            },
            RarityFactorKind::PillarDiversity => pillar_diversity_factor(chart),
        }
    }
}

impl fmt::Display for RarityFactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One inspected feature and what it contributed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RarityFactor {
    pub kind: RarityFactorKind,
    pub name: &'static str,
    pub description: String,
    pub unusual: bool,
    pub points: u32,
}

impl RarityFactor {
    fn ordinary(kind: RarityFactorKind, description: String) -> Self {
        Self {
            kind,
            name: kind.name(),
            description,
            unusual: false,
            points: 0,
        }
    }

    fn unusual(kind: RarityFactorKind, points: u32, description: String) -> Self {
        Self {
            kind,
            name: kind.name(),
            description,
            unusual: true,
            points,
        }
    }
}

/// Rarity estimate for one chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RarityResult {
    /// Sum of all factor points
    pub score: u32,
    /// "1 in N"
    pub ratio: u32,
    pub label: RarityLabel,
    pub description: String,
    /// Every inspected feature, in [`RarityFactorKind::ALL`] order
    pub factors: Vec<RarityFactor>,
}

impl RarityResult {
    /// Only the factors that contributed points
    pub fn unusual_factors(&self) -> impl Iterator<Item = &RarityFactor> {
        self.factors.iter().filter(|f| f.unusual)
    }
}

/// Stateless rarity estimator
#[derive(Debug, Clone, Copy, Default)]
pub struct RarityEstimator;

impl RarityEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, chart: &Chart) -> RarityResult {
        if chart.stars.is_none() {
            warn!("chart has no star list, star count is not assessed");
        }

        let factors: Vec<RarityFactor> = RarityFactorKind::ALL
            .into_iter()
            .map(|kind| kind.evaluate(chart))
            .collect();

        let score: u32 = factors.iter().map(|f| f.points).sum();
        let ratio = score_to_ratio(score);
        let label = RarityLabel::from_ratio(ratio);
        let description = format!(
            "{}: roughly 1 in {} charts share this combination of features.",
            label,
            display_ratio(ratio)
        );

        debug!(score, ratio, label = label.label(), "estimated chart rarity");

        RarityResult {
            score,
            ratio,
            label,
            description,
            factors,
        }
    }
}

fn strength_factor(strength: &StrengthLabel) -> RarityFactor {
    let kind = RarityFactorKind::Strength;
    if strength.is_balanced() {
        RarityFactor::unusual(
            kind,
            BALANCED_STRENGTH_POINTS,
            format!("{} strength is uncommon; most charts lean weak or strong", strength.text()),
        )
    } else if strength.is_empty() {
        RarityFactor::ordinary(kind, "No strength assessment reported".to_string())
    } else {
        RarityFactor::ordinary(kind, format!("{} is a common strength category", strength.text()))
    }
}

fn structure_factor(structure: &StructureLabel) -> RarityFactor {
    let kind = RarityFactorKind::Structure;
    if structure.is_empty() {
        return RarityFactor::ordinary(kind, "No structure reported".to_string());
    }
    match structure.rarity() {
        StructureRarity::VeryRare => RarityFactor::unusual(
            kind,
            VERY_RARE_STRUCTURE_POINTS,
            format!("{} is a very rare special structure", structure.text()),
        ),
        StructureRarity::Uncommon => RarityFactor::unusual(
            kind,
            UNCOMMON_STRUCTURE_POINTS,
            format!("{} is an uncommon structure", structure.text()),
        ),
        StructureRarity::Ordinary => {
            RarityFactor::ordinary(kind, format!("{} is a common structure", structure.text()))
        }
    }
}

/// Missing element, then a dominant element, then an even spread
fn element_balance_factor(percentages: &ElementPercentages) -> RarityFactor {
    let kind = RarityFactorKind::ElementBalance;
    let missing = percentages.missing();
    let max = percentages.max();
    let min = percentages.min();

    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.name()).collect();
        RarityFactor::unusual(
            kind,
            MISSING_ELEMENT_POINTS,
            format!("Missing element: {}", names.join(", ")),
        )
    } else if max >= DOMINANT_ELEMENT_THRESHOLD {
        RarityFactor::unusual(
            kind,
            DOMINANT_ELEMENT_POINTS,
            format!("{} dominates at {:.0}%", percentages.dominant(), max),
        )
    } else if max - min <= EVEN_SPREAD_THRESHOLD {
        RarityFactor::unusual(
            kind,
            EVEN_SPREAD_POINTS,
            format!("Exceptionally even spread, all elements within {:.0} points", max - min),
        )
    } else {
        RarityFactor::ordinary(kind, "Element distribution is within the typical range".to_string())
    }
}

fn star_count_factor(count: usize) -> RarityFactor {
    let kind = RarityFactorKind::StarCount;
    if count >= MANY_STARS_THRESHOLD {
        RarityFactor::unusual(
            kind,
            MANY_STARS_POINTS,
            format!("{} symbolic stars is an unusually high count", count),
        )
    } else if count <= FEW_STARS_THRESHOLD {
        RarityFactor::unusual(
            kind,
            FEW_STARS_POINTS,
            format!("Only {} symbolic star{}", count, if count == 1 { "" } else { "s" }),
        )
    } else {
        RarityFactor::ordinary(kind, format!("{} symbolic stars is a typical count", count))
    }
}

fn pillar_diversity_factor(chart: &Chart) -> RarityFactor {
    let kind = RarityFactorKind::PillarDiversity;
    if !chart.has_complete_pillars() {
        return RarityFactor::ordinary(kind, "Pillars incomplete, diversity not assessed".to_string());
    }

    let distinct: AHashSet<_> = chart.pillars.iter().map(|p| p.stem_element()).collect();
    if distinct.len() <= LOW_PILLAR_DIVERSITY_THRESHOLD {
        RarityFactor::unusual(
            kind,
            LOW_PILLAR_DIVERSITY_POINTS,
            format!("The four pillar stems use only {} element(s)", distinct.len()),
        )
    } else {
        RarityFactor::ordinary(kind, format!("Pillar stems span {} elements", distinct.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartmatch_core::{DayMaster, Pillar, PillarPosition, Stem};

    fn pillars(stems: [Stem; 4]) -> Vec<Pillar> {
        let positions = [
            PillarPosition::Year,
            PillarPosition::Month,
            PillarPosition::Day,
            PillarPosition::Hour,
        ];
        positions
            .into_iter()
            .zip(stems)
            .map(|(position, stem)| Pillar::new(position, stem, ""))
            .collect()
    }

    fn ordinary_chart() -> Chart {
        Chart::new(DayMaster::from_stem(Stem::Jia))
            .with_analysis("Weak", "Direct Officer")
            .with_percentages(ElementPercentages::new(30.0, 25.0, 20.0, 15.0, 10.0))
            .with_pillars(pillars([Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng]))
            .with_stars(["a", "b", "c", "d"])
    }

    fn points(result: &RarityResult, kind: RarityFactorKind) -> u32 {
        result.factors.iter().find(|f| f.kind == kind).map(|f| f.points).unwrap()
    }

    #[test]
    fn test_ordinary_chart_is_common() {
        let result = RarityEstimator::new().estimate(&ordinary_chart());

        assert_eq!(result.score, 0);
        assert_eq!(result.ratio, 50);
        assert_eq!(result.label, RarityLabel::CommonPattern);
        assert_eq!(result.unusual_factors().count(), 0);
        assert_eq!(result.factors.len(), RarityFactorKind::ALL.len());
        assert!(result.description.contains("1 in 50"));
    }

    #[test]
    fn test_day_master_never_contributes() {
        for stem in Stem::ALL {
            let mut chart = ordinary_chart();
            chart.day_master = DayMaster::from_stem(stem);
            let result = RarityEstimator::new().estimate(&chart);
            let factor = &result.factors[0];
            assert_eq!(factor.kind, RarityFactorKind::DayMaster);
            assert!(!factor.unusual);
            assert_eq!(factor.points, 0);
        }
    }

    #[test]
    fn test_balanced_strength() {
        let chart = ordinary_chart().with_analysis("Neutral", "Direct Officer");
        let result = RarityEstimator::new().estimate(&chart);
        assert_eq!(points(&result, RarityFactorKind::Strength), 15);
    }

    #[test]
    fn test_balanced_strength_with_lean() {
        let estimator = RarityEstimator::new();
        for label in ["Balanced (slightly weak)", "Neutral leaning Strong"] {
            let chart = ordinary_chart().with_analysis(label, "Direct Officer");
            let result = estimator.estimate(&chart);
            assert_eq!(points(&result, RarityFactorKind::Strength), 15, "label {}", label);
        }
    }

    #[test]
    fn test_structure_rare_takes_priority() {
        let chart = ordinary_chart().with_analysis("Weak", "Follow the Killing");
        let result = RarityEstimator::new().estimate(&chart);
        assert_eq!(points(&result, RarityFactorKind::Structure), 40);

        let chart = ordinary_chart().with_analysis("Weak", "Seven Killings");
        let result = RarityEstimator::new().estimate(&chart);
        assert_eq!(points(&result, RarityFactorKind::Structure), 10);
    }

    #[test]
    fn test_element_balance_branches_in_priority_order() {
        let estimator = RarityEstimator::new();

        // Missing element wins even when another element dominates
        let missing = ordinary_chart().with_percentages(ElementPercentages::new(70.0, 0.0, 10.0, 10.0, 10.0));
        assert_eq!(points(&estimator.estimate(&missing), RarityFactorKind::ElementBalance), 20);

        let dominant = ordinary_chart().with_percentages(ElementPercentages::new(60.0, 10.0, 10.0, 10.0, 10.0));
        assert_eq!(points(&estimator.estimate(&dominant), RarityFactorKind::ElementBalance), 25);

        let even = ordinary_chart().with_percentages(ElementPercentages::new(24.0, 20.0, 18.0, 22.0, 16.0));
        assert_eq!(points(&estimator.estimate(&even), RarityFactorKind::ElementBalance), 30);

        let typical = ordinary_chart();
        assert_eq!(points(&estimator.estimate(&typical), RarityFactorKind::ElementBalance), 0);
    }

    #[test]
    fn test_missing_percentages_not_assessed() {
        let mut chart = ordinary_chart();
        chart.element_percentages = None;
        let result = RarityEstimator::new().estimate(&chart);
        assert_eq!(points(&result, RarityFactorKind::ElementBalance), 0);
    }

    #[test]
    fn test_star_count_branches() {
        let estimator = RarityEstimator::new();

        let many = ordinary_chart().with_stars((0..10).map(|i| format!("star{}", i)));
        assert_eq!(points(&estimator.estimate(&many), RarityFactorKind::StarCount), 15);

        let one = ordinary_chart().with_stars(["only"]);
        assert_eq!(points(&estimator.estimate(&one), RarityFactorKind::StarCount), 10);

        let empty = ordinary_chart().with_stars(Vec::<String>::new());
        assert_eq!(points(&estimator.estimate(&empty), RarityFactorKind::StarCount), 10);

        let mut unknown = ordinary_chart();
        unknown.stars = None;
        assert_eq!(points(&estimator.estimate(&unknown), RarityFactorKind::StarCount), 0);
    }

    #[test]
    fn test_pillar_diversity() {
        let estimator = RarityEstimator::new();

        let narrow = ordinary_chart().with_pillars(pillars([Stem::Jia, Stem::Yi, Stem::Ren, Stem::Gui]));
        let result = estimator.estimate(&narrow);
        assert_eq!(points(&result, RarityFactorKind::PillarDiversity), 20);

        let incomplete = ordinary_chart().with_pillars(pillars([Stem::Jia, Stem::Jia, Stem::Jia, Stem::Jia])[..3].to_vec());
        assert_eq!(points(&estimator.estimate(&incomplete), RarityFactorKind::PillarDiversity), 0);
    }

    #[test]
    fn test_score_accumulates_across_factors() {
        let chart = Chart::new(DayMaster::from_stem(Stem::Ren))
            .with_analysis("Balanced", "Follow Wealth")
            .with_percentages(ElementPercentages::new(0.0, 40.0, 20.0, 20.0, 20.0))
            .with_pillars(pillars([Stem::Ren, Stem::Gui, Stem::Ren, Stem::Bing]))
            .with_stars((0..12).map(|i| i.to_string()));

        let result = RarityEstimator::new().estimate(&chart);

        // 15 + 40 + 20 + 15 + 20
        assert_eq!(result.score, 110);
        assert_eq!(result.ratio, 80_000);
        assert_eq!(result.label, RarityLabel::ExceptionallyRare);
        assert_eq!(result.unusual_factors().count(), 5);
        assert!(result.description.contains("80,000"));
    }
}
