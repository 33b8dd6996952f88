//! Natal chart record as delivered by the chart computation service
//!
//! Everything beyond the day master is optional on the wire. Missing fields
//! deserialize to `None` or an empty list and are never an error.

use crate::element::{Element, Polarity, Stem};
use crate::vector::ElementVector;
use serde::{Deserialize, Serialize};

/// Stem, element and polarity of a day master
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMaster {
    pub stem: Stem,
    pub element: Element,
    pub polarity: Polarity,
}

impl DayMaster {
    /// Build a day master whose element and polarity follow from the stem
    pub fn from_stem(stem: Stem) -> Self {
        Self {
            stem,
            element: stem.element(),
            polarity: stem.polarity(),
        }
    }

    /// True when element and polarity agree with the stem
    pub fn is_consistent(&self) -> bool {
        self.stem.element() == self.element && self.stem.polarity() == self.polarity
    }
}

/// Practitioner assessment attached to a chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalAnalysis {
    /// Day master strength category, e.g. "Weak", "Balanced"
    #[serde(default)]
    pub strength: String,
    /// Structure (格局) label, e.g. "Direct Officer"
    #[serde(default)]
    pub structure: String,
    #[serde(default)]
    pub favorable_elements: Vec<Element>,
    #[serde(default)]
    pub unfavorable_elements: Vec<Element>,
}

/// Percentage of the chart attributed to each element
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPercentages {
    #[serde(default, alias = "Wood")]
    pub wood: f64,
    #[serde(default, alias = "Fire")]
    pub fire: f64,
    #[serde(default, alias = "Earth")]
    pub earth: f64,
    #[serde(default, alias = "Metal")]
    pub metal: f64,
    #[serde(default, alias = "Water")]
    pub water: f64,
}

impl ElementPercentages {
    pub fn new(wood: f64, fire: f64, earth: f64, metal: f64, water: f64) -> Self {
        Self { wood, fire, earth, metal, water }
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Raw percentages in [`Element::ALL`] order; negatives are clamped to 0
    pub fn to_vector(&self) -> ElementVector {
        let mut data = [0.0; 5];
        for element in Element::ALL {
            let value = self.get(element);
            data[element.index()] = if value.is_finite() { value.max(0.0) } else { 0.0 };
        }
        ElementVector::new(data)
    }

    /// Element with the highest share; the earliest in [`Element::ALL`] wins ties
    pub fn dominant(&self) -> Element {
        let v = self.to_vector();
        Element::ALL
            .into_iter()
            .fold(Element::Wood, |best, e| if v.get(e) > v.get(best) { e } else { best })
    }

    pub fn max(&self) -> f64 {
        self.to_vector().as_slice().iter().copied().fold(f64::MIN, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.to_vector().as_slice().iter().copied().fold(f64::MAX, f64::min)
    }

    /// Elements whose share is exactly zero
    pub fn missing(&self) -> Vec<Element> {
        let v = self.to_vector();
        Element::ALL.into_iter().filter(|e| v.get(*e) == 0.0).collect()
    }
}

/// Position of a pillar within the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// One of the four pillars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PillarPosition>,
    pub stem: Stem,
    /// Defaults to the element of `stem` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stem_element: Option<Element>,
    #[serde(default)]
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_element: Option<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_polarity: Option<Polarity>,
}

impl Pillar {
    pub fn new(position: PillarPosition, stem: Stem, branch: impl Into<String>) -> Self {
        Self {
            position: Some(position),
            stem,
            stem_element: Some(stem.element()),
            branch: branch.into(),
            branch_element: None,
            branch_polarity: None,
        }
    }

    pub fn stem_element(&self) -> Element {
        self.stem_element.unwrap_or_else(|| self.stem.element())
    }
}

/// A fully computed natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub day_master: DayMaster,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ProfessionalAnalysis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_percentages: Option<ElementPercentages>,
    /// Year, month, day, hour
    #[serde(default)]
    pub pillars: Vec<Pillar>,
    /// `None` means the upstream did not report stars at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<String>>,
}

impl Chart {
    pub fn new(day_master: DayMaster) -> Self {
        Self {
            day_master,
            analysis: None,
            element_percentages: None,
            pillars: Vec::new(),
            stars: None,
        }
    }

    pub fn with_analysis(mut self, strength: &str, structure: &str) -> Self {
        self.analysis = Some(ProfessionalAnalysis {
            strength: strength.to_string(),
            structure: structure.to_string(),
            ..Default::default()
        });
        self
    }

    pub fn with_percentages(mut self, percentages: ElementPercentages) -> Self {
        self.element_percentages = Some(percentages);
        self
    }

    pub fn with_pillars(mut self, pillars: Vec<Pillar>) -> Self {
        self.pillars = pillars;
        self
    }

    pub fn with_stars<S: Into<String>>(mut self, stars: impl IntoIterator<Item = S>) -> Self {
        self.stars = Some(stars.into_iter().map(Into::into).collect());
        self
    }

    pub fn strength(&self) -> &str {
        self.analysis.as_ref().map(|a| a.strength.as_str()).unwrap_or("")
    }

    pub fn structure(&self) -> &str {
        self.analysis.as_ref().map(|a| a.structure.as_str()).unwrap_or("")
    }

    /// Stem of the day pillar: the pillar tagged `day`, else the third of four
    pub fn day_pillar_stem(&self) -> Option<Stem> {
        self.pillars
            .iter()
            .find(|p| p.position == Some(PillarPosition::Day))
            .or_else(|| {
                if self.pillars.len() == 4 {
                    self.pillars.get(2)
                } else {
                    None
                }
            })
            .map(|p| p.stem)
    }

    pub fn star_count(&self) -> usize {
        self.stars.as_ref().map_or(0, Vec::len)
    }

    pub fn has_complete_pillars(&self) -> bool {
        self.pillars.len() == 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_chart_deserializes() {
        let json = r#"{"day_master": {"stem": "甲", "element": "Wood", "polarity": "Yang"}}"#;
        let chart: Chart = serde_json::from_str(json).unwrap();

        assert_eq!(chart.day_master.stem, Stem::Jia);
        assert!(chart.analysis.is_none());
        assert!(chart.element_percentages.is_none());
        assert!(chart.pillars.is_empty());
        assert!(chart.stars.is_none());
        assert_eq!(chart.strength(), "");
        assert_eq!(chart.star_count(), 0);
        assert_eq!(chart.day_pillar_stem(), None);
    }

    #[test]
    fn test_percentages_accept_capitalized_keys() {
        let json = r#"{"Wood": 40, "Fire": 20, "Earth": 20, "Metal": 10, "Water": 10}"#;
        let pct: ElementPercentages = serde_json::from_str(json).unwrap();
        assert_eq!(pct.wood, 40.0);
        assert_eq!(pct.dominant(), Element::Wood);
    }

    #[test]
    fn test_percentage_stats() {
        let pct = ElementPercentages::new(35.0, 0.0, 30.0, 20.0, 15.0);
        assert_eq!(pct.max(), 35.0);
        assert_eq!(pct.min(), 0.0);
        assert_eq!(pct.missing(), vec![Element::Fire]);
    }

    #[test]
    fn test_negative_percentages_clamped() {
        let pct = ElementPercentages::new(-5.0, 50.0, 50.0, 0.0, 0.0);
        assert_eq!(pct.to_vector().get(Element::Wood), 0.0);
    }

    #[test]
    fn test_day_pillar_stem_by_position_or_index() {
        let tagged = Chart::new(DayMaster::from_stem(Stem::Bing))
            .with_pillars(vec![Pillar::new(PillarPosition::Day, Stem::Bing, "午")]);
        assert_eq!(tagged.day_pillar_stem(), Some(Stem::Bing));

        let untagged_pillars: Vec<Pillar> = [Stem::Jia, Stem::Yi, Stem::Ren, Stem::Gui]
            .into_iter()
            .map(|stem| Pillar {
                position: None,
                stem,
                stem_element: None,
                branch: String::new(),
                branch_element: None,
                branch_polarity: None,
            })
            .collect();
        let untagged = Chart::new(DayMaster::from_stem(Stem::Ren)).with_pillars(untagged_pillars);
        assert_eq!(untagged.day_pillar_stem(), Some(Stem::Ren));
        assert_eq!(untagged.pillars[0].stem_element(), Element::Wood);
    }

    #[test]
    fn test_day_master_consistency() {
        assert!(DayMaster::from_stem(Stem::Geng).is_consistent());
        let bad = DayMaster {
            stem: Stem::Geng,
            element: Element::Fire,
            polarity: Polarity::Yang,
        };
        assert!(!bad.is_consistent());
    }
}
