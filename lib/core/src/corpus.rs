//! Reference corpus of pre-analysed historical figures
//!
//! The corpus is built once, validated, and then only ever borrowed. Labels
//! and the dominant-element vector of every entry are resolved at build time.

use crate::chart::DayMaster;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::labels::{StrengthLabel, StructureLabel};
use crate::vector::ElementVector;
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Weight of the primary dominant element in the reference vector
pub const PRIMARY_ELEMENT_WEIGHT: f64 = 1.0;
/// Weight of the secondary dominant element in the reference vector
pub const SECONDARY_ELEMENT_WEIGHT: f64 = 0.7;

/// Display-only biographical data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Biography {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub achievements: Vec<String>,
}

/// One historical figure in the reference corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePerson {
    pub id: String,
    pub name: String,
    /// Grouping tag, e.g. "scientist", "leader"
    #[serde(default)]
    pub category: String,
    pub day_master: DayMaster,
    pub strength: String,
    pub structure: String,
    /// Primary then secondary
    pub dominant_elements: [Element; 2],
    #[serde(default)]
    pub biography: Biography,
}

impl ReferencePerson {
    pub fn primary_element(&self) -> Element {
        self.dominant_elements[0]
    }

    pub fn secondary_element(&self) -> Element {
        self.dominant_elements[1]
    }

    fn validate(&self) -> Result<()> {
        let entry = if self.id.is_empty() { &self.name } else { &self.id };
        if self.id.trim().is_empty() {
            return Err(Error::invalid(entry, "id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::invalid(entry, "name is empty"));
        }
        if !self.day_master.is_consistent() {
            return Err(Error::invalid(
                entry,
                format!(
                    "day master {} is {} {}, not {} {}",
                    self.day_master.stem,
                    self.day_master.stem.polarity(),
                    self.day_master.stem.element(),
                    self.day_master.polarity,
                    self.day_master.element,
                ),
            ));
        }
        if self.strength.trim().is_empty() {
            return Err(Error::invalid(entry, "strength is empty"));
        }
        if self.structure.trim().is_empty() {
            return Err(Error::invalid(entry, "structure is empty"));
        }
        if self.dominant_elements[0] == self.dominant_elements[1] {
            return Err(Error::invalid(entry, "primary and secondary dominant elements are equal"));
        }
        Ok(())
    }
}

/// A corpus entry with its derived comparison data
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusEntry {
    person: ReferencePerson,
    strength: StrengthLabel,
    structure: StructureLabel,
    dominant_vector: ElementVector,
}

impl CorpusEntry {
    fn new(person: ReferencePerson) -> Self {
        let dominant_vector = ElementVector::from_weights(&[
            (person.primary_element(), PRIMARY_ELEMENT_WEIGHT),
            (person.secondary_element(), SECONDARY_ELEMENT_WEIGHT),
        ]);
        Self {
            strength: StrengthLabel::new(&person.strength),
            structure: StructureLabel::new(&person.structure),
            dominant_vector,
            person,
        }
    }

    pub fn person(&self) -> &ReferencePerson {
        &self.person
    }

    pub fn strength(&self) -> &StrengthLabel {
        &self.strength
    }

    pub fn structure(&self) -> &StructureLabel {
        &self.structure
    }

    pub fn dominant_vector(&self) -> &ElementVector {
        &self.dominant_vector
    }
}

/// Immutable, validated reference corpus
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Validate entries and build the corpus, preserving input order
    pub fn new(people: Vec<ReferencePerson>) -> Result<Self> {
        if people.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        {
            let mut seen = AHashSet::with_capacity(people.len());
            for person in &people {
                person.validate()?;
                if !seen.insert(person.id.as_str()) {
                    return Err(Error::DuplicateEntry(person.id.clone()));
                }
            }
        }

        let entries: Vec<CorpusEntry> = people.into_iter().map(CorpusEntry::new).collect();
        info!(entries = entries.len(), "reference corpus loaded");
        Ok(Self { entries })
    }

    /// Parse a JSON array of reference people and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let people: Vec<ReferencePerson> = serde_json::from_str(json)?;
        Self::new(people)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorpusEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&ReferencePerson> {
        self.entries
            .iter()
            .map(CorpusEntry::person)
            .find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Polarity, Stem};
    use crate::labels::StructureFamily;
    use std::io::Write;

    fn person(id: &str, stem: Stem) -> ReferencePerson {
        ReferencePerson {
            id: id.to_string(),
            name: format!("Person {}", id),
            category: "scientist".to_string(),
            day_master: DayMaster::from_stem(stem),
            strength: "Weak".to_string(),
            structure: "Indirect Wealth".to_string(),
            dominant_elements: [Element::Water, Element::Metal],
            biography: Biography::default(),
        }
    }

    #[test]
    fn test_corpus_preserves_order_and_derives_labels() {
        let corpus = Corpus::new(vec![person("a", Stem::Jia), person("b", Stem::Gui)]).unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].person().id, "a");
        assert!(corpus.entries()[1].structure().has_family(StructureFamily::Wealth));
        assert_eq!(corpus.entries()[0].dominant_vector().get(Element::Water), 1.0);
        assert_eq!(corpus.entries()[0].dominant_vector().get(Element::Metal), 0.7);
        assert!(corpus.get("b").is_some());
        assert!(corpus.get("z").is_none());
    }

    #[test]
    fn test_empty_corpus_error() {
        assert!(matches!(Corpus::new(Vec::new()), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_duplicate_id_error() {
        let result = Corpus::new(vec![person("a", Stem::Jia), person("a", Stem::Yi)]);
        assert!(matches!(result, Err(Error::DuplicateEntry(id)) if id == "a"));
    }

    #[test]
    fn test_inconsistent_day_master_rejected() {
        let mut bad = person("a", Stem::Jia);
        bad.day_master.polarity = Polarity::Yin;
        assert!(matches!(Corpus::new(vec![bad]), Err(Error::InvalidCorpus { .. })));
    }

    #[test]
    fn test_equal_dominant_elements_rejected() {
        let mut bad = person("a", Stem::Jia);
        bad.dominant_elements = [Element::Fire, Element::Fire];
        assert!(matches!(Corpus::new(vec![bad]), Err(Error::InvalidCorpus { .. })));
    }

    #[test]
    fn test_blank_structure_rejected() {
        let mut bad = person("a", Stem::Jia);
        bad.structure = "   ".to_string();
        assert!(matches!(Corpus::new(vec![bad]), Err(Error::InvalidCorpus { .. })));
    }

    #[test]
    fn test_from_path() {
        let json = r#"[
            {
                "id": "einstein",
                "name": "Albert Einstein",
                "category": "scientist",
                "day_master": {"stem": "丙", "element": "Fire", "polarity": "Yang"},
                "strength": "Weak",
                "structure": "Indirect Resource",
                "dominant_elements": ["Water", "Wood"],
                "biography": {"summary": "Physicist"}
            }
        ]"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let corpus = Corpus::from_path(file.path()).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.entries()[0].person().day_master.stem, Stem::Bing);
        assert!(corpus.entries()[0].structure().has_family(StructureFamily::Resource));
    }

    #[test]
    fn test_from_json_str_missing_required_field() {
        let json = r#"[{"id": "x", "name": "X"}]"#;
        assert!(matches!(Corpus::from_json_str(json), Err(Error::Serialization(_))));
    }
}
