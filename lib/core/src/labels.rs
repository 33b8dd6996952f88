//! Closed classifications of free-text strength and structure labels
//!
//! Labels arrive as practitioner text ("Direct Officer", "从财格", "Slightly Weak").
//! They are classified exactly once, here, and downstream code matches on the
//! resulting enums instead of searching strings.

use serde::Serialize;

/// Coarse strength bucket of a day master
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StrengthClass {
    Weak,
    Strong,
    Balanced,
    Unclassified,
}

const BALANCED_KEYWORDS: [&str; 5] = ["balanced", "neutral", "average", "中和", "平衡"];

impl StrengthClass {
    // The weak/strong lean wins over a balanced wording
    fn classify(normalized: &str) -> Self {
        if contains_any(normalized, &["weak", "弱"]) {
            StrengthClass::Weak
        } else if contains_any(normalized, &["strong", "强", "旺"]) {
            StrengthClass::Strong
        } else if contains_any(normalized, &BALANCED_KEYWORDS) {
            StrengthClass::Balanced
        } else {
            StrengthClass::Unclassified
        }
    }
}

/// A strength label with its original text and bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthLabel {
    text: String,
    normalized: String,
    class: StrengthClass,
    balanced: bool,
}

impl StrengthLabel {
    pub fn new(text: &str) -> Self {
        let normalized = normalize(text);
        let class = StrengthClass::classify(&normalized);
        let balanced = contains_any(&normalized, &BALANCED_KEYWORDS);
        Self {
            text: text.trim().to_string(),
            normalized,
            class,
            balanced,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn class(&self) -> StrengthClass {
        self.class
    }

    /// Whether the label uses a balanced wording, regardless of any lean
    /// it also mentions ("Balanced (slightly weak)" is balanced and Weak)
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Case-insensitive equality; empty labels never match
    pub fn matches_exactly(&self, other: &StrengthLabel) -> bool {
        !self.is_empty() && self.normalized == other.normalized
    }
}

/// Compositional family a structure mentions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureFamily {
    Wealth,
    Officer,
    Resource,
    Output,
    Companion,
    Following,
    Transformation,
}

impl StructureFamily {
    pub const ALL: [StructureFamily; 7] = [
        StructureFamily::Wealth,
        StructureFamily::Officer,
        StructureFamily::Resource,
        StructureFamily::Output,
        StructureFamily::Companion,
        StructureFamily::Following,
        StructureFamily::Transformation,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            StructureFamily::Wealth => &["wealth", "财"],
            StructureFamily::Officer => &["officer", "killing", "官", "杀"],
            StructureFamily::Resource => &["resource", "seal", "印"],
            StructureFamily::Output => &["hurting officer", "eating god", "output", "伤官", "食神"],
            StructureFamily::Companion => &["rob wealth", "friend", "companion", "劫财", "比肩", "建禄"],
            StructureFamily::Following => &["follow", "从"],
            StructureFamily::Transformation => &["transform", "化"],
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Every family a structure label mentions
///
/// A label can belong to several: "Hurting Officer" is both Output and
/// Officer, "Rob Wealth" both Companion and Wealth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FamilySet(u8);

impl FamilySet {
    fn classify(normalized: &str) -> Self {
        StructureFamily::ALL
            .into_iter()
            .filter(|family| contains_any(normalized, family.keywords()))
            .fold(Self::default(), |set, family| Self(set.0 | family.bit()))
    }

    pub fn contains(self, family: StructureFamily) -> bool {
        self.0 & family.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn intersects(self, other: FamilySet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = StructureFamily> {
        StructureFamily::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

impl Serialize for FamilySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// How often a structure is encountered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureRarity {
    VeryRare,
    Uncommon,
    Ordinary,
}

impl StructureRarity {
    // Very-rare keywords take priority over uncommon ones.
    fn classify(normalized: &str) -> Self {
        if contains_any(
            normalized,
            &["follow", "special", "fake", "transform", "dominant", "从", "化", "专旺", "假"],
        ) {
            StructureRarity::VeryRare
        } else if contains_any(normalized, &["killing", "hurting officer", "七杀", "伤官"]) {
            StructureRarity::Uncommon
        } else {
            StructureRarity::Ordinary
        }
    }
}

/// A structure label with its families and rarity resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureLabel {
    text: String,
    normalized: String,
    families: FamilySet,
    rarity: StructureRarity,
}

impl StructureLabel {
    pub fn new(text: &str) -> Self {
        let normalized = normalize(text);
        Self {
            text: text.trim().to_string(),
            families: FamilySet::classify(&normalized),
            rarity: StructureRarity::classify(&normalized),
            normalized,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn families(&self) -> FamilySet {
        self.families
    }

    pub fn has_family(&self, family: StructureFamily) -> bool {
        self.families.contains(family)
    }

    /// Whether both labels mention at least one common family
    pub fn shares_family(&self, other: &StructureLabel) -> bool {
        self.families.intersects(other.families)
    }

    pub fn rarity(&self) -> StructureRarity {
        self.rarity
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
