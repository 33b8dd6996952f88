//! Five elements, yin/yang polarity and the ten heavenly stems
//!
//! All three types parse from either the English name or the Chinese glyph,
//! case-insensitively. `Element` and `Polarity` serialize as the English name,
//! `Stem` as its glyph.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five elemental phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    /// Canonical order used for every element vector in the crate
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Position of this element in [`Element::ALL`]
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Element::Wood => 0,
            Element::Fire => 1,
            Element::Earth => 2,
            Element::Metal => 3,
            Element::Water => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wood" | "木" => Ok(Element::Wood),
            "fire" | "火" => Ok(Element::Fire),
            "earth" | "土" => Ok(Element::Earth),
            "metal" | "金" => Ok(Element::Metal),
            "water" | "水" => Ok(Element::Water),
            _ => Err(Error::UnknownElement(s.to_string())),
        }
    }
}

impl TryFrom<String> for Element {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Element> for &'static str {
    fn from(element: Element) -> Self {
        element.name()
    }
}

/// Yin/yang polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn name(self) -> &'static str {
        match self {
            Polarity::Yang => "Yang",
            Polarity::Yin => "Yin",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Polarity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yang" | "阳" | "陽" => Ok(Polarity::Yang),
            "yin" | "阴" | "陰" => Ok(Polarity::Yin),
            _ => Err(Error::UnknownPolarity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Polarity {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Polarity> for &'static str {
    fn from(polarity: Polarity) -> Self {
        polarity.name()
    }
}

/// The ten heavenly stems (天干)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    pub fn element(self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            Stem::Jia | Stem::Bing | Stem::Wu | Stem::Geng | Stem::Ren => Polarity::Yang,
            Stem::Yi | Stem::Ding | Stem::Ji | Stem::Xin | Stem::Gui => Polarity::Yin,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    pub fn pinyin(self) -> &'static str {
        match self {
            Stem::Jia => "Jia",
            Stem::Yi => "Yi",
            Stem::Bing => "Bing",
            Stem::Ding => "Ding",
            Stem::Wu => "Wu",
            Stem::Ji => "Ji",
            Stem::Geng => "Geng",
            Stem::Xin => "Xin",
            Stem::Ren => "Ren",
            Stem::Gui => "Gui",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for Stem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Stem::ALL
            .into_iter()
            .find(|stem| stem.glyph() == trimmed || stem.pinyin().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownStem(s.to_string()))
    }
}

impl TryFrom<String> for Stem {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Stem> for &'static str {
    fn from(stem: Stem) -> Self {
        stem.glyph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_parsing() {
        assert_eq!("wood".parse::<Element>().unwrap(), Element::Wood);
        assert_eq!("WATER".parse::<Element>().unwrap(), Element::Water);
        assert_eq!("金".parse::<Element>().unwrap(), Element::Metal);
        assert!(matches!("aether".parse::<Element>(), Err(Error::UnknownElement(_))));
    }

    #[test]
    fn test_element_index_matches_order() {
        for (i, element) in Element::ALL.iter().enumerate() {
            assert_eq!(element.index(), i);
        }
    }

    #[test]
    fn test_stem_parsing_glyph_and_pinyin() {
        assert_eq!("甲".parse::<Stem>().unwrap(), Stem::Jia);
        assert_eq!("gui".parse::<Stem>().unwrap(), Stem::Gui);
        assert!(matches!("子".parse::<Stem>(), Err(Error::UnknownStem(_))));
    }

    #[test]
    fn test_stem_element_and_polarity() {
        assert_eq!(Stem::Jia.element(), Element::Wood);
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Xin.element(), Element::Metal);
        assert_eq!(Stem::Xin.polarity(), Polarity::Yin);
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Stem::Bing).unwrap();
        assert_eq!(json, "\"丙\"");
        let parsed: Element = serde_json::from_str("\"火\"").unwrap();
        assert_eq!(parsed, Element::Fire);
        let polarity: Polarity = serde_json::from_str("\"Yin\"").unwrap();
        assert_eq!(polarity, Polarity::Yin);
    }
}
