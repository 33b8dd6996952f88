//! Mapping from additive rarity score to a "1 in N" ratio and label

use serde::Serialize;
use std::fmt;

/// Ratio reported for a chart with no unusual features
pub const BASE_RATIO: u32 = 50;

/// Map a rarity score onto a "1 in N" ratio.
///
/// Piecewise linear with jumps at 20, 40, 60 and 80; each segment starts
/// above where the previous one ends, so the mapping never decreases.
pub fn score_to_ratio(score: u32) -> u32 {
    match score {
        0 => BASE_RATIO,
        1..=19 => 100 + score * 10,
        20..=39 => 500 + (score - 20) * 50,
        40..=59 => 2_000 + (score - 40) * 200,
        60..=79 => 8_000 + (score - 60) * 500,
        _ => 20_000u32.saturating_add((score - 80).saturating_mul(2_000)),
    }
}

/// Qualitative rarity label, ordered from most common to rarest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RarityLabel {
    CommonPattern,
    SlightlyDistinctive,
    SomewhatUnusual,
    Uncommon,
    VeryRare,
    ExceptionallyRare,
}

impl RarityLabel {
    pub fn from_ratio(ratio: u32) -> Self {
        match ratio {
            50_000.. => RarityLabel::ExceptionallyRare,
            10_000.. => RarityLabel::VeryRare,
            2_000.. => RarityLabel::Uncommon,
            500.. => RarityLabel::SomewhatUnusual,
            150.. => RarityLabel::SlightlyDistinctive,
            _ => RarityLabel::CommonPattern,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityLabel::ExceptionallyRare => "Exceptionally Rare",
            RarityLabel::VeryRare => "Very Rare",
            RarityLabel::Uncommon => "Uncommon",
            RarityLabel::SomewhatUnusual => "Somewhat Unusual",
            RarityLabel::SlightlyDistinctive => "Slightly Distinctive",
            RarityLabel::CommonPattern => "Common Pattern",
        }
    }
}

impl fmt::Display for RarityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ratio as shown to users: nearest thousand above 1000, thousands separated
pub fn display_ratio(ratio: u32) -> String {
    let rounded = if ratio > 1_000 {
        ratio.saturating_add(500) / 1_000 * 1_000
    } else {
        ratio
    };
    group_thousands(rounded)
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_to_ratio_segments() {
        assert_eq!(score_to_ratio(0), 50);
        assert_eq!(score_to_ratio(1), 110);
        assert_eq!(score_to_ratio(19), 290);
        assert_eq!(score_to_ratio(20), 500);
        assert_eq!(score_to_ratio(39), 1_450);
        assert_eq!(score_to_ratio(40), 2_000);
        assert_eq!(score_to_ratio(59), 5_800);
        assert_eq!(score_to_ratio(60), 8_000);
        assert_eq!(score_to_ratio(79), 17_500);
        assert_eq!(score_to_ratio(80), 20_000);
        assert_eq!(score_to_ratio(120), 100_000);
    }

    #[test]
    fn test_score_to_ratio_monotonic() {
        let mut previous = score_to_ratio(0);
        for score in 1..=200 {
            let ratio = score_to_ratio(score);
            assert!(ratio >= previous, "ratio dropped at score {}", score);
            previous = ratio;
        }
    }

    #[test]
    fn test_score_to_ratio_saturates() {
        assert_eq!(score_to_ratio(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(RarityLabel::from_ratio(50), RarityLabel::CommonPattern);
        assert_eq!(RarityLabel::from_ratio(149), RarityLabel::CommonPattern);
        assert_eq!(RarityLabel::from_ratio(150), RarityLabel::SlightlyDistinctive);
        assert_eq!(RarityLabel::from_ratio(500), RarityLabel::SomewhatUnusual);
        assert_eq!(RarityLabel::from_ratio(2_000), RarityLabel::Uncommon);
        assert_eq!(RarityLabel::from_ratio(10_000), RarityLabel::VeryRare);
        assert_eq!(RarityLabel::from_ratio(50_000), RarityLabel::ExceptionallyRare);
        assert_eq!(RarityLabel::ExceptionallyRare.label(), "Exceptionally Rare");
    }

    #[test]
    fn test_display_ratio() {
        assert_eq!(display_ratio(290), "290");
        assert_eq!(display_ratio(1_000), "1,000");
        assert_eq!(display_ratio(1_450), "1,000");
        assert_eq!(display_ratio(5_800), "6,000");
        assert_eq!(display_ratio(17_500), "18,000");
        assert_eq!(display_ratio(100_000), "100,000");
    }
}
