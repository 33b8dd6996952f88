//! Factor weight table
//!
//! The default table is the fixed model: day master 30%, strength 15%,
//! elements 20%, structure 15%, day pillar 10%, stars 10%. A custom table can
//! be loaded from JSON; it is validated and normalized to sum to 1.0.

use crate::factors::FactorKind;
use serde::{Deserialize, Serialize};

pub const DAY_MASTER_WEIGHT: f64 = 0.30;
pub const STRENGTH_WEIGHT: f64 = 0.15;
pub const ELEMENTS_WEIGHT: f64 = 0.20;
pub const STRUCTURE_WEIGHT: f64 = 0.15;
pub const DAY_PILLAR_WEIGHT: f64 = 0.10;
pub const STARS_WEIGHT: f64 = 0.10;

/// Weight of each factor in the aggregate score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FactorWeights {
    pub day_master: f64,
    pub strength: f64,
    pub elements: f64,
    pub structure: f64,
    pub day_pillar: f64,
    pub stars: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            day_master: DAY_MASTER_WEIGHT,
            strength: STRENGTH_WEIGHT,
            elements: ELEMENTS_WEIGHT,
            structure: STRUCTURE_WEIGHT,
            day_pillar: DAY_PILLAR_WEIGHT,
            stars: STARS_WEIGHT,
        }
    }
}

impl FactorWeights {
    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::DayMaster => self.day_master,
            FactorKind::Strength => self.strength,
            FactorKind::Elements => self.elements,
            FactorKind::Structure => self.structure,
            FactorKind::DayPillar => self.day_pillar,
            FactorKind::Stars => self.stars,
        }
    }

    fn get_mut(&mut self, kind: FactorKind) -> &mut f64 {
        match kind {
            FactorKind::DayMaster => &mut self.day_master,
            FactorKind::Strength => &mut self.strength,
            FactorKind::Elements => &mut self.elements,
            FactorKind::Structure => &mut self.structure,
            FactorKind::DayPillar => &mut self.day_pillar,
            FactorKind::Stars => &mut self.stars,
        }
    }

    pub fn total(&self) -> f64 {
        FactorKind::ALL.iter().map(|k| self.get(*k)).sum()
    }

    /// Validate the table
    /// - Checks that weights are finite and non-negative
    /// - Normalizes weights to sum to 1.0 if they don't
    pub fn validate_and_normalize(&mut self) -> Result<(), WeightsError> {
        for kind in FactorKind::ALL {
            let weight = self.get(kind);
            if !weight.is_finite() {
                return Err(WeightsError::NonFinite(kind));
            }
            if weight < 0.0 {
                return Err(WeightsError::NegativeWeight(kind));
            }
        }

        let weight_sum = self.total();
        if weight_sum <= 0.0 {
            return Err(WeightsError::ZeroTotalWeight);
        }

        if (weight_sum - 1.0).abs() > 1e-9 {
            for kind in FactorKind::ALL {
                *self.get_mut(kind) /= weight_sum;
            }
        }

        Ok(())
    }

    /// Parse a JSON weight table and validate it. Omitted factors keep their
    /// default weight before normalization.
    pub fn from_json_str(json: &str) -> Result<Self, WeightsError> {
        let mut weights: FactorWeights =
            serde_json::from_str(json).map_err(|e| WeightsError::Parse(e.to_string()))?;
        weights.validate_and_normalize()?;
        Ok(weights)
    }
}

/// Errors that can occur during weight validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum WeightsError {
    #[error("Factor '{0}' has negative weight")]
    NegativeWeight(FactorKind),

    #[error("Factor '{0}' has a non-finite weight")]
    NonFinite(FactorKind),

    #[error("Total weight cannot be zero")]
    ZeroTotalWeight,

    #[error("Invalid weight table: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = FactorWeights::default();
        assert!((weights.total() - 1.0).abs() < 1e-12);
        assert_eq!(weights.get(FactorKind::DayMaster), 0.30);
        assert_eq!(weights.get(FactorKind::Stars), 0.10);
    }

    #[test]
    fn test_default_weights_unchanged_by_validation() {
        let mut weights = FactorWeights::default();
        weights.validate_and_normalize().unwrap();
        assert_eq!(weights, FactorWeights::default());
    }

    #[test]
    fn test_weights_normalization() {
        let mut weights = FactorWeights {
            day_master: 2.0,
            strength: 2.0,
            elements: 0.0,
            structure: 0.0,
            day_pillar: 0.0,
            stars: 0.0,
        };
        weights.validate_and_normalize().unwrap();
        assert!((weights.total() - 1.0).abs() < 1e-12);
        assert_eq!(weights.day_master, 0.5);
    }

    #[test]
    fn test_negative_weight_error() {
        let mut weights = FactorWeights {
            strength: -0.5,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate_and_normalize(),
            Err(WeightsError::NegativeWeight(FactorKind::Strength))
        ));
    }

    #[test]
    fn test_zero_total_error() {
        let mut weights = FactorWeights {
            day_master: 0.0,
            strength: 0.0,
            elements: 0.0,
            structure: 0.0,
            day_pillar: 0.0,
            stars: 0.0,
        };
        assert!(matches!(
            weights.validate_and_normalize(),
            Err(WeightsError::ZeroTotalWeight)
        ));
    }

    #[test]
    fn test_non_finite_error() {
        let mut weights = FactorWeights {
            elements: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            weights.validate_and_normalize(),
            Err(WeightsError::NonFinite(FactorKind::Elements))
        ));
    }

    #[test]
    fn test_from_json_partial_table() {
        let weights = FactorWeights::from_json_str(r#"{"day_master": 0.6}"#).unwrap();
        assert!((weights.total() - 1.0).abs() < 1e-9);
        assert!(weights.day_master > FactorWeights::default().day_master);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            FactorWeights::from_json_str("not json"),
            Err(WeightsError::Parse(_))
        ));
    }
}
