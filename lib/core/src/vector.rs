use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A five-dimensional vector indexed by [`Element::index`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct ElementVector {
    data: [f64; 5],
}

impl ElementVector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; 5]) -> Self {
        Self { data }
    }

    /// Vector with `weight` on each listed element and 0 elsewhere.
    /// Later entries overwrite earlier ones for the same element.
    #[must_use]
    pub fn from_weights(weights: &[(Element, f64)]) -> Self {
        let mut data = [0.0; 5];
        for (element, weight) in weights {
            data[element.index()] = *weight;
        }
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, element: Element) -> f64 {
        self.data[element.index()]
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    #[inline]
    pub fn dot(&self, other: &ElementVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Cosine similarity; 0 when either vector has zero length
    #[inline]
    pub fn cosine_similarity(&self, other: &ElementVector) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        self.dot(other) / (norm_a * norm_b)
    }

    /// Divide every component by the component sum, treating a zero sum as 1
    #[must_use]
    pub fn sum_normalized(&self) -> Self {
        let sum = self.sum();
        let divisor = if sum == 0.0 { 1.0 } else { sum };
        self * (1.0 / divisor)
    }
}

impl Mul<f64> for &ElementVector {
    type Output = ElementVector;

    fn mul(self, scalar: f64) -> ElementVector {
        let mut data = self.data;
        for x in &mut data {
            *x *= scalar;
        }
        ElementVector { data }
    }
}
