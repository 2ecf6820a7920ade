//! Solver output: solved values plus the formula that produced them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

// ---------------------------------------------------------------------------
// Formula
// ---------------------------------------------------------------------------

/// One of the kinematic formulas a solver rule can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// v = s/t
    UniformMotion,
    /// v = u + at
    FirstEquation,
    /// s = ut + 0.5at²
    SecondEquation,
    /// v² = u² + 2as
    ThirdEquation,
    /// v = gt
    FallVelocityTime,
    /// v² = 2gh
    FallVelocityHeight,
    /// h = 0.5gt²
    FallHeight,
}

impl Formula {
    /// The display label, as written in textbooks. This is also the string
    /// recorded in history entries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UniformMotion => "v = s/t",
            Self::FirstEquation => "v = u + at",
            Self::SecondEquation => "s = ut + 0.5at²",
            Self::ThirdEquation => "v² = u² + 2as",
            Self::FallVelocityTime => "v = gt",
            Self::FallVelocityHeight => "v² = 2gh",
            Self::FallHeight => "h = 0.5gt²",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Solution
// ---------------------------------------------------------------------------

/// A successful solve: the computed quantities and the formula used.
///
/// `formula` is `None` for single-formula families, where the label adds
/// nothing to the output.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub values: Vec<(Quantity, f64)>,
    pub formula: Option<Formula>,
}

impl Solution {
    /// A solution without a formula label.
    #[must_use]
    pub fn single(quantity: Quantity, value: f64) -> Self {
        Self {
            values: vec![(quantity, value)],
            formula: None,
        }
    }

    /// A solution labelled with the formula that produced it.
    #[must_use]
    pub fn with_formula(quantity: Quantity, value: f64, formula: Formula) -> Self {
        Self {
            values: vec![(quantity, value)],
            formula: Some(formula),
        }
    }

    /// The solved value for `quantity`, if present.
    #[must_use]
    pub fn value(&self, quantity: Quantity) -> Option<f64> {
        self.values
            .iter()
            .find(|(q, _)| *q == quantity)
            .map(|(_, value)| *value)
    }
}
