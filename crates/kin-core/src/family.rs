//! Formula families and the uniform solve dispatch.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SolveError;
use crate::input::InputSet;
use crate::quantity::Quantity;
use crate::solution::{Formula, Solution};
use crate::solvers;

/// A named group of related kinematic formulas sharing a common variable set.
///
/// The set is closed: every family dispatches through [`Family::solve`], and
/// there is no open-ended extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Motion,
    EquationOfMotion,
    FreeFall,
}

impl Family {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motion => "motion",
            Self::EquationOfMotion => "equation_of_motion",
            Self::FreeFall => "free_fall",
        }
    }

    /// Topic label recorded in history entries and shown in menus.
    #[must_use]
    pub const fn topic(self) -> &'static str {
        match self {
            Self::Motion => "Basic Motion",
            Self::EquationOfMotion => "Equation of Motion",
            Self::FreeFall => "Free Fall",
        }
    }

    /// The ordered quantity list this family prompts for.
    #[must_use]
    pub const fn quantities(self) -> &'static [Quantity] {
        match self {
            Self::Motion => &[Quantity::Speed, Quantity::Time, Quantity::Distance],
            Self::EquationOfMotion => &[
                Quantity::InitialVelocity,
                Quantity::FinalVelocity,
                Quantity::Acceleration,
                Quantity::Time,
                Quantity::Distance,
            ],
            Self::FreeFall => &[Quantity::FinalVelocity, Quantity::Height, Quantity::Time],
        }
    }

    /// The formulas this family can apply, for display in headers.
    #[must_use]
    pub const fn formulas(self) -> &'static [Formula] {
        match self {
            Self::Motion => &[Formula::UniformMotion],
            Self::EquationOfMotion => &[
                Formula::FirstEquation,
                Formula::SecondEquation,
                Formula::ThirdEquation,
            ],
            Self::FreeFall => &[
                Formula::FallVelocityTime,
                Formula::FallVelocityHeight,
                Formula::FallHeight,
            ],
        }
    }

    /// An input set covering this family's quantities, all unknown.
    #[must_use]
    pub fn input_set(self) -> InputSet {
        InputSet::new(self.quantities())
    }

    /// Solve the unknown in `inputs` with this family's rules.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Validation`] when the known/unknown pattern does
    /// not select a formula, and [`SolveError::Domain`] on zero denominators
    /// or negative square roots.
    pub fn solve(self, inputs: &InputSet) -> Result<Solution, SolveError> {
        match self {
            Self::Motion => solvers::motion::solve(inputs),
            Self::EquationOfMotion => solvers::equation_of_motion::solve(inputs),
            Self::FreeFall => solvers::free_fall::solve(inputs),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.topic())
    }
}
