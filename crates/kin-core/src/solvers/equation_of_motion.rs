//! Equations of motion over {u, v, a, t, s}.
//!
//! There is no single fixed formula here: the rule picks one of three
//! formulas from the presence pattern of that formula's own four quantities.
//! The branch order below is load-bearing: a presence pattern can satisfy
//! more than one formula, and the first listed wins:
//!
//! 1. `v = u + at`
//! 2. `s = ut + 0.5at²`
//! 3. `v² = u² + 2as`

use crate::errors::SolveError;
use crate::input::InputSet;
use crate::quantity::Quantity;
use crate::solution::{Formula, Solution};

/// Solve one unknown of {initial_velocity, final_velocity, acceleration,
/// time, distance} with the highest-precedence applicable formula.
///
/// # Errors
///
/// `Validation` when no formula's presence pattern matches; `Domain` on zero
/// denominators and negative square roots.
pub fn solve(inputs: &InputSet) -> Result<Solution, SolveError> {
    let u = inputs.value(Quantity::InitialVelocity);
    let v = inputs.value(Quantity::FinalVelocity);
    let a = inputs.value(Quantity::Acceleration);
    let t = inputs.value(Quantity::Time);
    let s = inputs.value(Quantity::Distance);

    match (u, v, a, t, s) {
        // v = u + at (distance is irrelevant to this formula)
        (Some(u), None, Some(a), Some(t), _) => Ok(Solution::with_formula(
            Quantity::FinalVelocity,
            u + a * t,
            Formula::FirstEquation,
        )),
        (None, Some(v), Some(a), Some(t), _) => Ok(Solution::with_formula(
            Quantity::InitialVelocity,
            v - a * t,
            Formula::FirstEquation,
        )),
        (Some(u), Some(v), None, Some(t), _) => {
            if t == 0.0 {
                return Err(SolveError::domain("time cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::Acceleration,
                (v - u) / t,
                Formula::FirstEquation,
            ))
        }
        (Some(u), Some(v), Some(a), None, _) => {
            if a == 0.0 {
                return Err(SolveError::domain("acceleration cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::Time,
                (v - u) / a,
                Formula::FirstEquation,
            ))
        }

        // s = ut + 0.5at² (final velocity is irrelevant to this formula)
        (Some(u), _, Some(a), Some(t), None) => Ok(Solution::with_formula(
            Quantity::Distance,
            u * t + 0.5 * a * t.powi(2),
            Formula::SecondEquation,
        )),
        (None, _, Some(a), Some(t), Some(s)) => {
            if t == 0.0 {
                return Err(SolveError::domain("time cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::InitialVelocity,
                (s - 0.5 * a * t.powi(2)) / t,
                Formula::SecondEquation,
            ))
        }
        (Some(u), _, None, Some(t), Some(s)) => {
            if t == 0.0 {
                return Err(SolveError::domain("time cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::Acceleration,
                2.0 * (s - u * t) / t.powi(2),
                Formula::SecondEquation,
            ))
        }

        // v² = u² + 2as (time is irrelevant to this formula)
        (Some(u), None, Some(a), _, Some(s)) => {
            let squared = u.powi(2) + 2.0 * a * s;
            if squared < 0.0 {
                return Err(SolveError::domain(
                    "cannot take the square root of a negative number",
                ));
            }
            Ok(Solution::with_formula(
                Quantity::FinalVelocity,
                squared.sqrt(),
                Formula::ThirdEquation,
            ))
        }
        (None, Some(v), Some(a), _, Some(s)) => {
            let squared = v.powi(2) - 2.0 * a * s;
            if squared < 0.0 {
                return Err(SolveError::domain(
                    "cannot take the square root of a negative number",
                ));
            }
            Ok(Solution::with_formula(
                Quantity::InitialVelocity,
                squared.sqrt(),
                Formula::ThirdEquation,
            ))
        }
        (Some(u), Some(v), None, _, Some(s)) => {
            if s == 0.0 {
                return Err(SolveError::domain("distance cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::Acceleration,
                (v.powi(2) - u.powi(2)) / (2.0 * s),
                Formula::ThirdEquation,
            ))
        }
        (Some(u), Some(v), Some(a), _, None) => {
            if a == 0.0 {
                return Err(SolveError::domain("acceleration cannot be zero"));
            }
            Ok(Solution::with_formula(
                Quantity::Distance,
                (v.powi(2) - u.powi(2)) / (2.0 * a),
                Formula::ThirdEquation,
            ))
        }

        _ => Err(SolveError::validation(super::NO_MATCHING_FORMULA)),
    }
}
