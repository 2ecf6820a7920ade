//! Free fall under standard gravity.
//!
//! Three formulas share {final_velocity, height, time}; the branch order
//! below mirrors the equation-of-motion precedence and decides which formula
//! claims an ambiguous presence pattern. Heights are computed literally;
//! there is no explicit negative-height guard.

use crate::errors::SolveError;
use crate::input::InputSet;
use crate::quantity::Quantity;
use crate::solution::{Formula, Solution};
use crate::GRAVITY;

/// Solve the one unknown of {final_velocity, height, time}.
///
/// # Errors
///
/// `Validation` unless exactly one quantity is unknown.
pub fn solve(inputs: &InputSet) -> Result<Solution, SolveError> {
    if inputs.unknown_count() != 1 {
        return Err(SolveError::validation(super::EXACTLY_TWO_VALUES));
    }

    let velocity = inputs.value(Quantity::FinalVelocity);
    let height = inputs.value(Quantity::Height);
    let time = inputs.value(Quantity::Time);

    match (velocity, height, time) {
        // v = gt
        (None, _, Some(time)) => Ok(Solution::with_formula(
            Quantity::FinalVelocity,
            GRAVITY * time,
            Formula::FallVelocityTime,
        )),
        (Some(velocity), _, None) => Ok(Solution::with_formula(
            Quantity::Time,
            velocity / GRAVITY,
            Formula::FallVelocityTime,
        )),

        // v² = 2gh
        (None, Some(height), _) => Ok(Solution::with_formula(
            Quantity::FinalVelocity,
            (2.0 * GRAVITY * height).sqrt(),
            Formula::FallVelocityHeight,
        )),
        (Some(velocity), None, _) => Ok(Solution::with_formula(
            Quantity::Height,
            velocity.powi(2) / (2.0 * GRAVITY),
            Formula::FallVelocityHeight,
        )),

        // h = 0.5gt²
        (_, None, Some(time)) => Ok(Solution::with_formula(
            Quantity::Height,
            0.5 * GRAVITY * time.powi(2),
            Formula::FallHeight,
        )),
        (_, Some(height), None) => Ok(Solution::with_formula(
            Quantity::Time,
            (2.0 * height / GRAVITY).sqrt(),
            Formula::FallHeight,
        )),

        _ => Err(SolveError::validation(super::NO_MATCHING_FORMULA)),
    }
}
