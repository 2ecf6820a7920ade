//! Basic uniform motion: v = s/t.

use crate::errors::SolveError;
use crate::input::InputSet;
use crate::quantity::Quantity;
use crate::solution::Solution;

/// Solve the one unknown of {speed, time, distance}.
///
/// # Errors
///
/// `Validation` unless exactly one quantity is unknown; `Domain` when the
/// needed denominator (time or speed) is zero.
pub fn solve(inputs: &InputSet) -> Result<Solution, SolveError> {
    if inputs.unknown_count() != 1 {
        return Err(SolveError::validation(super::EXACTLY_TWO_VALUES));
    }

    let speed = inputs.value(Quantity::Speed);
    let time = inputs.value(Quantity::Time);
    let distance = inputs.value(Quantity::Distance);

    match (speed, time, distance) {
        (None, Some(time), Some(distance)) => {
            if time == 0.0 {
                return Err(SolveError::domain("time cannot be zero"));
            }
            Ok(Solution::single(Quantity::Speed, distance / time))
        }
        (Some(speed), Some(time), None) => {
            Ok(Solution::single(Quantity::Distance, speed * time))
        }
        (Some(speed), None, Some(distance)) => {
            if speed == 0.0 {
                return Err(SolveError::domain("speed cannot be zero"));
            }
            Ok(Solution::single(Quantity::Time, distance / speed))
        }
        _ => Err(SolveError::validation(super::EXACTLY_TWO_VALUES)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::family::Family;

    fn inputs(speed: Option<f64>, time: Option<f64>, distance: Option<f64>) -> InputSet {
        let mut set = Family::Motion.input_set();
        set.set(Quantity::Speed, speed);
        set.set(Quantity::Time, time);
        set.set(Quantity::Distance, distance);
        set
    }

    #[rstest]
    #[case::solve_speed(None, Some(5.0), Some(100.0), Quantity::Speed, 20.0)]
    #[case::solve_distance(Some(20.0), Some(5.0), None, Quantity::Distance, 100.0)]
    #[case::solve_time(Some(20.0), None, Some(100.0), Quantity::Time, 5.0)]
    fn solves_each_unknown(
        #[case] speed: Option<f64>,
        #[case] time: Option<f64>,
        #[case] distance: Option<f64>,
        #[case] expected_quantity: Quantity,
        #[case] expected_value: f64,
    ) {
        let solution = solve(&inputs(speed, time, distance)).expect("should solve");
        assert_eq!(solution.values, vec![(expected_quantity, expected_value)]);
        assert_eq!(solution.formula, None);
    }

    #[test]
    fn triple_round_trips_within_tolerance() {
        // distance = speed * time holds for the solved variable too.
        let solution = solve(&inputs(Some(12.5), Some(8.0), None)).unwrap();
        let distance = solution.value(Quantity::Distance).unwrap();

        let back = solve(&inputs(None, Some(8.0), Some(distance))).unwrap();
        let speed = back.value(Quantity::Speed).unwrap();
        assert!((speed - 12.5).abs() < 1e-9);
    }

    #[rstest]
    #[case::all_known(Some(20.0), Some(5.0), Some(100.0))]
    #[case::two_unknown(Some(20.0), None, None)]
    #[case::all_unknown(None, None, None)]
    fn wrong_unknown_count_is_rejected(
        #[case] speed: Option<f64>,
        #[case] time: Option<f64>,
        #[case] distance: Option<f64>,
    ) {
        let error = solve(&inputs(speed, time, distance)).unwrap_err();
        assert!(matches!(error, SolveError::Validation(_)));
    }

    #[test]
    fn zero_time_is_a_domain_error() {
        let error = solve(&inputs(None, Some(0.0), Some(100.0))).unwrap_err();
        assert_eq!(error, SolveError::Domain("time cannot be zero".to_string()));
    }

    #[test]
    fn zero_speed_is_a_domain_error() {
        let error = solve(&inputs(Some(0.0), None, Some(100.0))).unwrap_err();
        assert_eq!(error, SolveError::Domain("speed cannot be zero".to_string()));
    }
}
