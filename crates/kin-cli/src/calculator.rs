//! One calculation: prompt, solve, display, record.

use std::collections::BTreeMap;

use anyhow::Result;
use kin_core::{Family, InputSet, Solution};
use kin_history::{HistoryEntry, HistoryLog, ResultValue};

use crate::prompt;

/// Run a single calculation for `family`, recording it on success.
///
/// Solver failures are reported and swallowed here: they never end the
/// session and never reach the history log. There is no retry.
///
/// # Errors
///
/// Only I/O failures on the prompt stream propagate.
pub fn run(family: Family, history: &mut HistoryLog) -> Result<()> {
    print_header(family);
    let inputs = collect_inputs(family)?;

    match family.solve(&inputs) {
        Ok(solution) => {
            print_solution(&solution);
            history.append(build_entry(family, &inputs, &solution));
        }
        Err(error) => println!("Calculation error: {error}"),
    }

    Ok(())
}

fn print_header(family: Family) {
    println!("====== {} ======", family.topic().to_uppercase());
    println!("Enter known values (press Enter to skip the unknown)");
    for formula in family.formulas() {
        println!("  {formula}");
    }
}

fn collect_inputs(family: Family) -> Result<InputSet> {
    let mut inputs = family.input_set();
    for &quantity in family.quantities() {
        let label = format!("{} ({}): ", quantity.display_name(), quantity.unit());
        inputs.set(quantity, prompt::read_float(&label)?);
    }
    Ok(inputs)
}

fn print_solution(solution: &Solution) {
    println!("====== Results ======");
    if let Some(formula) = solution.formula {
        println!("Formula used: {formula}");
    }
    for (quantity, value) in &solution.values {
        println!("{}: {value:.2}", quantity.display_name());
    }
}

fn build_entry(family: Family, inputs: &InputSet, solution: &Solution) -> HistoryEntry {
    let mut results: BTreeMap<String, ResultValue> = solution
        .values
        .iter()
        .map(|(quantity, value)| (quantity.as_str().to_string(), ResultValue::Number(*value)))
        .collect();
    if let Some(formula) = solution.formula {
        results.insert(
            "formula".to_string(),
            ResultValue::Text(formula.label().to_string()),
        );
    }

    HistoryEntry::new(family.topic(), inputs.snapshot(), results)
}
