//! The interactive menu shell.

use std::collections::BTreeMap;

use anyhow::Result;
use kin_config::KinConfig;
use kin_core::Family;
use kin_history::{HistoryLog, ResultValue};

use crate::calculator;
use crate::cli::Cli;
use crate::prompt;
use crate::screen;

/// Owns the history log and drives the menu loop until the user exits.
pub struct Shell {
    history: HistoryLog,
    limit: usize,
    clear_screen: bool,
    show_banner: bool,
}

impl Shell {
    #[must_use]
    pub fn new(cli: &Cli, config: KinConfig) -> Self {
        let path = cli.history.clone().unwrap_or(config.history.path);
        Self {
            history: HistoryLog::open(path),
            limit: cli.limit.unwrap_or(config.history.limit),
            clear_screen: config.ui.clear_screen,
            show_banner: config.ui.banner && !cli.no_banner,
        }
    }

    /// Run the menu loop. Returns when the user picks Exit; only prompt I/O
    /// failures end the loop early.
    ///
    /// # Errors
    ///
    /// Propagates prompt stream I/O failures.
    pub fn run(&mut self) -> Result<()> {
        if self.clear_screen {
            screen::clear();
        }
        if self.show_banner {
            screen::banner();
        }

        loop {
            match self.main_menu()? {
                0 => {
                    println!("Thank you for using Kinema");
                    println!("Your calculation history has been saved");
                    return Ok(());
                }
                1 => self.motion_menu()?,
                2 => self.show_history(),
                3 => self.clear_history()?,
                _ => {}
            }
            prompt::pause()?;
        }
    }

    fn main_menu(&self) -> Result<u32> {
        println!("====== Main Menu ======");
        println!("1. Motion Calculations");
        println!("2. Show Calculations History");
        println!("3. Clear History");
        println!("0. Exit");
        Ok(prompt::read_choice("Enter your choice: ", 0, 3)?)
    }

    fn motion_menu(&mut self) -> Result<()> {
        println!("====== Motion Menu ======");
        println!("1. Basic Motion");
        println!("2. Equation of Motion");
        println!("3. Free Fall");

        let family = match prompt::read_choice("Enter your choice: ", 1, 3)? {
            1 => Family::Motion,
            2 => Family::EquationOfMotion,
            _ => Family::FreeFall,
        };
        calculator::run(family, &mut self.history)
    }

    fn show_history(&self) {
        if self.history.is_empty() {
            println!("No calculation history");
            return;
        }

        let shown = self.history.recent(self.limit);
        println!("====== Calculation History (last {} entries) ======", shown.len());
        for entry in shown {
            println!("{} - {}", entry.timestamp, entry.topic);
            println!("  inputs:  {}", format_inputs(&entry.inputs));
            println!("  results: {}", format_results(&entry.results));
        }
    }

    fn clear_history(&mut self) -> Result<()> {
        if prompt::confirm("Are you sure you want to clear history? (yes/no): ")? {
            self.history.clear();
            println!("History cleared");
        }
        Ok(())
    }
}

fn format_inputs(inputs: &BTreeMap<String, Option<f64>>) -> String {
    inputs
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!("{name}={value}"),
            None => format!("{name}=?"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_results(results: &BTreeMap<String, ResultValue>) -> String {
    results
        .iter()
        .map(|(name, value)| match value {
            ResultValue::Number(value) => format!("{name}={value:.2}"),
            ResultValue::Text(label) => format!("{name}={label}"),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn inputs_line_marks_unknowns() {
        let inputs = BTreeMap::from([
            ("distance".to_string(), Some(100.0)),
            ("speed".to_string(), Some(20.0)),
            ("time".to_string(), None),
        ]);
        assert_eq!(format_inputs(&inputs), "distance=100, speed=20, time=?");
    }

    #[test]
    fn results_line_rounds_numbers_and_keeps_labels() {
        let results = BTreeMap::from([
            ("formula".to_string(), ResultValue::Text("v = u + at".to_string())),
            ("time".to_string(), ResultValue::Number(5.0)),
        ]);
        assert_eq!(format_results(&results), "formula=v = u + at, time=5.00");
    }
}
