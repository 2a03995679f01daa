//! Demo — the guided-tour use-case.
//!
//! Runs the whole demonstration sequence (animal record, calculator,
//! everyday helpers) and returns the output lines in order. The caller
//! decides where the lines go; this crate never prints.

use primer_domain::animal::Animal;
use primer_domain::calculator::Calculator;
use primer_domain::error::PrimerError;
use primer_domain::geometry::circle_area;
use primer_domain::greeting::greet;
use primer_domain::time::format_timestamp;

use crate::ports::Clock;

/// The demonstration driver, generic over the clock it reads.
pub struct Demo<C> {
    clock: C,
}

impl<C: Clock> Demo<C> {
    /// Create a demo backed by the given clock.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Run the full sequence and return the output lines.
    ///
    /// The divide-by-zero attempt is caught here and reported as an
    /// `Error:` line.
    ///
    /// # Errors
    ///
    /// Returns [`PrimerError::InvalidArgument`] if a step outside that one
    /// guarded division fails; the fixed inputs never trigger one.
    #[tracing::instrument(skip(self))]
    pub fn run(&self) -> Result<Vec<String>, PrimerError> {
        let mut lines = animal_section();
        lines.push(String::new());
        lines.extend(calculator_section());
        lines.push(String::new());
        lines.extend(self.helper_section()?);
        tracing::debug!(line_count = lines.len(), "demo sequence complete");
        Ok(lines)
    }

    fn helper_section(&self) -> Result<Vec<String>, PrimerError> {
        tracing::debug!("running helper section");
        let mut lines = vec!["--- Helper Demo ---".to_string()];
        lines.push(greet("Alok"));

        let radius = 5.0;
        let area = circle_area(radius)?;
        lines.push(format!(
            "The area of a circle with radius {radius} is: {area:.2}"
        ));

        let ts = self.clock.now();
        lines.push(format!("Current timestamp: {}", format_timestamp(&ts)));
        Ok(lines)
    }
}

fn animal_section() -> Vec<String> {
    tracing::debug!("running animal section");
    let mut animal = Animal::new("Buddy", "Golden Retriever", 5);
    let mut lines = vec!["--- Animal Demo ---".to_string()];
    lines.push(animal.describe());
    lines.push(animal.celebrate_birthday());
    lines.push(animal.describe());
    lines
}

fn calculator_section() -> Vec<String> {
    tracing::debug!("running calculator section");
    let calc = Calculator::new();
    let (a, b) = (10.5, 2.5);

    let mut lines = vec!["--- Calculator Demo ---".to_string()];
    lines.push(format!("{a} + {b} = {}", calc.add(a, b)));
    lines.push(format!("{a} - {b} = {}", calc.subtract(a, b)));
    lines.push(format!("{a} * {b} = {}", calc.multiply(a, b)));
    for divisor in [b, 0.0] {
        match calc.divide(a, divisor) {
            Ok(quotient) => lines.push(format!("{a} / {divisor} = {quotient}")),
            Err(err) => lines.push(format!("Error: {err}")),
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use primer_domain::time::Timestamp;

    struct FixedClock {
        ts: Timestamp,
    }

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.ts
        }
    }

    fn demo() -> Demo<FixedClock> {
        let ts = chrono::Local
            .with_ymd_and_hms(2024, 3, 7, 9, 5, 2)
            .unwrap();
        Demo::new(FixedClock { ts })
    }

    #[test]
    fn should_produce_the_full_sequence_in_order() {
        let lines = demo().run().unwrap();
        let expected = [
            "--- Animal Demo ---",
            "Buddy is a 5-year-old Golden Retriever.",
            "Happy birthday to Buddy! They are now 6 years old.",
            "Buddy is a 6-year-old Golden Retriever.",
            "",
            "--- Calculator Demo ---",
            "10.5 + 2.5 = 13",
            "10.5 - 2.5 = 8",
            "10.5 * 2.5 = 26.25",
            "10.5 / 2.5 = 4.2",
            "Error: Cannot divide by zero.",
            "",
            "--- Helper Demo ---",
            "Hello, Alok! Nice to see you.",
            "The area of a circle with radius 5 is: 78.54",
            "Current timestamp: 2024-03-07 09:05:02",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn should_report_divide_by_zero_without_failing_the_run() {
        let lines = demo().run().unwrap();
        assert!(lines.contains(&"Error: Cannot divide by zero.".to_string()));
    }

    #[test]
    fn should_render_the_timestamp_from_the_injected_clock() {
        let lines = demo().run().unwrap();
        let last = lines.last().unwrap();
        assert_eq!(last, "Current timestamp: 2024-03-07 09:05:02");
    }

    #[test]
    fn should_show_the_animal_aging_across_the_section() {
        let lines = demo().run().unwrap();
        let before = lines
            .iter()
            .position(|l| l == "Buddy is a 5-year-old Golden Retriever.")
            .unwrap();
        let after = lines
            .iter()
            .position(|l| l == "Buddy is a 6-year-old Golden Retriever.")
            .unwrap();
        assert!(before < after);
    }
}
