//!
//! The gas savings summary.
//!

use colored::Colorize;

use crate::scenario::Scenario;
use crate::series::Series;

///
/// The gas savings summary.
///
#[derive(Debug)]
pub struct Summary<'a> {
    /// The series before the optimizations.
    pub reference: &'a Series,
    /// The series after the optimizations.
    pub candidate: &'a Series,
}

impl<'a> Summary<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(reference: &'a Series, candidate: &'a Series) -> Self {
        Self {
            reference,
            candidate,
        }
    }

    ///
    /// Returns the share of gas saved in `scenario`, in percent.
    ///
    /// Negative if the candidate consumes more gas.
    ///
    pub fn saving(&self, scenario: Scenario) -> f64 {
        let reference = self.reference.get(scenario) as f64;
        let candidate = self.candidate.get(scenario) as f64;
        if reference == 0.0 {
            return 0.0;
        }
        (reference - candidate) / reference * 100.0
    }
}

impl std::fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "╔═════════════════════════╡ GAS SAVINGS ╞══════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:16} {} {} {}     ║",
            "",
            format!("{:>11}", self.reference.label).bright_white(),
            format!("{:>11}", self.candidate.label).bright_white(),
            format!("{:>11}", "Saving").bright_white(),
        )?;
        for scenario in Scenario::ALL {
            let saving = self.saving(scenario);
            let saving = format!("{:>11}", format!("{saving:.1}%"));
            let saving = if self.candidate.get(scenario) <= self.reference.get(scenario) {
                saving.green()
            } else {
                saving.bright_red()
            };
            writeln!(
                f,
                "║     {:16} {:>11} {:>11} {}     ║",
                scenario.label(),
                self.reference.get(scenario),
                self.candidate.get(scenario),
                saving,
            )?;
        }
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
