//! Phases command: list the lunar phase of every day of a year.

use anyhow::Result;
use tracing::info_span;

use selene_lunar::LunarPhase;

use crate::cli::PhasesArgs;
use crate::config;
use crate::convert;

/// Print the phase calendar of a year followed by per-phase day counts.
pub fn run(args: PhasesArgs) -> Result<()> {
    let _cmd = info_span!("phases", year = args.year).entered();
    let config = config::load(args.config.as_deref())?;
    let calculator = convert::build_calculator(&config.lunar)?;

    if !args.summary {
        for (date, phase) in calculator.phase_calendar(args.year) {
            println!("{date}  {phase}");
        }
        println!();
    }

    let days = calculator.days_per_phase(args.year);
    let width = LunarPhase::ALL.iter().map(|p| p.name().len()).max().unwrap_or(0);
    for (phase, n) in days.iter() {
        println!("{:<width$}  {n:>3} days", phase.name());
    }
    Ok(())
}
