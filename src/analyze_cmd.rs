//! Analyze command: aggregate one taxon-year by lunar phase and chart it.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use selene_chart::ChartRenderer;
use selene_io::{ExportSource, ObservationSource, PhaseReport, write_report};
use selene_lunar::{PhaseCalculator, PhaseTotals};

use crate::cli::AnalyzeArgs;
use crate::config;
use crate::convert;

/// Result of aggregating one taxon-year.
#[derive(Debug)]
pub struct Analysis {
    pub taxon_name: String,
    /// Observations per phase.
    pub observations: PhaseTotals,
    /// Calendar days per phase in the year.
    pub days: PhaseTotals,
}

/// Run the analyze pipeline.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze", taxon_id = args.taxon_id, year = args.year).entered();

    // 1. Load config and build crate configs
    let config = config::load(args.config.as_deref())?;
    let calculator = convert::build_calculator(&config.lunar)?;
    let chart = convert::build_bar_chart(&config.chart, args.width)?;

    // 2. Open observation source
    let input = args.input.as_ref().or(config.io.input.as_ref()).ok_or_else(|| {
        anyhow!("no input path: set [io].input in config or use --input")
    })?;
    let source = ExportSource::open(input)
        .with_context(|| format!("failed to load observations: {}", input.display()))?;

    // 3. Aggregate
    let analysis = analyze(&source, &calculator, args.taxon_id, args.year)?;

    // 4. Render
    let title = format!("Observations of {} in {}", analysis.taxon_name, args.year);
    println!("{}", chart.render(&title, &analysis.observations));

    // 5. Optional JSON report
    if let Some(path) = args.output.as_ref().or(config.io.output.as_ref()) {
        let report = PhaseReport::new(
            args.taxon_id,
            &analysis.taxon_name,
            args.year,
            &analysis.observations,
            &analysis.days,
        );
        write_report(path, &report)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
    }

    Ok(())
}

/// Fetches a taxon's daily observations for `year` from `source` and sums
/// them per phase.
pub fn analyze(
    source: &dyn ObservationSource,
    calculator: &PhaseCalculator,
    taxon_id: u64,
    year: i32,
) -> Result<Analysis> {
    let taxon_name = source
        .taxon_name(taxon_id)
        .with_context(|| format!("failed to resolve taxon {taxon_id}"))?;
    let daily = source
        .daily_observations(taxon_id, year)
        .with_context(|| format!("failed to fetch observations of taxon {taxon_id}"))?;
    info!(taxon = %taxon_name, n_days = daily.len(), "daily observations loaded");
    if daily.is_empty() {
        warn!(taxon_id, year, "no observations in the requested year");
    }

    let observations = calculator
        .aggregate(&daily)
        .context("failed to aggregate observations by phase")?;
    let days = calculator.days_per_phase(year);
    info!(total = observations.total(), "observations aggregated");

    Ok(Analysis {
        taxon_name,
        observations,
        days,
    })
}
