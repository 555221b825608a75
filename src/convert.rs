//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use tracing::info;

use crate::config::{ChartToml, LunarToml};

use selene_chart::BarChart;
use selene_lunar::{PhaseBoundaries, PhaseCalculator, PhaseConfig};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parses a bucket alignment name into the corresponding enum variant.
pub fn parse_boundaries(s: &str) -> Result<PhaseBoundaries> {
    match s.to_lowercase().as_str() {
        "centered" | "centred" => Ok(PhaseBoundaries::Centered),
        "leading" => Ok(PhaseBoundaries::Leading),
        other => bail!("unknown phase boundaries: {other:?}"),
    }
}

/// Parses a UTC timestamp into fractional days since 1970-01-01.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]` or the same with a space separator.
pub fn parse_epoch(s: &str) -> Result<f64> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    let dt = FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
        .with_context(|| format!("invalid epoch {s:?}: expected YYYY-MM-DDTHH:MM"))?;
    Ok(dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY)
}

/// Builds a [`PhaseConfig`] from the TOML lunar configuration.
pub fn build_phase_config(lunar: &LunarToml) -> Result<PhaseConfig> {
    let mut cfg = PhaseConfig::default()
        .with_synodic_month(lunar.synodic_month)
        .with_boundaries(parse_boundaries(&lunar.boundaries)?);
    if let Some(ref epoch) = lunar.epoch {
        cfg = cfg.with_epoch(parse_epoch(epoch)?);
    }
    cfg.validate().context("invalid [lunar] configuration")?;
    Ok(cfg)
}

/// Builds a [`PhaseCalculator`] from the TOML lunar configuration and logs
/// the settings it will classify with.
pub fn build_calculator(lunar: &LunarToml) -> Result<PhaseCalculator> {
    let calculator = PhaseCalculator::new(build_phase_config(lunar)?)?;
    let cfg = calculator.config();
    info!(
        epoch = cfg.epoch(),
        synodic_month = cfg.synodic_month(),
        boundaries = ?cfg.boundaries(),
        "phase configuration"
    );
    Ok(calculator)
}

/// Builds a [`BarChart`] from the TOML chart configuration, with an
/// optional width override from the command line.
pub fn build_bar_chart(chart: &ChartToml, width: Option<usize>) -> Result<BarChart> {
    let bar_chart = BarChart::new(width.unwrap_or(chart.width))
        .context("invalid [chart] configuration")?;
    Ok(bar_chart.with_glyph(chart.glyph))
}
