//! Horizontal text bar chart.

use selene_lunar::{LunarPhase, PhaseTotals};

use crate::error::ChartError;

/// Number of cells used by the longest bar unless configured otherwise.
pub const DEFAULT_WIDTH: usize = 50;

/// Bar cell glyph unless configured otherwise.
pub const DEFAULT_GLYPH: char = '█';

const PHASE_CAPTION: &str = "Lunar Phase";
const COUNT_CAPTION: &str = "Number of Observations";

/// Renders per-phase totals for display.
pub trait ChartRenderer {
    /// Renders `totals` under `title`.
    fn render(&self, title: &str, totals: &PhaseTotals) -> String;
}

/// Horizontal bar chart scaled so the largest total spans `width` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    width: usize,
    glyph: char,
}

impl BarChart {
    /// Creates a chart whose longest bar is `width` cells.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidWidth`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self, ChartError> {
        if width == 0 {
            return Err(ChartError::InvalidWidth { width });
        }
        Ok(Self {
            width,
            glyph: DEFAULT_GLYPH,
        })
    }

    /// Sets the glyph that fills each bar cell.
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    /// Returns the width of the longest bar.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the bar glyph.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Number of cells for `count` when the largest total is `max`.
    ///
    /// Non-zero counts always get at least one cell.
    fn bar_len(&self, count: u64, max: u64) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        let scaled = (count as f64 / max as f64 * self.width as f64).round() as usize;
        scaled.clamp(1, self.width)
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            glyph: DEFAULT_GLYPH,
        }
    }
}

impl ChartRenderer for BarChart {
    fn render(&self, title: &str, totals: &PhaseTotals) -> String {
        let label_width = LunarPhase::ALL
            .iter()
            .map(|p| p.name().len())
            .chain([PHASE_CAPTION.len()])
            .max()
            .unwrap_or(0);
        let max = totals.max();

        let mut out = String::new();
        out.push_str(title);
        out.push_str("\n\n");
        out.push_str(&format!("{PHASE_CAPTION:<label_width$} | {COUNT_CAPTION}\n"));
        for (phase, count) in totals.iter() {
            let cells = self.bar_len(count, max);
            let bar = self.glyph.to_string().repeat(cells);
            let sep = if cells > 0 { " " } else { "" };
            out.push_str(&format!(
                "{:<label_width$} | {bar}{sep}{count}\n",
                phase.name()
            ));
        }
        out
    }
}
