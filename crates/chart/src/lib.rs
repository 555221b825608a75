//! # selene-chart
//!
//! Text bar charts of per-phase totals, one row per phase in canonical
//! order.
//!
//! ```
//! use selene_chart::{BarChart, ChartRenderer};
//! use selene_lunar::PhaseTotals;
//!
//! let chart = BarChart::new(20).unwrap();
//! let text = chart.render("Observations of Aves in 2023", &PhaseTotals::new());
//! assert!(text.starts_with("Observations of Aves in 2023"));
//! assert_eq!(text.lines().count(), 2 + 1 + 8);
//! ```

mod bar;
mod error;

pub use bar::{BarChart, ChartRenderer, DEFAULT_GLYPH, DEFAULT_WIDTH};
pub use error::ChartError;
