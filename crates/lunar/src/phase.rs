//! The eight canonical lunar phases.

use std::fmt;

use serde::Serialize;

/// One of the eight named stages of the synodic cycle.
///
/// The order is cyclic: [`LunarPhase::WaningCrescent`] is followed by
/// [`LunarPhase::NewMoon`]. Variants are declared in canonical order, so
/// `Ord` sorts them from New Moon to Waning Crescent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LunarPhase {
    #[serde(rename = "New Moon")]
    NewMoon,
    #[serde(rename = "Waxing Crescent")]
    WaxingCrescent,
    #[serde(rename = "First Quarter")]
    FirstQuarter,
    #[serde(rename = "Waxing Gibbous")]
    WaxingGibbous,
    #[serde(rename = "Full Moon")]
    FullMoon,
    #[serde(rename = "Waning Gibbous")]
    WaningGibbous,
    #[serde(rename = "Last Quarter")]
    LastQuarter,
    #[serde(rename = "Waning Crescent")]
    WaningCrescent,
}

impl LunarPhase {
    /// Number of phases in one cycle.
    pub const COUNT: usize = 8;

    /// All phases in canonical order, starting at New Moon.
    pub const ALL: [LunarPhase; Self::COUNT] = [
        LunarPhase::NewMoon,
        LunarPhase::WaxingCrescent,
        LunarPhase::FirstQuarter,
        LunarPhase::WaxingGibbous,
        LunarPhase::FullMoon,
        LunarPhase::WaningGibbous,
        LunarPhase::LastQuarter,
        LunarPhase::WaningCrescent,
    ];

    /// Returns the phase at position `index` of the cycle, wrapping modulo 8.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Returns the position of the phase in canonical order (0..8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the following phase, wrapping from Waning Crescent to New Moon.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the human-readable phase name.
    pub fn name(self) -> &'static str {
        match self {
            LunarPhase::NewMoon => "New Moon",
            LunarPhase::WaxingCrescent => "Waxing Crescent",
            LunarPhase::FirstQuarter => "First Quarter",
            LunarPhase::WaxingGibbous => "Waxing Gibbous",
            LunarPhase::FullMoon => "Full Moon",
            LunarPhase::WaningGibbous => "Waning Gibbous",
            LunarPhase::LastQuarter => "Last Quarter",
            LunarPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
