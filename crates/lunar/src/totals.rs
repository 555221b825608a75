//! Per-phase totals.

use std::ops::Index;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::phase::LunarPhase;

/// Non-negative total for each of the eight phases.
///
/// Every phase is always present, zero when nothing was added to it, and
/// iteration follows canonical order. The grand total always fits in a
/// `u64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhaseTotals {
    counts: [u64; LunarPhase::COUNT],
}

impl PhaseTotals {
    /// Creates totals with every phase at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total for `phase`.
    pub fn get(&self, phase: LunarPhase) -> u64 {
        self.counts[phase.index()]
    }

    /// Returns the sum over all phases.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Returns the largest single-phase total.
    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterates `(phase, total)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (LunarPhase, u64)> + '_ {
        LunarPhase::ALL.iter().map(|&phase| (phase, self.get(phase)))
    }

    /// Adds `count` to `phase`.
    ///
    /// Returns `None`, leaving the totals unchanged, if the grand total
    /// would overflow.
    pub(crate) fn add(&mut self, phase: LunarPhase, count: u64) -> Option<()> {
        self.total().checked_add(count)?;
        self.counts[phase.index()] += count;
        Some(())
    }

    /// Adds one to `phase`.
    pub(crate) fn increment(&mut self, phase: LunarPhase) {
        self.counts[phase.index()] += 1;
    }
}

impl Index<LunarPhase> for PhaseTotals {
    type Output = u64;

    fn index(&self, phase: LunarPhase) -> &u64 {
        &self.counts[phase.index()]
    }
}

impl Serialize for PhaseTotals {
    /// Serializes as a map keyed by phase name, in canonical order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(LunarPhase::COUNT))?;
        for (phase, count) in self.iter() {
            map.serialize_entry(phase.name(), &count)?;
        }
        map.end()
    }
}
