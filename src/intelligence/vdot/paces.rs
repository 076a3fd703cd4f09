// ABOUTME: Training pace derivation from VDOT using reference mile race pace multipliers
// ABOUTME: Produces easy, marathon, threshold, interval and repetition paces in seconds per mile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::reference_table::ReferenceTable;
use crate::config::PaceMultipliers;
use crate::models::Vdot;
use serde::{Deserialize, Serialize};

/// Named training intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingZone {
    /// Easy / recovery running
    Easy,
    /// Marathon race pace
    Marathon,
    /// Lactate threshold (tempo)
    Threshold,
    /// VO2max intervals
    Interval,
    /// Short, fast repetitions
    Repetition,
}

impl TrainingZone {
    /// All zones from slowest to fastest
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Lowercase zone name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        }
    }
}

/// Training paces in whole seconds per mile
///
/// Faster zones are numerically smaller: `repetition < interval < threshold < marathon < easy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceSet {
    /// Easy pace
    pub easy: f64,
    /// Marathon pace
    pub marathon: f64,
    /// Threshold pace
    pub threshold: f64,
    /// Interval pace
    pub interval: f64,
    /// Repetition pace
    pub repetition: f64,
}

impl PaceSet {
    /// Pace for one zone
    #[must_use]
    pub const fn pace_for(&self, zone: TrainingZone) -> f64 {
        match zone {
            TrainingZone::Easy => self.easy,
            TrainingZone::Marathon => self.marathon,
            TrainingZone::Threshold => self.threshold,
            TrainingZone::Interval => self.interval,
            TrainingZone::Repetition => self.repetition,
        }
    }

    /// Whether `repetition < interval < threshold < marathon < easy` holds
    #[must_use]
    pub fn is_strictly_ordered(&self) -> bool {
        self.repetition < self.interval
            && self.interval < self.threshold
            && self.threshold < self.marathon
            && self.marathon < self.easy
    }

    /// `(zone, pace)` pairs from slowest to fastest
    pub fn by_zone(&self) -> impl Iterator<Item = (TrainingZone, f64)> + '_ {
        TrainingZone::ALL
            .into_iter()
            .map(move |zone| (zone, self.pace_for(zone)))
    }
}

/// Derives training paces from a VDOT
#[derive(Debug, Clone, Copy)]
pub struct PaceCalculator<'a> {
    table: &'a ReferenceTable,
    multipliers: &'a PaceMultipliers,
}

impl<'a> PaceCalculator<'a> {
    /// Create a calculator over the given table and zone multipliers
    #[must_use]
    pub const fn new(table: &'a ReferenceTable, multipliers: &'a PaceMultipliers) -> Self {
        Self { table, multipliers }
    }

    /// Training paces for a VDOT
    ///
    /// Uses the mile pace of the first anchor at or above the VDOT (the highest anchor
    /// when the VDOT is past the end of the table), so VDOTs between anchors share the
    /// paces of the anchor above them.
    #[must_use]
    pub fn paces(&self, vdot: Vdot) -> PaceSet {
        let mile_pace = self
            .table
            .first_entry_at_or_above(vdot.value())
            .mile_pace_seconds;
        self.paces_for_mile_pace(mile_pace)
    }

    /// Training paces scaled from a reference mile race pace
    #[must_use]
    pub fn paces_for_mile_pace(&self, mile_pace: f64) -> PaceSet {
        let m = self.multipliers;

        PaceSet {
            easy: (mile_pace * m.easy).round(),
            marathon: (mile_pace * m.marathon).round(),
            threshold: (mile_pace * m.threshold).round(),
            interval: (mile_pace * m.interval).round(),
            repetition: (mile_pace * m.repetition).round(),
        }
    }
}
