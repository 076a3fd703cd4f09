// ABOUTME: Immutable VDOT reference table with equivalent mile, 5K and 10K race performances
// ABOUTME: Provides nearest-pace lookup for estimation and first-at-or-above lookup for pace derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! VDOT reference anchors
//!
//! The standard table holds 11 sparse anchors (VDOT 30-80 in steps of 5) from Daniels'
//! equivalent-performance tables. Lookups snap to an anchor; they never interpolate, so
//! pace output moves in steps between adjacent anchors.

use crate::constants::distances::{
    FIVE_K_CATEGORY_MAX_MILES, FIVE_K_MILES, MILE_CATEGORY_MAX_MILES, TEN_K_MILES,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::borrow::Cow;

/// One anchor row: a VDOT and its equivalent race performances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// VDOT of this anchor
    pub vdot: u8,
    /// Mile race pace in seconds per mile
    pub mile_pace_seconds: f64,
    /// 5K race time in seconds
    pub five_k_time_seconds: f64,
    /// 10K race time in seconds
    pub ten_k_time_seconds: f64,
}

impl ReferenceEntry {
    /// Reference pace (seconds per mile) for the given category
    #[must_use]
    pub fn pace_per_mile(&self, category: RaceCategory) -> f64 {
        match category {
            RaceCategory::Mile => self.mile_pace_seconds,
            RaceCategory::FiveK => self.five_k_time_seconds / FIVE_K_MILES,
            RaceCategory::TenK => self.ten_k_time_seconds / TEN_K_MILES,
        }
    }

    /// Every reference performance strictly faster than `other`'s
    fn is_faster_than(&self, other: &Self) -> bool {
        self.mile_pace_seconds < other.mile_pace_seconds
            && self.five_k_time_seconds < other.five_k_time_seconds
            && self.ten_k_time_seconds < other.ten_k_time_seconds
    }
}

/// Which reference performance an observed pace is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceCategory {
    /// Mile race pace
    Mile,
    /// 5K race pace
    FiveK,
    /// 10K race pace
    TenK,
}

impl RaceCategory {
    /// Category closest to an observed race distance
    ///
    /// Up to 1.2 miles compares against the mile, up to 3.5 miles against the 5K and
    /// anything longer against the 10K.
    #[must_use]
    pub fn for_distance(distance_miles: f64) -> Self {
        if distance_miles <= MILE_CATEGORY_MAX_MILES {
            Self::Mile
        } else if distance_miles <= FIVE_K_CATEGORY_MAX_MILES {
            Self::FiveK
        } else {
            Self::TenK
        }
    }
}

/// Standard anchors, ascending by VDOT
const STANDARD_ENTRIES: [ReferenceEntry; 11] = [
    entry(30, 551.0, 1840.0, 3826.0),
    entry(35, 483.0, 1620.0, 3363.0),
    entry(40, 428.0, 1448.0, 3003.0),
    entry(45, 387.0, 1310.0, 2716.0),
    entry(50, 351.0, 1197.0, 2481.0),
    entry(55, 324.0, 1102.0, 2286.0),
    entry(60, 300.0, 1023.0, 2122.0),
    entry(65, 280.0, 954.0, 1981.0),
    entry(70, 262.0, 895.0, 1860.0),
    entry(75, 246.0, 843.0, 1754.0),
    entry(80, 232.0, 798.0, 1661.0),
];

static STANDARD_TABLE: ReferenceTable = ReferenceTable {
    entries: Cow::Borrowed(&STANDARD_ENTRIES),
};

const fn entry(vdot: u8, mile: f64, five_k: f64, ten_k: f64) -> ReferenceEntry {
    ReferenceEntry {
        vdot,
        mile_pace_seconds: mile,
        five_k_time_seconds: five_k,
        ten_k_time_seconds: ten_k,
    }
}

/// Ordered, immutable set of VDOT anchors (at least two, strictly ascending VDOT)
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    entries: Cow<'static, [ReferenceEntry]>,
}

impl ReferenceTable {
    /// Build a custom table
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if there are fewer than two entries, VDOTs are
    /// not strictly ascending, any pace/time is not a positive finite number, or a
    /// higher VDOT does not have a strictly faster mile pace, 5K time and 10K time
    pub fn new(entries: Vec<ReferenceEntry>) -> AppResult<Self> {
        if entries.len() < 2 {
            return Err(AppError::invalid_input(format!(
                "Reference table needs at least 2 entries, got {}",
                entries.len()
            )));
        }

        if let Some(pair) = entries.windows(2).find(|pair| pair[0].vdot >= pair[1].vdot) {
            return Err(AppError::invalid_input(format!(
                "Reference table VDOTs must be strictly ascending ({} then {})",
                pair[0].vdot, pair[1].vdot
            )));
        }

        let invalid = entries.iter().find(|entry| {
            [
                entry.mile_pace_seconds,
                entry.five_k_time_seconds,
                entry.ten_k_time_seconds,
            ]
            .iter()
            .any(|value| !value.is_finite() || *value <= 0.0)
        });
        if let Some(entry) = invalid {
            return Err(AppError::invalid_input(format!(
                "Reference entry for VDOT {} has a non-positive pace or time",
                entry.vdot
            )));
        }

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| !pair[1].is_faster_than(&pair[0]))
        {
            return Err(AppError::invalid_input(format!(
                "Reference performances must get faster as VDOT rises: VDOT {} vs VDOT {}",
                pair[1].vdot, pair[0].vdot
            ))
            .with_details(json!({ "slower": pair[0], "faster": pair[1] })));
        }

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Daniels-derived standard table
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_TABLE
    }

    /// All anchors, ascending by VDOT
    #[must_use]
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Lowest anchor
    #[must_use]
    pub fn lowest(&self) -> &ReferenceEntry {
        // Construction guarantees at least two entries
        &self.entries()[0]
    }

    /// Highest anchor
    #[must_use]
    pub fn highest(&self) -> &ReferenceEntry {
        let entries = self.entries();
        &entries[entries.len() - 1]
    }

    /// Anchor whose reference pace for `category` is closest to the observed pace
    ///
    /// Ties resolve to the lower-VDOT anchor.
    #[must_use]
    pub fn nearest_entry(
        &self,
        pace_seconds_per_mile: f64,
        category: RaceCategory,
    ) -> &ReferenceEntry {
        self.entries()
            .iter()
            .min_by(|a, b| {
                let diff_a = (pace_seconds_per_mile - a.pace_per_mile(category)).abs();
                let diff_b = (pace_seconds_per_mile - b.pace_per_mile(category)).abs();
                diff_a.total_cmp(&diff_b)
            })
            .unwrap_or_else(|| self.lowest())
    }

    /// First anchor with `vdot >= target`, or the highest anchor when none qualifies
    ///
    /// Deliberately separate from [`Self::nearest_entry`]: pace derivation rounds a VDOT
    /// up to the next anchor instead of snapping to the closest one.
    #[must_use]
    pub fn first_entry_at_or_above(&self, vdot: u8) -> &ReferenceEntry {
        self.entries()
            .iter()
            .find(|entry| entry.vdot >= vdot)
            .unwrap_or_else(|| self.highest())
    }
}
